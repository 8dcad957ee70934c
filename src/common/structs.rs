/// Plain message error used by configuration bootstrapping.
pub mod custom_error;
