/// Named certificate lookup provided by the host.
pub mod certificate_source;
