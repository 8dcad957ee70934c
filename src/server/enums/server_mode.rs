use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServerMode {
    PlainHttp,
    FallbackOnlyHttps,
    CollectionsHttps,
}
