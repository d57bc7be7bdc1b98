use thiserror::Error;

/// Errors raised while reading or writing saved accessibility preferences.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("cookie value could not be decoded: {0}")]
    Decode(String),
    #[error("saved preferences are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("saved preferences must be a JSON object")]
    NotAnObject,
    #[error("{key} has an unexpected value {value}")]
    Mistyped { key: &'static str, value: String },
    #[error("{value:?} is not a valid {key}")]
    UnknownValue { key: &'static str, value: String },
}
