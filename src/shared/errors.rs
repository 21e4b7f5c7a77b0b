use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UiError {
    /// A stringly-typed option (gallery control, story URL) named a value
    /// outside its enumerated set. Raised eagerly at parse time rather
    /// than silently dropping the style token.
    #[error("invalid {field} \"{value}\", expected one of: {}", allowed.join(", "))]
    InvalidOption {
        field: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    #[error("unknown story \"{0}\"")]
    UnknownStory(String),
}

pub type Result<T> = std::result::Result<T, UiError>;
