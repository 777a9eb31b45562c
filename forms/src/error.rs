use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormsError {
    #[error("Date parse error: '{input}' does not match {expected}")]
    DateParse { input: String, expected: &'static str },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    // Empty text, a bare currency marker, or a value that is not text at all.
    #[error("Invalid amount: no amount was provided")]
    MissingAmount,

    #[error("Invalid amount: '{0}' is not a number")]
    MalformedAmount(String),

    #[error("Schema error: {0}")]
    SchemaError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

impl FormsError {
    /// True for the failures raised by the currency parser and formatter.
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, FormsError::MissingAmount | FormsError::MalformedAmount(_))
    }

    /// True for the failures raised by the date converters.
    pub fn is_date_error(&self) -> bool {
        matches!(self, FormsError::DateParse { .. } | FormsError::InvalidDate(_))
    }
}

pub type Result<T> = std::result::Result<T, FormsError>;
