use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cannot read menu file {path}: {message}")]
    MenuFileError { path: String, message: String },

    #[error("Configuration parse error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid price {value}: {reason}")]
    InvalidPriceError { value: String, reason: String },
}

impl OrderError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            OrderError::IoError(e) => format!("Console I/O failed: {}", e),
            OrderError::MenuFileError { path, message } => {
                format!("The menu file {} could not be opened: {}", path, message)
            }
            OrderError::ConfigParseError { message, .. } => {
                format!("The menu file could not be read: {}", message)
            }
            OrderError::InvalidConfigValueError { field, reason, .. } => {
                format!("The menu file has an invalid '{}': {}", field, reason)
            }
            OrderError::InvalidPriceError { value, reason } => {
                format!("Price {} is not usable: {}", value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            OrderError::IoError(_) => "Check that standard input and output are still attached",
            OrderError::MenuFileError { .. } => "Check the --menu path and its permissions",
            OrderError::ConfigParseError { .. } => {
                "Make sure the file exists and is valid TOML with [[items]] tables"
            }
            OrderError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the menu file and run again"
            }
            OrderError::InvalidPriceError { .. } => {
                "Prices must be finite, non-negative numbers such as 2.49"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, OrderError>;
