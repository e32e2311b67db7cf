use thiserror::Error;
use validator::ValidationErrors;

/// The library's error enum
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TopKError {
    /// Invalid argument was passed by the user.
    /// e.g. a negative limit, or a limit above the collector ceiling.
    #[error("An invalid argument was passed: '{0}'")]
    InvalidArgument(String),
    /// A required source collection or order relation was not provided.
    #[error("A required argument is missing: '{0}'")]
    NullReference(String),
    /// System error. (e.g.: We failed spawning the selection thread pool).
    #[error("System error.'{0}'")]
    SystemError(String),
    /// Selection config could not be parsed or failed validation.
    #[error("Invalid selection config: '{0}'")]
    ConfigError(String),
}

impl TopKError {
    pub fn invalid_limit(limit: i64) -> Self {
        TopKError::InvalidArgument(limit.to_string())
    }

    pub fn missing<TStr: ToString>(what: TStr) -> Self {
        TopKError::NullReference(what.to_string())
    }
}

impl From<rayon::ThreadPoolBuildError> for TopKError {
    fn from(error: rayon::ThreadPoolBuildError) -> TopKError {
        TopKError::SystemError(error.to_string())
    }
}

impl From<serde_json::Error> for TopKError {
    fn from(serde_error: serde_json::Error) -> TopKError {
        TopKError::ConfigError(serde_error.to_string())
    }
}

impl From<ValidationErrors> for TopKError {
    fn from(errors: ValidationErrors) -> TopKError {
        TopKError::ConfigError(errors.to_string())
    }
}
