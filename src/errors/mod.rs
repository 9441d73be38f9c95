// Error types for the admin client, built on thiserror.
use thiserror::Error;

pub mod registry;
pub mod validation;

// Re-export commonly used types
pub use registry::{RegistryError, RegistryResult};
pub use validation::ValidationError;

#[derive(Error, Debug)]
pub enum AppError {
    // Local form problems; no request was sent.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // Any transport, timeout or decode failure talking to the registry.
    #[error("Registry unavailable: {0}")]
    RegistryUnavailable(#[from] RegistryError),

    #[error("User {0} not found")]
    UnknownUser(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn is_registry_unavailable(&self) -> bool {
        matches!(self, AppError::RegistryUnavailable(_))
    }
}

// Custom result type
pub type AppResult<T> = Result<T, AppError>;
