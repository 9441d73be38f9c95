use thiserror::Error;

/// Every variant means the registry could not be reached or understood.
/// Callers treat them alike; the variant only keeps the cause.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
