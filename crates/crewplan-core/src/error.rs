use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrewplanError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("malformed data: {0}")]
    Malformed(String),
}
