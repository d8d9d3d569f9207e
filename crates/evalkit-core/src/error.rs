use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unsupported shape: {0}")]
    Shape(String),
}

pub type Result<T> = std::result::Result<T, Error>;
