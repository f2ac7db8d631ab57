use thiserror::Error;

#[derive(Debug, Error)]
pub enum AcroError {
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AcroResult<T> = Result<T, AcroError>;
