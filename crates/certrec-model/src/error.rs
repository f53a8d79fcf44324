use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("not a canonical YYYY-MM-DD date: {0}")]
    InvalidCanonicalDate(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
