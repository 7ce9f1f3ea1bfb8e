use thiserror::Error;

/// Error for AnimalId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnimalIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for animal collection operations
#[derive(Debug, Clone, Error)]
pub enum AnimalError {
    #[error("Invalid animal ID: {0}")]
    InvalidAnimalId(#[from] AnimalIdError),

    #[error("Animal does not exist")]
    AnimalNotFound,

    #[error("Animal already liked")]
    AlreadyLiked,

    #[error("Animal is not in the liked list")]
    LikeNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
