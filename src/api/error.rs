// ==========================================
// Skill Assessment Suite - API layer error types
// ==========================================

use crate::repository::RepositoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("not found: {entity} with id={id}")]
    NotFound { entity: String, id: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ApiResult<T> = Result<T, ApiError>;
