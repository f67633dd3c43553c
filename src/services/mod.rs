//! Service functions bridging routes with the repository traits.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod advocates;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
