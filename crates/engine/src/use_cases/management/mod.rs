//! Management use cases for CRUD-style operations.
//!
//! These use cases keep HTTP handlers thin while coordinating the domain
//! rules with the repository ports.

mod player;

pub use player::PlayerManagement;

use roster_domain::DomainError;

use crate::infrastructure::ports::RepoError;

/// Shared error type for management use cases.
#[derive(Debug, thiserror::Error)]
pub enum ManagementError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl ManagementError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Treat a repository miss as a use-case level NotFound.
    fn from_repo(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { entity_type, id } => Self::NotFound { entity_type, id },
            other => Self::Repo(other),
        }
    }
}

impl From<DomainError> for ManagementError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) | DomainError::InvalidId(msg) | DomainError::Parse(msg) => {
                Self::Validation(msg)
            }
        }
    }
}

/// Container for management use cases.
pub struct ManagementUseCases {
    pub player: PlayerManagement,
}

impl ManagementUseCases {
    pub fn new(player: PlayerManagement) -> Self {
        Self { player }
    }
}
