//! Repository port traits for player storage.

use async_trait::async_trait;
use roster_domain::{NewPlayer, Player, PlayerId};

use super::error::RepoError;

// =============================================================================
// Database Ports
// =============================================================================

/// Storage for player records.
///
/// Implementations provide atomicity for each individual call; the engine adds
/// no locking of its own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepo: Send + Sync {
    /// Every stored player, in identifier order.
    async fn find_all(&self) -> Result<Vec<Player>, RepoError>;
    async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, RepoError>;
    /// Store a new player and assign its identifier.
    async fn insert(&self, player: NewPlayer) -> Result<Player, RepoError>;
    /// Replace an existing player.
    async fn save(&self, player: &Player) -> Result<(), RepoError>;
    async fn delete(&self, id: PlayerId) -> Result<(), RepoError>;
}
