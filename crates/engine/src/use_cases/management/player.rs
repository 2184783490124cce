//! Player record management operations.

use std::sync::Arc;

use roster_domain::{
    count_matching, select_page, PageRequest, Player, PlayerDraft, PlayerFilter, PlayerId,
    PlayerOrder, PlayerPatch,
};

use crate::infrastructure::ports::PlayerRepo;

use super::ManagementError;

/// Listing, counting and CRUD over player records.
///
/// Listings and counts work on a fresh snapshot from the repository on every
/// call, so they cost a full scan (O(N)).
pub struct PlayerManagement {
    players: Arc<dyn PlayerRepo>,
}

impl PlayerManagement {
    pub fn new(players: Arc<dyn PlayerRepo>) -> Self {
        Self { players }
    }

    pub async fn list(
        &self,
        filter: &PlayerFilter,
        order: Option<PlayerOrder>,
        page: PageRequest,
    ) -> Result<Vec<Player>, ManagementError> {
        let all = self.players.find_all().await?;
        let total = all.len();
        let selected = select_page(all, filter, order, page);
        tracing::debug!(
            total,
            returned = selected.len(),
            sort_field = order.unwrap_or_default().field_name(),
            page_number = page.page_number(),
            page_size = page.page_size(),
            "Listed players"
        );
        Ok(selected)
    }

    pub async fn count(&self, filter: &PlayerFilter) -> Result<usize, ManagementError> {
        Ok(count_matching(self.players.find_all().await?, filter))
    }

    pub async fn get(&self, id: PlayerId) -> Result<Player, ManagementError> {
        self.players
            .find_by_id(id)
            .await?
            .ok_or_else(|| ManagementError::not_found("Player", id))
    }

    /// Validate the draft, derive leveling and store it. `banned` defaults to false.
    pub async fn create(&self, draft: PlayerDraft) -> Result<Player, ManagementError> {
        let new_player = draft.validate().map_err(|e| {
            tracing::warn!(error = %e, "Rejected player creation");
            ManagementError::from(e)
        })?;

        let player = self.players.insert(new_player).await?;
        tracing::info!(
            player_id = %player.id(),
            name = %player.name,
            level = player.level(),
            "Created player"
        );
        Ok(player)
    }

    /// Apply the supplied fields of `patch`.
    ///
    /// All supplied fields are validated before any is applied; a rejected
    /// patch leaves the stored record unchanged.
    pub async fn update(
        &self,
        id: PlayerId,
        patch: PlayerPatch,
    ) -> Result<Player, ManagementError> {
        let existing = self.get(id).await?;

        if patch.is_empty() {
            tracing::debug!(player_id = %id, "Empty patch, nothing to update");
            return Ok(existing);
        }

        let updated = patch.apply_to(&existing).map_err(|e| {
            tracing::warn!(player_id = %id, error = %e, "Rejected player update");
            ManagementError::from(e)
        })?;

        self.players
            .save(&updated)
            .await
            .map_err(ManagementError::from_repo)?;
        tracing::info!(player_id = %id, "Updated player");
        Ok(updated)
    }

    pub async fn delete(&self, id: PlayerId) -> Result<(), ManagementError> {
        let existing = self.get(id).await?;
        self.players
            .delete(existing.id())
            .await
            .map_err(ManagementError::from_repo)?;
        tracing::info!(player_id = %id, "Deleted player");
        Ok(())
    }
}
