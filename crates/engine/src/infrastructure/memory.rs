//! In-memory player storage.
//!
//! Keeps every record in a `BTreeMap` behind a single async lock, so listing
//! returns players in identifier order and each call is atomic.

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use roster_domain::{NewPlayer, Player, PlayerId};
use tokio::sync::RwLock;

use crate::infrastructure::ports::{PlayerRepo, RepoError};

pub struct InMemoryPlayerRepo {
    state: RwLock<State>,
}

struct State {
    players: BTreeMap<PlayerId, Player>,
    last_id: i64,
}

impl InMemoryPlayerRepo {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                players: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }

    /// Start with the given players. Their identifiers are kept and new
    /// identifiers continue after the highest one.
    pub fn with_players(players: Vec<Player>) -> Result<Self, RepoError> {
        let mut map = BTreeMap::new();
        for player in players {
            let id = player.id();
            if map.insert(id, player).is_some() {
                return Err(RepoError::constraint(format!("duplicate player id {id}")));
            }
        }
        let last_id = map.keys().next_back().map_or(0, |id| id.get());
        Ok(Self {
            state: RwLock::new(State {
                players: map,
                last_id,
            }),
        })
    }

    /// Load seed players from a JSON array of player objects.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RepoError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| RepoError::database("read_seed", format!("{}: {e}", path.display())))?;
        let players: Vec<Player> =
            serde_json::from_str(&raw).map_err(RepoError::serialization)?;
        tracing::info!(count = players.len(), path = %path.display(), "Loaded seed players");
        Self::with_players(players)
    }
}

impl Default for InMemoryPlayerRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlayerRepo for InMemoryPlayerRepo {
    async fn find_all(&self) -> Result<Vec<Player>, RepoError> {
        Ok(self.state.read().await.players.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, RepoError> {
        Ok(self.state.read().await.players.get(&id).cloned())
    }

    async fn insert(&self, player: NewPlayer) -> Result<Player, RepoError> {
        let mut state = self.state.write().await;
        let id = PlayerId::new(state.last_id.saturating_add(1))
            .map_err(|e| RepoError::database("insert", e))?;
        let player = player.into_player(id);
        state.players.insert(id, player.clone());
        state.last_id = id.get();
        Ok(player)
    }

    async fn save(&self, player: &Player) -> Result<(), RepoError> {
        let mut state = self.state.write().await;
        match state.players.get_mut(&player.id()) {
            Some(stored) => {
                *stored = player.clone();
                Ok(())
            }
            None => Err(RepoError::not_found("Player", player.id())),
        }
    }

    async fn delete(&self, id: PlayerId) -> Result<(), RepoError> {
        self.state
            .write()
            .await
            .players
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepoError::not_found("Player", id))
    }
}
