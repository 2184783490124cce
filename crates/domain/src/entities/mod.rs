//! Domain entities.

mod player;

pub use player::{NewPlayer, Player, PlayerDraft, PlayerPatch, Profession, Race};
