//! Roster domain - player records and the rules around them.
//!
//! Pure logic only: field validation, the leveling curve and the in-memory
//! query engine (filter, sort, paginate). Storage and transport live in the
//! engine crate.

pub mod entities;
pub mod error;
pub mod ids;
pub mod query;
pub mod value_objects;

#[cfg(test)]
mod testing;

pub use entities::{NewPlayer, Player, PlayerDraft, PlayerPatch, Profession, Race};
pub use error::DomainError;
pub use ids::PlayerId;
pub use query::{
    count_matching, filter_players, paginate, select_page, sort_players, PageRequest,
    PlayerFilter, PlayerOrder,
};
pub use value_objects::{
    is_valid_birthday, is_valid_experience, is_valid_name, is_valid_race_and_profession,
    is_valid_title, Leveling,
};
