//! Value objects and field rules for player records.

mod leveling;
pub mod player_fields;

pub use leveling::Leveling;
pub use player_fields::{
    is_valid_birthday, is_valid_experience, is_valid_name, is_valid_race_and_profession,
    is_valid_title, MAX_EXPERIENCE, MAX_NAME_LENGTH, MAX_TITLE_LENGTH,
};
