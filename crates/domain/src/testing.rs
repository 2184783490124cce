//! Shared fixtures for unit tests.

use chrono::{DateTime, Utc};

use crate::entities::{Player, PlayerDraft, Profession, Race};
use crate::ids::PlayerId;

/// 2010-06-15T12:00:00Z
pub(crate) const DEFAULT_BIRTHDAY_MILLIS: i64 = 1_276_603_200_000;

pub(crate) fn at(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).expect("timestamp in range")
}

/// A valid stored player; adjust public fields on the result as needed.
pub(crate) fn player(id: i64, name: &str, experience: i32) -> Player {
    PlayerDraft {
        name: Some(name.to_string()),
        title: Some(format!("{name} the Bold")),
        race: Some(Race::Human),
        profession: Some(Profession::Warrior),
        birthday: Some(at(DEFAULT_BIRTHDAY_MILLIS)),
        banned: None,
        experience: Some(experience),
    }
    .validate()
    .expect("fixture is valid")
    .into_player(PlayerId::new(id).expect("fixture id is positive"))
}

pub(crate) fn ids(players: &[Player]) -> Vec<i64> {
    players.iter().map(|p| p.id().get()).collect()
}
