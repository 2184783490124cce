//! Sort keys for player listings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::Player;
use crate::error::DomainError;

/// Key to order a listing by. `Id` keeps the repository's order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerOrder {
    #[default]
    Id,
    Name,
    Experience,
    Birthday,
    Level,
}

impl PlayerOrder {
    pub fn all() -> &'static [PlayerOrder] {
        &[
            PlayerOrder::Id,
            PlayerOrder::Name,
            PlayerOrder::Experience,
            PlayerOrder::Birthday,
            PlayerOrder::Level,
        ]
    }

    /// Name of the record field this key sorts on
    pub fn field_name(&self) -> &'static str {
        match self {
            PlayerOrder::Id => "id",
            PlayerOrder::Name => "name",
            PlayerOrder::Experience => "experience",
            PlayerOrder::Birthday => "birthday",
            PlayerOrder::Level => "level",
        }
    }

    /// Wire name (upper case)
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerOrder::Id => "ID",
            PlayerOrder::Name => "NAME",
            PlayerOrder::Experience => "EXPERIENCE",
            PlayerOrder::Birthday => "BIRTHDAY",
            PlayerOrder::Level => "LEVEL",
        }
    }

    /// Comparator for this key, `None` for `Id`.
    fn comparator(self) -> Option<fn(&Player, &Player) -> Ordering> {
        match self {
            PlayerOrder::Id => None,
            PlayerOrder::Name => Some(by_name),
            PlayerOrder::Experience => Some(by_experience),
            PlayerOrder::Birthday => Some(by_birthday),
            PlayerOrder::Level => Some(by_level),
        }
    }
}

fn by_name(a: &Player, b: &Player) -> Ordering {
    a.name.cmp(&b.name)
}

fn by_experience(a: &Player, b: &Player) -> Ordering {
    a.experience().cmp(&b.experience())
}

fn by_birthday(a: &Player, b: &Player) -> Ordering {
    a.birthday.cmp(&b.birthday)
}

fn by_level(a: &Player, b: &Player) -> Ordering {
    a.level().cmp(&b.level())
}

impl fmt::Display for PlayerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlayerOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PlayerOrder::all()
            .iter()
            .copied()
            .find(|order| order.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::parse(format!("Unknown player order: {}", s)))
    }
}

/// Reorder `players` by `order`. `Id` or no order leaves the slice untouched;
/// ties keep their relative order.
pub fn sort_players(players: &mut [Player], order: Option<PlayerOrder>) {
    if let Some(compare) = order.and_then(PlayerOrder::comparator) {
        players.sort_by(compare);
    }
}
