//! Criteria for narrowing a player listing.

use chrono::{DateTime, Utc};

use crate::entities::{Player, Profession, Race};

/// Optional constraints on a player listing. An absent criterion matches
/// every record; supplied criteria combine with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerFilter {
    /// Substring of the name
    pub name: Option<String>,
    /// Substring of the title
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Birthday is not before this instant
    pub after: Option<DateTime<Utc>>,
    /// Birthday is not after this instant
    pub before: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
}

impl PlayerFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, player: &Player) -> bool {
        if let Some(name) = &self.name {
            if !player.name.contains(name.as_str()) {
                return false;
            }
        }
        if let Some(title) = &self.title {
            if !player.title.contains(title.as_str()) {
                return false;
            }
        }
        if self.race.is_some_and(|race| player.race != race) {
            return false;
        }
        if self
            .profession
            .is_some_and(|profession| player.profession != profession)
        {
            return false;
        }
        if self.after.is_some_and(|after| player.birthday < after) {
            return false;
        }
        if self.before.is_some_and(|before| player.birthday > before) {
            return false;
        }
        if self.banned.is_some_and(|banned| player.banned != banned) {
            return false;
        }
        within(player.experience(), self.min_experience, self.max_experience)
            && within(player.level(), self.min_level, self.max_level)
    }
}

fn within(value: i32, min: Option<i32>, max: Option<i32>) -> bool {
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}

/// Keep the players that satisfy every supplied criterion, in their original order.
///
/// A full scan per call; there is no index.
pub fn filter_players(players: Vec<Player>, filter: &PlayerFilter) -> Vec<Player> {
    if filter.is_empty() {
        return players;
    }
    players
        .into_iter()
        .filter(|player| filter.matches(player))
        .collect()
}
