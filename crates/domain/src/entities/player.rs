//! Player entity - a game character record managed by the roster
//!
//! Level and experience-to-next-level are derived from experience and can only
//! change through it. The identifier is assigned once by the repository.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::PlayerId;
use crate::value_objects::player_fields::{
    check_birthday, check_experience, check_name, check_title,
};
use crate::value_objects::Leveling;

// =============================================================================
// Race / Profession
// =============================================================================

/// Character race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Giant,
    Orc,
    Troll,
    Hobbit,
}

impl Race {
    pub fn all() -> &'static [Race] {
        &[
            Race::Human,
            Race::Dwarf,
            Race::Elf,
            Race::Giant,
            Race::Orc,
            Race::Troll,
            Race::Hobbit,
        ]
    }

    /// Wire name (upper case)
    pub fn as_str(&self) -> &'static str {
        match self {
            Race::Human => "HUMAN",
            Race::Dwarf => "DWARF",
            Race::Elf => "ELF",
            Race::Giant => "GIANT",
            Race::Orc => "ORC",
            Race::Troll => "TROLL",
            Race::Hobbit => "HOBBIT",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Race {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Race::all()
            .iter()
            .copied()
            .find(|race| race.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::parse(format!("Unknown race: {}", s)))
    }
}

/// Character profession
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Profession {
    Warrior,
    Rogue,
    Sorcerer,
    Cleric,
    Paladin,
    Nazgul,
    Warlock,
    Druid,
}

impl Profession {
    pub fn all() -> &'static [Profession] {
        &[
            Profession::Warrior,
            Profession::Rogue,
            Profession::Sorcerer,
            Profession::Cleric,
            Profession::Paladin,
            Profession::Nazgul,
            Profession::Warlock,
            Profession::Druid,
        ]
    }

    /// Wire name (upper case)
    pub fn as_str(&self) -> &'static str {
        match self {
            Profession::Warrior => "WARRIOR",
            Profession::Rogue => "ROGUE",
            Profession::Sorcerer => "SORCERER",
            Profession::Cleric => "CLERIC",
            Profession::Paladin => "PALADIN",
            Profession::Nazgul => "NAZGUL",
            Profession::Warlock => "WARLOCK",
            Profession::Druid => "DRUID",
        }
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Profession {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Profession::all()
            .iter()
            .copied()
            .find(|profession| profession.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::parse(format!("Unknown profession: {}", s)))
    }
}

// =============================================================================
// Player
// =============================================================================

/// A stored player record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredPlayer")]
pub struct Player {
    id: PlayerId,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub birthday: DateTime<Utc>,
    pub banned: bool,
    experience: i32,
    level: i32,
    until_next_level: i32,
}

impl Player {
    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn experience(&self) -> i32 {
        self.experience
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn until_next_level(&self) -> i32 {
        self.until_next_level
    }

    pub fn leveling(&self) -> Leveling {
        Leveling {
            level: self.level,
            until_next_level: self.until_next_level,
        }
    }

    fn apply_experience(&mut self, experience: i32) {
        let leveling = Leveling::from_experience(experience);
        self.experience = experience;
        self.level = leveling.level;
        self.until_next_level = leveling.until_next_level;
    }
}

/// Deserialization shape for stored players. Fields go through the same checks
/// as creation; derived fields in the input are ignored and recomputed.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPlayer {
    id: PlayerId,
    name: String,
    title: String,
    race: Race,
    profession: Profession,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    birthday: DateTime<Utc>,
    #[serde(default)]
    banned: bool,
    experience: i32,
}

impl TryFrom<StoredPlayer> for Player {
    type Error = DomainError;

    fn try_from(stored: StoredPlayer) -> Result<Self, Self::Error> {
        check_name(&stored.name)?;
        check_title(&stored.title)?;
        check_experience(stored.experience)?;
        check_birthday(stored.birthday)?;

        let leveling = Leveling::from_experience(stored.experience);
        Ok(Self {
            id: stored.id,
            name: stored.name,
            title: stored.title,
            race: stored.race,
            profession: stored.profession,
            birthday: stored.birthday,
            banned: stored.banned,
            experience: stored.experience,
            level: leveling.level,
            until_next_level: leveling.until_next_level,
        })
    }
}

// =============================================================================
// Creation
// =============================================================================

/// A validated player that has not been stored yet.
///
/// Only produced by [`PlayerDraft::validate`]; the repository turns it into a
/// [`Player`] by assigning an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlayer {
    name: String,
    title: String,
    race: Race,
    profession: Profession,
    birthday: DateTime<Utc>,
    banned: bool,
    experience: i32,
    leveling: Leveling,
}

impl NewPlayer {
    pub fn leveling(&self) -> Leveling {
        self.leveling
    }

    pub fn banned(&self) -> bool {
        self.banned
    }

    pub fn into_player(self, id: PlayerId) -> Player {
        Player {
            id,
            name: self.name,
            title: self.title,
            race: self.race,
            profession: self.profession,
            birthday: self.birthday,
            banned: self.banned,
            experience: self.experience,
            level: self.leveling.level,
            until_next_level: self.leveling.until_next_level,
        }
    }
}

/// Candidate for creating a player. Every field is optional so that missing
/// values surface as validation errors rather than decode failures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerDraft {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub birthday: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub experience: Option<i32>,
}

impl PlayerDraft {
    /// Check every field and compute leveling. `banned` defaults to `false`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` naming the first field that is
    /// missing or out of range.
    pub fn validate(self) -> Result<NewPlayer, DomainError> {
        let name = self.name.ok_or_else(|| missing("name"))?;
        check_name(&name)?;

        let title = self.title.ok_or_else(|| missing("title"))?;
        check_title(&title)?;

        let (Some(race), Some(profession)) = (self.race, self.profession) else {
            return Err(missing("race and profession"));
        };

        let experience = self.experience.ok_or_else(|| missing("experience"))?;
        check_experience(experience)?;

        let birthday = self.birthday.ok_or_else(|| missing("birthday"))?;
        check_birthday(birthday)?;

        Ok(NewPlayer {
            name,
            title,
            race,
            profession,
            birthday,
            banned: self.banned.unwrap_or(false),
            experience,
            leveling: Leveling::from_experience(experience),
        })
    }
}

fn missing(field: &str) -> DomainError {
    DomainError::validation(format!("{field} is required"))
}

// =============================================================================
// Update
// =============================================================================

/// Partial update of a player. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub birthday: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub experience: Option<i32>,
}

impl PlayerPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.title.is_none()
            && self.race.is_none()
            && self.profession.is_none()
            && self.birthday.is_none()
            && self.banned.is_none()
            && self.experience.is_none()
    }

    /// Build the updated record from `player` and this patch.
    ///
    /// Every supplied field is checked before anything is applied, so on error
    /// the caller's record is untouched and no partial update exists.
    pub fn apply_to(&self, player: &Player) -> Result<Player, DomainError> {
        if let Some(name) = &self.name {
            check_name(name)?;
        }
        if let Some(title) = &self.title {
            check_title(title)?;
        }
        if let Some(birthday) = self.birthday {
            check_birthday(birthday)?;
        }
        if let Some(experience) = self.experience {
            check_experience(experience)?;
        }

        let mut updated = player.clone();
        if let Some(name) = &self.name {
            updated.name = name.clone();
        }
        if let Some(title) = &self.title {
            updated.title = title.clone();
        }
        if let Some(race) = self.race {
            updated.race = race;
        }
        if let Some(profession) = self.profession {
            updated.profession = profession;
        }
        if let Some(birthday) = self.birthday {
            updated.birthday = birthday;
        }
        if let Some(banned) = self.banned {
            updated.banned = banned;
        }
        if let Some(experience) = self.experience {
            updated.apply_experience(experience);
        }
        Ok(updated)
    }
}
