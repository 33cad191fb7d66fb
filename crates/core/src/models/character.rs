//! Character model - a player or monster in the initiative order

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hit_points::HitPoints;

/// Display color used when none is chosen
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Character identifier, unique within a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub u32);

impl CharacterId {
    /// The id handed out for the first character of an empty collection
    pub const FIRST: CharacterId = CharacterId(1);

    /// The id following this one, if the id space is not exhausted
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(CharacterId)
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A tracked combatant.
///
/// Serialized with camelCase keys so that collections written by earlier
/// versions of the tracker load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub max_hp: u32,
    pub current_hp: u32,
    #[serde(default)]
    pub temp_hp: u32,
    #[serde(default)]
    pub ac: u32,
    #[serde(default)]
    pub initiative: i32,
    /// External reference sheet, opened as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub dead: bool,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Character {
    /// Build a character from creation fields and an assigned id
    pub fn from_new(id: CharacterId, fields: NewCharacter) -> Self {
        let mut character = Self {
            id,
            name: fields.name,
            max_hp: fields.max_hp,
            current_hp: fields.current_hp,
            temp_hp: fields.temp_hp,
            ac: fields.ac,
            initiative: fields.initiative,
            link: fields.link,
            dead: fields.dead,
            color: fields.color,
        };
        character.normalize();
        character
    }

    /// Copy every field except the id
    pub fn to_new(&self) -> NewCharacter {
        NewCharacter {
            name: self.name.clone(),
            max_hp: self.max_hp,
            current_hp: self.current_hp,
            temp_hp: self.temp_hp,
            ac: self.ac,
            initiative: self.initiative,
            link: self.link.clone(),
            dead: self.dead,
            color: self.color.clone(),
        }
    }

    pub fn hit_points(&self) -> HitPoints {
        HitPoints {
            current: self.current_hp,
            temporary: self.temp_hp,
            maximum: self.max_hp,
        }
    }

    /// Clamp current HP into `[0, max_hp]` and drop blank links.
    ///
    /// Returns true if anything changed.
    pub fn normalize(&mut self) -> bool {
        let mut changed = false;

        if self.current_hp > self.max_hp {
            self.current_hp = self.max_hp;
            changed = true;
        }

        if self.link.as_deref().is_some_and(|l| l.trim().is_empty()) {
            self.link = None;
            changed = true;
        }

        changed
    }
}

/// Check a display name
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation("character name must not be empty".into()));
    }
    Ok(())
}

/// Fields for creating a character (everything but the id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCharacter {
    pub name: String,
    pub max_hp: u32,
    pub current_hp: u32,
    pub temp_hp: u32,
    pub ac: u32,
    pub initiative: i32,
    pub link: Option<String>,
    pub dead: bool,
    pub color: String,
}

impl NewCharacter {
    /// A character at full health with no temp HP
    pub fn new(name: impl Into<String>, max_hp: u32) -> Self {
        Self {
            name: name.into(),
            max_hp,
            current_hp: max_hp,
            temp_hp: 0,
            ac: 0,
            initiative: 0,
            link: None,
            dead: false,
            color: default_color(),
        }
    }

    pub fn with_current_hp(mut self, current_hp: u32) -> Self {
        self.current_hp = current_hp;
        self
    }

    pub fn with_temp_hp(mut self, temp_hp: u32) -> Self {
        self.temp_hp = temp_hp;
        self
    }

    pub fn with_ac(mut self, ac: u32) -> Self {
        self.ac = ac;
        self
    }

    pub fn with_initiative(mut self, initiative: i32) -> Self {
        self.initiative = initiative;
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

/// Edit fields; each `Some` replaces the stored value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterPatch {
    pub name: Option<String>,
    pub max_hp: Option<u32>,
    pub current_hp: Option<u32>,
    pub temp_hp: Option<u32>,
    pub ac: Option<u32>,
    pub initiative: Option<i32>,
    /// `Some(None)` clears the link
    pub link: Option<Option<String>>,
    pub dead: Option<bool>,
    pub color: Option<String>,
}

impl CharacterPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        match &self.name {
            Some(name) => validate_name(name),
            None => Ok(()),
        }
    }

    /// Merge into an existing record, then normalize it
    pub fn apply_to(&self, character: &mut Character) {
        if let Some(name) = &self.name {
            character.name = name.clone();
        }
        if let Some(max_hp) = self.max_hp {
            character.max_hp = max_hp;
        }
        if let Some(current_hp) = self.current_hp {
            character.current_hp = current_hp;
        }
        if let Some(temp_hp) = self.temp_hp {
            character.temp_hp = temp_hp;
        }
        if let Some(ac) = self.ac {
            character.ac = ac;
        }
        if let Some(initiative) = self.initiative {
            character.initiative = initiative;
        }
        if let Some(link) = &self.link {
            character.link = link.clone();
        }
        if let Some(dead) = self.dead {
            character.dead = dead;
        }
        if let Some(color) = &self.color {
            character.color = color.clone();
        }
        character.normalize();
    }
}
