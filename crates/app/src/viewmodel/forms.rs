//! Input forms
//!
//! Each form captures the raw text a user typed and turns it into validated
//! core values. Numbers are parsed, never coerced.

use clap::Args;
use initrack_core::input::{
    parse_flag, parse_integer, parse_non_negative, parse_non_negative_or_zero,
};
use initrack_core::{CharacterId, CharacterPatch, NewCharacter, Result};

/// Parse a character id argument
pub fn parse_id(raw: &str) -> Result<CharacterId> {
    parse_non_negative("id", raw).map(CharacterId)
}

/// Create or edit a character
#[derive(Debug, Clone, Default, Args)]
pub struct CharacterForm {
    /// Display name
    #[arg(long)]
    pub name: Option<String>,

    /// Maximum hit points
    #[arg(long = "max-hp", value_name = "HP")]
    pub max_hp: Option<String>,

    /// Current hit points (defaults to max on create)
    #[arg(long = "current-hp", value_name = "HP")]
    pub current_hp: Option<String>,

    /// Temporary hit points
    #[arg(long = "temp-hp", value_name = "HP")]
    pub temp_hp: Option<String>,

    /// Armor class
    #[arg(long)]
    pub ac: Option<String>,

    /// Initiative roll
    #[arg(long, allow_hyphen_values = true)]
    pub initiative: Option<String>,

    /// Link to a character sheet or stat block
    #[arg(long)]
    pub link: Option<String>,

    /// Display color, e.g. "#ff8800"
    #[arg(long)]
    pub color: Option<String>,

    /// Mark dead or alive (edit only)
    #[arg(long, value_name = "YES|NO")]
    pub dead: Option<String>,

    /// Remove the link (edit only)
    #[arg(long, conflicts_with = "link")]
    pub clear_link: bool,
}

impl CharacterForm {
    /// Validate as creation input
    pub fn into_new(self, default_color: &str) -> Result<NewCharacter> {
        let name = self.name.unwrap_or_default();
        let max_hp = parse_non_negative("max HP", self.max_hp.as_deref().unwrap_or(""))?;

        let mut fields = NewCharacter::new(name, max_hp)
            .with_temp_hp(parse_non_negative_or_zero("temp HP", self.temp_hp.as_deref())?)
            .with_ac(parse_non_negative_or_zero("AC", self.ac.as_deref())?)
            .with_color(self.color.unwrap_or_else(|| default_color.to_string()));

        if let Some(raw) = self.current_hp.as_deref() {
            fields = fields.with_current_hp(parse_non_negative("current HP", raw)?);
        }
        if let Some(raw) = self.initiative.as_deref() {
            fields = fields.with_initiative(parse_integer("initiative", raw)?);
        }
        if let Some(link) = self.link {
            fields = fields.with_link(link);
        }
        if let Some(raw) = self.dead.as_deref() {
            fields.dead = parse_flag("dead", raw)?;
        }

        fields.validate()?;
        Ok(fields)
    }

    /// Validate as edit input; only the fields given are changed
    pub fn into_patch(self) -> Result<CharacterPatch> {
        let link = if self.clear_link {
            Some(None)
        } else {
            self.link.map(Some)
        };

        let patch = CharacterPatch {
            name: self.name,
            max_hp: optional(self.max_hp, |raw| parse_non_negative("max HP", raw))?,
            current_hp: optional(self.current_hp, |raw| parse_non_negative("current HP", raw))?,
            temp_hp: optional(self.temp_hp, |raw| parse_non_negative("temp HP", raw))?,
            ac: optional(self.ac, |raw| parse_non_negative("AC", raw))?,
            initiative: optional(self.initiative, |raw| parse_integer("initiative", raw))?,
            link,
            dead: optional(self.dead, |raw| parse_flag("dead", raw))?,
            color: self.color,
        };

        patch.validate()?;
        Ok(patch)
    }
}

fn optional<T>(raw: Option<String>, parse: impl FnOnce(&str) -> Result<T>) -> Result<Option<T>> {
    raw.as_deref().map(parse).transpose()
}

/// Heal a character
#[derive(Debug, Clone, Args)]
pub struct HealForm {
    /// Hit points restored
    pub amount: String,

    /// Temporary hit points granted
    #[arg(long = "temp", value_name = "HP", default_value = "0")]
    pub temp_amount: String,
}

impl HealForm {
    /// Returns `(amount, temp_amount)`
    pub fn parse(&self) -> Result<(u32, u32)> {
        let amount = parse_non_negative("heal amount", &self.amount)?;
        let temp_amount =
            parse_non_negative_or_zero("temporary heal amount", Some(self.temp_amount.as_str()))?;
        Ok((amount, temp_amount))
    }
}

/// Damage a character
#[derive(Debug, Clone, Args)]
pub struct DamageForm {
    /// Damage dealt
    pub amount: String,
}

impl DamageForm {
    pub fn parse(&self) -> Result<u32> {
        parse_non_negative("damage amount", &self.amount)
    }
}
