//! View model for the command line front end
//!
//! Commands carry the raw form input, are validated by the forms, and are
//! dispatched into the character store. The rendered result is returned as
//! text for the caller to print.

mod card;
mod forms;

use clap::Subcommand;
use initrack_core::{CharacterStore, Error, KeyValueStore, Result, TrackerConfig};

pub use card::{render_card, render_roster};
pub use forms::{parse_id, CharacterForm, DamageForm, HealForm};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show every character in initiative order
    List,
    /// Show one character
    Show {
        /// Character id
        id: String,
    },
    /// Create a character
    Add(CharacterForm),
    /// Edit a character's fields
    Edit {
        /// Character id
        id: String,
        #[command(flatten)]
        form: CharacterForm,
    },
    /// Restore hit points and grant temporary hit points
    Heal {
        /// Character id
        id: String,
        #[command(flatten)]
        form: HealForm,
    },
    /// Deal damage, temporary hit points first
    Damage {
        /// Character id
        id: String,
        #[command(flatten)]
        form: DamageForm,
    },
    /// Remove a character
    Delete {
        /// Character id
        id: String,
    },
    /// Copy a character under a new id
    Duplicate {
        /// Character id
        id: String,
    },
}

/// Run one command against the store and render the outcome
pub fn execute<S: KeyValueStore>(
    command: Command,
    store: &mut CharacterStore<S>,
    config: &TrackerConfig,
) -> Result<String> {
    match command {
        Command::List => Ok(render_roster(store.characters())),
        Command::Show { id } => {
            let id = parse_id(&id)?;
            store.get(id).map(render_card).ok_or_else(|| not_found(&id))
        }
        Command::Add(form) => {
            let fields = form.into_new(&config.default_color)?;
            let created = store.create(fields)?;
            Ok(format!("Created\n{}", render_card(&created)))
        }
        Command::Edit { id, form } => {
            let id = parse_id(&id)?;
            let patch = form.into_patch()?;
            if patch.is_empty() {
                return Err(Error::InvalidInput("nothing to change".into()));
            }
            let updated = store.update(id, patch)?.ok_or_else(|| not_found(&id))?;
            Ok(format!("Updated\n{}", render_card(&updated)))
        }
        Command::Heal { id, form } => {
            let id = parse_id(&id)?;
            let (amount, temp_amount) = form.parse()?;
            let healed = store
                .heal(id, amount, temp_amount)?
                .ok_or_else(|| not_found(&id))?;
            Ok(format!("Healed\n{}", render_card(&healed)))
        }
        Command::Damage { id, form } => {
            let id = parse_id(&id)?;
            let amount = form.parse()?;
            let damaged = store.damage(id, amount)?.ok_or_else(|| not_found(&id))?;
            Ok(format!("Damaged\n{}", render_card(&damaged)))
        }
        Command::Delete { id } => {
            let id = parse_id(&id)?;
            let removed = store.delete(id)?.ok_or_else(|| not_found(&id))?;
            Ok(format!("Deleted {} ({})", removed.name, removed.id))
        }
        Command::Duplicate { id } => {
            let id = parse_id(&id)?;
            let copy = store.duplicate(id)?.ok_or_else(|| not_found(&id))?;
            Ok(format!("Duplicated\n{}", render_card(&copy)))
        }
    }
}

fn not_found(id: &impl std::fmt::Display) -> Error {
    Error::NotFound(format!("no character with id {}", id))
}
