//! Character store
//!
//! Owns the ordered character collection and keeps it in sync with a single
//! key of a [`KeyValueStore`]. Every mutation re-sorts the collection and
//! rewrites the whole serialized collection under that key.
//!
//! Lookups by an unknown id are not errors: the mutation returns `Ok(None)`
//! and neither the collection nor the storage is touched. When the write to
//! storage fails, the error is returned but the in-memory collection keeps
//! the change until the next load.

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::hit_points::{apply_damage, apply_heal, HpChange};
use crate::invariants::assert_roster_invariants;
use crate::models::{Character, CharacterId, CharacterPatch, NewCharacter};
use crate::ordering::sort_by_initiative;
use crate::storage::KeyValueStore;

/// Storage key used by default for the collection
pub const DEFAULT_STORAGE_KEY: &str = "initiative-tracker-characters";

pub struct CharacterStore<S: KeyValueStore> {
    storage: S,
    key: String,
    characters: Vec<Character>,
}

impl<S: KeyValueStore> CharacterStore<S> {
    /// Load the collection stored under `key`.
    ///
    /// A missing or unreadable value yields an empty collection. Only a
    /// failing storage backend is an error.
    pub fn load(storage: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let characters = match storage.get(&key)? {
            Some(raw) => decode_collection(&key, &raw),
            None => {
                debug!(key = %key, "No stored characters, starting empty");
                Vec::new()
            }
        };

        let mut store = Self {
            storage,
            key,
            characters,
        };
        store.repair();
        info!(count = store.characters.len(), "Loaded characters");
        Ok(store)
    }

    /// Serialize the full collection and overwrite the storage key
    pub fn save(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.characters)?;
        self.storage.set(&self.key, &raw)?;
        debug!(key = %self.key, count = self.characters.len(), "Saved characters");
        Ok(())
    }

    /// Characters in turn order
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Give back the underlying storage
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// The id the next created character will receive
    pub fn next_id(&self) -> Result<CharacterId> {
        match self.characters.iter().map(|c| c.id).max() {
            None => Ok(CharacterId::FIRST),
            Some(max) => max
                .next()
                .ok_or_else(|| Error::Validation("character ids exhausted".into())),
        }
    }

    /// Add a character with a freshly assigned id
    pub fn create(&mut self, fields: NewCharacter) -> Result<Character> {
        fields.validate()?;

        let character = Character::from_new(self.next_id()?, fields);
        info!(id = %character.id, name = %character.name, "Creating character");

        self.characters.push(character.clone());
        self.commit()?;
        Ok(character)
    }

    /// Merge edit fields into a character
    pub fn update(&mut self, id: CharacterId, patch: CharacterPatch) -> Result<Option<Character>> {
        patch.validate()?;

        let Some(character) = self.find_mut(id) else {
            debug!(id = %id, "Update skipped, no such character");
            return Ok(None);
        };
        patch.apply_to(character);
        let updated = character.clone();

        info!(id = %id, name = %updated.name, "Updated character");
        self.commit()?;
        Ok(Some(updated))
    }

    /// Remove a character
    pub fn delete(&mut self, id: CharacterId) -> Result<Option<Character>> {
        let Some(index) = self.characters.iter().position(|c| c.id == id) else {
            debug!(id = %id, "Delete skipped, no such character");
            return Ok(None);
        };
        let removed = self.characters.remove(index);

        info!(id = %id, name = %removed.name, "Deleted character");
        self.commit()?;
        Ok(Some(removed))
    }

    /// Heal current HP by `amount` and add `temp_amount` temporary HP
    pub fn heal(
        &mut self,
        id: CharacterId,
        amount: u32,
        temp_amount: u32,
    ) -> Result<Option<Character>> {
        let Some(character) = self.get(id) else {
            debug!(id = %id, "Heal skipped, no such character");
            return Ok(None);
        };
        let change = apply_heal(character.hit_points(), character.dead, amount, temp_amount);

        info!(id = %id, amount, temp_amount, current_hp = change.hit_points.current, "Healed character");
        self.apply_change(id, change)
    }

    /// Deal `amount` damage, temporary HP first
    pub fn damage(&mut self, id: CharacterId, amount: u32) -> Result<Option<Character>> {
        let Some(character) = self.get(id) else {
            debug!(id = %id, "Damage skipped, no such character");
            return Ok(None);
        };
        let was_dead = character.dead;
        let change = apply_damage(character.hit_points(), character.dead, amount);

        info!(
            id = %id,
            amount,
            absorbed = change.absorbed,
            current_hp = change.hit_points.current,
            "Damaged character"
        );
        if change.dead && !was_dead {
            info!(id = %id, "Character dropped to 0 HP and is marked dead");
        }
        self.apply_change(id, change)
    }

    /// Create a copy of a character under a new id
    pub fn duplicate(&mut self, id: CharacterId) -> Result<Option<Character>> {
        let Some(original) = self.get(id) else {
            debug!(id = %id, "Duplicate skipped, no such character");
            return Ok(None);
        };
        let fields = original.to_new();
        self.create(fields).map(Some)
    }

    /// Write an HP change through the update path
    fn apply_change(&mut self, id: CharacterId, change: HpChange) -> Result<Option<Character>> {
        let patch = CharacterPatch {
            current_hp: Some(change.hit_points.current),
            temp_hp: Some(change.hit_points.temporary),
            dead: Some(change.dead),
            ..Default::default()
        };
        self.update(id, patch)
    }

    fn find_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.id == id)
    }

    /// Re-sort, check, and persist after a mutation
    fn commit(&mut self) -> Result<()> {
        sort_by_initiative(&mut self.characters);
        assert_roster_invariants(&self.characters);
        self.save()
    }

    /// Bring freshly loaded data into a valid state
    fn repair(&mut self) {
        for character in &mut self.characters {
            if character.normalize() {
                warn!(id = %character.id, "Normalized stored character");
            }
            if character.name.trim().is_empty() {
                character.name = format!("Character {}", character.id);
                warn!(id = %character.id, "Named stored character with blank name");
            }
        }

        let before = self.characters.len();
        let mut seen = std::collections::HashSet::new();
        self.characters.retain(|c| seen.insert(c.id));
        if self.characters.len() != before {
            warn!(
                dropped = before - self.characters.len(),
                "Dropped characters with duplicate ids"
            );
        }

        sort_by_initiative(&mut self.characters);
    }
}

/// Parse a stored collection, treating anything malformed as empty
fn decode_collection(key: &str, raw: &str) -> Vec<Character> {
    match serde_json::from_str::<Vec<Character>>(raw) {
        Ok(characters) => characters,
        Err(e) => {
            warn!(key = %key, error = %e, "Stored characters are unreadable, starting empty");
            Vec::new()
        }
    }
}
