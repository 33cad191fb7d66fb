//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use std::collections::HashSet;

use crate::models::Character;
use crate::ordering::is_in_initiative_order;

/// Validate that a character's state is internally consistent
pub fn assert_character_invariants(character: &Character) {
    debug_assert!(
        character.current_hp <= character.max_hp,
        "Character {} has current HP {} above max {}",
        character.id,
        character.current_hp,
        character.max_hp
    );

    // Name must not be empty
    debug_assert!(
        !character.name.trim().is_empty(),
        "Character {} has empty name",
        character.id
    );
}

/// Validate that a collection is consistent
pub fn assert_roster_invariants(characters: &[Character]) {
    for character in characters {
        assert_character_invariants(character);
    }

    // Ids are unique across the collection
    let mut seen = HashSet::with_capacity(characters.len());
    for character in characters {
        debug_assert!(
            seen.insert(character.id),
            "Character id {} appears more than once",
            character.id
        );
    }

    debug_assert!(
        is_in_initiative_order(characters),
        "Collection is not in initiative order"
    );
}
