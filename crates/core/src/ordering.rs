//! Initiative ordering
//!
//! Highest initiative acts first. Ties go to the lower id, which is the
//! character created earlier.

use std::cmp::Ordering;

use crate::models::Character;

/// Turn-order comparison between two characters
pub fn initiative_order(a: &Character, b: &Character) -> Ordering {
    b.initiative
        .cmp(&a.initiative)
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort a collection into turn order
pub fn sort_by_initiative(characters: &mut [Character]) {
    characters.sort_by(initiative_order);
}

/// Whether a collection is already in turn order
pub fn is_in_initiative_order(characters: &[Character]) -> bool {
    characters
        .windows(2)
        .all(|pair| initiative_order(&pair[0], &pair[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CharacterId, NewCharacter};

    fn character(id: u32, initiative: i32) -> Character {
        Character::from_new(
            CharacterId(id),
            NewCharacter::new(format!("c{}", id), 10).with_initiative(initiative),
        )
    }

    fn ids(characters: &[Character]) -> Vec<u32> {
        characters.iter().map(|c| c.id.0).collect()
    }

    #[test]
    fn test_sorts_descending() {
        let mut characters = vec![character(1, 5), character(2, 18), character(3, -2), character(4, 11)];
        sort_by_initiative(&mut characters);
        assert_eq!(ids(&characters), vec![2, 4, 1, 3]);
        assert!(is_in_initiative_order(&characters));
    }

    #[test]
    fn test_ties_break_by_id() {
        let mut characters = vec![character(7, 10), character(2, 10), character(5, 10), character(1, 12)];
        sort_by_initiative(&mut characters);
        assert_eq!(ids(&characters), vec![1, 2, 5, 7]);
    }

    #[test]
    fn test_detects_out_of_order() {
        let characters = vec![character(1, 3), character(2, 9)];
        assert!(!is_in_initiative_order(&characters));
        assert!(is_in_initiative_order(&[]));
    }
}
