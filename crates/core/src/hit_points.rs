//! Hit point arithmetic
//!
//! Pure functions computing the next HP state of a character. Temporary HP
//! soaks damage before current HP, healing is capped at max HP, and the
//! dead flag is only ever set here, never cleared.

/// Current, temporary, and maximum hit points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitPoints {
    pub current: u32,
    pub temporary: u32,
    pub maximum: u32,
}

/// Outcome of a damage or heal calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HpChange {
    pub hit_points: HitPoints,
    pub dead: bool,
    /// Damage soaked by temporary HP (always 0 for heals)
    pub absorbed: u32,
}

/// Apply `amount` damage, consuming temporary HP first.
///
/// Current HP stops at 0. The character is flagged dead once current HP is
/// 0, including when `amount` is 0 and the character was already at 0.
pub fn apply_damage(hp: HitPoints, dead: bool, amount: u32) -> HpChange {
    let mut temporary = hp.temporary;
    let mut remaining = amount;

    if temporary > 0 {
        if temporary >= remaining {
            temporary -= remaining;
            remaining = 0;
        } else {
            remaining -= temporary;
            temporary = 0;
        }
    }

    let current = hp.current.saturating_sub(remaining);

    HpChange {
        hit_points: HitPoints {
            current,
            temporary,
            maximum: hp.maximum,
        },
        dead: dead || current == 0,
        absorbed: hp.temporary - temporary,
    }
}

/// Heal `amount` current HP and grant `temp_amount` temporary HP.
///
/// Both pools are capped at max HP. Healing a dead character does not
/// revive it; the flag has to be cleared by an edit.
pub fn apply_heal(hp: HitPoints, dead: bool, amount: u32, temp_amount: u32) -> HpChange {
    let current = hp.current.saturating_add(amount).min(hp.maximum);
    let temporary = hp.temporary.saturating_add(temp_amount).min(hp.maximum);

    HpChange {
        hit_points: HitPoints {
            current,
            temporary,
            maximum: hp.maximum,
        },
        dead: current == 0 || dead,
        absorbed: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hp(current: u32, temporary: u32, maximum: u32) -> HitPoints {
        HitPoints {
            current,
            temporary,
            maximum,
        }
    }

    #[test]
    fn test_damage_consumes_temp_first() {
        let change = apply_damage(hp(10, 5, 20), false, 8);
        assert_eq!(change.hit_points, hp(7, 0, 20));
        assert_eq!(change.absorbed, 5);
        assert!(!change.dead);
    }

    #[test]
    fn test_damage_fully_absorbed_by_temp() {
        let change = apply_damage(hp(10, 5, 20), false, 3);
        assert_eq!(change.hit_points, hp(10, 2, 20));
        assert_eq!(change.absorbed, 3);
    }

    #[test]
    fn test_damage_clamps_at_zero_and_kills() {
        let change = apply_damage(hp(4, 1, 20), false, 50);
        assert_eq!(change.hit_points, hp(0, 0, 20));
        assert!(change.dead);
    }

    #[test]
    fn test_zero_damage_leaves_hp_unchanged() {
        let before = hp(6, 2, 10);
        let change = apply_damage(before, false, 0);
        assert_eq!(change.hit_points, before);
        assert!(!change.dead);
    }

    #[test]
    fn test_damage_keeps_existing_dead_flag() {
        let change = apply_damage(hp(6, 0, 10), true, 1);
        assert_eq!(change.hit_points.current, 5);
        assert!(change.dead);
    }

    #[test]
    fn test_damage_matches_closed_form() {
        for temporary in 0..6u32 {
            for current in 0..6u32 {
                for amount in 0..14u32 {
                    let change = apply_damage(hp(current, temporary, 10), false, amount);
                    let expected_temp = temporary.saturating_sub(amount);
                    let expected_current =
                        current.saturating_sub(amount.saturating_sub(temporary));
                    assert_eq!(change.hit_points.temporary, expected_temp);
                    assert_eq!(change.hit_points.current, expected_current);
                }
            }
        }
    }

    #[test]
    fn test_heal_caps_at_max() {
        let change = apply_heal(hp(15, 0, 20), false, 10, 0);
        assert_eq!(change.hit_points.current, 20);
    }

    #[test]
    fn test_heal_temp_capped_at_max() {
        let change = apply_heal(hp(5, 8, 10), false, 0, 7);
        assert_eq!(change.hit_points.temporary, 10);
        assert_eq!(change.hit_points.current, 5);
    }

    #[test]
    fn test_heal_does_not_revive() {
        let change = apply_heal(hp(0, 0, 20), true, 15, 0);
        assert_eq!(change.hit_points.current, 15);
        assert!(change.dead);
    }

    #[test]
    fn test_heal_at_zero_marks_dead() {
        let change = apply_heal(hp(0, 0, 20), false, 0, 5);
        assert!(change.dead);
        assert_eq!(change.hit_points.temporary, 5);
    }

    #[test]
    fn test_heal_saturates_instead_of_overflowing() {
        let change = apply_heal(hp(10, 10, u32::MAX), false, u32::MAX, u32::MAX);
        assert_eq!(change.hit_points.current, u32::MAX);
        assert_eq!(change.hit_points.temporary, u32::MAX);
    }

    #[test]
    fn test_bounds_hold_across_sequences() {
        let mut state = hp(12, 3, 12);
        let mut dead = false;
        let steps: [(bool, u32, u32); 8] = [
            (false, 7, 0),
            (true, 4, 20),
            (false, 30, 0),
            (true, 100, 1),
            (false, 0, 0),
            (true, 0, 50),
            (false, 11, 0),
            (true, 2, 2),
        ];

        for (heal, amount, temp_amount) in steps {
            let change = if heal {
                apply_heal(state, dead, amount, temp_amount)
            } else {
                apply_damage(state, dead, amount)
            };
            state = change.hit_points;
            dead = change.dead;

            assert!(state.current <= state.maximum);
            assert!(state.temporary <= state.maximum);
        }

        // Went to 0 on the third step and no heal clears the flag
        assert!(dead);
    }
}
