//! Test helper functions for building creatures on known dates.
//!
//! Factory functions keep the scenario and property tests consistent: one
//! known birth date, one creature per kind at full health.

use crate::calendar::CalendarDate;
use crate::creature::Creature;

/// Reference year used by the scenario tests for age computations.
pub const REFERENCE_YEAR: i32 = 2025;

/// A known-good birth date used across the suite (a Sunday).
pub fn birth_date() -> CalendarDate {
    CalendarDate::new(13, 5, 2012).unwrap()
}

/// A full-health fire breather with the given fire power.
pub fn fire_breather(fire_power: i32) -> Creature {
    Creature::fire_breather("Smaug", birth_date(), 100, fire_power).unwrap()
}

/// A full-health spell caster with the given mana.
pub fn spell_caster(mana: i32) -> Creature {
    Creature::spell_caster("Aranel", birth_date(), 100, mana).unwrap()
}

/// A full-health berserker with the given rage.
pub fn berserker(rage: i32) -> Creature {
    Creature::berserker("Grum", birth_date(), 100, rage).unwrap()
}
