//! Property tests for the clamp and bounds invariants.
//!
//! Every mutation sequence built from valid inputs must keep each bounded
//! resource inside its range; these properties drive random sequences
//! through the pools and check the bounds after every step.

use proptest::prelude::*;

use super::helpers::{berserker, fire_breather, spell_caster};
use crate::calendar::CalendarDate;
use crate::creature::{BerserkerState, Creature, FireBreatherState, SpellCasterState};

/// One step of a health mutation sequence.
#[derive(Debug, Clone, Copy)]
enum HealthOp {
    Damage(i32),
    Heal(i32),
}

fn health_op() -> impl Strategy<Value = HealthOp> {
    prop_oneof![
        (0..200i32).prop_map(HealthOp::Damage),
        (0..200i32).prop_map(HealthOp::Heal),
    ]
}

proptest! {
    #[test]
    fn health_stays_clamped_under_any_sequence(
        initial in 0..=100i32,
        ops in proptest::collection::vec(health_op(), 0..64),
    ) {
        let date = CalendarDate::new(1, 1, 2000).unwrap();
        let mut creature = Creature::berserker("Grum", date, initial, 0).unwrap();

        for op in ops {
            match op {
                HealthOp::Damage(amount) => creature.take_damage(amount).unwrap(),
                HealthOp::Heal(amount) => creature.heal(amount).unwrap(),
            }
            prop_assert!((Creature::MIN_HEALTH..=Creature::MAX_HEALTH)
                .contains(&creature.health()));
            prop_assert_eq!(creature.is_alive(), creature.health() > 0);
        }
    }

    #[test]
    fn negative_mutation_amounts_always_fail(
        amount in i32::MIN..0,
    ) {
        let mut creature = berserker(0);
        prop_assert!(creature.take_damage(amount).is_err());
        prop_assert!(creature.heal(amount).is_err());
        prop_assert_eq!(creature.health(), 100);
    }

    #[test]
    fn fire_power_never_exceeds_ceiling(
        initial in 1..=100i32,
        restores in proptest::collection::vec(0..150i32, 0..32),
    ) {
        let mut creature = fire_breather(initial);

        for amount in restores {
            // Interleave breaths where the pool allows them.
            let _ = creature.use_ability();
            creature
                .inner_mut()
                .as_fire_breather_mut()
                .unwrap()
                .restore(amount)
                .unwrap();

            let fire_power = creature.inner().as_fire_breather().unwrap().fire_power();
            prop_assert!(fire_power <= FireBreatherState::MAX_FIRE_POWER);
            prop_assert!(fire_power >= 0);
        }
    }

    #[test]
    fn mana_stays_within_bounds(
        initial in 0..=50i32,
        restores in proptest::collection::vec(0..80i32, 0..32),
    ) {
        let mut creature = spell_caster(initial);

        for amount in restores {
            let _ = creature.use_ability();
            creature
                .inner_mut()
                .as_spell_caster_mut()
                .unwrap()
                .restore(amount)
                .unwrap();

            let mana = creature.inner().as_spell_caster().unwrap().mana();
            prop_assert!((SpellCasterState::MIN_MANA..=SpellCasterState::MAX_MANA)
                .contains(&mana));
        }
    }

    #[test]
    fn rage_stays_within_bounds(
        initial in 0..=30i32,
        rounds in 0..32usize,
    ) {
        let mut creature = berserker(initial);

        for _ in 0..rounds {
            let damage = creature.use_ability().unwrap();
            let rage = creature.inner().as_berserker().unwrap().rage();

            prop_assert!((BerserkerState::MIN_RAGE..=BerserkerState::MAX_RAGE)
                .contains(&rage));
            // Damage follows the threshold rule on the committed rage.
            if rage > BerserkerState::RAGE_THRESHOLD {
                prop_assert_eq!(damage, BerserkerState::FRENZY_DAMAGE);
            } else {
                prop_assert_eq!(damage, BerserkerState::NORMAL_DAMAGE);
            }
        }
    }

    #[test]
    fn accepted_dates_round_trip_iso(
        day in 1..=31i32,
        month in 1..=12i32,
        year in 1801..=2025i32,
    ) {
        match CalendarDate::new(day, month, year) {
            Ok(date) => {
                let iso = date.to_iso_date();
                prop_assert_eq!(iso, format!("{year:04}-{month:02}-{day:02}"));
            }
            Err(_) => {
                // Only a day beyond the month's length may fail here.
                let max = CalendarDate::days_in_month(month, year).unwrap();
                prop_assert!(day > max);
            }
        }
    }

    #[test]
    fn days_beyond_month_length_are_rejected(
        month in 1..=12i32,
        year in 1801..=2025i32,
        excess in 1..=10i32,
    ) {
        let max = CalendarDate::days_in_month(month, year).unwrap();
        prop_assert!(CalendarDate::new(max + excess, month, year).is_err());
    }

    #[test]
    fn leap_year_rule_matches_february_length(
        year in 1801..=2025i32,
    ) {
        let feb = CalendarDate::days_in_month(2, year).unwrap();
        if CalendarDate::is_leap_year(year) {
            prop_assert_eq!(feb, 29);
        } else {
            prop_assert_eq!(feb, 28);
        }
    }
}
