//! Demonstration driver for the Bestiary creature roster.
//!
//! Builds one creature of each kind, walks them through a damage, healing,
//! and ability sequence (recovering from exhausted resources by restoring
//! and retrying), and prints each creature's structured details as JSON.
//!
//! Run with `RUST_LOG=debug` to see the core's mutation events.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bestiary_core::calendar::CalendarDate;
use bestiary_core::creature::Creature;
use bestiary_core::error::CreatureError;

/// Year the demonstration reports ages against.
const REFERENCE_YEAR: i32 = 2025;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let roster = build_roster().context("failed to assemble the roster")?;
    for mut creature in roster {
        run_gauntlet(&mut creature)?;
        print_details(&creature)?;
    }

    Ok(())
}

/// Constructs one creature of each kind on a real birth date.
fn build_roster() -> Result<Vec<Creature>> {
    let dragon_born = CalendarDate::new(13, 5, 2012).context("dragon birth date")?;
    let elf_born = CalendarDate::new(29, 2, 2000).context("elf birth date")?;
    let orc_born = CalendarDate::new(1, 11, 1984).context("orc birth date")?;

    Ok(vec![
        Creature::fire_breather("Smaug", dragon_born, 100, 30).context("fire breather")?,
        Creature::spell_caster("Aranel", elf_born, 80, 12).context("spell caster")?,
        Creature::berserker("Grum", orc_born, 90, 18).context("berserker")?,
    ])
}

/// Damages, heals, and repeatedly invokes the creature's ability,
/// restoring the resource once it runs dry.
fn run_gauntlet(creature: &mut Creature) -> Result<()> {
    let born = creature.date_of_birth();
    info!(
        name = creature.name(),
        kind = %creature.kind(),
        born = %born,
        weekday = %born.day_of_week(),
        "entering the gauntlet"
    );

    creature.take_damage(35)?;
    creature.heal(10)?;

    let mut total_damage_dealt = 0;
    let mut restored_once = false;

    loop {
        match creature.use_ability() {
            Ok(damage) => {
                total_damage_dealt += damage;
            }
            Err(CreatureError::LowResource { resource, .. }) if !restored_once => {
                // The recoverable failure: top the pool up and retry.
                info!(name = creature.name(), %resource, "resource exhausted, restoring");
                restore_resource(creature)?;
                restored_once = true;
            }
            Err(CreatureError::LowResource { .. }) => break,
            Err(err) => return Err(err.into()),
        }

        // Berserkers never run dry; stop them once they hit peak rage.
        if let Some(state) = creature.inner().as_berserker() {
            if state.rage() >= bestiary_core::creature::BerserkerState::MAX_RAGE {
                break;
            }
        }
    }

    info!(
        name = creature.name(),
        total_damage_dealt,
        alive = creature.is_alive(),
        "gauntlet complete"
    );

    Ok(())
}

/// Restores the specialization resource of whichever kind this is.
fn restore_resource(creature: &mut Creature) -> Result<()> {
    if let Some(state) = creature.inner_mut().as_fire_breather_mut() {
        state.restore(40)?;
    } else if let Some(state) = creature.inner_mut().as_spell_caster_mut() {
        state.restore(25)?;
    }
    // Berserkers build rage by acting; there is nothing to restore.
    Ok(())
}

/// Prints the structured details record as pretty JSON.
fn print_details(creature: &Creature) -> Result<()> {
    let details = creature.details(REFERENCE_YEAR);
    println!("{}", serde_json::to_string_pretty(&details)?);
    Ok(())
}
