//! Creature model for the bestiary roster.
//!
//! This module provides the core creature types:
//! - [`CreatureKind`]: tag for the three specializations
//! - [`CreatureInner`]: type-safe storage for kind-specific state
//! - [`Creature`]: the complete creature container
//! - [`CreatureDetails`]: a read-only structured snapshot
//!
//! # Architecture
//!
//! A creature is a base record (name, owned birth date, bounded health)
//! plus an enum-tagged specialization. Shared behavior (damage, healing,
//! liveness, age) lives on [`Creature`] and operates on the common fields;
//! ability behavior dispatches over the [`CreatureInner`] variant. The
//! kind-specific arithmetic itself lives on the component state structs in
//! [`components`].
//!
//! # Example
//!
//! ```
//! use bestiary_core::calendar::CalendarDate;
//! use bestiary_core::creature::{Creature, CreatureKind};
//!
//! let born = CalendarDate::new(13, 5, 2012).unwrap();
//! let mut dragon = Creature::fire_breather("Smaug", born, 100, 40).unwrap();
//!
//! assert_eq!(dragon.kind(), CreatureKind::FireBreather);
//! assert_eq!(dragon.use_ability().unwrap(), 20);
//! assert!(dragon.is_alive());
//! ```

pub mod components;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::calendar::CalendarDate;
use crate::error::CreatureError;

pub use components::{BerserkerState, FireBreatherState, SpellCasterState};

/// Specialization tag for a creature.
///
/// The tag identifies which secondary resource and ability a creature
/// carries; it always matches the [`CreatureInner`] variant of the same
/// creature.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureKind {
    /// Spends fire power on breath attacks.
    FireBreather,
    /// Spends mana on spells.
    SpellCaster,
    /// Builds rage with every berserk.
    Berserker,
}

impl fmt::Display for CreatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FireBreather => write!(f, "Fire Breather"),
            Self::SpellCaster => write!(f, "Spell Caster"),
            Self::Berserker => write!(f, "Berserker"),
        }
    }
}

/// Type-safe storage for kind-specific creature state.
///
/// Each variant wraps the component state for that specialization. The
/// variant always matches the creature's [`CreatureKind`]; [`Creature`]
/// derives the tag from this storage rather than tracking it separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreatureInner {
    /// Fire breather state (fire power pool).
    FireBreather(FireBreatherState),
    /// Spell caster state (mana pool).
    SpellCaster(SpellCasterState),
    /// Berserker state (rage pool).
    Berserker(BerserkerState),
}

impl CreatureInner {
    /// Returns the corresponding [`CreatureKind`] for this storage.
    #[must_use]
    pub const fn kind(&self) -> CreatureKind {
        match self {
            Self::FireBreather(_) => CreatureKind::FireBreather,
            Self::SpellCaster(_) => CreatureKind::SpellCaster,
            Self::Berserker(_) => CreatureKind::Berserker,
        }
    }

    /// Returns the fire breather state, if this is a fire breather.
    #[must_use]
    pub const fn as_fire_breather(&self) -> Option<&FireBreatherState> {
        match self {
            Self::FireBreather(state) => Some(state),
            _ => None,
        }
    }

    /// Returns mutable fire breather state, if this is a fire breather.
    #[must_use]
    pub fn as_fire_breather_mut(&mut self) -> Option<&mut FireBreatherState> {
        match self {
            Self::FireBreather(state) => Some(state),
            _ => None,
        }
    }

    /// Returns the spell caster state, if this is a spell caster.
    #[must_use]
    pub const fn as_spell_caster(&self) -> Option<&SpellCasterState> {
        match self {
            Self::SpellCaster(state) => Some(state),
            _ => None,
        }
    }

    /// Returns mutable spell caster state, if this is a spell caster.
    #[must_use]
    pub fn as_spell_caster_mut(&mut self) -> Option<&mut SpellCasterState> {
        match self {
            Self::SpellCaster(state) => Some(state),
            _ => None,
        }
    }

    /// Returns the berserker state, if this is a berserker.
    #[must_use]
    pub const fn as_berserker(&self) -> Option<&BerserkerState> {
        match self {
            Self::Berserker(state) => Some(state),
            _ => None,
        }
    }

    /// Returns mutable berserker state, if this is a berserker.
    #[must_use]
    pub fn as_berserker_mut(&mut self) -> Option<&mut BerserkerState> {
        match self {
            Self::Berserker(state) => Some(state),
            _ => None,
        }
    }
}

/// A complete creature in the roster.
///
/// A `Creature` combines:
/// - a non-blank name
/// - an owned [`CalendarDate`] of birth (value semantics, no sharing)
/// - a health pool clamped into 0..=100 after every mutation
/// - a [`CreatureInner`] holding the specialization state
///
/// # Invariants
///
/// - `MIN_HEALTH <= health <= MAX_HEALTH` holds after every operation
/// - a creature is alive iff its health is above zero
/// - the specialization resource obeys its own bounds (see [`components`])
///
/// # Example
///
/// ```
/// use bestiary_core::calendar::CalendarDate;
/// use bestiary_core::creature::Creature;
///
/// let born = CalendarDate::new(1, 1, 1990).unwrap();
/// let mut elf = Creature::spell_caster("Aranel", born, 80, 30).unwrap();
///
/// elf.take_damage(95).unwrap();
/// assert_eq!(elf.health(), 0);
/// assert!(!elf.is_alive());
///
/// elf.heal(10).unwrap();
/// assert!(elf.is_alive());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    name: String,
    date_of_birth: CalendarDate,
    health: i32,
    inner: CreatureInner,
}

impl Creature {
    /// Floor the health pool is clamped to on damage.
    pub const MIN_HEALTH: i32 = 0;
    /// Ceiling the health pool is clamped to on healing.
    pub const MAX_HEALTH: i32 = 100;

    /// Creates a creature from validated parts.
    ///
    /// The birth date has already proven itself valid by existing; only
    /// the name and health are checked here.
    ///
    /// # Errors
    ///
    /// Returns [`CreatureError::BlankName`] if `name` has no
    /// non-whitespace characters, or [`CreatureError::HealthOutOfRange`]
    /// if `health` is outside 0..=100.
    pub fn new(
        name: impl Into<String>,
        date_of_birth: CalendarDate,
        health: i32,
        inner: CreatureInner,
    ) -> Result<Self, CreatureError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CreatureError::BlankName);
        }
        if !(Self::MIN_HEALTH..=Self::MAX_HEALTH).contains(&health) {
            return Err(CreatureError::HealthOutOfRange { health });
        }

        Ok(Self {
            name,
            date_of_birth,
            health,
            inner,
        })
    }

    /// Creates a fire breather with an initial fire power in 1..=100.
    ///
    /// # Errors
    ///
    /// Propagates name/health validation plus
    /// [`CreatureError::FirePowerOutOfRange`].
    pub fn fire_breather(
        name: impl Into<String>,
        date_of_birth: CalendarDate,
        health: i32,
        fire_power: i32,
    ) -> Result<Self, CreatureError> {
        let state = FireBreatherState::new(fire_power)?;
        Self::new(name, date_of_birth, health, CreatureInner::FireBreather(state))
    }

    /// Creates a spell caster with an initial mana in 0..=50.
    ///
    /// # Errors
    ///
    /// Propagates name/health validation plus
    /// [`CreatureError::ManaOutOfRange`].
    pub fn spell_caster(
        name: impl Into<String>,
        date_of_birth: CalendarDate,
        health: i32,
        mana: i32,
    ) -> Result<Self, CreatureError> {
        let state = SpellCasterState::new(mana)?;
        Self::new(name, date_of_birth, health, CreatureInner::SpellCaster(state))
    }

    /// Creates a berserker with an initial non-negative rage.
    ///
    /// # Errors
    ///
    /// Propagates name/health validation plus
    /// [`CreatureError::NegativeRage`].
    pub fn berserker(
        name: impl Into<String>,
        date_of_birth: CalendarDate,
        health: i32,
        rage: i32,
    ) -> Result<Self, CreatureError> {
        let state = BerserkerState::new(rage)?;
        Self::new(name, date_of_birth, health, CreatureInner::Berserker(state))
    }

    /// Returns the creature's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the creature's birth date.
    #[must_use]
    pub const fn date_of_birth(&self) -> CalendarDate {
        self.date_of_birth
    }

    /// Returns the current health.
    #[must_use]
    pub const fn health(&self) -> i32 {
        self.health
    }

    /// Returns the creature's specialization tag.
    #[must_use]
    pub const fn kind(&self) -> CreatureKind {
        self.inner.kind()
    }

    /// Returns a reference to the specialization storage.
    #[must_use]
    pub const fn inner(&self) -> &CreatureInner {
        &self.inner
    }

    /// Returns a mutable reference to the specialization storage.
    #[must_use]
    pub fn inner_mut(&mut self) -> &mut CreatureInner {
        &mut self.inner
    }

    /// Returns `true` while health is above zero.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > Self::MIN_HEALTH
    }

    /// Reduces health by `amount`, clamped at the floor.
    ///
    /// A single hit has no upper bound; only the floor is enforced.
    ///
    /// # Errors
    ///
    /// Returns [`CreatureError::NegativeDamage`] if `amount` is negative;
    /// health is left unchanged.
    pub fn take_damage(&mut self, amount: i32) -> Result<(), CreatureError> {
        if amount < 0 {
            return Err(CreatureError::NegativeDamage { amount });
        }

        self.health = (self.health - amount).max(Self::MIN_HEALTH);
        debug!(name = %self.name, health = self.health, amount, "damage taken");

        Ok(())
    }

    /// Raises health by `amount`, clamped at the ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`CreatureError::NegativeHeal`] if `amount` is negative;
    /// health is left unchanged.
    pub fn heal(&mut self, amount: i32) -> Result<(), CreatureError> {
        if amount < 0 {
            return Err(CreatureError::NegativeHeal { amount });
        }

        self.health = (self.health + amount).min(Self::MAX_HEALTH);
        debug!(name = %self.name, health = self.health, amount, "healed");

        Ok(())
    }

    /// Returns the creature's age in whole years at `reference_year`.
    ///
    /// The reference year is explicit configuration rather than wall-clock
    /// time, so callers (and tests) control it deterministically.
    #[must_use]
    pub const fn age_in_years(&self, reference_year: i32) -> i32 {
        reference_year - self.date_of_birth.year()
    }

    /// Invokes this creature's ability and returns the damage dealt.
    ///
    /// Dispatches on the specialization: a fire breather breathes fire, a
    /// spell caster casts a spell, a berserker goes berserk.
    ///
    /// # Errors
    ///
    /// Returns [`CreatureError::LowResource`] if the backing resource is
    /// below the ability's activation cost. The caller may restore the
    /// resource and retry.
    pub fn use_ability(&mut self) -> Result<i32, CreatureError> {
        match &mut self.inner {
            CreatureInner::FireBreather(state) => state.breathe_fire(),
            CreatureInner::SpellCaster(state) => state.cast_spell(),
            CreatureInner::Berserker(state) => state.berserk(),
        }
    }

    /// Returns a read-only snapshot of this creature.
    ///
    /// The snapshot is structured data, not a formatted narrative; see
    /// [`CreatureDetails`] for the record shape.
    #[must_use]
    pub fn details(&self, reference_year: i32) -> CreatureDetails {
        let resource = match &self.inner {
            CreatureInner::FireBreather(state) => ResourceCharge::FirePower(state.fire_power()),
            CreatureInner::SpellCaster(state) => ResourceCharge::Mana(state.mana()),
            CreatureInner::Berserker(state) => ResourceCharge::Rage(state.rage()),
        };

        CreatureDetails {
            name: self.name.clone(),
            date_of_birth: self.date_of_birth.to_iso_date(),
            age: self.age_in_years(reference_year),
            health: self.health,
            resource,
        }
    }
}

/// Current level of a creature's specialization resource.
///
/// Externally tagged so the serialized form names the resource, e.g.
/// `{"fire_power": 30}`. Flattened into [`CreatureDetails`] this yields
/// the flat record shape of the external contract.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCharge {
    /// Fire power level of a fire breather.
    FirePower(i32),
    /// Mana level of a spell caster.
    Mana(i32),
    /// Rage level of a berserker.
    Rage(i32),
}

impl ResourceCharge {
    /// Returns the reported resource level.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::FirePower(value) | Self::Mana(value) | Self::Rage(value) => value,
        }
    }
}

/// Read-only structured snapshot of a creature.
///
/// Serializes to
/// `{name, date_of_birth, age, health, <resource>: integer}` with the
/// birth date in zero-padded `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureDetails {
    /// The creature's name.
    pub name: String,
    /// Birth date in ISO `YYYY-MM-DD` form.
    pub date_of_birth: String,
    /// Whole years at the reference year the snapshot was taken with.
    pub age: i32,
    /// Health at snapshot time.
    pub health: i32,
    /// Specialization resource level, tagged with its name.
    #[serde(flatten)]
    pub resource: ResourceCharge,
}
