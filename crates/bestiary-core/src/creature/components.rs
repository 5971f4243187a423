//! Specialization state for each creature kind.
//!
//! Each creature kind carries exactly one bounded secondary resource and
//! one ability that spends or builds it:
//!
//! - [`FireBreatherState`]: fire power in 1..=100, spent by breathing fire
//! - [`SpellCasterState`]: mana in 0..=50, spent by casting spells
//! - [`BerserkerState`]: rage in 0..=30, built by going berserk
//!
//! The state structs own all resource arithmetic; the `Creature` container
//! dispatches to them. An ability invoked below its activation cost fails
//! with [`CreatureError::LowResource`] and leaves the state untouched, so
//! the caller can restore the resource and retry.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{CreatureError, ResourceKind};

/// State for a fire breather: a fire power pool spent on breath attacks.
///
/// Fire power starts in 1..=100 and never rises above 100. There is no
/// floor beyond the activation cost: a breather can be drained below the
/// construction minimum by repeated breaths.
///
/// # Example
///
/// ```
/// use bestiary_core::creature::FireBreatherState;
///
/// let mut state = FireBreatherState::new(10).unwrap();
/// assert_eq!(state.breathe_fire().unwrap(), 20);
/// // The pool is now empty relative to the cost; the next breath fails.
/// assert!(state.breathe_fire().is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireBreatherState {
    fire_power: i32,
}

impl FireBreatherState {
    /// Minimum fire power accepted at construction.
    pub const MIN_FIRE_POWER: i32 = 1;
    /// Ceiling the pool is clamped to on restoration.
    pub const MAX_FIRE_POWER: i32 = 100;
    /// Fire power spent by one breath.
    pub const BREATH_COST: i32 = 10;
    /// Damage dealt by one breath.
    pub const BREATH_DAMAGE: i32 = 20;

    /// Creates the state with an initial pool in 1..=100.
    ///
    /// # Errors
    ///
    /// Returns [`CreatureError::FirePowerOutOfRange`] outside that range.
    pub fn new(fire_power: i32) -> Result<Self, CreatureError> {
        if !(Self::MIN_FIRE_POWER..=Self::MAX_FIRE_POWER).contains(&fire_power) {
            return Err(CreatureError::FirePowerOutOfRange { fire_power });
        }
        Ok(Self { fire_power })
    }

    /// Returns the current fire power.
    #[must_use]
    pub const fn fire_power(&self) -> i32 {
        self.fire_power
    }

    /// Breathes fire, spending [`Self::BREATH_COST`] fire power.
    ///
    /// # Errors
    ///
    /// Returns [`CreatureError::LowResource`] if the pool is below the
    /// cost; the pool is left unchanged.
    pub fn breathe_fire(&mut self) -> Result<i32, CreatureError> {
        if self.fire_power < Self::BREATH_COST {
            return Err(CreatureError::LowResource {
                resource: ResourceKind::FirePower,
                required: Self::BREATH_COST,
                available: self.fire_power,
            });
        }

        self.fire_power -= Self::BREATH_COST;
        trace!(fire_power = self.fire_power, "breath expended");

        Ok(Self::BREATH_DAMAGE)
    }

    /// Restores fire power, clamped to [`Self::MAX_FIRE_POWER`].
    ///
    /// # Errors
    ///
    /// Returns [`CreatureError::NegativeRestore`] if `amount` is negative.
    pub fn restore(&mut self, amount: i32) -> Result<(), CreatureError> {
        if amount < 0 {
            return Err(CreatureError::NegativeRestore {
                resource: ResourceKind::FirePower,
                amount,
            });
        }
        self.fire_power = (self.fire_power + amount).min(Self::MAX_FIRE_POWER);
        Ok(())
    }
}

/// State for a spell caster: a mana pool spent on spells.
///
/// Mana stays in 0..=50 at construction and after every restoration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCasterState {
    mana: i32,
}

impl SpellCasterState {
    /// Minimum mana accepted at construction.
    pub const MIN_MANA: i32 = 0;
    /// Ceiling the pool is clamped to on restoration.
    pub const MAX_MANA: i32 = 50;
    /// Mana spent by one spell.
    pub const SPELL_COST: i32 = 5;
    /// Damage dealt by one spell.
    pub const SPELL_DAMAGE: i32 = 10;

    /// Creates the state with an initial pool in 0..=50.
    ///
    /// # Errors
    ///
    /// Returns [`CreatureError::ManaOutOfRange`] outside that range.
    pub fn new(mana: i32) -> Result<Self, CreatureError> {
        if !(Self::MIN_MANA..=Self::MAX_MANA).contains(&mana) {
            return Err(CreatureError::ManaOutOfRange { mana });
        }
        Ok(Self { mana })
    }

    /// Returns the current mana.
    #[must_use]
    pub const fn mana(&self) -> i32 {
        self.mana
    }

    /// Casts a spell, spending [`Self::SPELL_COST`] mana.
    ///
    /// # Errors
    ///
    /// Returns [`CreatureError::LowResource`] if the pool is below the
    /// cost; the pool is left unchanged.
    pub fn cast_spell(&mut self) -> Result<i32, CreatureError> {
        if self.mana < Self::SPELL_COST {
            return Err(CreatureError::LowResource {
                resource: ResourceKind::Mana,
                required: Self::SPELL_COST,
                available: self.mana,
            });
        }

        self.mana -= Self::SPELL_COST;
        trace!(mana = self.mana, "spell cast");

        Ok(Self::SPELL_DAMAGE)
    }

    /// Restores mana, clamped to [`Self::MAX_MANA`].
    ///
    /// # Errors
    ///
    /// Returns [`CreatureError::NegativeRestore`] if `amount` is negative.
    pub fn restore(&mut self, amount: i32) -> Result<(), CreatureError> {
        if amount < 0 {
            return Err(CreatureError::NegativeRestore {
                resource: ResourceKind::Mana,
                amount,
            });
        }
        self.mana = (self.mana + amount).min(Self::MAX_MANA);
        Ok(())
    }
}

/// State for a berserker: a rage pool that builds with every berserk.
///
/// Rage starts non-negative and is clamped to [`Self::MAX_RAGE`] after each
/// berserk. Damage doubles once the committed rage exceeds
/// [`Self::RAGE_THRESHOLD`].
///
/// # Example
///
/// ```
/// use bestiary_core::creature::BerserkerState;
///
/// let mut state = BerserkerState::new(20).unwrap();
/// // Rage commits to 25, over the threshold: doubled damage.
/// assert_eq!(state.berserk().unwrap(), 30);
/// assert_eq!(state.rage(), 25);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BerserkerState {
    rage: i32,
}

impl BerserkerState {
    /// Minimum rage accepted at construction.
    pub const MIN_RAGE: i32 = 0;
    /// Ceiling rage is clamped to after each berserk.
    pub const MAX_RAGE: i32 = 30;
    /// Rage gained by one berserk.
    pub const RAGE_GAIN: i32 = 5;
    /// Minimum the built-up rage must reach for a berserk to go through.
    pub const BERSERK_COST: i32 = 5;
    /// Committed rage above this value doubles the damage.
    pub const RAGE_THRESHOLD: i32 = 20;
    /// Damage dealt at or below the threshold.
    pub const NORMAL_DAMAGE: i32 = 15;
    /// Damage dealt above the threshold.
    pub const FRENZY_DAMAGE: i32 = 30;

    /// Creates the state with an initial non-negative rage.
    ///
    /// # Errors
    ///
    /// Returns [`CreatureError::NegativeRage`] if `rage` is negative.
    pub fn new(rage: i32) -> Result<Self, CreatureError> {
        if rage < Self::MIN_RAGE {
            return Err(CreatureError::NegativeRage { rage });
        }
        Ok(Self { rage })
    }

    /// Returns the current rage.
    #[must_use]
    pub const fn rage(&self) -> i32 {
        self.rage
    }

    /// Goes berserk: builds [`Self::RAGE_GAIN`] rage, then deals damage.
    ///
    /// The raised rage is checked against [`Self::BERSERK_COST`] before it
    /// is committed, and the commit clamps to [`Self::MAX_RAGE`]. Damage is
    /// [`Self::FRENZY_DAMAGE`] once the committed rage exceeds
    /// [`Self::RAGE_THRESHOLD`], otherwise [`Self::NORMAL_DAMAGE`].
    ///
    /// # Errors
    ///
    /// Returns [`CreatureError::LowResource`] if the raised rage would
    /// still be below the cost. With the non-negative construction
    /// invariant this cannot happen, but it is the ability's declared
    /// contract and kept callable-checkable.
    pub fn berserk(&mut self) -> Result<i32, CreatureError> {
        let new_rage = self.rage + Self::RAGE_GAIN;
        if new_rage < Self::BERSERK_COST {
            return Err(CreatureError::LowResource {
                resource: ResourceKind::Rage,
                required: Self::BERSERK_COST,
                available: self.rage,
            });
        }

        self.rage = new_rage.min(Self::MAX_RAGE);
        trace!(rage = self.rage, "berserk committed");

        if self.rage > Self::RAGE_THRESHOLD {
            Ok(Self::FRENZY_DAMAGE)
        } else {
            Ok(Self::NORMAL_DAMAGE)
        }
    }
}
