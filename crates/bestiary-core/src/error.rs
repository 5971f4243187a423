//! Error types for calendar and creature operations.
//!
//! Each domain has its own error enum so callers can pattern-match on the
//! exact failure without string inspection:
//!
//! - [`DateError`]: a day/month/year triple that does not form a valid date
//! - [`CreatureError`]: invalid construction input, a negative mutation
//!   amount, or an ability invoked below its activation cost
//!
//! All failures are raised synchronously at the offending call. The only
//! error a caller is expected to handle per-call (rather than treat as
//! fatal) is [`CreatureError::LowResource`], which signals that an ability
//! can be retried once the backing resource has been restored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The special-ability resource backing a creature kind.
///
/// Used by [`CreatureError`] variants to name which pool was involved, and
/// by the details snapshot to label the reported value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Fire breather's fire power pool.
    FirePower,
    /// Spell caster's mana pool.
    Mana,
    /// Berserker's rage pool.
    Rage,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirePower => write!(f, "fire power"),
            Self::Mana => write!(f, "mana"),
            Self::Rage => write!(f, "rage"),
        }
    }
}

/// The component of a date triple an error refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateComponent {
    /// The day of the month.
    Day,
    /// The month of the year.
    Month,
    /// The year.
    Year,
}

impl fmt::Display for DateComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Month => write!(f, "month"),
            Self::Year => write!(f, "year"),
        }
    }
}

/// Validation failure for a day/month/year triple.
///
/// Construction checks components in order (positivity, year bounds, month
/// range, day range), so a triple with several problems reports the first
/// one encountered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum DateError {
    /// A component was zero or negative.
    #[error("{component} must be positive")]
    NonPositiveComponent {
        /// Which component failed.
        component: DateComponent,
    },

    /// The year falls outside the configured bounds.
    #[error("year {year} must be greater than {min} and at most {max}")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
        /// Exclusive lower bound.
        min: i32,
        /// Inclusive upper bound.
        max: i32,
    },

    /// The month is not in 1..=12.
    #[error("month must be between 1 and 12, got {month}")]
    MonthOutOfRange {
        /// The rejected month.
        month: i32,
    },

    /// The day exceeds the length of the given month.
    #[error("day {day} is invalid for month {month} of {year} (at most {max})")]
    DayOutOfRange {
        /// The rejected day.
        day: i32,
        /// Month the day was checked against.
        month: i32,
        /// Year the day was checked against (February length depends on it).
        year: i32,
        /// Number of days in that month.
        max: i32,
    },
}

/// Validation or ability failure on a creature.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum CreatureError {
    /// The name was empty or all whitespace.
    #[error("name cannot be blank")]
    BlankName,

    /// Initial health outside 0..=100.
    #[error("health must be between 0 and 100, got {health}")]
    HealthOutOfRange {
        /// The rejected health value.
        health: i32,
    },

    /// Initial fire power outside 1..=100.
    #[error("fire power must be between 1 and 100, got {fire_power}")]
    FirePowerOutOfRange {
        /// The rejected fire power value.
        fire_power: i32,
    },

    /// Initial mana outside 0..=50.
    #[error("mana must be between 0 and 50, got {mana}")]
    ManaOutOfRange {
        /// The rejected mana value.
        mana: i32,
    },

    /// Initial rage below zero.
    #[error("rage must be non-negative, got {rage}")]
    NegativeRage {
        /// The rejected rage value.
        rage: i32,
    },

    /// A negative amount passed to `take_damage`.
    #[error("damage amount cannot be negative, got {amount}")]
    NegativeDamage {
        /// The rejected amount.
        amount: i32,
    },

    /// A negative amount passed to `heal`.
    #[error("heal amount cannot be negative, got {amount}")]
    NegativeHeal {
        /// The rejected amount.
        amount: i32,
    },

    /// A negative amount passed to a resource restoration call.
    #[error("cannot restore a negative amount of {resource}, got {amount}")]
    NegativeRestore {
        /// Which resource the restoration targeted.
        resource: ResourceKind,
        /// The rejected amount.
        amount: i32,
    },

    /// An ability was invoked with its resource below the activation cost.
    ///
    /// Recoverable: restore the resource and retry the ability.
    #[error("not enough {resource}: need {required}, have {available}")]
    LowResource {
        /// The resource that was too low.
        resource: ResourceKind,
        /// Activation cost of the ability.
        required: i32,
        /// Level the resource was at when the ability was invoked.
        available: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_error_messages_name_the_component() {
        let err = DateError::NonPositiveComponent {
            component: DateComponent::Day,
        };
        assert_eq!(err.to_string(), "day must be positive");

        let err = DateError::YearOutOfRange {
            year: 1432,
            min: 1800,
            max: 2025,
        };
        assert_eq!(
            err.to_string(),
            "year 1432 must be greater than 1800 and at most 2025"
        );

        let err = DateError::DayOutOfRange {
            day: 30,
            month: 2,
            year: 2023,
            max: 28,
        };
        assert_eq!(
            err.to_string(),
            "day 30 is invalid for month 2 of 2023 (at most 28)"
        );
    }

    #[test]
    fn low_resource_message_names_the_pool() {
        let err = CreatureError::LowResource {
            resource: ResourceKind::Mana,
            required: 5,
            available: 3,
        };
        assert_eq!(err.to_string(), "not enough mana: need 5, have 3");
    }

    #[test]
    fn resource_kind_display() {
        assert_eq!(ResourceKind::FirePower.to_string(), "fire power");
        assert_eq!(ResourceKind::Mana.to_string(), "mana");
        assert_eq!(ResourceKind::Rage.to_string(), "rage");
    }

    #[test]
    fn errors_are_serializable() {
        let err = CreatureError::LowResource {
            resource: ResourceKind::FirePower,
            required: 10,
            available: 4,
        };
        let json = serde_json::to_string(&err).unwrap();
        let deserialized: CreatureError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }
}
