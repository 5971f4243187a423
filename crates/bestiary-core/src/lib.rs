//! # Bestiary Core
//!
//! Creature roster and calendar core for Bestiary.
//!
//! This crate models fantasy creatures that hold a bounded vital resource
//! (health) and one bounded special-ability resource (fire power, mana, or
//! rage), together with the validated calendar date type used for their
//! birth dates.
//!
//! ## Architecture
//!
//! - **Calendar**: [`calendar::CalendarDate`] validates a Gregorian
//!   day/month/year triple and derives leap years, month names, and the
//!   day of the week via a fixed closed-form procedure.
//! - **Creatures**: [`creature::Creature`] is a base record (name, birth
//!   date, clamped health) with an enum-tagged specialization; abilities
//!   dispatch over the [`creature::CreatureInner`] variant.
//! - **Errors**: [`error::DateError`] and [`error::CreatureError`] report
//!   every validation failure synchronously at the offending call.
//!
//! ## Usage
//!
//! ```
//! use bestiary_core::calendar::CalendarDate;
//! use bestiary_core::creature::Creature;
//!
//! let born = CalendarDate::new(13, 5, 2012).unwrap();
//! let mut dragon = Creature::fire_breather("Smaug", born, 100, 30).unwrap();
//!
//! dragon.take_damage(45).unwrap();
//! let damage = dragon.use_ability().unwrap();
//! assert_eq!(damage, 20);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod calendar;
pub mod creature;
pub mod error;

pub use calendar::{CalendarDate, Weekday, YearBounds};
pub use creature::{Creature, CreatureDetails, CreatureInner, CreatureKind};
pub use error::{CreatureError, DateComponent, DateError, ResourceKind};

#[cfg(test)]
mod tests;
