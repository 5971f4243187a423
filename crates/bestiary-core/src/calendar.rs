//! Calendar date value type with Gregorian validation.
//!
//! This module provides the birth-date type for the creature roster:
//! - [`CalendarDate`]: an immutable, validated day/month/year triple
//! - [`Weekday`]: the day of the week, derived by a closed-form procedure
//! - [`YearBounds`]: the configurable range of accepted years
//!
//! # Validation
//!
//! Construction is the only place a date can fail. Components are checked in
//! a fixed order: positivity, year bounds, month range, then day against the
//! month length (February is 29 days in leap years). A constructed date is
//! never mutated, so every accessor is infallible.
//!
//! # Day-of-week derivation
//!
//! The weekday comes from a fixed arithmetic procedure over the century
//! offset, a leap-year adjustment for January/February, the split of the
//! two-digit year into twelves/remainder/fours, the day, and a per-month
//! code. The mapping starts at Saturday (index 0), not the ISO Monday. This
//! is a designed artifact of the roster format and is intentionally not a
//! calendar-library call.
//!
//! # Example
//!
//! ```
//! use bestiary_core::calendar::{CalendarDate, Weekday};
//!
//! let date = CalendarDate::new(13, 5, 2012).unwrap();
//!
//! assert_eq!(date.to_iso_date(), "2012-05-13");
//! assert_eq!(date.day_of_week(), Weekday::Sunday);
//! assert_eq!(date.month_name(), "May");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DateComponent, DateError};

// =============================================================================
// Month tables
// =============================================================================

/// Days per month for a non-leap year, January first.
const DAYS_IN_MONTH: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Length of February in a leap year.
const FEBRUARY_LEAP_DAYS: i32 = 29;

/// English month names, January first.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Per-month codes for the day-of-week procedure, January first.
const MONTH_CODES: [i32; 12] = [1, 4, 4, 0, 2, 5, 0, 3, 6, 1, 4, 6];

// =============================================================================
// Year bounds
// =============================================================================

/// Configurable range of years a [`CalendarDate`] will accept.
///
/// A year is accepted iff `min < year && year <= max`: the minimum is
/// **exclusive** and the maximum **inclusive**. The default covers the
/// roster's supported range, rejecting 1800 itself and accepting 2025.
///
/// # Example
///
/// ```
/// use bestiary_core::calendar::YearBounds;
///
/// let bounds = YearBounds::default();
/// assert!(!bounds.contains(1800));
/// assert!(bounds.contains(1801));
/// assert!(bounds.contains(2025));
/// assert!(!bounds.contains(2026));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearBounds {
    /// Exclusive lower bound.
    pub min: i32,
    /// Inclusive upper bound.
    pub max: i32,
}

impl YearBounds {
    /// Creates bounds accepting years in `(min, max]`.
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `year` falls inside these bounds.
    #[must_use]
    pub const fn contains(self, year: i32) -> bool {
        year > self.min && year <= self.max
    }
}

impl Default for YearBounds {
    fn default() -> Self {
        Self {
            min: 1800,
            max: 2025,
        }
    }
}

// =============================================================================
// Weekday
// =============================================================================

/// Day of the week as derived by [`CalendarDate::day_of_week`].
///
/// Variants are declared in the procedure's index order: Saturday is 0 and
/// Friday is 6. This matches the roster's weekday table, not ISO numbering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// Index 0.
    Saturday,
    /// Index 1.
    Sunday,
    /// Index 2.
    Monday,
    /// Index 3.
    Tuesday,
    /// Index 4.
    Wednesday,
    /// Index 5.
    Thursday,
    /// Index 6.
    Friday,
}

impl Weekday {
    /// Maps a procedure index in 0..=6 to its weekday.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside 0..=6. Callers reduce modulo 7 first.
    const fn from_index(index: i32) -> Self {
        match index {
            0 => Self::Saturday,
            1 => Self::Sunday,
            2 => Self::Monday,
            3 => Self::Tuesday,
            4 => Self::Wednesday,
            5 => Self::Thursday,
            6 => Self::Friday,
            _ => panic!("weekday index out of range"),
        }
    }

    /// Returns the English name of this weekday.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// CalendarDate
// =============================================================================

/// An immutable, validated Gregorian day/month/year triple.
///
/// `CalendarDate` can only be obtained through [`CalendarDate::new`] or
/// [`CalendarDate::with_bounds`], so a held value is always a real date:
/// the month is in 1..=12 and the day fits the month's length for that
/// year. Creatures own their birth date by value.
///
/// # Example
///
/// ```
/// use bestiary_core::calendar::CalendarDate;
///
/// let date = CalendarDate::new(29, 2, 2024).unwrap();
/// assert_eq!(date.to_iso_date(), "2024-02-29");
///
/// // 2023 is not a leap year
/// assert!(CalendarDate::new(29, 2, 2023).is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    day: i32,
    month: i32,
    year: i32,
}

impl CalendarDate {
    /// Creates a date validated against [`YearBounds::default`].
    ///
    /// # Errors
    ///
    /// Returns a [`DateError`] if any component is non-positive, the year
    /// falls outside the default bounds, the month is outside 1..=12, or
    /// the day exceeds the month's length for that year.
    pub fn new(day: i32, month: i32, year: i32) -> Result<Self, DateError> {
        Self::with_bounds(day, month, year, YearBounds::default())
    }

    /// Creates a date validated against explicit year bounds.
    ///
    /// This is the configuration surface for the accepted year range; the
    /// month and day rules are fixed Gregorian rules.
    ///
    /// # Errors
    ///
    /// Same conditions as [`CalendarDate::new`], with the year checked
    /// against `bounds` instead of the defaults.
    pub fn with_bounds(
        day: i32,
        month: i32,
        year: i32,
        bounds: YearBounds,
    ) -> Result<Self, DateError> {
        if year <= 0 {
            return Err(DateError::NonPositiveComponent {
                component: DateComponent::Year,
            });
        }
        if month <= 0 {
            return Err(DateError::NonPositiveComponent {
                component: DateComponent::Month,
            });
        }
        if day <= 0 {
            return Err(DateError::NonPositiveComponent {
                component: DateComponent::Day,
            });
        }

        if !bounds.contains(year) {
            return Err(DateError::YearOutOfRange {
                year,
                min: bounds.min,
                max: bounds.max,
            });
        }

        let max_day = Self::days_in_month(month, year)?;
        if day > max_day {
            return Err(DateError::DayOutOfRange {
                day,
                month,
                year,
                max: max_day,
            });
        }

        Ok(Self { day, month, year })
    }

    /// Returns `true` if `year` is a Gregorian leap year.
    ///
    /// A year is a leap year if it is divisible by 4 and either not
    /// divisible by 100 or divisible by 400.
    ///
    /// # Example
    ///
    /// ```
    /// use bestiary_core::calendar::CalendarDate;
    ///
    /// assert!(CalendarDate::is_leap_year(2000));
    /// assert!(!CalendarDate::is_leap_year(1900));
    /// ```
    #[must_use]
    pub const fn is_leap_year(year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Returns the number of days in `month` of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::MonthOutOfRange`] if `month` is outside 1..=12.
    pub fn days_in_month(month: i32, year: i32) -> Result<i32, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::MonthOutOfRange { month });
        }
        if month == 2 && Self::is_leap_year(year) {
            return Ok(FEBRUARY_LEAP_DAYS);
        }
        Ok(DAYS_IN_MONTH[(month - 1) as usize])
    }

    /// Returns the English name of `month`.
    ///
    /// The instance accessor [`CalendarDate::month_name`] is the usual
    /// entry point; this associated form exists for lookups on arbitrary
    /// input.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::MonthOutOfRange`] if `month` is outside 1..=12.
    pub fn month_name_of(month: i32) -> Result<&'static str, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::MonthOutOfRange { month });
        }
        Ok(MONTH_NAMES[(month - 1) as usize])
    }

    /// Returns the day of the month.
    #[must_use]
    pub const fn day(&self) -> i32 {
        self.day
    }

    /// Returns the month of the year (1 = January).
    #[must_use]
    pub const fn month(&self) -> i32 {
        self.month
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the English name of this date's month.
    #[must_use]
    pub fn month_name(&self) -> &'static str {
        // Construction guarantees month is in 1..=12.
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Formats this date as zero-padded `YYYY-MM-DD`.
    ///
    /// # Example
    ///
    /// ```
    /// use bestiary_core::calendar::CalendarDate;
    ///
    /// let date = CalendarDate::new(5, 3, 1999).unwrap();
    /// assert_eq!(date.to_iso_date(), "1999-03-05");
    /// ```
    #[must_use]
    pub fn to_iso_date(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Derives the day of the week for this date.
    ///
    /// The procedure, reproduced exactly:
    ///
    /// 1. Start from a century offset: 6 for years 2000 and later, 2 for
    ///    years up to and including 1800, otherwise 0.
    /// 2. Add 6 if the year is a leap year and the month is January or
    ///    February.
    /// 3. Split the two-digit year `yy = year % 100` into the number of
    ///    twelves (`yy / 12`), the remainder (`yy % 12`), and the number of
    ///    fours in the remainder (`(yy % 12) / 4`); add all three.
    /// 4. Add the day of the month and the month code
    ///    (January 1, February 4, March 4, April 0, May 2, June 5, July 0,
    ///    August 3, September 6, October 1, November 4, December 6).
    /// 5. Reduce modulo 7 and map through [`Weekday`], Saturday first.
    ///
    /// # Example
    ///
    /// ```
    /// use bestiary_core::calendar::{CalendarDate, Weekday};
    ///
    /// let date = CalendarDate::new(1, 1, 2000).unwrap();
    /// assert_eq!(date.day_of_week(), Weekday::Saturday);
    /// ```
    #[must_use]
    pub fn day_of_week(&self) -> Weekday {
        let mut sum = 0;

        if Self::is_leap_year(self.year) && (self.month == 1 || self.month == 2) {
            sum += 6;
        }

        if self.year >= 2000 {
            sum += 6;
        } else if self.year <= 1800 {
            sum += 2;
        }

        let yy = self.year % 100;
        let twelves = yy / 12;
        let remainder = yy % 12;
        let fours = remainder / 4;

        sum += twelves + remainder + fours + self.day;
        sum += MONTH_CODES[(self.month - 1) as usize];

        Weekday::from_index(sum % 7)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso_date())
    }
}
