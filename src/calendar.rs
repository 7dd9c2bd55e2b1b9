// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Horizons calendar conversion.
//!
//! The Horizons calendar tiles its year with **13 months of 28 days**
//! (364 day-slots) and leaves the remaining one or two days outside the
//! month grid entirely.  Relative to the Gregorian calendar it is defined
//! by two constant offsets:
//!
//! | Constant | Value | Meaning |
//! |----------|-------|---------|
//! | [`YEAR_OFFSET`] | 1790 | Horizons year = Gregorian year + 1790 |
//! | [`EPOCH_SHIFT_DAYS`] | 11 | Horizons day-of-year = Gregorian day-of-year + 11 |
//!
//! The Horizons year rolls over while the Gregorian year is still running:
//! once the Gregorian day-of-year passes [`YEAR_ROLLOVER_GDOY`] the next
//! Horizons year number applies, and the shifted day-of-year wraps by the
//! (Horizons) year length.
//!
//! # Intercalary days
//!
//! Days outside the month grid are reported with the sentinel pair
//! `month == 0 && day == 0`:
//!
//! - shifted day-of-year **365** — the year-opening rest day,
//! - shifted day-of-year **1** — its companion in common years,
//! - shifted day-of-year **366** — **Drift Day**, the leap day, flagged via
//!   [`HorizonsDate::is_drift_day`].
//!
//! Month 1 therefore begins at shifted day-of-year 2, and its day numbers
//! start at 1; every later month spans days 0–27.
//!
//! Leap status follows the Gregorian rule applied to the *Horizons* year
//! number, so Horizons leap years do not coincide with Gregorian ones.

use chrono::{DateTime, Datelike, TimeZone};
use std::fmt;

/// Year-number offset between the Gregorian and Horizons calendars.
pub const YEAR_OFFSET: i32 = 1790;

/// Gregorian day-of-year after which the next Horizons year has begun.
const YEAR_ROLLOVER_GDOY: u32 = 353;

/// Day-of-year offset between the two calendar epochs.
const EPOCH_SHIFT_DAYS: u32 = 11;

/// Days per Horizons month.
pub const DAYS_PER_MONTH: u8 = 28;

/// Months per Horizons year.
pub const MONTHS_PER_YEAR: u8 = 13;

/// A date on the Horizons calendar.
///
/// Recomputed from the wall clock every frame; never persisted.  The pair
/// `month == 0 && day == 0` marks an intercalary day, during which the
/// month and day rings show no progress at all (see
/// [`RingPercentages`](crate::RingPercentages)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HorizonsDate {
    /// Horizons year number.
    pub year: i32,
    /// Month in `[0, 13]`; 0 is the intercalary sentinel.
    pub month: u8,
    /// Day within the month, in `[0, 27]`.
    pub day: u8,
    /// True on the leap day that closes a Horizons leap year's opening.
    pub is_drift_day: bool,
}

impl HorizonsDate {
    /// Convert a wall-clock reading to its Horizons date.
    ///
    /// Works from the *local* calendar date: the local date already folds
    /// any UTC-offset change since 1 January into the day boundary, so a
    /// daylight-saving transition cannot shift the day-of-year.
    pub fn from_datetime<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self::from_ordinal(now.year(), now.ordinal())
    }

    /// Convert a Gregorian year and 1-based day-of-year.
    pub fn from_ordinal(gregorian_year: i32, gdoy: u32) -> Self {
        let year = gregorian_year + YEAR_OFFSET + i32::from(gdoy > YEAR_ROLLOVER_GDOY);
        let year_len = if is_leap_year(year) { 366 } else { 365 };

        let mut hdoy = gdoy + EPOCH_SHIFT_DAYS;
        if hdoy > year_len {
            hdoy -= year_len;
        }

        match hdoy {
            1 | 365 => Self {
                year,
                month: 0,
                day: 0,
                is_drift_day: false,
            },
            366 => Self {
                year,
                month: 0,
                day: 0,
                is_drift_day: true,
            },
            _ => Self {
                year,
                month: ((hdoy - 1) / u32::from(DAYS_PER_MONTH)) as u8 + 1,
                day: ((hdoy - 1) % u32::from(DAYS_PER_MONTH)) as u8,
                is_drift_day: false,
            },
        }
    }

    /// True on any intercalary day (no valid month/day to progress within).
    #[inline]
    pub const fn is_sentinel(&self) -> bool {
        self.month == 0
    }
}

impl fmt::Display for HorizonsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_drift_day {
            write!(f, "{} -- Drift Day", self.year)
        } else {
            write!(f, "{}.{}.{}", self.year, self.month, self.day)
        }
    }
}

/// Gregorian leap rule: divisible by 4, not by 100 unless also by 400.
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
