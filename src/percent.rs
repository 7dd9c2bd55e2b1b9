// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Per-frame ring percentages.
//!
//! Each ring shows how far the current instant has progressed through its
//! unit, as hundredths of the unit's duration.  Elapsed time accumulates
//! from the coarser unit's start down through milliseconds: the month ring
//! includes the days, hours, minutes, seconds, and milliseconds already
//! elapsed within the month.
//!
//! Unit durations:
//!
//! | Unit | Length |
//! |------|--------|
//! | minute | 60 s |
//! | hour | 60 minutes |
//! | day | 24 hours |
//! | month | 28 days |
//! | year | 13 months (364 days) |
//!
//! The year ratio ignores the intercalary days: while the calendar sits on
//! one, no valid month/day exists to measure progress within, and the day
//! and month percentages are forced to 0 instead.

use crate::calendar::HorizonsDate;
use crate::instant::FrameInstant;
use qtty::{Seconds, Simplify};

/// One minute.
pub const MINUTE_UNIT: Seconds = Seconds::new(60.0);

/// One hour.
pub const HOUR_UNIT: Seconds = Seconds::new(60.0 * 60.0);

/// One civil day.
pub const DAY_UNIT: Seconds = Seconds::new(24.0 * 60.0 * 60.0);

/// One Horizons month (28 days).
pub const MONTH_UNIT: Seconds = Seconds::new(28.0 * 24.0 * 60.0 * 60.0);

/// One Horizons year (13 months; drift days sit outside the ratio).
pub const YEAR_UNIT: Seconds = Seconds::new(13.0 * 28.0 * 24.0 * 60.0 * 60.0);

// ── Finisher windows ──────────────────────────────────────────────────────
//
// Width, in a ring's own percentage, of the rollover window during which
// the finisher variant draws the ring (see `render`).  Each window scales
// the seconds ring's 5% down to the coarser ring's axis.

/// Finisher window of the seconds ring.
pub const SECOND_WINDOW: f64 = 5.0;

/// Finisher window of the minutes ring.
pub const MINUTE_WINDOW: f64 = SECOND_WINDOW / 60.0;

/// Finisher window of the hours ring.
pub const HOUR_WINDOW: f64 = MINUTE_WINDOW / 60.0;

/// Finisher window of the day ring.
pub const DAY_WINDOW: f64 = HOUR_WINDOW / 24.0;

/// Finisher window of the month ring, scaled from the hour window.
pub const MONTH_WINDOW: f64 = HOUR_WINDOW / 28.0;

/// The five ring readings for one frame, each in `[0, 100]`.
///
/// 100 is reached only in the limit: every reading resets to 0 the instant
/// its unit rolls over.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RingPercentages {
    /// Seconds ring: progress through the current minute.
    pub second: f64,
    /// Minutes ring: progress through the current hour.
    pub minute: f64,
    /// Hours ring: progress through the current day.
    pub hour: f64,
    /// Day ring: progress through the current Horizons month.
    pub day: f64,
    /// Month ring: progress through the current Horizons year.
    pub month: f64,
}

impl RingPercentages {
    /// Compute all five readings for one frame.
    pub fn compute(instant: &FrameInstant, date: &HorizonsDate) -> Self {
        let in_minute =
            Seconds::new(f64::from(instant.second) + f64::from(instant.millisecond) / 1_000.0);
        let in_hour = MINUTE_UNIT * f64::from(instant.minute) + in_minute;
        let in_day = HOUR_UNIT * f64::from(instant.hour) + in_hour;

        let (day, month) = if date.is_sentinel() {
            (0.0, 0.0)
        } else {
            let in_month = DAY_UNIT * f64::from(date.day) + in_day;
            let in_year = MONTH_UNIT * f64::from(date.month - 1) + in_month;
            (percent(in_month, MONTH_UNIT), percent(in_year, YEAR_UNIT))
        };

        Self {
            second: percent(in_minute, MINUTE_UNIT),
            minute: percent(in_hour, HOUR_UNIT),
            hour: percent(in_day, DAY_UNIT),
            day,
            month,
        }
    }
}

/// Elapsed time as hundredths of the unit duration.
#[inline]
fn percent(elapsed: Seconds, unit: Seconds) -> f64 {
    100.0 * (elapsed / unit).simplify().value()
}
