// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Horizons Ring Clock
//!
//! Core of an animated analog-style clock that shows the current instant as
//! five concentric arcs — seconds, minutes, hours, day-of-month, and
//! month-of-year progress — together with the **Horizons calendar**, a
//! fictional 13-month, 28-day remapping of the Gregorian date.
//!
//! # Core types
//!
//! - [`FrameInstant`] — immutable wall-clock reading, one per frame.
//! - [`WallClock`] — clock capability ([`SystemClock`], [`FixedClock`]).
//! - [`HorizonsDate`] — the converted calendar date, drift days included.
//! - [`RingPercentages`] — the five per-frame ring readings in `[0, 100]`.
//! - [`RingSpec`] / [`ArcCommand`] — ring geometry and the emitted arcs.
//! - [`DrawingSurface`] — host surface capability ([`RecordingSurface`]).
//! - [`HorizonsClock`] — the frame controller; `tick()` renders one frame.
//!
//! # Frame pipeline
//!
//! ```text
//! WallClock → FrameInstant → HorizonsDate → RingPercentages → ArcCommands
//! ```
//!
//! Every stage is a pure function of the stage before it, so a frame is
//! fully reproducible from a single clock reading.
//!
//! # Quick example
//!
//! ```
//! use horizons_clock::{FixedClock, FrameInstant, HorizonsClock, RecordingSurface};
//!
//! let reading = FrameInstant::from_civil(2026, 8, 6, 9, 30, 15, 0).unwrap();
//! let mut clock = HorizonsClock::new(FixedClock::new(reading), RecordingSurface::new());
//! clock.tick();
//! assert_eq!(clock.surface().arcs.len(), 5);
//! ```

mod calendar;
mod clock;
mod instant;
mod percent;
mod render;
mod surface;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{is_leap_year, HorizonsDate, DAYS_PER_MONTH, MONTHS_PER_YEAR, YEAR_OFFSET};
pub use clock::{
    ClockError, CountdownScheduler, FrameOutcome, FrameScheduler, HorizonsClock, SharedText,
    TextSink,
};
pub use instant::{FixedClock, FrameInstant, SystemClock, WallClock};
pub use percent::{
    RingPercentages, DAY_UNIT, DAY_WINDOW, HOUR_UNIT, HOUR_WINDOW, MINUTE_UNIT, MINUTE_WINDOW,
    MONTH_UNIT, MONTH_WINDOW, SECOND_WINDOW, YEAR_UNIT,
};
pub use render::{render_frame, RingSpec, ORIGIN, STROKE_WIDTH};
pub use surface::{ArcCommand, DrawingSurface, RecordingSurface};
