// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Frame-driven clock controller.
//!
//! [`HorizonsClock`] owns the drawing surface, the wall clock, and the two
//! text sinks, and advances one frame at a time: [`tick`](HorizonsClock::tick)
//! runs a single deterministic frame, [`run`](HorizonsClock::run) loops it
//! while a [`FrameScheduler`] keeps granting frames.  There is no hidden
//! self-rescheduling callback chain: tests drive exactly the frames they
//! want, hosts stop the loop by refusing the next frame.
//!
//! Execution is strictly sequential and single-threaded; the surface is
//! mutated and consumed within one `tick`, never shared across frames.

use crate::calendar::HorizonsDate;
use crate::instant::WallClock;
use crate::percent::RingPercentages;
use crate::render::{self, STROKE_WIDTH};
use crate::surface::DrawingSurface;
use std::cell::RefCell;
use std::rc::Rc;

/// Clock construction errors.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// The host did not provide a drawing surface.  Rendering is the whole
    /// purpose of the clock, so this is fatal at startup.
    #[error("drawing surface unavailable")]
    SurfaceUnavailable,
}

/// Receives one rendered text line (the digital time or calendar date).
pub trait TextSink {
    /// Replace the displayed text.
    fn set_text(&mut self, text: &str);
}

/// Grants animation frames; returning `false` tears the loop down.
pub trait FrameScheduler {
    /// Block until the next repaint; `false` stops the clock.
    fn next_frame(&mut self) -> bool;
}

/// Scheduler granting a fixed number of frames, for tests and demos.
#[derive(Debug, Clone, Copy)]
pub struct CountdownScheduler {
    remaining: u32,
}

impl CountdownScheduler {
    /// Scheduler that grants exactly `frames` frames.
    pub const fn new(frames: u32) -> Self {
        Self { remaining: frames }
    }
}

impl FrameScheduler for CountdownScheduler {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Text sink backed by a shared string buffer.
///
/// Clones share the buffer, so a caller can keep one handle and read back
/// what the clock last displayed.
#[derive(Debug, Clone, Default)]
pub struct SharedText(Rc<RefCell<String>>);

impl SharedText {
    /// Empty shared buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The text last written to the sink.
    pub fn get(&self) -> String {
        self.0.borrow().clone()
    }
}

impl TextSink for SharedText {
    fn set_text(&mut self, text: &str) {
        *self.0.borrow_mut() = text.to_owned();
    }
}

/// Outcome of a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The frame was rendered and the text sinks updated.
    Rendered,
    /// The clock reading was unusable; nothing was drawn.
    Skipped,
}

/// The Horizons ring clock.
pub struct HorizonsClock<C, S> {
    clock: C,
    surface: S,
    time_sink: Option<Box<dyn TextSink>>,
    date_sink: Option<Box<dyn TextSink>>,
    last_epoch_ms: Option<i64>,
}

impl<C, S> std::fmt::Debug for HorizonsClock<C, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HorizonsClock")
            .field("time_sink", &self.time_sink.is_some())
            .field("date_sink", &self.date_sink.is_some())
            .field("last_epoch_ms", &self.last_epoch_ms)
            .finish_non_exhaustive()
    }
}

impl<C: WallClock, S: DrawingSurface> HorizonsClock<C, S> {
    /// Build a clock over a surface the host is sure to have.
    pub fn new(clock: C, mut surface: S) -> Self {
        surface.set_line_width(STROKE_WIDTH);
        Self {
            clock,
            surface,
            time_sink: None,
            date_sink: None,
            last_epoch_ms: None,
        }
    }

    /// Build a clock from a surface the host may have failed to provide.
    pub fn try_new(clock: C, surface: Option<S>) -> Result<Self, ClockError> {
        Ok(Self::new(
            clock,
            surface.ok_or(ClockError::SurfaceUnavailable)?,
        ))
    }

    /// Attach the digital-time text sink.
    pub fn with_time_sink(mut self, sink: Box<dyn TextSink>) -> Self {
        self.time_sink = Some(sink);
        self
    }

    /// Attach the calendar-date text sink.
    pub fn with_date_sink(mut self, sink: Box<dyn TextSink>) -> Self {
        self.date_sink = Some(sink);
        self
    }

    /// The surface, for inspection or host-side presentation.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Tear the clock down and hand the surface back to the host.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Render exactly one frame from the current wall-clock reading.
    ///
    /// A reading that runs backwards, or that carries an out-of-range
    /// millisecond field (leap-second encodings), leaves the surface
    /// untouched; the next frame simply retries with a fresh reading.
    pub fn tick(&mut self) -> FrameOutcome {
        let instant = self.clock.now();

        if instant.millisecond >= 1_000 {
            tracing::warn!(
                millisecond = instant.millisecond,
                "malformed clock reading, skipping frame"
            );
            return FrameOutcome::Skipped;
        }
        if let Some(last) = self.last_epoch_ms {
            if instant.epoch_ms() < last {
                tracing::warn!(
                    delta_ms = last - instant.epoch_ms(),
                    "clock went backwards, skipping frame"
                );
                return FrameOutcome::Skipped;
            }
        }
        self.last_epoch_ms = Some(instant.epoch_ms());

        let date = HorizonsDate::from_ordinal(instant.year, instant.ordinal);
        let percentages = RingPercentages::compute(&instant, &date);
        render::render_frame(&mut self.surface, &percentages, &date);

        if let Some(sink) = self.time_sink.as_deref_mut() {
            sink.set_text(&instant.time_string());
        }
        if let Some(sink) = self.date_sink.as_deref_mut() {
            sink.set_text(&date.to_string());
        }
        FrameOutcome::Rendered
    }

    /// Drive the clock until the scheduler stops granting frames.
    pub fn run<F: FrameScheduler>(&mut self, scheduler: &mut F) {
        while scheduler.next_frame() {
            self.tick();
        }
    }
}
