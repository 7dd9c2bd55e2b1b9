// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Ring geometry and the per-frame draw pass.
//!
//! Five concentric rings, coarsest outermost:
//!
//! | Ring | Radius | Color |
//! |------|--------|-------|
//! | month | 225 | `#826c7f` |
//! | day | 200 | `#233d4d` |
//! | hour | 175 | `#22aaa1` |
//! | minute | 150 | `#fac053` |
//! | second | 125 | `#dbfe87` |
//!
//! Every arc starts at the top of the circle and sweeps clockwise by its
//! ring's percentage of a full turn.
//!
//! # Finisher arcs
//!
//! A ring that rolls over would snap from a full circle back to an empty
//! arc while the next-coarser ring has barely moved.  Inside the rollover
//! window (`0 < p < window`) the ring is drawn as a *finisher* instead:
//! the start angle runs ahead of the top by `p / window` turns while the
//! end angle grows normally, so the just-completed circle shrinks onto the
//! growing arc and hands off to the normal variant without a jump.

use crate::calendar::HorizonsDate;
use crate::percent::{
    RingPercentages, DAY_WINDOW, HOUR_WINDOW, MINUTE_WINDOW, MONTH_WINDOW, SECOND_WINDOW,
};
use crate::surface::{ArcCommand, DrawingSurface};
use std::f64::consts::PI;

/// Shared arc origin on the drawing surface.
pub const ORIGIN: (f64, f64) = (250.0, 250.0);

/// Stroke width for every ring.
pub const STROKE_WIDTH: f64 = 23.0;

/// Arcs start from the top of the circle.
const START_ANGLE: f64 = 1.5 * PI;

/// One percent of a full turn.
const ANGLE_PER_PERCENT: f64 = 2.0 * PI / 100.0;

/// One ring's draw parameters for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RingSpec {
    /// Ring radius on the surface.
    pub radius: f64,
    /// Progress through the ring's unit, `[0, 100]`.
    pub percentage: f64,
    /// Stroke color.
    pub color: &'static str,
    /// Width of the rollover finisher window, in the ring's percentage.
    pub finish_window: f64,
}

impl RingSpec {
    /// The rings to draw for one frame, coarsest first.
    ///
    /// On an intercalary day the day and month rings are omitted entirely:
    /// there is no valid month or day to show progress within, so those
    /// rings disappear rather than drawing a zero-length arc.
    pub fn frame_rings(percentages: &RingPercentages, date: &HorizonsDate) -> Vec<RingSpec> {
        let mut rings = Vec::with_capacity(5);
        if !date.is_sentinel() {
            rings.push(RingSpec {
                radius: 225.0,
                percentage: percentages.month,
                color: "#826c7f",
                finish_window: MONTH_WINDOW,
            });
            rings.push(RingSpec {
                radius: 200.0,
                percentage: percentages.day,
                color: "#233d4d",
                finish_window: DAY_WINDOW,
            });
        }
        rings.push(RingSpec {
            radius: 175.0,
            percentage: percentages.hour,
            color: "#22aaa1",
            finish_window: HOUR_WINDOW,
        });
        rings.push(RingSpec {
            radius: 150.0,
            percentage: percentages.minute,
            color: "#fac053",
            finish_window: MINUTE_WINDOW,
        });
        rings.push(RingSpec {
            radius: 125.0,
            percentage: percentages.second,
            color: "#dbfe87",
            finish_window: SECOND_WINDOW,
        });
        rings
    }

    /// True while the ring sits inside its rollover finisher window.
    #[inline]
    pub fn in_finish_window(&self) -> bool {
        self.percentage > 0.0 && self.percentage < self.finish_window
    }

    /// The arc to stroke for this ring this frame.
    pub fn arc(&self) -> ArcCommand {
        if self.in_finish_window() {
            finisher_arc(self.radius, self.percentage, self.color, self.finish_window)
        } else {
            progress_arc(self.radius, self.percentage, self.color)
        }
    }
}

/// Arc spanning `percentage` of the circle, clockwise from the top.
fn progress_arc(radius: f64, percentage: f64, color: &'static str) -> ArcCommand {
    ArcCommand {
        center: ORIGIN,
        radius,
        start_angle: START_ANGLE,
        end_angle: START_ANGLE + percentage * ANGLE_PER_PERCENT,
        color,
    }
}

/// Rollover variant: the start angle runs ahead by `percentage / window`
/// turns, same end angle as [`progress_arc`].
fn finisher_arc(radius: f64, percentage: f64, color: &'static str, window: f64) -> ArcCommand {
    ArcCommand {
        center: ORIGIN,
        radius,
        start_angle: START_ANGLE + (percentage / window) * 100.0 * ANGLE_PER_PERCENT,
        end_angle: START_ANGLE + percentage * ANGLE_PER_PERCENT,
        color,
    }
}

/// Draw one frame: clear, then stroke every visible ring coarsest-first.
pub fn render_frame<S: DrawingSurface>(
    surface: &mut S,
    percentages: &RingPercentages,
    date: &HorizonsDate,
) {
    surface.clear();
    for ring in RingSpec::frame_rings(percentages, date) {
        surface.stroke_arc(ring.arc());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instant::FrameInstant;
    use crate::surface::RecordingSurface;
    use std::f64::consts::TAU;

    fn mid_year_date() -> HorizonsDate {
        HorizonsDate::from_ordinal(2026, 218)
    }

    fn percentages(h: u32, m: u32, s: u32, ms: u32) -> RingPercentages {
        let instant = FrameInstant::from_civil(2026, 8, 6, h, m, s, ms).unwrap();
        RingPercentages::compute(&instant, &mid_year_date())
    }

    #[test]
    fn five_rings_coarsest_first() {
        let rings = RingSpec::frame_rings(&percentages(9, 30, 15, 0), &mid_year_date());
        let radii: Vec<f64> = rings.iter().map(|r| r.radius).collect();
        assert_eq!(radii, vec![225.0, 200.0, 175.0, 150.0, 125.0]);
    }

    #[test]
    fn sentinel_day_hides_day_and_month_rings() {
        let sentinel = HorizonsDate::from_ordinal(2026, 354);
        let instant = FrameInstant::from_civil(2026, 12, 20, 9, 30, 15, 0).unwrap();
        let p = RingPercentages::compute(&instant, &sentinel);
        let rings = RingSpec::frame_rings(&p, &sentinel);
        let radii: Vec<f64> = rings.iter().map(|r| r.radius).collect();
        assert_eq!(radii, vec![175.0, 150.0, 125.0]);
    }

    #[test]
    fn progress_arc_spans_its_percentage() {
        let arc = progress_arc(125.0, 25.0, "#dbfe87");
        assert!((arc.start_angle - START_ANGLE).abs() < 1e-12);
        assert!((arc.sweep() - TAU / 4.0).abs() < 1e-12);
    }

    #[test]
    fn zero_and_full_progress_arcs() {
        assert!(progress_arc(125.0, 0.0, "#dbfe87").sweep().abs() < 1e-12);
        assert!((progress_arc(125.0, 100.0, "#dbfe87").sweep() - TAU).abs() < 1e-9);
    }

    #[test]
    fn finisher_selected_only_inside_the_window() {
        // 1.2 s into the minute: seconds ring at 2%, inside its 5% window.
        let p = percentages(9, 30, 1, 200);
        let rings = RingSpec::frame_rings(&p, &mid_year_date());
        let seconds = rings.last().unwrap();
        assert!(seconds.in_finish_window());
        assert!(seconds.arc().start_angle > START_ANGLE);

        // 30 s in: normal arc.
        let p = percentages(9, 30, 30, 0);
        let rings = RingSpec::frame_rings(&p, &mid_year_date());
        let seconds = rings.last().unwrap();
        assert!(!seconds.in_finish_window());
        assert!((seconds.arc().start_angle - START_ANGLE).abs() < 1e-12);
    }

    #[test]
    fn finisher_opens_as_nearly_the_full_circle() {
        let arc = finisher_arc(125.0, 0.01, "#dbfe87", SECOND_WINDOW);
        assert!(arc.sweep() > TAU * 0.99);
    }

    #[test]
    fn finisher_converges_onto_the_normal_arc() {
        // Approaching the window edge, the finisher sweep closes in on the
        // normal sweep at the hand-off point: no jump when it switches.
        let handoff = progress_arc(125.0, SECOND_WINDOW, "#dbfe87").sweep();
        let near = finisher_arc(125.0, SECOND_WINDOW - 1e-6, "#dbfe87", SECOND_WINDOW).sweep();
        assert!((near - handoff).abs() < 1e-4);

        // And its excess over the normal arc at the same percentage -> 0.
        let p = SECOND_WINDOW - 1e-6;
        let normal_now = progress_arc(125.0, p, "#dbfe87").sweep();
        assert!(finisher_arc(125.0, p, "#dbfe87", SECOND_WINDOW).sweep() - normal_now < 1e-4);
    }

    #[test]
    fn render_frame_clears_then_strokes() {
        let mut surface = RecordingSurface::new();
        render_frame(&mut surface, &percentages(9, 30, 15, 0), &mid_year_date());
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.arcs.len(), 5);
        assert_eq!(surface.arcs[0].color, "#826c7f");
        assert_eq!(surface.arcs[4].color, "#dbfe87");
        for arc in &surface.arcs {
            assert_eq!(arc.center, ORIGIN);
        }
    }
}
