// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Host drawing-surface capability.
//!
//! Rendering writes through [`DrawingSurface`] instead of a shared canvas
//! captured from enclosing scope, so the draw pass can be pointed at any
//! host back end and exercised in isolation.  The crate itself never
//! rasterises: it emits [`ArcCommand`]s and leaves pixels to the host.

use std::f64::consts::TAU;

/// A stroked circular arc in absolute surface coordinates and radians.
///
/// The sweep runs clockwise from `start_angle` to `end_angle`; when the end
/// angle lies behind the start, the sweep wraps past the full turn
/// (canvas-style arc semantics).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArcCommand {
    /// Arc centre.
    pub center: (f64, f64),
    /// Arc radius.
    pub radius: f64,
    /// Sweep start, radians.
    pub start_angle: f64,
    /// Sweep end, radians.
    pub end_angle: f64,
    /// Stroke color, CSS hex notation.
    pub color: &'static str,
}

impl ArcCommand {
    /// Angular span of the sweep in radians, wrap-around included.
    ///
    /// A span of `TAU` is a full circle; spans are clamped there, matching
    /// how a canvas arc saturates once the end angle laps the start.
    pub fn sweep(&self) -> f64 {
        let diff = self.end_angle - self.start_angle;
        if diff >= TAU {
            TAU
        } else if diff >= 0.0 {
            diff
        } else {
            diff + TAU
        }
    }
}

/// Minimal contract a 2D host surface must provide.
pub trait DrawingSurface {
    /// Erase the full drawing region.
    fn clear(&mut self);

    /// Set the stroke width used by subsequent arcs.
    fn set_line_width(&mut self, width: f64);

    /// Stroke one arc.
    fn stroke_arc(&mut self, arc: ArcCommand);
}

/// Surface that records the command stream instead of rasterising it.
///
/// Serves hosts that consume draw commands rather than expose a canvas,
/// and doubles as the test back end for the renderer.  `clear` discards
/// the arcs recorded so far, mirroring a repaint.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    /// Number of clears issued.
    pub clears: u32,
    /// Last stroke width set, if any.
    pub line_width: Option<f64>,
    /// Arcs stroked since the last clear.
    pub arcs: Vec<ArcCommand>,
}

impl RecordingSurface {
    /// Empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawingSurface for RecordingSurface {
    fn clear(&mut self) {
        self.clears += 1;
        self.arcs.clear();
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = Some(width);
    }

    fn stroke_arc(&mut self, arc: ArcCommand) {
        self.arcs.push(arc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc(start_angle: f64, end_angle: f64) -> ArcCommand {
        ArcCommand {
            center: (0.0, 0.0),
            radius: 1.0,
            start_angle,
            end_angle,
            color: "#000000",
        }
    }

    #[test]
    fn forward_sweep_is_the_angle_difference() {
        assert!((arc(0.0, TAU / 4.0).sweep() - TAU / 4.0).abs() < 1e-12);
        assert!(arc(1.0, 1.0).sweep().abs() < 1e-12);
    }

    #[test]
    fn backward_sweep_wraps_past_the_full_turn() {
        let wrapped = arc(TAU * 0.9, TAU * 0.1);
        assert!((wrapped.sweep() - TAU * 0.2).abs() < 1e-12);
    }

    #[test]
    fn full_turn_saturates() {
        assert!((arc(0.0, TAU).sweep() - TAU).abs() < 1e-12);
        assert!((arc(0.0, TAU + 1.0).sweep() - TAU).abs() < 1e-12);
    }

    #[test]
    fn recording_surface_tracks_commands() {
        let mut surface = RecordingSurface::new();
        surface.set_line_width(23.0);
        surface.stroke_arc(arc(0.0, 1.0));
        surface.clear();
        surface.stroke_arc(arc(0.0, 2.0));

        assert_eq!(surface.clears, 1);
        assert_eq!(surface.line_width, Some(23.0));
        assert_eq!(surface.arcs.len(), 1);
        assert!((surface.arcs[0].end_angle - 2.0).abs() < 1e-12);
    }
}
