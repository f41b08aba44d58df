//! Half-court geometry shared by both rendering backends.
//!
//! All coordinates are court-space units matching real-world feet: x centered
//! on the lane (sidelines at ±25), y increasing downward from the half-court
//! line (y = 0) to the baseline (y = 50). Shot data measures `loc_y` as
//! distance from the baseline, so plotting flips it to `COURT_HEIGHT - loc_y`.
//!
//! [`court_lines`] produces an abstract primitive list; `svg` scales it into
//! path descriptors and `raster` paints it onto a fixed-size pixel surface.
//! Keeping the math in one place is what keeps the two backends visually
//! consistent.

pub mod raster;
pub mod svg;

use std::f64::consts::PI;

use crate::stats::Shot;


pub const THREE_PT_RADIUS: f64 = 23.75;
/// Half-width at which the 3-point line goes straight to the baseline.
pub const CORNER_X: f64 = 22.0;
/// Length of the straight corner segment up from the baseline.
pub const CORNER_Y: f64 = 14.2;
pub const RIM_DIST: f64 = 5.25;
pub const RIM_RADIUS: f64 = 0.75;
pub const BACKBOARD_DIST: f64 = 4.0;
pub const BACKBOARD_HALF_WIDTH: f64 = 3.0;
pub const LANE_HALF_WIDTH: f64 = 8.0;
pub const FT_LINE_DIST: f64 = 19.0;
pub const FT_CIRCLE_RADIUS: f64 = 6.0;
pub const FT_CIRCLE_DIST: f64 = 19.0;
pub const COURT_WIDTH: f64 = 50.0;
pub const COURT_HEIGHT: f64 = 50.0;
pub const SIDELINE_X: f64 = 25.0;

/// Default shot marker radius in court units.
pub const SHOT_RADIUS: f64 = 0.4;

/// An abstract drawing primitive in court-space units.
///
/// Arcs sweep from `start_angle` to `end_angle` in increasing angle; with y
/// pointing down, negative angles are above the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        dashed: bool,
    },
    /// Stroked full circle (the rim).
    Circle { cx: f64, cy: f64, radius: f64 },
}

/// Angle between the baseline-parallel axis and the point where the 3-point
/// arc meets its straight corner segment.
///
/// `acos(22 / 23.75)` puts the arc endpoints exactly at `x = ±22`, so the
/// arc meets the corner segments tangentially at any scale factor.
pub fn three_point_angle() -> f64 {
    (CORNER_X / THREE_PT_RADIUS).acos()
}

/// The full half-court line work, in drawing order.
pub fn court_lines() -> Vec<Primitive> {
    let rim_y = COURT_HEIGHT - RIM_DIST;
    let ft_y = COURT_HEIGHT - FT_CIRCLE_DIST;
    let theta = three_point_angle();

    vec![
        // Court boundary: baseline, half-court line, sidelines.
        Primitive::Line {
            x1: -SIDELINE_X,
            y1: COURT_HEIGHT,
            x2: SIDELINE_X,
            y2: COURT_HEIGHT,
        },
        Primitive::Line {
            x1: -SIDELINE_X,
            y1: 0.0,
            x2: SIDELINE_X,
            y2: 0.0,
        },
        Primitive::Line {
            x1: -SIDELINE_X,
            y1: 0.0,
            x2: -SIDELINE_X,
            y2: COURT_HEIGHT,
        },
        Primitive::Line {
            x1: SIDELINE_X,
            y1: 0.0,
            x2: SIDELINE_X,
            y2: COURT_HEIGHT,
        },
        // 3-point line: arc centered on the rim plus two straight corners.
        Primitive::Arc {
            cx: 0.0,
            cy: rim_y,
            radius: THREE_PT_RADIUS,
            start_angle: -(PI - theta),
            end_angle: -theta,
            dashed: false,
        },
        Primitive::Line {
            x1: -CORNER_X,
            y1: COURT_HEIGHT,
            x2: -CORNER_X,
            y2: COURT_HEIGHT - CORNER_Y,
        },
        Primitive::Line {
            x1: CORNER_X,
            y1: COURT_HEIGHT,
            x2: CORNER_X,
            y2: COURT_HEIGHT - CORNER_Y,
        },
        // Lane (the key).
        Primitive::Line {
            x1: -LANE_HALF_WIDTH,
            y1: COURT_HEIGHT,
            x2: -LANE_HALF_WIDTH,
            y2: COURT_HEIGHT - FT_LINE_DIST,
        },
        Primitive::Line {
            x1: LANE_HALF_WIDTH,
            y1: COURT_HEIGHT,
            x2: LANE_HALF_WIDTH,
            y2: COURT_HEIGHT - FT_LINE_DIST,
        },
        Primitive::Line {
            x1: -LANE_HALF_WIDTH,
            y1: COURT_HEIGHT - FT_LINE_DIST,
            x2: LANE_HALF_WIDTH,
            y2: COURT_HEIGHT - FT_LINE_DIST,
        },
        // Backboard and rim.
        Primitive::Line {
            x1: -BACKBOARD_HALF_WIDTH,
            y1: COURT_HEIGHT - BACKBOARD_DIST,
            x2: BACKBOARD_HALF_WIDTH,
            y2: COURT_HEIGHT - BACKBOARD_DIST,
        },
        Primitive::Circle {
            cx: 0.0,
            cy: rim_y,
            radius: RIM_RADIUS,
        },
        // Free-throw circle: solid top half, dashed bottom half where it
        // overlaps the lane.
        Primitive::Arc {
            cx: 0.0,
            cy: ft_y,
            radius: FT_CIRCLE_RADIUS,
            start_angle: PI,
            end_angle: 2.0 * PI,
            dashed: false,
        },
        Primitive::Arc {
            cx: 0.0,
            cy: ft_y,
            radius: FT_CIRCLE_RADIUS,
            start_angle: 0.0,
            end_angle: PI,
            dashed: true,
        },
    ]
}

/// Map a shot's court-space location to drawing-space (y flipped from
/// distance-from-baseline to distance-from-top).
pub fn shot_position(shot: &Shot) -> (f64, f64) {
    (shot.loc_x, COURT_HEIGHT - shot.loc_y)
}

/// Render-time shot filtering: made and missed markers toggle independently.
#[derive(Debug, Clone, Copy)]
pub struct ShotDisplay {
    pub show_made: bool,
    pub show_missed: bool,
    pub radius: f64,
}

impl Default for ShotDisplay {
    fn default() -> Self {
        Self {
            show_made: true,
            show_missed: true,
            radius: SHOT_RADIUS,
        }
    }
}

impl ShotDisplay {
    /// Whether a shot is drawn under the current toggles.
    pub fn visible(&self, shot: &Shot) -> bool {
        if shot.shot_made {
            self.show_made
        } else {
            self.show_missed
        }
    }
}
