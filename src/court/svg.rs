//! Vector backend: the court as a resolution-independent SVG document.

use super::{court_lines, shot_position, Primitive, ShotDisplay, COURT_HEIGHT, COURT_WIDTH, SIDELINE_X};
use crate::stats::Shot;

use std::f64::consts::PI;
use std::fmt::Write;


const LINE_COLOR: &str = "black";
const DASH_PATTERN: &str = "2,2";

/// SVG elliptical-arc path descriptor for a circular arc swept from
/// `start_angle` to `end_angle` in increasing angle (sweep flag 1 with y
/// pointing down).
pub fn arc_path(cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) -> String {
    let start = (
        cx + radius * start_angle.cos(),
        cy + radius * start_angle.sin(),
    );
    let end = (cx + radius * end_angle.cos(), cy + radius * end_angle.sin());
    let large_arc = if end_angle - start_angle > PI { 1 } else { 0 };

    format!(
        "M {} {} A {} {} 0 {} 1 {} {}",
        start.0, start.1, radius, radius, large_arc, end.0, end.1
    )
}

/// Render the court and visible shots as a complete SVG document.
///
/// The viewBox spans the half court in court units, so the output scales to
/// any display size without recomputing geometry.
pub fn render(shots: &[Shot], display: &ShotDisplay) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} 0 {} {}">"#,
        -SIDELINE_X, COURT_WIDTH, COURT_HEIGHT
    );

    for primitive in court_lines() {
        match primitive {
            Primitive::Line { x1, y1, x2, y2 } => {
                let _ = writeln!(
                    out,
                    r#"  <line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{LINE_COLOR}" stroke-width="0.1"/>"#
                );
            }
            Primitive::Arc {
                cx,
                cy,
                radius,
                start_angle,
                end_angle,
                dashed,
            } => {
                let d = arc_path(cx, cy, radius, start_angle, end_angle);
                let dash = if dashed {
                    format!(r#" stroke-dasharray="{DASH_PATTERN}""#)
                } else {
                    String::new()
                };
                let _ = writeln!(
                    out,
                    r#"  <path d="{d}" fill="none" stroke="{LINE_COLOR}" stroke-width="0.1"{dash}/>"#
                );
            }
            Primitive::Circle { cx, cy, radius } => {
                let _ = writeln!(
                    out,
                    r#"  <circle cx="{cx}" cy="{cy}" r="{radius}" fill="none" stroke="{LINE_COLOR}" stroke-width="0.1"/>"#
                );
            }
        }
    }

    for shot in shots.iter().filter(|s| display.visible(s)) {
        let (x, y) = shot_position(shot);
        let fill = if shot.shot_made { "green" } else { "red" };
        let _ = writeln!(
            out,
            r#"  <circle cx="{x}" cy="{y}" r="{}" fill="{fill}" opacity="0.5"/>"#,
            display.radius
        );
    }

    out.push_str("</svg>\n");
    out
}
