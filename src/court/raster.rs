//! Pixel backend: immediate-mode drawing onto a fixed-size RGBA surface.
//!
//! Consumes the same primitive list as the vector backend, applying a single
//! linear scale factor chosen from the viewport-width breakpoint table, so
//! both backends place identical shot sets at visually equivalent positions.

use super::{court_lines, shot_position, Primitive, ShotDisplay};
use crate::stats::Shot;


/// Dash period in device pixels for dashed arcs, matching the vector
/// backend's 2-unit pattern at typical scales.
const DASH_LEN: f64 = 20.0;

/// Viewport-width breakpoints: surface size (square) and court-unit scale.
pub const BREAKPOINTS: [(u32, u32, f64); 5] = [
    (640, 352, 7.0),
    (768, 608, 12.1),
    (1024, 688, 13.7),
    (1536, 784, 15.5),
    (u32::MAX, 672, 13.35),
];

/// Surface size and scale factor for a viewport width.
pub fn surface_for_viewport(viewport_width: u32) -> (u32, f64) {
    let (_, size, scale) = BREAKPOINTS
        .iter()
        .find(|(max, _, _)| viewport_width < *max)
        .copied()
        .unwrap_or((u32::MAX, 672, 13.35));
    (size, scale)
}

pub const WHITE: [u8; 4] = [255, 255, 255, 255];
pub const BLACK: [u8; 4] = [0, 0, 0, 255];
pub const MADE_GREEN: [u8; 4] = [0, 128, 0, 128];
pub const MISSED_RED: [u8; 4] = [255, 0, 0, 128];

/// An owned RGBA pixel surface.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: [u8; 4]) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Alpha-blend `color` over the existing pixel. Out-of-bounds points are
    /// clipped silently.
    fn blend(&mut self, x: i64, y: i64, color: [u8; 4]) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        let dst = self.pixels[idx];
        let alpha = f64::from(color[3]) / 255.0;
        for c in 0..3 {
            let blended = f64::from(color[c]) * alpha + f64::from(dst[c]) * (1.0 - alpha);
            self.pixels[idx][c] = blended.round() as u8;
        }
        self.pixels[idx][3] = 255;
    }

    /// Stroke a straight segment by sampling at sub-pixel steps.
    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: [u8; 4]) {
        let length = ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt();
        let steps = (length * 2.0).ceil().max(1.0) as u32;
        for i in 0..=steps {
            let t = f64::from(i) / f64::from(steps);
            let x = x1 + (x2 - x1) * t;
            let y = y1 + (y2 - y1) * t;
            self.blend(x.round() as i64, y.round() as i64, color);
        }
    }

    /// Stroke a circular arc from `start_angle` to `end_angle` (increasing),
    /// optionally dashed with a fixed on/off period.
    pub fn stroke_arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        dashed: bool,
        color: [u8; 4],
    ) {
        let span = end_angle - start_angle;
        let steps = (radius * span.abs() * 2.0).ceil().max(8.0) as u32;
        for i in 0..=steps {
            let t = f64::from(i) / f64::from(steps);
            let angle = start_angle + span * t;
            if dashed {
                let arc_len = radius * span.abs() * t;
                if (arc_len / DASH_LEN) as u64 % 2 == 1 {
                    continue;
                }
            }
            let x = cx + radius * angle.cos();
            let y = cy + radius * angle.sin();
            self.blend(x.round() as i64, y.round() as i64, color);
        }
    }

    /// Fill a disc, used for shot markers.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: [u8; 4]) {
        let r = radius.ceil() as i64;
        let (icx, icy) = (cx.round() as i64, cy.round() as i64);
        for dy in -r..=r {
            for dx in -r..=r {
                let dist = ((dx * dx + dy * dy) as f64).sqrt();
                if dist <= radius {
                    self.blend(icx + dx, icy + dy, color);
                }
            }
        }
    }

    /// Binary PPM (P6) encoding of the surface, alpha dropped.
    pub fn to_ppm(&self) -> Vec<u8> {
        let mut out = format!("P6\n{} {}\n255\n", self.width, self.height).into_bytes();
        for px in &self.pixels {
            out.extend_from_slice(&px[..3]);
        }
        out
    }
}

/// Device-pixel position of a court-space point on a surface of the given
/// width: x centered, y offset one pixel from the top edge.
pub fn device_position(x: f64, y: f64, surface_width: u32, scale: f64) -> (f64, f64) {
    (f64::from(surface_width) / 2.0 + x * scale, 1.0 + y * scale)
}

/// Redraw the whole court plus visible shots for a viewport width.
pub fn render(shots: &[Shot], display: &ShotDisplay, viewport_width: u32) -> Canvas {
    let (size, scale) = surface_for_viewport(viewport_width);
    let mut canvas = Canvas::new(size, size, WHITE);

    for primitive in court_lines() {
        match primitive {
            Primitive::Line { x1, y1, x2, y2 } => {
                let (px1, py1) = device_position(x1, y1, size, scale);
                let (px2, py2) = device_position(x2, y2, size, scale);
                canvas.draw_line(px1, py1, px2, py2, BLACK);
            }
            Primitive::Arc {
                cx,
                cy,
                radius,
                start_angle,
                end_angle,
                dashed,
            } => {
                let (pcx, pcy) = device_position(cx, cy, size, scale);
                canvas.stroke_arc(
                    pcx,
                    pcy,
                    radius * scale,
                    start_angle,
                    end_angle,
                    dashed,
                    BLACK,
                );
            }
            Primitive::Circle { cx, cy, radius } => {
                let (pcx, pcy) = device_position(cx, cy, size, scale);
                canvas.stroke_arc(
                    pcx,
                    pcy,
                    radius * scale,
                    0.0,
                    2.0 * std::f64::consts::PI,
                    false,
                    BLACK,
                );
            }
        }
    }

    for shot in shots.iter().filter(|s| display.visible(s)) {
        let (x, y) = shot_position(shot);
        let (px, py) = device_position(x, y, size, scale);
        let color = if shot.shot_made { MADE_GREEN } else { MISSED_RED };
        canvas.fill_circle(px, py, display.radius * scale, color);
    }

    canvas
}
