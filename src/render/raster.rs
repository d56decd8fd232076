//! Line and polygon rasterization into a [`FrameBuffer`].
//!
//! Inputs are screen-centred, y-up points and may lie far off screen (clip
//! points close to the focal plane project to huge coordinates). Lines are
//! trimmed to the viewport before stepping and polygon spans are clamped per
//! row, so the cost stays proportional to the viewport size.

use super::framebuffer::{FrameBuffer, ViewRect};
use crate::math::Vec2;

/// Trims the pixel-space segment `(x0, y0) -> (x1, y1)` to `rect` using
/// Liang-Barsky. Returns `None` when nothing of it is inside.
pub fn clip_line_to_rect(
    rect: &ViewRect,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
) -> Option<(f32, f32, f32, f32)> {
    let (min_x, min_y, max_x, max_y) = rect.bounds();
    let (min_x, min_y, max_x, max_y) = (min_x as f64, min_y as f64, max_x as f64, max_y as f64);
    // f64 keeps far-away endpoints from smearing the clipped ends.
    let (x0, y0, x1, y1) = (x0 as f64, y0 as f64, x1 as f64, y1 as f64);
    let dx = x1 - x0;
    let dy = y1 - y0;

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    // Each edge as (p, q): inside when p * t <= q.
    for (p, q) in [
        (-dx, x0 - min_x),
        (dx, max_x - x0),
        (-dy, y0 - min_y),
        (dy, max_y - y0),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > t1 {
                return None;
            }
            t0 = t0.max(t);
        } else {
            if t < t0 {
                return None;
            }
            t1 = t1.min(t);
        }
    }

    Some((
        (x0 + t0 * dx) as f32,
        (y0 + t0 * dy) as f32,
        (x0 + t1 * dx) as f32,
        (y0 + t1 * dy) as f32,
    ))
}

/// Draws a line between two screen points using Bresenham's algorithm.
pub fn draw_line(fb: &mut FrameBuffer, start: Vec2, end: Vec2, color: u32) {
    if !start.is_finite() || !end.is_finite() {
        return;
    }
    let rect = fb.viewport();
    let (sx, sy) = rect.to_pixel(start);
    let (ex, ey) = rect.to_pixel(end);
    let Some((x0, y0, x1, y1)) = clip_line_to_rect(&rect, sx, sy, ex, ey) else {
        return;
    };
    draw_line_bresenham(
        fb,
        x0.round() as i32,
        y0.round() as i32,
        x1.round() as i32,
        y1.round() as i32,
        color,
    );
}

/// Bresenham stepping between two pixel positions.
///
/// For each step along the major axis an error term decides whether to also
/// step along the minor axis.
fn draw_line_bresenham(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let x_incr_direction = if x0 < x1 { 1 } else { -1 };
    let y_incr_direction = if y0 < y1 { 1 } else { -1 };

    let mut err = dx - dy;
    let mut x = x0;
    let mut y = y0;

    loop {
        fb.set_pixel(x, y, color);
        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += x_incr_direction;
        }
        if e2 < dx {
            err += dx;
            y += y_incr_direction;
        }
    }
}

/// Fills a polygon with the even-odd rule. The outline is closed implicitly.
///
/// Fewer than three points, or any non-finite point, fills nothing.
pub fn fill_polygon(fb: &mut FrameBuffer, points: &[Vec2], color: u32) {
    if points.len() < 3 || points.iter().any(|p| !p.is_finite()) {
        return;
    }
    let rect = fb.viewport();
    let pixels: Vec<(f64, f64)> = points
        .iter()
        .map(|&p| {
            let (x, y) = rect.to_pixel(p);
            (x as f64, y as f64)
        })
        .collect();

    let (_, min_row, _, max_row) = rect.bounds();
    let top = pixels.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let bottom = pixels.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    let first_row = (top.floor() as i32).max(min_row);
    let last_row = (bottom.ceil() as i32).min(max_row);

    let mut crossings: Vec<f64> = Vec::with_capacity(pixels.len());
    for row in first_row..=last_row {
        // Sample at the pixel centre.
        let sample_y = row as f64 + 0.5;
        crossings.clear();
        for (i, &(x0, y0)) in pixels.iter().enumerate() {
            let (x1, y1) = pixels[(i + 1) % pixels.len()];
            if (y0 <= sample_y && sample_y < y1) || (y1 <= sample_y && sample_y < y0) {
                crossings.push(x0 + (sample_y - y0) * (x1 - x0) / (y1 - y0));
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));

        for pair in crossings.chunks_exact(2) {
            // Pixels whose centres lie between the two crossings.
            let start = (pair[0] - 0.5).ceil().clamp(i32::MIN as f64, i32::MAX as f64) as i32;
            let end = (pair[1] - 0.5).ceil().clamp(i32::MIN as f64, i32::MAX as f64) as i32;
            fb.fill_span(row, start, end, color);
        }
    }
}
