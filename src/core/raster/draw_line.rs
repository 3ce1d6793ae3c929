use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Draws a line segment with a square pen `thickness` pixels wide. Nothing
/// is written outside `clip`; the segment is clipped before stepping so
/// far off-screen endpoints cost nothing.
pub fn draw_line(
    buffer: &mut PixelBuffer,
    clip: PixelRect,
    from: Point,
    to: Point,
    colour: Colour,
    thickness: u32,
) {
    let pen = thickness.max(1) as i32;
    let Some((from, to)) = clip_line(from, to, grow_rect(clip, pen)) else {
        return;
    };

    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let step_x = if from.x < to.x { 1 } else { -1 };
    let step_y = if from.y < to.y { 1 } else { -1 };
    let mut error = dx + dy;
    let mut current = from;

    loop {
        stamp(buffer, clip, current, colour, pen);

        if current == to {
            break;
        }

        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            current.x += step_x;
        }
        if doubled <= dx {
            error += dx;
            current.y += step_y;
        }
    }
}

/// Connects consecutive points with line segments.
pub fn draw_polyline(
    buffer: &mut PixelBuffer,
    clip: PixelRect,
    points: &[Point],
    colour: Colour,
    thickness: u32,
) {
    for segment in points.windows(2) {
        draw_line(buffer, clip, segment[0], segment[1], colour, thickness);
    }
}

/// Outline of `rect`, drawn inside it.
pub fn draw_rect_outline(buffer: &mut PixelBuffer, rect: PixelRect, colour: Colour, thickness: u32) {
    let top_left = rect.top_left();
    let bottom_right = rect.bottom_right();
    let top_right = Point { x: bottom_right.x, y: top_left.y };
    let bottom_left = Point { x: top_left.x, y: bottom_right.y };

    draw_polyline(
        buffer,
        rect,
        &[top_left, top_right, bottom_right, bottom_left, top_left],
        colour,
        thickness,
    );
}

fn stamp(buffer: &mut PixelBuffer, clip: PixelRect, centre: Point, colour: Colour, pen: i32) {
    let offset = (pen - 1) / 2;

    for dy in 0..pen {
        for dx in 0..pen {
            let pixel = Point {
                x: centre.x - offset + dx,
                y: centre.y - offset + dy,
            };

            if clip.contains_point(pixel) {
                buffer.put_pixel(pixel, colour);
            }
        }
    }
}

fn grow_rect(rect: PixelRect, margin: i32) -> (f64, f64, f64, f64) {
    (
        f64::from(rect.top_left().x - margin),
        f64::from(rect.top_left().y - margin),
        f64::from(rect.bottom_right().x + margin),
        f64::from(rect.bottom_right().y + margin),
    )
}

/// Liang-Barsky clip against `(left, top, right, bottom)`.
fn clip_line(from: Point, to: Point, bounds: (f64, f64, f64, f64)) -> Option<(Point, Point)> {
    let (left, top, right, bottom) = bounds;
    let (x0, y0) = (f64::from(from.x), f64::from(from.y));
    let dx = f64::from(to.x) - x0;
    let dy = f64::from(to.y) - y0;

    let mut t_enter: f64 = 0.0;
    let mut t_exit: f64 = 1.0;

    for (p, q) in [
        (-dx, x0 - left),
        (dx, right - x0),
        (-dy, y0 - top),
        (dy, bottom - y0),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let t = q / p;
        if p < 0.0 {
            t_enter = t_enter.max(t);
        } else {
            t_exit = t_exit.min(t);
        }

        if t_enter > t_exit {
            return None;
        }
    }

    let at = |t: f64| Point {
        x: (x0 + t * dx).round() as i32,
        y: (y0 + t * dy).round() as i32,
    };

    Some((at(t_enter), at(t_exit)))
}
