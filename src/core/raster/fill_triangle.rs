use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use rayon::prelude::*;

/// Per-pixel nearest depth, cleared to infinity before each render pass.
#[derive(Debug, Clone)]
pub struct DepthBuffer {
    width: usize,
    height: usize,
    depths: Vec<f64>,
}

impl DepthBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = (width as usize, height as usize);

        Self {
            width,
            height,
            depths: vec![f64::INFINITY; width * height],
        }
    }

    pub fn clear(&mut self) {
        self.depths.par_iter_mut().for_each(|depth| *depth = f64::INFINITY);
    }

    /// Records `depth` at `(x, y)` if it is nearer than what is stored.
    pub fn test_and_set(&mut self, x: usize, y: usize, depth: f64) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }

        let slot = &mut self.depths[y * self.width + x];
        if depth < *slot {
            *slot = depth;
            return true;
        }

        false
    }
}

/// A projected vertex: screen position, view depth and light intensity.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShadedVertex {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
    pub intensity: f64,
}

/// Fills a triangle with depth testing, interpolating intensity across it
/// (Gouraud). Either winding is accepted. Pixels are sampled at their centres.
pub fn fill_triangle(
    buffer: &mut PixelBuffer,
    depth_buffer: &mut DepthBuffer,
    vertices: [ShadedVertex; 3],
    colour: Colour,
) {
    let [a, b, c] = vertices;
    let area = edge(a, b, c.x, c.y);
    if area == 0.0 || !area.is_finite() {
        return;
    }

    let rect = buffer.pixel_rect();
    let min_x = a.x.min(b.x).min(c.x).floor().max(f64::from(rect.top_left().x)) as i32;
    let max_x = a.x.max(b.x).max(c.x).ceil().min(f64::from(rect.bottom_right().x)) as i32;
    let min_y = a.y.min(b.y).min(c.y).floor().max(f64::from(rect.top_left().y)) as i32;
    let max_y = a.y.max(b.y).max(c.y).ceil().min(f64::from(rect.bottom_right().y)) as i32;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let (px, py) = (f64::from(x) + 0.5, f64::from(y) + 0.5);
            let w0 = edge(b, c, px, py) / area;
            let w1 = edge(c, a, px, py) / area;
            let w2 = edge(a, b, px, py) / area;

            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }

            let depth = w0 * a.depth + w1 * b.depth + w2 * c.depth;
            let relative_x = (x - rect.top_left().x) as usize;
            let relative_y = (y - rect.top_left().y) as usize;
            if !depth_buffer.test_and_set(relative_x, relative_y, depth) {
                continue;
            }

            let intensity = w0 * a.intensity + w1 * b.intensity + w2 * c.intensity;
            buffer.put_pixel(Point { x, y }, colour.shade(intensity));
        }
    }
}

fn edge(from: ShadedVertex, to: ShadedVertex, x: f64, y: f64) -> f64 {
    (to.x - from.x) * (y - from.y) - (to.y - from.y) * (x - from.x)
}
