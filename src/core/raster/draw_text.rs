use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use rusttype::{Font, Scale, point};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextError {
    FontUnavailable,
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FontUnavailable => write!(f, "bundled font could not be parsed"),
        }
    }
}

impl Error for TextError {}

/// Where `origin` sits relative to the drawn text, horizontally.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Align {
    Left,
    Centre,
    Right,
}

/// Anti-aliased text rasterizer over the bundled DejaVu Sans Mono face.
#[derive(Clone)]
pub struct Typeface {
    font: Font<'static>,
}

impl fmt::Debug for Typeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typeface").finish_non_exhaustive()
    }
}

impl Typeface {
    pub fn dejavu_sans_mono() -> Result<Self, TextError> {
        let data: &'static [u8] = dejavu::sans_mono::regular();
        let font = Font::try_from_bytes(data).ok_or(TextError::FontUnavailable)?;

        Ok(Self { font })
    }

    /// Advance width and line height in pixels.
    #[must_use]
    pub fn measure(&self, text: &str, size_px: f32) -> (u32, u32) {
        let scale = Scale::uniform(size_px);
        let v_metrics = self.font.v_metrics(scale);
        let width: f32 = self
            .font
            .layout(text, scale, point(0.0, 0.0))
            .map(|glyph| glyph.unpositioned().h_metrics().advance_width)
            .sum();

        (
            width.ceil() as u32,
            (v_metrics.ascent - v_metrics.descent).ceil() as u32,
        )
    }

    /// Draws one line of text whose top edge is at `origin.y`, blending glyph
    /// coverage over what is already in the buffer. Pixels outside the
    /// buffer are clipped.
    pub fn draw_text(
        &self,
        buffer: &mut PixelBuffer,
        origin: Point,
        align: Align,
        text: &str,
        size_px: f32,
        colour: Colour,
    ) {
        let scale = Scale::uniform(size_px);
        let (width, _) = self.measure(text, size_px);
        let left = match align {
            Align::Left => origin.x,
            Align::Centre => origin.x - width as i32 / 2,
            Align::Right => origin.x - width as i32,
        };
        let ascent = self.font.v_metrics(scale).ascent;
        let offset = point(left as f32, origin.y as f32 + ascent);

        for glyph in self.font.layout(text, scale, offset) {
            let Some(bounds) = glyph.pixel_bounding_box() else {
                continue;
            };

            glyph.draw(|x, y, coverage| {
                let pixel = Point {
                    x: bounds.min.x + x as i32,
                    y: bounds.min.y + y as i32,
                };

                if let Some(under) = buffer.pixel(pixel) {
                    buffer.put_pixel(pixel, blend(under, colour, coverage));
                }
            });
        }
    }
}

fn blend(under: Colour, over: Colour, coverage: f32) -> Colour {
    let alpha = f64::from(coverage.clamp(0.0, 1.0));
    let mix = |a: u8, b: u8| (f64::from(a) * (1.0 - alpha) + f64::from(b) * alpha).round() as u8;

    Colour {
        r: mix(under.r, over.r),
        g: mix(under.g, over.g),
        b: mix(under.b, over.b),
    }
}
