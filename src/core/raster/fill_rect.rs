use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Fills the part of `rect` that lies inside the buffer.
pub fn fill_rect(buffer: &mut PixelBuffer, rect: PixelRect, colour: Colour) {
    for y in rect.top_left().y..=rect.bottom_right().y {
        for x in rect.top_left().x..=rect.bottom_right().x {
            buffer.put_pixel(Point { x, y }, colour);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_is_clipped_to_buffer() {
        let mut buffer = PixelBuffer::new(PixelRect::from_size(4, 4).unwrap());
        let rect = PixelRect::new(Point { x: 2, y: 2 }, Point { x: 6, y: 6 }).unwrap();

        fill_rect(&mut buffer, rect, Colour::WHITE);

        let white = buffer
            .buffer()
            .chunks_exact(3)
            .filter(|p| *p == [255, 255, 255])
            .count();
        assert_eq!(white, 4);
    }
}
