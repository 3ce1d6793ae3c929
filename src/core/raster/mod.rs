pub mod draw_line;
pub mod draw_text;
pub mod fill_rect;
pub mod fill_triangle;
