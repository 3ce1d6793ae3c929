pub mod benchmark_result;
pub mod colour;
pub mod data_rect;
pub mod frame_timing;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod vec3;
