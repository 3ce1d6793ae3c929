//! Port definitions for the render surfaces.
//!
//! Surfaces draw into a [`PixelBuffer`](crate::core::data::pixel_buffer::PixelBuffer);
//! these traits decide where finished frames and snapshots go.

pub mod file_presenter;
pub mod frame_presenter;
