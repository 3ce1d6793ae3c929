//! Immediate-mode 2D line chart back-end.

pub mod axes;
pub mod chart;
pub mod errors;
pub mod series;
