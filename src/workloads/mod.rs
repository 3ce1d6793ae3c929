//! Adapters that drive each render back-end through the benchmark loop.

pub mod line_chart;
pub mod mesh_deformation;
