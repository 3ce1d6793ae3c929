//! Retained-mode 3D mesh back-end.

pub mod camera;
pub mod ellipsoid;
pub mod errors;
pub mod mesh;
pub mod plotter;
