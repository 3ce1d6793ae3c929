pub mod actions;
pub mod data;
pub mod pacing;
pub mod raster;
pub mod signals;
pub mod util;
