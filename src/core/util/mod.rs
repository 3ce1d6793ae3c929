pub mod data_to_pixel_coords;
pub mod round_metric;
