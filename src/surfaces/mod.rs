pub mod line_chart;
pub mod mesh;
pub mod ports;
