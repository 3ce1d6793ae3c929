pub mod ripple;
pub mod sensor_signals;
