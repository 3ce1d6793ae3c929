pub mod clock;
pub mod pacer;
