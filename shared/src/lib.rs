pub mod constants;
pub mod events;
pub mod round;
pub mod wheel;
