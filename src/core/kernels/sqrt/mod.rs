pub mod input_pattern;
pub mod serial;
pub mod tasks;
pub mod vectorized;
pub mod verify;
