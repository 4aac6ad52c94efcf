pub mod item;
pub mod misc;
