pub mod common;
pub mod distance;
