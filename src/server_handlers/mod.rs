pub mod courses;

pub use courses::*;
