//! Block and material types shared by terrain, trees, and clouds.
#![forbid(unsafe_code)]

pub mod color;
pub mod types;

pub use color::{Rgb, approximate_color, approximate_mono};
pub use types::{Block, Material};
