//! Block heights, and checked height arithmetic.

pub mod height;

pub use height::{Height, HeightDiff};
