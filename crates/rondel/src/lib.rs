pub mod geometry;
mod macros;
pub mod slider;
pub mod svg;
