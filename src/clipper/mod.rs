// Clipper module - integer polygon clipping
// Contains the scanline engine, ring reconstruction and the public operations

pub mod clipper;
pub mod constants;
pub mod enums;
pub mod intersect_node;
pub mod local_minima;
pub mod operations;
pub mod out_rec;
pub mod scanbeam;
pub mod t_edge;
pub mod utils;

#[cfg(test)]
pub mod tests;

// Re-export commonly used items for convenience
pub use constants::*;
pub use enums::*;
pub use operations::{clean, combine, simplify, simplify_default, union, union_with, OutputResult};
