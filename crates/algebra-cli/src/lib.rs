//! CLI library components for the algebraic structures comparison table.

pub mod logging;
pub mod render;
