//! Algebraic Structures Comparison - GUI Library
//!
//! The binary only wires logging and the native window; everything else lives
//! here so the state and settings logic can be tested without a display.

pub mod app;
pub mod settings;
pub mod state;
pub mod theme;
pub mod views;
