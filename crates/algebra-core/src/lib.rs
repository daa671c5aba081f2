//! Interaction logic for the algebraic structures comparison table.
//!
//! Everything here is a pure function over in-memory data. Front ends feed
//! user events into [`TableState::reduce`] as [`Action`]s and render the
//! result of [`TableState::sorted`] and [`AnnotationPanel::resolve`].

pub mod annotation;
pub mod hover;
pub mod sort;
pub mod state;

pub use annotation::{AnnotationPanel, AnnotationSection, SectionKind};
pub use hover::{HoverKind, HoverState, HoverTarget};
pub use sort::sort_records;
pub use state::{Action, TableState};
