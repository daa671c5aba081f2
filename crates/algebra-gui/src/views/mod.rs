//! View components

mod annotation_panel;
mod comparison;
mod settings_window;

pub use annotation_panel::AnnotationPanelView;
pub use comparison::{ComparisonView, TableEvents};
pub use settings_window::{SettingsResult, SettingsWindow};
