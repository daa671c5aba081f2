//! Application state and per-frame hover tracking.
//!
//! egui reports what the pointer is over on every frame rather than emitting
//! enter/leave events, so [`hover_actions`] diffs the frame's hover against
//! the stored flags and produces the equivalent reducer actions.

use algebra_catalog::Catalog;
use algebra_core::{Action, HoverKind, HoverState, HoverTarget, TableState};
use algebra_model::{Column, StructureRecord};

use crate::settings::Settings;

/// Top-level application state
pub struct AppState {
    pub catalog: Catalog,
    pub table: TableState,
    pub settings: Settings,
    /// Whether the settings window is open
    pub settings_open: bool,
    /// Settings being edited (applied on Apply)
    pub settings_pending: Option<Settings>,
}

impl AppState {
    pub fn new(catalog: Catalog, settings: Settings) -> Self {
        Self {
            catalog,
            table: TableState::with_sort(settings.table.initial_sort),
            settings,
            settings_open: false,
            settings_pending: None,
        }
    }

    /// Apply actions to the table state in order.
    pub fn dispatch(&mut self, actions: impl IntoIterator<Item = Action>) {
        self.table = self.table.reduce_all(actions);
    }

    /// Open the settings window
    pub fn open_settings(&mut self) {
        self.settings_pending = Some(self.settings.clone());
        self.settings_open = true;
    }

    /// Close the settings window, applying pending changes when `apply` is set
    pub fn close_settings(&mut self, apply: bool) {
        if apply && let Some(pending) = self.settings_pending.take() {
            self.settings = pending;
        }
        self.settings_pending = None;
        self.settings_open = false;
    }
}

/// What the pointer was over during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameHover {
    pub header: Option<Column>,
    pub cell: Option<(Column, StructureRecord)>,
}

/// Actions turning `previous` hover flags into the ones implied by `frame`.
///
/// Each flag changes independently: a leave for the old value, then an enter
/// for the new one. Unchanged flags produce nothing.
pub fn hover_actions(previous: &HoverState, frame: &FrameHover) -> Vec<Action> {
    let mut actions = Vec::new();

    if previous.column != frame.header {
        if previous.column.is_some() {
            actions.push(Action::HeaderLeft);
        }
        if let Some(column) = frame.header {
            actions.push(Action::HeaderEntered(column));
        }
    }

    for (kind, column) in [
        (HoverKind::Structure, Column::Name),
        (HoverKind::Type, Column::Type),
        (HoverKind::Relation, Column::Relations),
    ] {
        let wanted = frame
            .cell
            .as_ref()
            .filter(|(hovered, _)| *hovered == column)
            .and_then(|(hovered, record)| HoverTarget::for_cell(*hovered, record));
        if previous.target(kind) == wanted {
            continue;
        }
        if previous.is_set(kind) {
            actions.push(Action::CellLeft(column));
        }
        if wanted.is_some()
            && let Some((_, record)) = &frame.cell
        {
            actions.push(Action::CellEntered {
                column,
                record: record.clone(),
            });
        }
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn integers() -> StructureRecord {
        Catalog::builtin()
            .find("Integers (Z, +)")
            .cloned()
            .unwrap()
    }

    #[test]
    fn idle_frame_produces_nothing() {
        assert!(hover_actions(&HoverState::default(), &FrameHover::default()).is_empty());
    }

    #[test]
    fn entering_a_header() {
        let actions = hover_actions(
            &HoverState::default(),
            &FrameHover {
                header: Some(Column::Finite),
                cell: None,
            },
        );
        assert_eq!(actions, vec![Action::HeaderEntered(Column::Finite)]);
    }

    #[test]
    fn moving_between_headers_leaves_then_enters() {
        let previous = HoverState {
            column: Some(Column::Finite),
            ..HoverState::default()
        };
        let actions = hover_actions(
            &previous,
            &FrameHover {
                header: Some(Column::Unique),
                cell: None,
            },
        );
        assert_eq!(
            actions,
            vec![Action::HeaderLeft, Action::HeaderEntered(Column::Unique)]
        );
    }

    #[test]
    fn steady_hover_produces_nothing() {
        let frame = FrameHover {
            header: None,
            cell: Some((Column::Name, integers())),
        };
        let state = TableState::new().reduce_all(hover_actions(&HoverState::default(), &frame));
        assert!(hover_actions(&state.hover, &frame).is_empty());
    }

    #[test]
    fn moving_from_name_to_type_cell() {
        let record = integers();
        let previous = TableState::new()
            .reduce_all(hover_actions(
                &HoverState::default(),
                &FrameHover {
                    header: None,
                    cell: Some((Column::Name, record.clone())),
                },
            ))
            .hover;
        let actions = hover_actions(
            &previous,
            &FrameHover {
                header: None,
                cell: Some((Column::Type, record.clone())),
            },
        );
        assert_eq!(
            actions,
            vec![
                Action::CellLeft(Column::Name),
                Action::CellEntered {
                    column: Column::Type,
                    record,
                },
            ]
        );
    }

    #[test]
    fn plain_cells_clear_annotated_flags() {
        let record = integers();
        let previous = HoverState {
            relation: Some(record.relations.clone()),
            ..HoverState::default()
        };
        let actions = hover_actions(
            &previous,
            &FrameHover {
                header: None,
                cell: Some((Column::Generators, record)),
            },
        );
        assert_eq!(actions, vec![Action::CellLeft(Column::Relations)]);
    }

    #[test]
    fn close_settings_applies_only_when_requested() {
        let mut state = AppState::new(Catalog::builtin(), Settings::default());
        state.open_settings();
        if let Some(pending) = state.settings_pending.as_mut() {
            pending.display.dark_mode = true;
        }
        state.close_settings(false);
        assert!(!state.settings.display.dark_mode);

        state.open_settings();
        if let Some(pending) = state.settings_pending.as_mut() {
            pending.display.dark_mode = true;
        }
        state.close_settings(true);
        assert!(state.settings.display.dark_mode);
        assert!(!state.settings_open);
    }
}
