//! Table state and its reducer.

use algebra_catalog::Catalog;
use algebra_model::{Column, SortOrder, SortState, StructureRecord};
use serde::Serialize;
use tracing::trace;

use crate::annotation::AnnotationPanel;
use crate::hover::{HoverKind, HoverState, HoverTarget};
use crate::sort::sort_records;

/// A user interaction with the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A column header was clicked.
    HeaderClicked(Column),
    /// The pointer entered a column header.
    HeaderEntered(Column),
    /// The pointer left the column header.
    HeaderLeft,
    /// The pointer entered the `column` cell of `record`.
    CellEntered {
        column: Column,
        record: StructureRecord,
    },
    /// The pointer left a cell of `column`.
    CellLeft(Column),
}

/// Local state of the comparison view: sort selection plus hover flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableState {
    pub sort: Option<SortState>,
    pub hover: HoverState,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing sort selection, with nothing hovered.
    pub fn with_sort(sort: Option<SortState>) -> Self {
        Self {
            sort,
            hover: HoverState::default(),
        }
    }

    /// Apply one interaction, returning the next state.
    pub fn reduce(&self, action: Action) -> TableState {
        trace!(?action, "reduce");
        match action {
            Action::HeaderClicked(column) => TableState {
                sort: Some(SortState::after_click(self.sort, column)),
                hover: self.hover.clone(),
            },
            Action::HeaderEntered(column) => {
                self.with_hover(self.hover.with(HoverTarget::Column(column)))
            }
            Action::HeaderLeft => self.with_hover(self.hover.without(HoverKind::Column)),
            Action::CellEntered { column, record } => {
                match HoverTarget::for_cell(column, &record) {
                    Some(target) => self.with_hover(self.hover.with(target)),
                    None => self.clone(),
                }
            }
            Action::CellLeft(column) => match HoverKind::for_cell(column) {
                Some(kind) => self.with_hover(self.hover.without(kind)),
                None => self.clone(),
            },
        }
    }

    /// Apply a sequence of interactions in order.
    pub fn reduce_all(&self, actions: impl IntoIterator<Item = Action>) -> TableState {
        actions
            .into_iter()
            .fold(self.clone(), |state, action| state.reduce(action))
    }

    /// Catalog records in display order for the current sort selection.
    pub fn sorted(&self, catalog: &Catalog) -> Vec<StructureRecord> {
        sort_records(catalog.structures(), self.sort)
    }

    /// Annotation panel for the current hover flags.
    pub fn annotations(&self) -> AnnotationPanel {
        AnnotationPanel::resolve(&self.hover)
    }

    /// Direction `column` is sorted in, if it is the sorted column.
    pub fn sort_order(&self, column: Column) -> Option<SortOrder> {
        self.sort
            .filter(|state| state.column == column)
            .map(|state| state.order)
    }

    /// Header text for `column`, with the sort arrow when it is the sorted column.
    pub fn header_text(&self, column: Column) -> String {
        match self.sort_order(column) {
            Some(order) => format!("{} {}", column.header_label(), order.indicator()),
            None => column.header_label().to_string(),
        }
    }

    fn with_hover(&self, hover: HoverState) -> TableState {
        TableState {
            sort: self.sort,
            hover,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_click_keeps_hover_flags() {
        let state = TableState::new()
            .reduce(Action::HeaderEntered(Column::Finite))
            .reduce(Action::HeaderClicked(Column::Finite));
        assert_eq!(state.hover.column, Some(Column::Finite));
        assert_eq!(state.sort, Some(SortState::ascending(Column::Finite)));
    }

    #[test]
    fn header_text_marks_sorted_column() {
        let state = TableState::with_sort(Some(SortState {
            column: Column::ZeroDiv,
            order: SortOrder::Descending,
        }));
        assert_eq!(state.header_text(Column::ZeroDiv), "ZeroDiv ▼");
        assert_eq!(state.header_text(Column::Name), "Name");
        assert_eq!(state.sort_order(Column::ZeroDiv), Some(SortOrder::Descending));
        assert_eq!(state.sort_order(Column::Name), None);
    }

    #[test]
    fn leaving_an_unannotated_cell_changes_nothing() {
        let catalog = Catalog::builtin();
        let state = TableState::new().reduce(Action::CellEntered {
            column: Column::Name,
            record: catalog.structures()[0].clone(),
        });
        assert_eq!(state.reduce(Action::CellLeft(Column::Finite)), state);
    }

    #[test]
    fn reduce_does_not_mutate_the_previous_state() {
        let before = TableState::new();
        let after = before.reduce(Action::HeaderClicked(Column::Name));
        assert_eq!(before.sort, None);
        assert!(after.sort.is_some());
    }
}
