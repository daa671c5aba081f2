//! Comparison table view
//!
//! Renders the sorted structures with clickable headers and reports what the
//! pointer touched this frame. State changes happen in the caller.

use crate::state::FrameHover;
use crate::theme::{colors, row_height};
use algebra_core::TableState;
use algebra_model::{Column, SortOrder, StructureRecord};
use egui::{Color32, RichText, Ui};

/// Interactions observed while drawing one frame of the table.
#[derive(Debug, Default)]
pub struct TableEvents {
    /// Header clicked this frame
    pub clicked: Option<Column>,
    /// Header or cell under the pointer
    pub hover: FrameHover,
}

/// Comparison table view
pub struct ComparisonView;

impl ComparisonView {
    /// Render the table for `records`, already in display order.
    pub fn show(
        ui: &mut Ui,
        table: &TableState,
        records: &[StructureRecord],
        striped: bool,
    ) -> TableEvents {
        let mut events = TableEvents::default();
        let text_height = egui::TextStyle::Body.resolve(ui.style()).size;
        let height = row_height(text_height);

        egui_extras::TableBuilder::new(ui)
            .striped(striped)
            .resizable(true)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(
                egui_extras::Column::auto().at_least(60.0).clip(true),
                Column::ALL.len(),
            )
            .header(height, |mut header| {
                for column in Column::ALL {
                    header.col(|ui| {
                        let rect = ui.max_rect();
                        let cell = ui
                            .interact(rect, ui.id().with(column.key()), egui::Sense::click())
                            .on_hover_cursor(egui::CursorIcon::PointingHand);
                        let hovered = ui.rect_contains_pointer(rect);
                        let fill = if hovered {
                            colors::HEADER_BG_HOVER
                        } else {
                            colors::HEADER_BG
                        };
                        ui.painter().rect_filled(rect, egui::CornerRadius::ZERO, fill);

                        // The label covers most of the cell, so it senses clicks as well
                        let text = RichText::new(header_text(table, column))
                            .strong()
                            .color(Color32::WHITE);
                        let label = ui
                            .add(
                                egui::Label::new(text)
                                    .selectable(false)
                                    .sense(egui::Sense::click()),
                            )
                            .on_hover_cursor(egui::CursorIcon::PointingHand);

                        if hovered {
                            events.hover.header = Some(column);
                        }
                        if cell.clicked() || label.clicked() {
                            events.clicked = Some(column);
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(height, records.len(), |mut row| {
                    let record = &records[row.index()];
                    for (column, value) in record.values() {
                        row.col(|ui| {
                            if ui.rect_contains_pointer(ui.max_rect()) {
                                events.hover.cell = Some((column, record.clone()));
                            }
                            let text = RichText::new(value);
                            ui.label(if column == Column::Name {
                                text.strong()
                            } else {
                                text
                            });
                        });
                    }
                });
            });

        events
    }
}

/// Header label with a phosphor caret on the sorted column.
fn header_text(table: &TableState, column: Column) -> String {
    match table.sort_order(column) {
        Some(order) => {
            let caret = match order {
                SortOrder::Ascending => egui_phosphor::regular::CARET_UP,
                SortOrder::Descending => egui_phosphor::regular::CARET_DOWN,
            };
            format!("{} {}", column.header_label(), caret)
        }
        None => column.header_label().to_string(),
    }
}
