//! Settings window UI implementation.

use crate::settings::Settings;
use crate::theme::spacing;
use algebra_model::{Column, SortOrder, SortState};
use egui::RichText;
use std::path::PathBuf;

/// Result of showing the settings window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsResult {
    /// Keep the window open.
    Open,
    /// Apply changes and close.
    Apply,
    /// Cancel changes and close.
    Cancel,
}

/// Settings window state.
#[derive(Default)]
pub struct SettingsWindow {
    /// Text buffer for the catalog path field
    catalog_path: Option<String>,
}

impl SettingsWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the settings window, editing `settings` in place.
    pub fn show(&mut self, ctx: &egui::Context, settings: &mut Settings) -> SettingsResult {
        let mut result = SettingsResult::Open;
        let mut open = true;

        egui::Window::new(format!("{} Settings", egui_phosphor::regular::GEAR))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(RichText::new("Display").strong());
                ui.checkbox(&mut settings.display.dark_mode, "Dark mode");
                ui.checkbox(&mut settings.display.striped_rows, "Striped rows");

                ui.add_space(spacing::MD);
                ui.label(RichText::new("Table").strong());
                show_initial_sort(ui, &mut settings.table.initial_sort);

                ui.add_space(spacing::SM);
                let path_text = self.catalog_path.get_or_insert_with(|| {
                    settings
                        .table
                        .catalog_path
                        .as_ref()
                        .map(|path| path.display().to_string())
                        .unwrap_or_default()
                });
                ui.horizontal(|ui| {
                    ui.label("Catalog file");
                    ui.text_edit_singleline(path_text)
                        .on_hover_text("TOML catalog; leave empty for the built-in structures");
                });
                let trimmed = path_text.trim();
                settings.table.catalog_path =
                    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed));

                ui.add_space(spacing::MD);
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Apply").clicked() {
                        result = SettingsResult::Apply;
                    }
                    if ui.button("Cancel").clicked() {
                        result = SettingsResult::Cancel;
                    }
                });
            });

        if !open {
            result = SettingsResult::Cancel;
        }
        if result != SettingsResult::Open {
            self.catalog_path = None;
        }
        result
    }
}

fn show_initial_sort(ui: &mut egui::Ui, initial_sort: &mut Option<SortState>) {
    let mut column = initial_sort.map(|sort| sort.column);
    let mut order = initial_sort.map(|sort| sort.order).unwrap_or_default();

    egui::ComboBox::from_label("Initial sort")
        .selected_text(column.map_or("Source order", |column| column.header_label()))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut column, None, "Source order");
            for candidate in Column::ALL {
                ui.selectable_value(&mut column, Some(candidate), candidate.header_label());
            }
        });

    ui.add_enabled_ui(column.is_some(), |ui| {
        ui.horizontal(|ui| {
            ui.radio_value(&mut order, SortOrder::Ascending, "Ascending");
            ui.radio_value(&mut order, SortOrder::Descending, "Descending");
        });
    });

    *initial_sort = column.map(|column| SortState { column, order });
}
