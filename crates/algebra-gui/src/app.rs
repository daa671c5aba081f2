//! Main application struct and eframe::App implementation

use crate::settings::{Settings, load_settings, save_settings};
use crate::state::{AppState, hover_actions};
use crate::theme::spacing;
use crate::views::{AnnotationPanelView, ComparisonView, SettingsResult, SettingsWindow};
use algebra_catalog::Catalog;
use algebra_core::Action;
use eframe::egui;
use egui::RichText;

/// Main application struct
pub struct StudioApp {
    state: AppState,
    settings_window: SettingsWindow,
}

impl StudioApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Initialize Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let settings = load_settings();
        tracing::info!("Loaded settings: dark_mode={}", settings.display.dark_mode);
        apply_visuals(&cc.egui_ctx, &settings);

        let catalog = load_catalog(&settings);
        Self {
            state: AppState::new(catalog, settings),
            settings_window: SettingsWindow::new(),
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        self.show_settings(ctx);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let title = format!("{} Algebra Studio", egui_phosphor::regular::TABLE);
                ui.label(RichText::new(title).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(egui_phosphor::regular::GEAR)
                        .on_hover_text("Settings")
                        .clicked()
                        && !self.state.settings_open
                    {
                        self.state.open_settings();
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(spacing::SM);
            ui.heading(RichText::new("Algebraic Structures Comparison").size(28.0));
            ui.add_space(spacing::LG);

            let records = self.state.table.sorted(&self.state.catalog);
            let events = egui::ScrollArea::horizontal()
                .show(ui, |ui| {
                    ComparisonView::show(
                        ui,
                        &self.state.table,
                        &records,
                        self.state.settings.display.striped_rows,
                    )
                })
                .inner;

            // Hover actions apply before the click
            let mut actions = hover_actions(&self.state.table.hover, &events.hover);
            if let Some(column) = events.clicked {
                tracing::debug!("Header clicked: {}", column);
                actions.push(Action::HeaderClicked(column));
            }
            if !actions.is_empty() {
                self.state.dispatch(actions);
            }

            ui.add_space(spacing::LG);
            AnnotationPanelView::show(ui, &self.state.table.annotations());
        });
    }
}

impl StudioApp {
    /// Show the settings window if open and apply its result
    fn show_settings(&mut self, ctx: &egui::Context) {
        if !self.state.settings_open {
            return;
        }
        let Some(pending) = self.state.settings_pending.as_mut() else {
            return;
        };

        match self.settings_window.show(ctx, pending) {
            SettingsResult::Open => {}
            SettingsResult::Apply => {
                let catalog_changed =
                    pending.table.catalog_path != self.state.settings.table.catalog_path;
                self.state.close_settings(true);
                apply_visuals(ctx, &self.state.settings);
                if catalog_changed {
                    self.state.catalog = load_catalog(&self.state.settings);
                }
                if let Err(e) = save_settings(&self.state.settings) {
                    tracing::error!("Failed to save settings: {}", e);
                }
            }
            SettingsResult::Cancel => {
                self.state.close_settings(false);
            }
        }
    }

    /// Handle global keyboard shortcuts
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (open_settings, escape) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(egui::Key::Comma),
                i.key_pressed(egui::Key::Escape),
            )
        });

        // Cmd/Ctrl+, - Open settings
        if open_settings && !self.state.settings_open {
            self.state.open_settings();
        }

        // Escape - Close settings without applying
        if escape && self.state.settings_open {
            self.state.close_settings(false);
        }
    }
}

fn apply_visuals(ctx: &egui::Context, settings: &Settings) {
    if settings.display.dark_mode {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }
}

/// Load the configured catalog, falling back to the built-in one.
fn load_catalog(settings: &Settings) -> Catalog {
    let Some(path) = &settings.table.catalog_path else {
        return Catalog::builtin();
    };
    match Catalog::load(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load catalog: {}, using built-in structures", e);
            Catalog::builtin()
        }
    }
}
