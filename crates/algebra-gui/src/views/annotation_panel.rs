//! Annotation panel shown below the table while something is hovered.

use crate::theme::{colors, spacing};
use algebra_core::AnnotationPanel;
use egui::{RichText, Stroke, Ui};

pub struct AnnotationPanelView;

impl AnnotationPanelView {
    pub fn show(ui: &mut Ui, panel: &AnnotationPanel) {
        if !panel.visible {
            return;
        }

        egui::Frame::group(ui.style())
            .stroke(Stroke::new(2.0, colors::ACCENT))
            .inner_margin(spacing::MD)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                for section in &panel.sections {
                    ui.label(RichText::new(&section.title).strong().size(18.0));
                    ui.add_space(spacing::XS);
                    // Missing definitions render as an empty body
                    if let Some(body) = &section.body {
                        ui.label(body);
                    }
                    ui.add_space(spacing::SM);
                }
            });
    }
}
