//! Theme and styling constants

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

/// Common color constants not covered by egui's visuals
pub mod colors {
    use egui::Color32;

    /// Header row background (blue)
    pub const HEADER_BG: Color32 = Color32::from_rgb(37, 99, 235);
    /// Header row background while hovered
    pub const HEADER_BG_HOVER: Color32 = Color32::from_rgb(29, 78, 216);
    /// Annotation panel accent stripe
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
}

/// Table row height for `text_height`-tall body text.
pub fn row_height(text_height: f32) -> f32 {
    text_height + 2.0 * spacing::SM
}
