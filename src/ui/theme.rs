// StockManager - ui/theme.rs
//
// Colour scheme, icon glyphs, and visual setup.
// No dependencies on app state or business logic.

use crate::core::model::PanelKind;
use egui::Color32;

/// Named icons drawn as glyphs from egui's bundled fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ChevronRight,
    TriangleAlert,
    SidebarCollapse,
    SidebarExpand,
    Chart,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::ChevronRight => "\u{203a}",
            Icon::TriangleAlert => "\u{26a0}",
            Icon::SidebarCollapse => "\u{00ab}",
            Icon::SidebarExpand => "\u{00bb}",
            Icon::Chart => "\u{1f4c8}",
        }
    }
}

/// Icon shown next to a panel of the given kind in the sidebar.
pub fn panel_icon(kind: PanelKind) -> Icon {
    match kind {
        PanelKind::Stock => Icon::Chart,
    }
}

/// Accent colour for the breadcrumb root and the selected sidebar item.
pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246); // Blue 500

/// Dashed-border colour of the advisory banner.
pub const BANNER_STROKE: Color32 = Color32::from_rgb(107, 114, 128); // Gray 500

/// Muted text (breadcrumb tail, placeholder, guide metadata).
pub const SECONDARY_TEXT: Color32 = Color32::from_rgb(156, 163, 175); // Gray 400

/// Apply dark/light visuals and the configured body font size.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = match text_style {
                egui::TextStyle::Heading => font_size * 1.4,
                egui::TextStyle::Small => font_size * 0.75,
                _ => font_size,
            };
        }
    });

    tracing::debug!(dark_mode, font_size, "Theme applied");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_panel_kind_has_an_icon() {
        for kind in PanelKind::all() {
            assert!(!panel_icon(*kind).glyph().is_empty());
        }
    }

    #[test]
    fn test_apply_scales_text_styles() {
        let ctx = egui::Context::default();
        apply(&ctx, false, 20.0);
        let style = ctx.style();
        assert_eq!(style.text_styles[&egui::TextStyle::Body].size, 20.0);
        assert!((style.text_styles[&egui::TextStyle::Heading].size - 28.0).abs() < 1e-3);
        assert!(!style.visuals.dark_mode);
    }
}
