// StockManager - ui/panels/content.rs
//
// Content delegates: render a data panel's body, chosen by its kind.

use crate::core::guide::{guide_for, GuideSection};
use crate::core::model::{DataPanel, PanelKind};
use crate::ui::theme;

/// Render `panel` with the delegate registered for its kind.
pub fn render(ui: &mut egui::Ui, panel: &DataPanel) {
    match panel.kind {
        PanelKind::Stock => render_stock(ui, panel),
    }
}

fn render_stock(ui: &mut egui::Ui, panel: &DataPanel) {
    ui.heading(panel.title.as_str());
    ui.add_space(8.0);

    egui::ScrollArea::vertical()
        .id_salt(("content", panel.id.as_str()))
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for section in guide_for(PanelKind::Stock) {
                render_section(ui, section);
                ui.add_space(10.0);
            }
        });
}

fn render_section(ui: &mut egui::Ui, section: &GuideSection) {
    ui.label(egui::RichText::new(section.heading).strong());
    ui.label(section.body);

    let meta: Vec<String> = [
        section.source.map(|s| format!("Source: {s}")),
        section.example_symbol.map(|s| format!("Try: {s}")),
    ]
    .into_iter()
    .flatten()
    .collect();

    if !meta.is_empty() {
        ui.label(
            egui::RichText::new(meta.join("  \u{00b7}  "))
                .small()
                .color(theme::SECONDARY_TEXT),
        );
    }
}
