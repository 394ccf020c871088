// StockManager - ui/panels/container.rs
//
// Panel container view: animated-width sidebar on the left, and a main
// column with breadcrumb, advisory banner, and the selected panel's content.

use crate::app::state::{Breadcrumb, ContentView, PanelContainer};
use crate::platform::storage::KeyValueStore;
use crate::ui::panels::{content, sidebar};
use crate::ui::theme::{self, Icon};
use crate::util::constants::{
    ADVISORY_BANNER, CONTENT_MAX_WIDTH, SELECT_PROMPT, SIDEBAR_ANIMATION_SECS,
};

/// Render the container into the remaining screen area and apply any
/// sidebar event after the frame's widgets are laid out.
pub fn render<S: KeyValueStore>(ctx: &egui::Context, container: &mut PanelContainer<S>) {
    // Width eases between the open and collapsed sizes; the central panel
    // follows it, so the content margin always matches the sidebar.
    let width = ctx.animate_value_with_time(
        egui::Id::new("sidebar_width"),
        container.sidebar_width(),
        SIDEBAR_ANIMATION_SECS,
    );

    let mut action = None;
    egui::SidePanel::left("sidebar")
        .resizable(false)
        .exact_width(width)
        .show(ctx, |ui| {
            action = sidebar::render(
                ui,
                sidebar::SidebarProps {
                    is_open: container.is_sidebar_open(),
                    data_panels: container.data_panels(),
                    current: container.current_data_panel(),
                    is_loading: container.is_loading(),
                },
            );
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        render_main(ui, container);
    });

    if let Some(action) = action {
        container.apply(action);
        ctx.request_repaint();
    }
}

fn render_main<S: KeyValueStore>(ui: &mut egui::Ui, container: &PanelContainer<S>) {
    ui.set_max_width(CONTENT_MAX_WIDTH);

    render_breadcrumb(ui, &container.breadcrumb());
    ui.add_space(8.0);
    render_banner(ui);
    ui.add_space(8.0);

    match container.content() {
        ContentView::Panel(panel) => content::render(ui, panel),
        ContentView::Placeholder => {
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new(SELECT_PROMPT).color(theme::SECONDARY_TEXT));
            });
        }
    }
}

fn render_breadcrumb(ui: &mut egui::Ui, breadcrumb: &Breadcrumb) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(breadcrumb.root)
                .strong()
                .color(theme::ACCENT),
        );
        if let Some(ref title) = breadcrumb.current {
            ui.label(egui::RichText::new(Icon::ChevronRight.glyph()).color(theme::SECONDARY_TEXT));
            ui.label(egui::RichText::new(title.as_str()).color(theme::SECONDARY_TEXT));
        }
    });
}

fn render_banner(ui: &mut egui::Ui) {
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, theme::BANNER_STROKE))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(Icon::TriangleAlert.glyph()).color(theme::SECONDARY_TEXT));
                ui.label(ADVISORY_BANNER);
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{DataPanel, PanelKind};
    use crate::core::registry::Registry;
    use crate::platform::storage::MemoryStore;
    use crate::ui::panels::click_input;
    use crate::util::constants::SIDEBAR_STORAGE_KEY;

    fn run_frame(ctx: &egui::Context, container: &mut PanelContainer<MemoryStore>) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| render(ctx, &mut *container));
    }

    fn click(ctx: &egui::Context, container: &mut PanelContainer<MemoryStore>, x: i32, y: i32) {
        for input in click_input(egui::pos2(x as f32, y as f32)) {
            let _ = ctx.run(input, |ctx| render(ctx, &mut *container));
        }
    }

    #[test]
    fn test_renders_selected_and_placeholder_states() {
        let ctx = egui::Context::default();

        let mut with_panel = PanelContainer::new(Registry::builtin(), MemoryStore::new());
        run_frame(&ctx, &mut with_panel);

        let mut empty = PanelContainer::new(Registry::empty(), MemoryStore::new());
        run_frame(&ctx, &mut empty);

        // No input means no events, so nothing changed and nothing was stored.
        assert!(with_panel.is_sidebar_open());
        assert_eq!(with_panel.store().write_count(), 0);
        assert!(empty.current_data_panel().is_none());
    }

    #[test]
    fn test_renders_collapsed_sidebar() {
        let ctx = egui::Context::default();
        let mut c = PanelContainer::new(Registry::builtin(), MemoryStore::new());
        c.toggle_sidebar();
        run_frame(&ctx, &mut c);
        assert!(!c.is_sidebar_open());
        assert_eq!(c.store().write_count(), 1);
    }

    #[test]
    fn test_clicks_select_a_row_then_collapse_the_sidebar() {
        let registry = Registry::new(vec![
            DataPanel::new("a", "Alpha", PanelKind::Stock),
            DataPanel::new("b", "Beta", PanelKind::Stock),
        ])
        .unwrap();
        let ctx = egui::Context::default();
        let mut c = PanelContainer::new(registry, MemoryStore::new());
        assert_eq!(c.current_data_panel().map(|p| p.id.as_str()), Some("a"));

        // Walk down the row column until a click lands on "Beta".
        for y in (0..120).step_by(4) {
            click(&ctx, &mut c, 60, y);
            if c.current_data_panel().is_some_and(|p| p.id == "b") {
                break;
            }
        }
        assert_eq!(c.breadcrumb().to_string(), "Deploy > Beta");
        assert!(c.is_sidebar_open());
        assert_eq!(c.store().write_count(), 0, "selection is never stored");

        // Sweep the header row from the right edge for the collapse button.
        'sweep: for y in (0..24).step_by(2) {
            for x in (160..256).rev().step_by(4) {
                click(&ctx, &mut c, x, y);
                if !c.is_sidebar_open() {
                    break 'sweep;
                }
            }
        }
        assert!(!c.is_sidebar_open());
        assert_eq!(c.store().write_count(), 1);
        assert_eq!(c.store().peek(SIDEBAR_STORAGE_KEY), Some("false"));
        assert_eq!(c.current_data_panel().map(|p| p.id.as_str()), Some("b"));
    }
}
