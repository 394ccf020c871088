// StockManager - ui/panels/sidebar.rs
//
// Sidebar presenter: lists the registry, highlights the current selection,
// and reports toggle/select events back to the panel container.
// Holds no state of its own; everything arrives through `SidebarProps`.

use crate::app::state::SidebarAction;
use crate::core::model::DataPanel;
use crate::core::registry::Registry;
use crate::ui::theme::{self, Icon};
use crate::util::constants::EMPTY_REGISTRY_MESSAGE;

/// Everything the sidebar needs to draw itself.
#[derive(Debug, Clone, Copy)]
pub struct SidebarProps<'a> {
    pub is_open: bool,
    pub data_panels: &'a Registry,
    pub current: Option<&'a DataPanel>,
    pub is_loading: bool,
}

/// One row of the sidebar list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem<'a> {
    pub panel: &'a DataPanel,
    pub icon: Icon,
    pub selected: bool,
}

/// Rows to display, in registry order. Empty while loading.
pub fn items<'a>(props: &SidebarProps<'a>) -> Vec<SidebarItem<'a>> {
    if props.is_loading {
        return Vec::new();
    }
    props
        .data_panels
        .iter()
        .map(|panel| SidebarItem {
            panel,
            icon: theme::panel_icon(panel.kind),
            selected: props.current.is_some_and(|c| c.id == panel.id),
        })
        .collect()
}

/// Render the sidebar and return the event the user triggered, if any.
pub fn render(ui: &mut egui::Ui, props: SidebarProps<'_>) -> Option<SidebarAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if props.is_open {
            ui.strong("Guides");
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (icon, hint) = if props.is_open {
                (Icon::SidebarCollapse, "Collapse sidebar")
            } else {
                (Icon::SidebarExpand, "Expand sidebar")
            };
            if ui.small_button(icon.glyph()).on_hover_text(hint).clicked() {
                action = Some(SidebarAction::Toggle);
            }
        });
    });
    ui.separator();

    if props.is_loading {
        ui.vertical_centered(|ui| {
            ui.spinner();
        });
        return action;
    }

    let rows = items(&props);
    if rows.is_empty() {
        if props.is_open {
            ui.weak(EMPTY_REGISTRY_MESSAGE);
        }
        return action;
    }

    egui::ScrollArea::vertical()
        .id_salt("sidebar_list")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for row in &rows {
                let text = if props.is_open {
                    format!("{}  {}", row.icon.glyph(), row.panel.title)
                } else {
                    row.icon.glyph().to_string()
                };
                let mut response = ui.selectable_label(row.selected, text);
                if !props.is_open {
                    response = response.on_hover_text(row.panel.title.as_str());
                }
                if response.clicked() {
                    action = Some(SidebarAction::Select(row.panel.clone()));
                }
            }
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::PanelKind;
    use crate::ui::panels::click_input;
    use crate::util::constants::{SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_OPEN_WIDTH};

    fn registry() -> Registry {
        Registry::new(vec![
            DataPanel::new("a", "Alpha", PanelKind::Stock),
            DataPanel::new("b", "Beta", PanelKind::Stock),
        ])
        .unwrap()
    }

    #[test]
    fn test_items_mark_only_current_selection() {
        let reg = registry();
        let props = SidebarProps {
            is_open: true,
            data_panels: &reg,
            current: reg.get("b"),
            is_loading: false,
        };
        let rows = items(&props);
        let selected: Vec<_> = rows.iter().map(|r| r.selected).collect();
        assert_eq!(selected, [false, true]);
        assert_eq!(rows[0].panel.title, "Alpha");
    }

    #[test]
    fn test_items_without_selection() {
        let reg = registry();
        let props = SidebarProps {
            is_open: false,
            data_panels: &reg,
            current: None,
            is_loading: false,
        };
        assert!(items(&props).iter().all(|r| !r.selected));
    }

    #[test]
    fn test_items_hidden_while_loading() {
        let reg = registry();
        let props = SidebarProps {
            is_open: true,
            data_panels: &reg,
            current: None,
            is_loading: true,
        };
        assert!(items(&props).is_empty());
    }

    /// Rendering headlessly without input produces no event.
    #[test]
    fn test_render_without_input_emits_nothing() {
        let reg = registry();
        let ctx = egui::Context::default();
        let mut emitted = Vec::new();
        for is_open in [true, false] {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let props = SidebarProps {
                        is_open,
                        data_panels: &reg,
                        current: reg.first(),
                        is_loading: false,
                    };
                    emitted.push(render(ui, props));
                });
            });
        }
        // egui may run more than one pass per frame; every pass must be quiet.
        assert!(emitted.len() >= 2);
        assert!(emitted.iter().all(Option::is_none));
    }

    /// Click every point of a grid over the sidebar, laid out as the container
    /// lays it out, and record what each click emitted.
    fn click_grid(is_open: bool) -> Vec<(egui::Pos2, SidebarAction)> {
        let reg = registry();
        let width = if is_open {
            SIDEBAR_OPEN_WIDTH
        } else {
            SIDEBAR_COLLAPSED_WIDTH
        };
        let ctx = egui::Context::default();
        let mut hits = Vec::new();
        for y in (0..96).step_by(4) {
            for x in (0..width as i32).step_by(4) {
                let pos = egui::pos2(x as f32, y as f32);
                for input in click_input(pos) {
                    let _ = ctx.run(input, |ctx| {
                        egui::SidePanel::left("sidebar")
                            .resizable(false)
                            .exact_width(width)
                            .show(ctx, |ui| {
                                let props = SidebarProps {
                                    is_open,
                                    data_panels: &reg,
                                    current: reg.first(),
                                    is_loading: false,
                                };
                                if let Some(action) = render(ui, props) {
                                    hits.push((pos, action));
                                }
                            });
                    });
                }
            }
        }
        hits
    }

    /// Topmost y at which a click emitted `action`.
    fn top_of(hits: &[(egui::Pos2, SidebarAction)], action: &SidebarAction) -> Option<f32> {
        hits.iter()
            .filter(|(_, a)| a == action)
            .map(|(pos, _)| pos.y)
            .reduce(f32::min)
    }

    fn assert_click_layout(is_open: bool) {
        let reg = registry();
        let select_alpha = SidebarAction::Select(reg.get("a").cloned().unwrap());
        let select_beta = SidebarAction::Select(reg.get("b").cloned().unwrap());
        let hits = click_grid(is_open);

        let toggle_y = top_of(&hits, &SidebarAction::Toggle).expect("header button emits Toggle");
        let alpha_y = top_of(&hits, &select_alpha).expect("Alpha row emits its panel");
        let beta_y = top_of(&hits, &select_beta).expect("Beta row emits its panel");

        // Header button, then rows in registry order.
        assert!(toggle_y < alpha_y, "toggle at {toggle_y}, Alpha at {alpha_y}");
        assert!(alpha_y < beta_y, "Alpha at {alpha_y}, Beta at {beta_y}");

        let expected = [SidebarAction::Toggle, select_alpha, select_beta];
        assert!(hits.iter().all(|(_, a)| expected.contains(a)));
    }

    #[test]
    fn test_clicks_emit_toggle_and_select_when_open() {
        assert_click_layout(true);
    }

    #[test]
    fn test_clicks_emit_toggle_and_select_when_collapsed() {
        assert_click_layout(false);
    }
}
