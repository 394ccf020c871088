// StockManager - ui/page.rs
//
// Page shell: site-level layout chrome (header with site metadata and the
// page's navigation path, status bar) wrapped around the panel container,
// which is mounted as the page body.

use crate::app::state::PanelContainer;
use crate::core::model::SiteMetadata;
use crate::platform::storage::KeyValueStore;
use crate::ui::panels::container;
use crate::util::constants::{PAGE_LINK, PAGE_TITLE};

/// Chrome around one mounted page.
#[derive(Debug, Clone)]
pub struct PageShell {
    pub meta: SiteMetadata,
    pub title: &'static str,
    pub link: &'static str,
    /// Text shown in the status bar.
    pub status: String,
}

impl PageShell {
    /// Shell for the stock page.
    pub fn stock_page(meta: SiteMetadata, status: impl Into<String>) -> Self {
        Self {
            meta,
            title: PAGE_TITLE,
            link: PAGE_LINK,
            status: status.into(),
        }
    }

    /// Window title: "<page> - <site>".
    pub fn window_title(&self) -> String {
        format!("{} - {}", self.title, self.meta.title)
    }

    /// Render the chrome, then the mounted container in the remaining area.
    ///
    /// Panels are added outermost first so the container's side and
    /// central panels fill what the header and status bar leave.
    pub fn render<S: KeyValueStore>(&self, ctx: &egui::Context, body: &mut PanelContainer<S>) {
        egui::TopBottomPanel::top("page_header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.meta.title.as_str())
                    .on_hover_text(self.meta.description.as_str());
                ui.separator();
                ui.label(self.title);
                ui.weak(self.link);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(self.meta.description.as_str());
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} guide(s)", body.data_panels().len()));
                });
            });
        });

        container::render(ctx, body);
    }
}
