// StockManager - gui.rs
//
// Top-level eframe::App implementation.
// Mounts the panel container inside the stock page shell.

use crate::app::state::PanelContainer;
use crate::ui::page::PageShell;

/// The StockManager application.
pub struct StockManagerApp {
    pub shell: PageShell,
    pub container: PanelContainer,
}

impl StockManagerApp {
    /// Create a new application instance.
    pub fn new(shell: PageShell, container: PanelContainer) -> Self {
        Self { shell, container }
    }
}

impl eframe::App for StockManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.shell.render(ctx, &mut self.container);
    }

    /// Called by eframe when the application window is about to close.
    ///
    /// Nothing to flush: the sidebar state is written on every toggle.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        tracing::info!(
            sidebar_open = self.container.is_sidebar_open(),
            selected = ?self.container.current_data_panel().map(|p| p.id.as_str()),
            "StockManager exiting"
        );
    }
}
