// StockManager - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. Choosing the durable storage backend
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::ui::...` etc.
pub use stockmanager::app;

pub use stockmanager::core;
pub use stockmanager::platform;
pub use stockmanager::ui;
pub use stockmanager::util;

use clap::Parser;
use platform::storage::{FileStore, KeyValueStore, MemoryStore};
use std::path::PathBuf;

/// StockManager - browse stock data guides.
///
/// Pick a guide from the sidebar to view it. The sidebar's open/closed
/// state is remembered between sessions.
#[derive(Parser, Debug)]
#[command(name = "StockManager", version, about)]
struct Cli {
    /// Directory holding the preference store (defaults to the platform data dir).
    #[arg(long = "data-dir")]
    data_dir: Option<PathBuf>,

    /// Keep preferences in memory only; nothing is read from or written to disk.
    #[arg(short = 'e', long = "ephemeral")]
    ephemeral: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is loaded before logging so its [logging] section can apply;
    // its warnings are re-emitted once the subscriber exists.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) =
        platform::config::load_config(&platform_paths.config_file());

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "StockManager starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // Storage: CLI --ephemeral > config [storage] persist > file store.
    let (store, status): (Box<dyn KeyValueStore>, String) = if cli.ephemeral || !config.persist {
        tracing::info!("Preferences kept in memory only");
        (
            Box::new(MemoryStore::new()),
            "Preferences are not saved in this session.".to_string(),
        )
    } else {
        let data_dir = cli.data_dir.unwrap_or(platform_paths.data_dir);
        let store = FileStore::open(FileStore::default_path(&data_dir));
        let status = format!("Preferences saved to {}", store.path().display());
        (Box::new(store), status)
    };

    let container = app::state::PanelContainer::new(core::registry::Registry::builtin(), store);
    let meta = core::model::SiteMetadata {
        title: config.site_title.clone(),
        description: config.site_description.clone(),
    };
    let shell = ui::page::PageShell::stock_page(meta, status);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(shell.window_title())
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, dark_mode, font_size);
            Ok(Box::new(gui::StockManagerApp::new(shell, container)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch StockManager GUI: {e}");
        std::process::exit(1);
    }
}
