// StockManager - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "StockManager";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "StockManager";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Page shell
// =============================================================================

/// Default site title shown in the layout chrome.
pub const DEFAULT_SITE_TITLE: &str = "StockManager";

/// Default site description shown in the layout chrome.
pub const DEFAULT_SITE_DESCRIPTION: &str = "Browse stock data guides";

/// Title of the page that mounts the panel container.
pub const PAGE_TITLE: &str = "Home";

/// Navigation path of the page that mounts the panel container.
pub const PAGE_LINK: &str = "/stock";

// =============================================================================
// Panel container
// =============================================================================

/// Storage key holding the sidebar open/closed flag.
///
/// The key name predates the stock view and is kept so existing stored
/// preferences keep working.
pub const SIDEBAR_STORAGE_KEY: &str = "deploySidebar";

/// Sidebar open state used when nothing (or nothing valid) is stored.
pub const DEFAULT_SIDEBAR_OPEN: bool = true;

/// Root label of the breadcrumb trail.
pub const BREADCRUMB_ROOT: &str = "Deploy";

/// Separator used in the plain-text form of the breadcrumb trail.
pub const BREADCRUMB_SEPARATOR: &str = ">";

/// Advisory banner shown above the content area.
pub const ADVISORY_BANNER: &str = "The deployment guide section is work in progress.";

/// Prompt shown in the content area when no panel is selected.
pub const SELECT_PROMPT: &str = "Select a guide from the sidebar to get started";

/// Sidebar message when the registry has no entries.
pub const EMPTY_REGISTRY_MESSAGE: &str = "No guides available";

// =============================================================================
// Layout
// =============================================================================

/// Sidebar width (and content left margin) when expanded, in points.
pub const SIDEBAR_OPEN_WIDTH: f32 = 256.0;

/// Sidebar width (and content left margin) when collapsed, in points.
pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 48.0;

/// Duration of the sidebar width transition, in seconds.
pub const SIDEBAR_ANIMATION_SECS: f32 = 0.2;

/// Maximum width of the content column, in points.
pub const CONTENT_MAX_WIDTH: f32 = 1024.0;

// =============================================================================
// UI preferences
// =============================================================================

/// Default body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable font size in points.
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable font size in points.
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// File and directory names
// =============================================================================

/// Name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Name of the durable key-value storage file in the data directory.
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Maximum size of the storage file accepted at open (bytes).
///
/// The file only ever holds a handful of short preference values; anything
/// larger is treated as corrupt and ignored.
pub const MAX_STORAGE_FILE_SIZE: u64 = 1024 * 1024;
