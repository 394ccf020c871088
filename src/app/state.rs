// StockManager - app/state.rs
//
// The panel container: single owner of the session UI state (selection,
// sidebar openness, loading flag). Owned by the eframe::App implementation.
//
// State changes go through the mutation methods below, each of which runs
// its follow-up handler (auto-selection, persistence) synchronously before
// returning, so the next UI event always sees a settled state.

use crate::app::persist;
use crate::core::model::DataPanel;
use crate::core::registry::Registry;
use crate::platform::storage::KeyValueStore;
use crate::util::constants;
use std::fmt;

// =============================================================================
// Sidebar events
// =============================================================================

/// Events emitted by the sidebar presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarAction {
    /// The collapse/expand control was activated.
    Toggle,
    /// A list item was activated.
    Select(DataPanel),
}

// =============================================================================
// Derived view state
// =============================================================================

/// Breadcrumb trail: a fixed root label followed by the selected panel's title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub root: &'static str,
    pub current: Option<String>,
}

impl Breadcrumb {
    /// Segments in display order.
    pub fn segments(&self) -> Vec<&str> {
        let mut segments: Vec<&str> = vec![self.root];
        if let Some(ref title) = self.current {
            segments.push(title.as_str());
        }
        segments
    }
}

impl fmt::Display for Breadcrumb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = format!(" {} ", constants::BREADCRUMB_SEPARATOR);
        f.write_str(&self.segments().join(&sep))
    }
}

/// What the content area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentView<'a> {
    /// Delegate to the content renderer for this panel's kind.
    Panel(&'a DataPanel),
    /// Nothing selected: prompt the user to pick a guide.
    Placeholder,
}

// =============================================================================
// Panel container
// =============================================================================

/// Session UI state and its transitions.
///
/// Generic over the storage capability so tests can inspect the store;
/// the application uses the boxed default.
pub struct PanelContainer<S: KeyValueStore = Box<dyn KeyValueStore>> {
    data_panels: Registry,
    current_data_panel: Option<DataPanel>,
    is_sidebar_open: bool,
    is_loading: bool,
    store: S,
}

impl<S: KeyValueStore> PanelContainer<S> {
    /// Initialise from the registry and the injected store.
    ///
    /// Reads the persisted sidebar flag once, then auto-selects the first
    /// registry entry if there is one.
    pub fn new(data_panels: Registry, store: S) -> Self {
        let is_sidebar_open = persist::read_sidebar_open(&store);
        let mut container = Self {
            data_panels,
            current_data_panel: None,
            is_sidebar_open,
            is_loading: false,
            store,
        };
        container.ensure_selection();
        tracing::info!(
            panels = container.data_panels.len(),
            sidebar_open = container.is_sidebar_open,
            "Panel container initialised"
        );
        container
    }

    // ---- Accessors -------------------------------------------------------

    pub fn data_panels(&self) -> &Registry {
        &self.data_panels
    }

    pub fn current_data_panel(&self) -> Option<&DataPanel> {
        self.current_data_panel.as_ref()
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.is_sidebar_open
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ---- Transitions -----------------------------------------------------

    /// Replace the registry (registry-loaded event).
    pub fn set_data_panels(&mut self, data_panels: Registry) {
        tracing::debug!(panels = data_panels.len(), "Registry replaced");
        self.data_panels = data_panels;
        self.ensure_selection();
    }

    /// Flip the sidebar and persist the new value.
    pub fn toggle_sidebar(&mut self) {
        self.is_sidebar_open = !self.is_sidebar_open;
        tracing::debug!(open = self.is_sidebar_open, "Sidebar toggled");
        persist::write_sidebar_open(&mut self.store, self.is_sidebar_open);
    }

    /// Select a panel.
    ///
    /// The value is accepted as given, even when it is not a member of the
    /// current registry.
    pub fn select_data_panel(&mut self, panel: DataPanel) {
        if !self.data_panels.contains(&panel) {
            tracing::debug!(id = %panel.id, "Selected panel is not in the registry");
        }
        tracing::debug!(id = %panel.id, title = %panel.title, "Data panel selected");
        self.current_data_panel = Some(panel);
        self.ensure_selection();
    }

    /// Set the reserved loading flag shown by the sidebar.
    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    /// Apply an event from the sidebar presenter.
    pub fn apply(&mut self, action: SidebarAction) {
        match action {
            SidebarAction::Toggle => self.toggle_sidebar(),
            SidebarAction::Select(panel) => self.select_data_panel(panel),
        }
    }

    /// Select the first registry entry when nothing is selected.
    fn ensure_selection(&mut self) {
        if self.current_data_panel.is_some() {
            return;
        }
        if let Some(first) = self.data_panels.first() {
            tracing::debug!(id = %first.id, "Auto-selecting first data panel");
            self.current_data_panel = Some(first.clone());
        }
    }

    // ---- Derived view state ----------------------------------------------

    pub fn breadcrumb(&self) -> Breadcrumb {
        Breadcrumb {
            root: constants::BREADCRUMB_ROOT,
            current: self.current_data_panel.as_ref().map(|p| p.title.clone()),
        }
    }

    pub fn content(&self) -> ContentView<'_> {
        match self.current_data_panel {
            Some(ref panel) => ContentView::Panel(panel),
            None => ContentView::Placeholder,
        }
    }

    /// Target sidebar width for the current open state.
    pub fn sidebar_width(&self) -> f32 {
        if self.is_sidebar_open {
            constants::SIDEBAR_OPEN_WIDTH
        } else {
            constants::SIDEBAR_COLLAPSED_WIDTH
        }
    }

    /// Left margin of the content column; always tracks the sidebar width.
    pub fn content_margin(&self) -> f32 {
        self.sidebar_width()
    }
}

impl<S: KeyValueStore> fmt::Debug for PanelContainer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelContainer")
            .field("data_panels", &self.data_panels)
            .field("current_data_panel", &self.current_data_panel)
            .field("is_sidebar_open", &self.is_sidebar_open)
            .field("is_loading", &self.is_loading)
            .finish_non_exhaustive()
    }
}
