// StockManager - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};

// =============================================================================
// Data panel
// =============================================================================

/// A static descriptor for one selectable content item in the sidebar.
///
/// Values are immutable once built; the registry owns the canonical copies
/// and the orchestrator holds a clone of the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataPanel {
    /// Unique identifier, stable across sessions.
    pub id: String,

    /// Human-readable label shown in the sidebar and breadcrumb.
    pub title: String,

    /// Which content renderer applies to this panel.
    #[serde(rename = "type")]
    pub kind: PanelKind,
}

impl DataPanel {
    /// Convenience constructor.
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: PanelKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
        }
    }
}

// =============================================================================
// Panel kind
// =============================================================================

/// Closed tag selecting which content delegate renders a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    Stock,
}

impl PanelKind {
    /// Returns all variants in display order.
    pub fn all() -> &'static [PanelKind] {
        &[PanelKind::Stock]
    }

    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            PanelKind::Stock => "Stock",
        }
    }
}

// =============================================================================
// Site metadata
// =============================================================================

/// Metadata the page shell renders in its layout chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: crate::util::constants::DEFAULT_SITE_TITLE.to_string(),
            description: crate::util::constants::DEFAULT_SITE_DESCRIPTION.to_string(),
        }
    }
}
