// StockManager - core/registry.rs
//
// The ordered, immutable collection of data panels offered to the user.
//
// Ordering is display order and is significant: the first entry is the
// default selection. Identifiers are unique within a registry.

use crate::core::model::{DataPanel, PanelKind};
use crate::util::error::RegistryError;
use std::collections::HashSet;

/// Ordered sequence of data panels with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    panels: Vec<DataPanel>,
}

impl Registry {
    /// Build a registry, preserving order.
    ///
    /// Fails on the first empty or duplicate id encountered.
    pub fn new(panels: Vec<DataPanel>) -> Result<Self, RegistryError> {
        validate(&panels)?;
        Ok(Self { panels })
    }

    /// A registry with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in panel list shipped with the application.
    pub fn builtin() -> Self {
        Self {
            panels: vec![DataPanel::new("stock-info", "Stock info", PanelKind::Stock)],
        }
    }

    /// The default selection, if any.
    pub fn first(&self) -> Option<&DataPanel> {
        self.panels.first()
    }

    /// Look up a panel by id.
    pub fn get(&self, id: &str) -> Option<&DataPanel> {
        self.panels.iter().find(|p| p.id == id)
    }

    /// Whether `panel` is exactly one of this registry's entries.
    pub fn contains(&self, panel: &DataPanel) -> bool {
        self.panels.iter().any(|p| p == panel)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPanel> {
        self.panels.iter()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a DataPanel;
    type IntoIter = std::slice::Iter<'a, DataPanel>;

    fn into_iter(self) -> Self::IntoIter {
        self.panels.iter()
    }
}

/// Check ids are non-empty and unique.
fn validate(panels: &[DataPanel]) -> Result<(), RegistryError> {
    let mut seen = HashSet::with_capacity(panels.len());
    for panel in panels {
        if panel.id.is_empty() {
            return Err(RegistryError::EmptyId {
                title: panel.title.clone(),
            });
        }
        if !seen.insert(panel.id.as_str()) {
            return Err(RegistryError::DuplicateId {
                id: panel.id.clone(),
            });
        }
    }
    Ok(())
}
