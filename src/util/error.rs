// StockManager - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all StockManager operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum StockManagerError {
    /// Durable key-value storage failed.
    Storage(StorageError),

    /// Registry construction failed.
    Registry(RegistryError),

    /// A persisted value could not be decoded.
    Persist(PersistError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for StockManagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {e}"),
            Self::Registry(e) => write!(f, "Registry error: {e}"),
            Self::Persist(e) => write!(f, "Persisted value error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for StockManagerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage(e) => Some(e),
            Self::Registry(e) => Some(e),
            Self::Persist(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Storage errors
// ---------------------------------------------------------------------------

/// Errors raised by a durable key-value store.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },

    /// The store contents could not be serialised.
    Serialise {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
            Self::Serialise { path, source } => {
                write!(f, "Cannot serialise store '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serialise { source, .. } => Some(source),
        }
    }
}

impl From<StorageError> for StockManagerError {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

// ---------------------------------------------------------------------------
// Registry errors
// ---------------------------------------------------------------------------

/// Errors related to building a data panel registry.
#[derive(Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// Two panels share the same identifier.
    DuplicateId { id: String },

    /// A panel has an empty identifier.
    EmptyId { title: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id } => write!(f, "Duplicate data panel ID '{id}'"),
            Self::EmptyId { title } => write!(f, "Data panel '{title}' has an empty ID"),
        }
    }
}

impl std::error::Error for RegistryError {}

impl From<RegistryError> for StockManagerError {
    fn from(e: RegistryError) -> Self {
        Self::Registry(e)
    }
}

// ---------------------------------------------------------------------------
// Persisted value errors
// ---------------------------------------------------------------------------

/// Errors decoding a value read back from storage.
#[derive(Debug)]
pub enum PersistError {
    /// The stored text is not the expected JSON value.
    Malformed {
        key: &'static str,
        raw: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { key, raw, source } => {
                write!(f, "Stored value for '{key}' ('{raw}') is malformed: {source}")
            }
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed { source, .. } => Some(source),
        }
    }
}

impl From<PersistError> for StockManagerError {
    fn from(e: PersistError) -> Self {
        Self::Persist(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for StockManagerError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_storage_error_preserves_source_chain() {
        let err: StockManagerError = StorageError::Io {
            path: PathBuf::from("/tmp/storage.json"),
            operation: "write",
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();

        let msg = err.to_string();
        assert!(msg.starts_with("Storage error:"), "got {msg}");
        assert!(msg.contains("write"), "got {msg}");

        let storage = err.source().expect("top-level error must expose its cause");
        assert!(storage.source().is_some(), "io::Error must remain in the chain");
    }

    #[test]
    fn test_registry_error_display_names_the_id() {
        let err = RegistryError::DuplicateId {
            id: "stock-info".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate data panel ID 'stock-info'");
    }
}
