//! Primary error enum for configuration tree operations.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::Shape;

/// Errors that can occur while merging, loading or reading configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A key was read from a mapping node that does not contain it.
    #[error("configuration key not found: '{key}'")]
    KeyNotFound {
        /// Key (or dotted path of keys) that was requested.
        key: String,
    },

    /// A merge source has a shape the target node cannot absorb.
    #[error("cannot merge {data} data into a {target} node")]
    TypeMismatch {
        /// Shape of the node being merged into.
        target: Shape,
        /// Shape of the offending source data.
        data: Shape,
    },

    /// A namespace path runs through a value that is not a mapping.
    #[error("namespace segment '{segment}' holds a {found} value, not a mapping")]
    NamespaceConflict {
        /// Path segment that could not be descended into.
        segment: String,
        /// Shape of the value found at that segment.
        found: Shape,
    },

    /// The process-wide configuration was initialised twice without `force`.
    #[error("configuration is already initialised")]
    AlreadyInitialized,

    /// The process-wide configuration was read before initialisation.
    #[error("configuration is not initialised yet")]
    NotInitialized,

    /// A configuration file named as a source does not exist.
    #[error("configuration source not found: '{path}'")]
    SourceNotFound {
        /// Path of the missing source.
        path: Utf8PathBuf,
    },

    /// Reading or decoding a configuration file failed.
    #[error("configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying error reported by the reader or decoder.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Markup text could not be parsed.
    #[error("failed to parse configuration text: {source}")]
    Parse {
        /// Underlying parser error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Markup text referenced a placeholder absent from the context.
    #[error("unknown placeholder '%({name})s' in configuration text")]
    UnknownPlaceholder {
        /// Placeholder name as written in the text.
        name: String,
    },

    /// The tree could not be deserialised into the requested type.
    #[error("failed to deserialise configuration: {0}")]
    Deserialize(#[from] serde_json::Error),
}
