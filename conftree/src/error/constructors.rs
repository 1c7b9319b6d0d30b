//! Shorthand constructors for the errors raised inside the crate.

use std::sync::Arc;

use camino::Utf8Path;

use super::ConfigError;
use crate::Shape;

impl ConfigError {
    /// Construct a [`ConfigError::KeyNotFound`] for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use conftree::ConfigError;
    /// let err = ConfigError::key_not_found("server");
    /// assert!(matches!(&*err, ConfigError::KeyNotFound { key } if key == "server"));
    /// ```
    #[must_use]
    pub fn key_not_found(key: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::KeyNotFound { key: key.into() })
    }

    /// Construct a [`ConfigError::TypeMismatch`] between a target node and
    /// the data offered to it.
    #[must_use]
    pub fn type_mismatch(target: Shape, data: Shape) -> Arc<Self> {
        Arc::new(Self::TypeMismatch { target, data })
    }

    /// Construct a [`ConfigError::File`] for a configuration path.
    #[must_use]
    pub fn file(
        path: &Utf8Path,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Arc<Self> {
        Arc::new(Self::File {
            path: path.to_path_buf(),
            source: source.into(),
        })
    }

    /// Construct a [`ConfigError::SourceNotFound`] for a missing file.
    #[must_use]
    pub fn source_not_found(path: &Utf8Path) -> Arc<Self> {
        Arc::new(Self::SourceNotFound {
            path: path.to_path_buf(),
        })
    }
}
