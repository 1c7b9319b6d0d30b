//! Trait-based conversions between parser errors and `ConfigError`.

use super::ConfigError;

/// Convert YAML decoding failures into [`ConfigError::Parse`].
///
/// The message is captured eagerly so the error stays `Send + Sync`
/// regardless of what the parser keeps inside its own error type.
impl From<serde_saphyr::Error> for ConfigError {
    fn from(e: serde_saphyr::Error) -> Self {
        Self::Parse {
            source: e.to_string().into(),
        }
    }
}

#[cfg(feature = "toml")]
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse {
            source: e.to_string().into(),
        }
    }
}
