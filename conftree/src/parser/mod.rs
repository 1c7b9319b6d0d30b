//! Markup parsing for text sources.
//!
//! Text is first run through `%(name)s` substitution with the target tree's
//! context and then decoded into a [`serde_json::Value`]. Empty documents are
//! reported as `None` so the merge driver can skip them.

mod placeholder;
mod yaml;

use camino::Utf8Path;
use serde_json::Value;

#[cfg(feature = "toml")]
use crate::ConfigResultExt;
use crate::{ConfigError, ConfigResult, Context};

/// Markup format of a text source.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum Format {
    /// YAML 1.2, parsed with strict booleans (`yes` stays a string).
    #[default]
    Yaml,
    /// JSON.
    Json,
    /// TOML.
    #[cfg(feature = "toml")]
    Toml,
}

impl Format {
    /// Select a format from a file extension.
    ///
    /// `.json` and `.toml` are recognised; everything else, including files
    /// without an extension, is treated as YAML.
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("json") => Self::Json,
            #[cfg(feature = "toml")]
            Some("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

/// Substitute and parse YAML `text`.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownPlaceholder`] for unbound placeholders and
/// [`ConfigError::Parse`] for malformed markup.
pub fn parse_text(text: &str, context: &Context) -> ConfigResult<Option<Value>> {
    parse_with_format(Format::Yaml, text, context)
}

/// Substitute and parse `text` as `format`.
///
/// Returns `Ok(None)` when the text is blank, holds only comments or a
/// document marker, or decodes to null, an empty string, an empty mapping or
/// an empty sequence.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownPlaceholder`] for unbound placeholders and
/// [`ConfigError::Parse`] for malformed markup.
///
/// # Examples
///
/// ```
/// use conftree::{parse_with_format, Context, Format};
///
/// let context = Context::new().with("port", 8080);
/// let value = parse_with_format(Format::Yaml, "port: %(port)s", &context)?;
/// assert_eq!(value, Some(serde_json::json!({"port": 8080})));
/// assert_eq!(parse_with_format(Format::Yaml, "# nothing here", &context)?, None);
/// # Ok::<_, std::sync::Arc<conftree::ConfigError>>(())
/// ```
pub fn parse_with_format(
    format: Format,
    text: &str,
    context: &Context,
) -> ConfigResult<Option<Value>> {
    let substituted = placeholder::substitute(text, context)?;
    if is_blank(&substituted) {
        return Ok(None);
    }
    let value = match format {
        Format::Yaml => yaml::from_str(&substituted)?,
        Format::Json => serde_json::from_str::<Value>(&substituted).map_err(|err| {
            std::sync::Arc::new(ConfigError::Parse {
                source: Box::new(err),
            })
        })?,
        #[cfg(feature = "toml")]
        Format::Toml => toml::from_str::<Value>(&substituted).into_config()?,
    };
    Ok(Some(value).filter(|v| !is_empty_content(v)))
}

fn is_blank(text: &str) -> bool {
    text.lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
}

fn is_empty_content(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(text) => text.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
