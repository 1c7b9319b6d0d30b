//! The entry point of a configuration instance.

use std::borrow::Cow;
use std::ops::{Deref, DerefMut};

use camino::Utf8Path;
use serde::{Serialize, Serializer, de::DeserializeOwned};

use crate::{
    ConfigError, ConfigResult, ConfigResultExt, Context, Format, MappingNode, Source, file, merge,
    parse_with_format,
};

/// Root mapping of a configuration tree.
///
/// A root is created once, optionally seeded with initial sources, and then
/// accumulates state through any number of merges. It dereferences to its
/// [`MappingNode`] for reads and programmatic edits.
///
/// # Examples
///
/// ```
/// use conftree::{Context, Root};
///
/// let mut root = Root::from_sources(
///     Context::new().with("c", 3),
///     ["a:\n  a1: 1\nb: [1, 2, %(c)s]"],
/// )?;
/// root.merge(["a:\n  a2: 2"])?;
/// assert_eq!(root.get_path(&["a", "a1"])?.as_i64(), Some(1));
/// assert_eq!(root.get_path(&["a", "a2"])?.as_i64(), Some(2));
/// assert_eq!(root.get("b")?.as_sequence().map(|b| b[2].as_i64()), Some(Some(3)));
/// # Ok::<_, std::sync::Arc<conftree::ConfigError>>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Root {
    node: MappingNode,
}

impl Root {
    /// Create an empty root with an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty root whose text sources are substituted with `context`.
    #[must_use]
    pub fn with_context(context: Context) -> Self {
        Self {
            node: MappingNode::with_context(context),
        }
    }

    /// Create a root bound to `context` and merge `sources` into it.
    ///
    /// # Errors
    ///
    /// Propagates any failure from [`Root::merge`].
    pub fn from_sources<'a, I>(context: Context, sources: I) -> ConfigResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Source<'a>>,
    {
        let mut root = Self::with_context(context);
        root.merge(sources)?;
        Ok(root)
    }

    /// Merge `sources` into this root, in order.
    ///
    /// # Errors
    ///
    /// See [`crate::merge()`].
    pub fn merge<'a, I>(&mut self, sources: I) -> ConfigResult<()>
    where
        I: IntoIterator,
        I::Item: Into<Source<'a>>,
    {
        merge(&mut self.node, sources)
    }

    /// Load the configuration file at `path` and merge it into this root.
    ///
    /// The format follows the file extension (see [`Format::from_path`]) and
    /// the contents are substituted with this root's context first. A file
    /// without content leaves the root untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SourceNotFound`] when the file does not exist,
    /// [`ConfigError::File`] when it cannot be read or parsed, and
    /// [`ConfigError::TypeMismatch`] when its top level is not a mapping.
    pub fn load_file(&mut self, path: impl AsRef<Utf8Path>) -> ConfigResult<()> {
        let file_path = path.as_ref();
        let text = file::read_source(file_path)?;
        let parsed = parse_with_format(Format::from_path(file_path), &text, self.node.context())
            .map_err(|err| ConfigError::file(file_path, err))?;
        let Some(value) = parsed else {
            tracing::debug!(path = %file_path, "configuration file has no content; skipped");
            return Ok(());
        };
        tracing::debug!(path = %file_path, "merging configuration file");
        self.merge([Source::Data(Cow::Owned(value))])
    }

    /// Deserialise the whole tree into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Deserialize`] when the tree does not fit `T`.
    pub fn extract<T: DeserializeOwned>(&self) -> ConfigResult<T> {
        serde_json::to_value(&self.node)
            .and_then(serde_json::from_value)
            .into_config()
    }

    /// Borrow the underlying mapping node.
    #[must_use]
    pub const fn as_node(&self) -> &MappingNode {
        &self.node
    }

    /// Consume the root, returning its mapping node.
    #[must_use]
    pub fn into_node(self) -> MappingNode {
        self.node
    }
}

impl Deref for Root {
    type Target = MappingNode;

    fn deref(&self) -> &Self::Target {
        &self.node
    }
}

impl DerefMut for Root {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.node
    }
}

impl From<MappingNode> for Root {
    fn from(node: MappingNode) -> Self {
        Self { node }
    }
}

impl Serialize for Root {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.node.serialize(serializer)
    }
}
