//! Ordered mapping node with key-wise recursive merge.

use indexmap::IndexMap;

use super::Node;
use crate::{ConfigError, ConfigResult, ConfigValue, Context, Shape};

/// Ordered mapping from literal string keys to configuration values.
///
/// Keys keep the position at which they were first inserted; later updates
/// replace the value in place. Keys are never split on dots: `"a.b"` is one
/// key, not a path.
///
/// # Examples
///
/// ```
/// use conftree::{MappingNode, Node};
/// use serde_json::json;
///
/// let mut node = MappingNode::new();
/// node.merge([json!({"a": {"x": 1}})])?;
/// node.merge([json!({"a": {"y": 2}})])?;
/// let a = node.get("a")?.as_mapping().expect("mapping");
/// assert_eq!(a.get("x")?.as_i64(), Some(1));
/// assert_eq!(a.get("y")?.as_i64(), Some(2));
/// # Ok::<_, std::sync::Arc<conftree::ConfigError>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct MappingNode {
    entries: IndexMap<String, ConfigValue>,
    context: Context,
}

impl MappingNode {
    /// Create an empty mapping with an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mapping bound to `context`.
    #[must_use]
    pub fn with_context(context: Context) -> Self {
        Self {
            entries: IndexMap::new(),
            context,
        }
    }

    /// Substitution variables shared by this node's tree.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KeyNotFound`] when the key is absent.
    pub fn get(&self, key: &str) -> ConfigResult<&ConfigValue> {
        self.entries
            .get(key)
            .ok_or_else(|| ConfigError::key_not_found(key))
    }

    /// Mutably borrow the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KeyNotFound`] when the key is absent.
    pub fn get_mut(&mut self, key: &str) -> ConfigResult<&mut ConfigValue> {
        self.entries
            .get_mut(key)
            .ok_or_else(|| ConfigError::key_not_found(key))
    }

    /// Store `value` under `key`, returning the value it replaced.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns `true` when `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Follow `segments` through nested mappings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KeyNotFound`] naming the dotted path up to the
    /// first segment that is missing or cannot be descended into. An empty
    /// path is reported the same way.
    pub fn get_path<S: AsRef<str>>(&self, segments: &[S]) -> ConfigResult<&ConfigValue> {
        let missing = |depth: usize| {
            let walked: Vec<&str> = segments.iter().take(depth + 1).map(AsRef::as_ref).collect();
            ConfigError::key_not_found(walked.join("."))
        };
        let Some((last, parents)) = segments.split_last() else {
            return Err(missing(0));
        };
        let mut node = self;
        for (depth, segment) in parents.iter().enumerate() {
            node = node
                .entries
                .get(segment.as_ref())
                .and_then(ConfigValue::as_mapping)
                .ok_or_else(|| missing(depth))?;
        }
        node.entries
            .get(last.as_ref())
            .ok_or_else(|| missing(parents.len()))
    }

    /// Walk `segments`, creating an empty mapping for each missing one, and
    /// return the innermost mapping.
    ///
    /// Created mappings share this node's context. Sibling keys are never
    /// touched. An empty path returns `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NamespaceConflict`] when a segment already holds
    /// a sequence or scalar.
    ///
    /// # Examples
    ///
    /// ```
    /// use conftree::MappingNode;
    ///
    /// let mut root = MappingNode::new();
    /// root.ensure_namespace(&["server", "token"])?.set("salt", 1345_i64);
    /// assert_eq!(root.get_path(&["server", "token", "salt"])?.as_i64(), Some(1345));
    /// # Ok::<_, std::sync::Arc<conftree::ConfigError>>(())
    /// ```
    pub fn ensure_namespace<S: AsRef<str>>(&mut self, segments: &[S]) -> ConfigResult<&mut Self> {
        let mut node = self;
        for segment in segments.iter().map(AsRef::<str>::as_ref) {
            if !node.entries.contains_key(segment) {
                tracing::trace!(segment, "creating configuration namespace");
                let fresh = node.empty();
                node.entries
                    .insert(segment.to_owned(), ConfigValue::Mapping(fresh));
            }
            node = match node.entries.get_mut(segment) {
                Some(ConfigValue::Mapping(inner)) => inner,
                Some(other) => {
                    return Err(std::sync::Arc::new(ConfigError::NamespaceConflict {
                        segment: segment.to_owned(),
                        found: other.shape(),
                    }));
                }
                None => return Err(ConfigError::key_not_found(segment)),
            };
        }
        Ok(node)
    }

    /// Deep copy this mapping, re-homing every nested node onto `context`.
    #[must_use]
    pub fn copy_with_context(&self, context: &Context) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(k, v)| (k.clone(), v.copy_with_context(context)))
                .collect(),
            context: context.clone(),
        }
    }
}

/// Merge `data` into an existing value when that value is a node able to
/// absorb it. Returns `false` when the caller must replace the value.
fn absorb(existing: &mut ConfigValue, data: &ConfigValue) -> bool {
    match existing {
        ConfigValue::Mapping(node) if node.can_merge(data) => {
            node.merge_into(data);
            true
        }
        ConfigValue::Sequence(node) if node.can_merge(data) => {
            node.merge_into(data);
            true
        }
        _ => false,
    }
}

impl Node for MappingNode {
    fn can_merge(&self, data: &ConfigValue) -> bool {
        matches!(data, ConfigValue::Mapping(_))
    }

    fn merge_into(&mut self, data: &ConfigValue) {
        let ConfigValue::Mapping(incoming) = data else {
            return;
        };
        for (key, value) in &incoming.entries {
            let merged = self
                .entries
                .get_mut(key)
                .is_some_and(|existing| absorb(existing, value));
            if !merged {
                self.entries.insert(key.clone(), value.clone());
            }
        }
    }

    fn shape(&self) -> Shape {
        Shape::Mapping
    }

    fn context(&self) -> &Context {
        Self::context(self)
    }

    fn empty(&self) -> Self {
        Self::with_context(self.context.clone())
    }
}

/// Order-sensitive comparison of entries; contexts are ignored.
impl PartialEq for MappingNode {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl<'a> IntoIterator for &'a MappingNode {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = indexmap::map::Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::MappingNode;
    use crate::{ConfigError, ConfigValue, Context, Node, Shape, convert};

    fn node(raw: &Value) -> MappingNode {
        match convert(raw, &Context::new()) {
            ConfigValue::Mapping(map) => map,
            other => panic!("expected a mapping, got {other:?}"),
        }
    }

    fn merged(target: &Value, source: &Value) -> Value {
        let mut merged = node(target);
        merged.merge_into(&convert(source, &Context::new()));
        Value::from(&merged)
    }

    #[rstest]
    #[case::deep_merge(json!({"a": {"x": 1}}), json!({"a": {"y": 2}}), json!({"a": {"x": 1, "y": 2}}))]
    #[case::mapping_replaces_scalar(json!({"a": 1}), json!({"a": {"x": 1}}), json!({"a": {"x": 1}}))]
    #[case::scalar_replaces_mapping(json!({"a": {"x": 1}}), json!({"a": 5}), json!({"a": 5}))]
    #[case::sequence_replaced(json!({"b": [1, 2, 3]}), json!({"b": [4]}), json!({"b": [4]}))]
    #[case::mapping_replaces_sequence(json!({"b": [1]}), json!({"b": {"c": 1}}), json!({"b": {"c": 1}}))]
    #[case::sequence_replaces_mapping(json!({"b": {"c": 1}}), json!({"b": [1]}), json!({"b": [1]}))]
    #[case::null_replaces_value(json!({"a": {"x": 1}}), json!({"a": null}), json!({"a": null}))]
    #[case::empty_mapping_is_noop(json!({"a": {"x": 1}}), json!({"a": {}}), json!({"a": {"x": 1}}))]
    #[case::untouched_keys_survive(json!({"a": 1, "b": 2}), json!({"c": 3}), json!({"a": 1, "b": 2, "c": 3}))]
    fn merges_follow_shape_rules(#[case] target: Value, #[case] source: Value, #[case] expected: Value) {
        assert_eq!(merged(&target, &source), expected);
    }

    #[test]
    fn existing_keys_keep_their_position() {
        let mut target = node(&json!({"a": 1, "b": 2, "c": 3}));
        target.merge_into(&convert(&json!({"d": 4, "b": 20, "e": 5}), &Context::new()));
        let keys: Vec<&str> = target.keys().collect();
        assert_eq!(keys, ["a", "b", "c", "d", "e"]);
        assert_eq!(target.get("b").ok().and_then(ConfigValue::as_i64), Some(20));
    }

    #[test]
    fn nested_merge_keeps_node_identity_context() {
        let context = Context::new().with("k", "v");
        let mut target = MappingNode::with_context(context.clone());
        target.merge_into(&convert(&json!({"a": {"x": 1}}), &context));
        target.merge_into(&convert(&json!({"a": {"y": 2}}), &Context::new()));
        let a = target.get("a").ok().and_then(ConfigValue::as_mapping).expect("a is a mapping");
        assert!(a.context().ptr_eq(&context));
    }

    #[test]
    fn dotted_keys_are_literal() {
        let root = node(&json!({"server.token.salt": 1345}));
        assert_eq!(
            root.get("server.token.salt").ok().and_then(ConfigValue::as_i64),
            Some(1345)
        );
        assert!(!root.contains_key("server"));
        let err = root.get_path(&["server", "token", "salt"]).expect_err("no nested path");
        assert!(matches!(&*err, ConfigError::KeyNotFound { key } if key == "server"));
    }

    #[test]
    fn get_path_reports_the_walked_prefix() {
        let root = node(&json!({"app": {"listen": {"port": 80}}}));
        assert_eq!(
            root.get_path(&["app", "listen", "port"]).ok().and_then(ConfigValue::as_i64),
            Some(80)
        );
        let err = root.get_path(&["app", "missing", "port"]).expect_err("missing segment");
        assert!(matches!(&*err, ConfigError::KeyNotFound { key } if key == "app.missing"));
    }

    #[test]
    fn ensure_namespace_creates_missing_segments_only() {
        let context = Context::new().with("c", 1);
        let mut root = MappingNode::with_context(context.clone());
        root.set("sibling", "kept");
        let inner = root.ensure_namespace(&["server", "token"]).expect("namespace");
        assert!(inner.is_empty());
        assert!(inner.context().ptr_eq(&context));
        inner.set("salt", 7_i64);

        root.ensure_namespace(&["server"]).expect("existing namespace").set("host", "h");
        let keys: Vec<&str> = root.keys().collect();
        assert_eq!(keys, ["sibling", "server"]);
        assert_eq!(
            root.get_path(&["server", "token", "salt"]).ok().and_then(ConfigValue::as_i64),
            Some(7)
        );
        assert_eq!(root.get_path(&["server", "host"]).ok().and_then(ConfigValue::as_str), Some("h"));
    }

    #[test]
    fn ensure_namespace_refuses_to_descend_into_scalars() {
        let mut root = node(&json!({"server": 1}));
        let err = root.ensure_namespace(&["server", "token"]).expect_err("scalar segment");
        assert!(matches!(
            &*err,
            ConfigError::NamespaceConflict { segment, found: Shape::Scalar } if segment == "server"
        ));
    }

    #[test]
    fn equality_is_order_sensitive() {
        assert_eq!(node(&json!({"a": 1, "b": 2})), node(&json!({"a": 1, "b": 2})));
        assert_ne!(node(&json!({"a": 1, "b": 2})), node(&json!({"b": 2, "a": 1})));
    }
}
