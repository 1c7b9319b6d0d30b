//! Substitution variables shared by every node of a configuration tree.

use std::fmt::Display;
use std::sync::Arc;

use indexmap::IndexMap;

/// Immutable set of substitution variables used when a merge source is
/// markup text.
///
/// Cloning a context is cheap: all nodes of a tree point at the same
/// underlying map. Values are kept in string form because substitution
/// operates on raw text before it is parsed.
///
/// # Examples
///
/// ```
/// use conftree::Context;
///
/// let context = Context::new().with("port", 8080).with("host", "localhost");
/// assert_eq!(context.get("port"), Some("8080"));
/// assert_eq!(context.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Context {
    vars: Arc<IndexMap<String, String>>,
}

impl Context {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a context extended with `name = value`.
    ///
    /// Trees that already hold the previous context keep seeing it; the
    /// returned value is a new, independent context.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        Arc::make_mut(&mut self.vars).insert(name.into(), value.to_string());
        self
    }

    /// Look up the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns `true` when no variables are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over the bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `true` when both handles share the same underlying map.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.vars, &other.vars)
    }
}

impl<K, V> FromIterator<(K, V)> for Context
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.to_string()))
            .collect();
        Self {
            vars: Arc::new(vars),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Context;

    #[test]
    fn extending_a_shared_context_leaves_the_original_intact() {
        let base = Context::new().with("c", 3);
        let shared = base.clone();
        let extended = shared.with("d", 4);
        assert_eq!(base.len(), 1);
        assert_eq!(extended.get("d"), Some("4"));
        assert_eq!(base.get("d"), None);
    }

    #[test]
    fn collects_from_pairs_in_order() {
        let context: Context = [("b", 2), ("a", 1)].into_iter().collect();
        let names: Vec<&str> = context.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["b", "a"]);
    }
}
