//! Merge sources accepted by the merge driver.

use std::borrow::Cow;

use serde_json::Value;

use crate::{ConfigValue, MappingNode, SequenceNode};

/// One input to a merge call.
///
/// Sources borrow where they can; the tree only copies what it keeps.
#[derive(Clone, Debug)]
pub enum Source<'a> {
    /// Markup text, substituted with the target's context and parsed.
    Text(Cow<'a, str>),
    /// Structured data already decoded from markup.
    Data(Cow<'a, Value>),
    /// A value or node from another configuration tree.
    Tree(Cow<'a, ConfigValue>),
}

impl Source<'_> {
    /// Convert this source into a `'static` owned variant.
    #[must_use]
    pub fn into_owned(self) -> Source<'static> {
        match self {
            Self::Text(text) => Source::Text(Cow::Owned(text.into_owned())),
            Self::Data(data) => Source::Data(Cow::Owned(data.into_owned())),
            Self::Tree(tree) => Source::Tree(Cow::Owned(tree.into_owned())),
        }
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Source<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<Value> for Source<'_> {
    fn from(data: Value) -> Self {
        Self::Data(Cow::Owned(data))
    }
}

impl<'a> From<&'a Value> for Source<'a> {
    fn from(data: &'a Value) -> Self {
        Self::Data(Cow::Borrowed(data))
    }
}

impl From<ConfigValue> for Source<'_> {
    fn from(tree: ConfigValue) -> Self {
        Self::Tree(Cow::Owned(tree))
    }
}

impl<'a> From<&'a ConfigValue> for Source<'a> {
    fn from(tree: &'a ConfigValue) -> Self {
        Self::Tree(Cow::Borrowed(tree))
    }
}

impl From<MappingNode> for Source<'_> {
    fn from(node: MappingNode) -> Self {
        Self::Tree(Cow::Owned(ConfigValue::Mapping(node)))
    }
}

impl From<&MappingNode> for Source<'_> {
    fn from(node: &MappingNode) -> Self {
        Self::Tree(Cow::Owned(ConfigValue::Mapping(node.clone())))
    }
}

impl From<SequenceNode> for Source<'_> {
    fn from(node: SequenceNode) -> Self {
        Self::Tree(Cow::Owned(ConfigValue::Sequence(node)))
    }
}

impl From<&SequenceNode> for Source<'_> {
    fn from(node: &SequenceNode) -> Self {
        Self::Tree(Cow::Owned(ConfigValue::Sequence(node.clone())))
    }
}
