//! Ordered sequence node with whole-contents replacement on merge.

use std::ops::Index;

use super::Node;
use crate::{ConfigValue, Context, Shape};

/// Ordered list of configuration values.
///
/// Elements have no identity across merges: merging another sequence
/// discards the current contents and takes the new ones in order.
#[derive(Clone, Debug, Default)]
pub struct SequenceNode {
    items: Vec<ConfigValue>,
    context: Context,
}

impl SequenceNode {
    /// Create an empty sequence with an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sequence bound to `context`.
    #[must_use]
    pub const fn with_context(context: Context) -> Self {
        Self {
            items: Vec::new(),
            context,
        }
    }

    /// Create a sequence bound to `context` holding `values`.
    #[must_use]
    pub fn from_values<I>(context: Context, values: I) -> Self
    where
        I: IntoIterator<Item = ConfigValue>,
    {
        Self {
            items: values.into_iter().collect(),
            context,
        }
    }

    /// Substitution variables shared by this node's tree.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Borrow the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ConfigValue> {
        self.items.get(index)
    }

    /// Number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the sequence has no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ConfigValue> {
        self.items.iter()
    }

    /// Append a value.
    pub fn push(&mut self, value: impl Into<ConfigValue>) {
        self.items.push(value.into());
    }

    /// Deep copy this sequence, re-homing every nested node onto `context`.
    #[must_use]
    pub fn copy_with_context(&self, context: &Context) -> Self {
        Self {
            items: self
                .items
                .iter()
                .map(|item| item.copy_with_context(context))
                .collect(),
            context: context.clone(),
        }
    }
}

impl Node for SequenceNode {
    /// Only sequences are accepted. An empty sequence is accepted too and
    /// clears the destination.
    fn can_merge(&self, data: &ConfigValue) -> bool {
        matches!(data, ConfigValue::Sequence(_))
    }

    fn merge_into(&mut self, data: &ConfigValue) {
        let ConfigValue::Sequence(incoming) = data else {
            return;
        };
        self.items = incoming
            .items
            .iter()
            .map(|item| item.copy_with_context(&self.context))
            .collect();
    }

    fn shape(&self) -> Shape {
        Shape::Sequence
    }

    fn context(&self) -> &Context {
        Self::context(self)
    }

    fn empty(&self) -> Self {
        Self::with_context(self.context.clone())
    }
}

impl PartialEq for SequenceNode {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Index<usize> for SequenceNode {
    type Output = ConfigValue;

    #[expect(
        clippy::indexing_slicing,
        reason = "out-of-range positions panic exactly as slice indexing does"
    )]
    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a SequenceNode {
    type Item = &'a ConfigValue;
    type IntoIter = std::slice::Iter<'a, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
