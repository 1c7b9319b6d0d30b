//! Tree nodes and the contract they share.
//!
//! Mapping nodes deep-merge key by key; sequence nodes replace their whole
//! contents. Anything that is not a node is a scalar and is replaced
//! wholesale, which yields the overall rule: deep merge for mappings,
//! whole-value replace for everything else.

mod mapping;
mod sequence;

pub use mapping::MappingNode;
pub use sequence::SequenceNode;

use crate::{ConfigResult, ConfigValue, Context, Shape, Source};

/// Behaviour shared by every configuration tree node.
///
/// `Clone` is the deep, independent copy: cloned nodes share nothing mutable
/// with the original, only the read-only [`Context`].
pub trait Node: Clone {
    /// Returns `true` when `data` has a shape this node can absorb in place.
    fn can_merge(&self, data: &ConfigValue) -> bool;

    /// Merge `data` into this node in place.
    ///
    /// Callers must check [`Node::can_merge`] first; data of any other shape
    /// leaves the node untouched.
    fn merge_into(&mut self, data: &ConfigValue);

    /// Shape of the data this node holds.
    fn shape(&self) -> Shape;

    /// Substitution variables shared by this node's tree.
    fn context(&self) -> &Context;

    /// A fresh node of the same kind with no content and the same context.
    #[must_use]
    fn empty(&self) -> Self;

    /// Merge each source into this node, in order.
    ///
    /// # Errors
    ///
    /// See [`crate::merge()`].
    fn merge<'a, I>(&mut self, sources: I) -> ConfigResult<()>
    where
        I: IntoIterator,
        I::Item: Into<Source<'a>>,
    {
        crate::merge::merge(self, sources)
    }
}
