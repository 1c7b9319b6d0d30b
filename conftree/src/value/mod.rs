//! The closed value model stored inside configuration trees.
//!
//! Every position in a tree holds a [`ConfigValue`]: either a mapping node, a
//! sequence node, or a plain [`Scalar`] leaf. Scalars are not nodes; they
//! never merge and are always replaced wholesale.

mod encode;

use std::fmt;

use serde_json::Number;

use crate::{Context, MappingNode, SequenceNode};

/// Leaf value stored directly inside mapping and sequence nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Scalar {
    /// Explicit null (`~`, `null` or an empty YAML value).
    #[default]
    Null,
    /// Boolean leaf.
    Bool(bool),
    /// Integer or floating point leaf.
    ///
    /// Integers are exact within the `i64` and `u64` ranges. Larger integers
    /// in YAML or JSON sources are decoded as `f64` and lose precision; quote
    /// them to keep every digit.
    Number(Number),
    /// Text leaf.
    String(String),
}

/// Coarse classification of a value, used by merge checks and errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Shape {
    /// Ordered key to value container.
    Mapping,
    /// Ordered list of values.
    Sequence,
    /// Boolean, number or string leaf.
    Scalar,
    /// Absent or null data.
    Null,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mapping => "mapping",
            Self::Sequence => "sequence",
            Self::Scalar => "scalar",
            Self::Null => "null",
        })
    }
}

/// A value held by a configuration tree.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigValue {
    /// Nested mapping node.
    Mapping(MappingNode),
    /// Nested sequence node.
    Sequence(SequenceNode),
    /// Leaf value.
    Scalar(Scalar),
}

impl ConfigValue {
    /// Shorthand for a null scalar.
    pub const NULL: Self = Self::Scalar(Scalar::Null);

    /// Classify this value.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Mapping(_) => Shape::Mapping,
            Self::Sequence(_) => Shape::Sequence,
            Self::Scalar(Scalar::Null) => Shape::Null,
            Self::Scalar(_) => Shape::Scalar,
        }
    }

    /// Returns `true` for mapping and sequence nodes.
    #[must_use]
    pub const fn is_node(&self) -> bool {
        matches!(self, Self::Mapping(_) | Self::Sequence(_))
    }

    /// Returns `true` for the null scalar.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    /// Returns `true` for null, empty mappings and empty sequences.
    ///
    /// Text sources whose parsed content is empty are skipped by the merge
    /// driver rather than merged.
    #[must_use]
    pub fn is_empty_content(&self) -> bool {
        match self {
            Self::Mapping(map) => map.is_empty(),
            Self::Sequence(seq) => seq.is_empty(),
            Self::Scalar(scalar) => matches!(scalar, Scalar::Null),
        }
    }

    /// Borrow the mapping node, if this is one.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&MappingNode> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Mutably borrow the mapping node, if this is one.
    pub const fn as_mapping_mut(&mut self) -> Option<&mut MappingNode> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow the sequence node, if this is one.
    #[must_use]
    pub const fn as_sequence(&self) -> Option<&SequenceNode> {
        match self {
            Self::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// Borrow the scalar leaf, if this is one.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Borrow a string leaf.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Read a boolean leaf.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Read an integer leaf that fits in `i64`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Scalar(Scalar::Number(n)) => n.as_i64(),
            _ => None,
        }
    }

    /// Read an integer leaf that fits in `u64`.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Scalar(Scalar::Number(n)) => n.as_u64(),
            _ => None,
        }
    }

    /// Read a numeric leaf as `f64`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Scalar(Scalar::Number(n)) => n.as_f64(),
            _ => None,
        }
    }

    /// Deep copy this value, re-homing every nested node onto `context`.
    #[must_use]
    pub fn copy_with_context(&self, context: &Context) -> Self {
        match self {
            Self::Mapping(map) => Self::Mapping(map.copy_with_context(context)),
            Self::Sequence(seq) => Self::Sequence(seq.copy_with_context(context)),
            Self::Scalar(scalar) => Self::Scalar(scalar.clone()),
        }
    }
}

impl Default for ConfigValue {
    fn default() -> Self {
        Self::NULL
    }
}

impl From<Scalar> for ConfigValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<MappingNode> for ConfigValue {
    fn from(value: MappingNode) -> Self {
        Self::Mapping(value)
    }
}

impl From<SequenceNode> for ConfigValue {
    fn from(value: SequenceNode) -> Self {
        Self::Sequence(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::Number(value.into()))
    }
}

impl From<u64> for ConfigValue {
    fn from(value: u64) -> Self {
        Self::Scalar(Scalar::Number(value.into()))
    }
}

/// Non-finite floats have no JSON number form and become null.
impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::NULL, |n| Self::Scalar(Scalar::Number(n)))
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Scalar(Scalar::String(value.to_owned()))
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Scalar(Scalar::String(value))
    }
}
