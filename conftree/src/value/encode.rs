//! Serialisation of configuration trees.
//!
//! Trees serialise as plain nested maps, sequences and scalars with key
//! order preserved, which lets callers deserialise typed settings out of a
//! merged tree or hand it to another provider.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value;

use super::{ConfigValue, Scalar};
use crate::{MappingNode, SequenceNode};

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Mapping(map) => map.serialize(serializer),
            Self::Sequence(seq) => seq.serialize(serializer),
            Self::Scalar(scalar) => scalar.serialize(serializer),
        }
    }
}

impl Serialize for MappingNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for SequenceNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl From<&Scalar> for Value {
    fn from(scalar: &Scalar) -> Self {
        match scalar {
            Scalar::Null => Self::Null,
            Scalar::Bool(b) => Self::Bool(*b),
            Scalar::Number(n) => Self::Number(n.clone()),
            Scalar::String(s) => Self::String(s.clone()),
        }
    }
}

impl From<&MappingNode> for Value {
    fn from(map: &MappingNode) -> Self {
        Self::Object(
            map.iter()
                .map(|(key, value)| (key.to_owned(), Self::from(value)))
                .collect(),
        )
    }
}

impl From<&SequenceNode> for Value {
    fn from(seq: &SequenceNode) -> Self {
        Self::Array(seq.iter().map(Self::from).collect())
    }
}

impl From<&ConfigValue> for Value {
    fn from(value: &ConfigValue) -> Self {
        match value {
            ConfigValue::Mapping(map) => map.into(),
            ConfigValue::Sequence(seq) => seq.into(),
            ConfigValue::Scalar(scalar) => scalar.into(),
        }
    }
}
