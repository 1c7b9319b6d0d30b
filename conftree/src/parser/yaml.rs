//! YAML decoding into [`serde_json::Value`].
//!
//! `serde-saphyr` hands plain null scalars (`~`, `null`, an empty value) to
//! `deserialize_any` as text and only reports them as null when asked for an
//! option. Every node is therefore requested as an option first, so YAML
//! nulls decode to [`Value::Null`] while quoted `'~'` stays a string.

use std::fmt;

use serde::de::{Deserialize, Deserializer, Error, MapAccess, SeqAccess, Visitor};
use serde_json::{Map, Number, Value};
use serde_saphyr::Options;

use crate::{ConfigResult, ConfigResultExt};

struct YamlNode(Value);

impl<'de> Deserialize<'de> for YamlNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = YamlNode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a YAML node")
    }

    fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
        Ok(YamlNode(Value::Null))
    }

    fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
        Ok(YamlNode(Value::Null))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(YamlNode(Value::Bool(v)))
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(YamlNode(Value::from(v)))
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(YamlNode(Value::from(v)))
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(YamlNode(Number::from_f64(v).map_or(Value::Null, Value::Number)))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(YamlNode(Value::String(v.to_owned())))
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(YamlNode(Value::String(v)))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or_default());
        while let Some(YamlNode(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(YamlNode(Value::Array(items)))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Map::new();
        while let Some((key, YamlNode(value))) = map.next_entry::<String, YamlNode>()? {
            entries.insert(key, value);
        }
        Ok(YamlNode(Value::Object(entries)))
    }
}

/// Decode one YAML document with strict booleans (`yes` stays a string).
pub(super) fn from_str(text: &str) -> ConfigResult<Value> {
    serde_saphyr::from_str_with_options::<YamlNode>(
        text,
        Options {
            strict_booleans: true,
            ..Options::default()
        },
    )
    .map(|YamlNode(value)| value)
    .into_config()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::from_str;

    #[rstest]
    #[case::empty_value("a:")]
    #[case::tilde("a: ~")]
    #[case::lowercase("a: null")]
    #[case::capitalised("a: Null")]
    #[case::flow("{a: ~}")]
    fn null_forms_decode_to_null(#[case] text: &str) {
        assert_eq!(from_str(text).expect("decode"), json!({"a": null}));
    }

    #[rstest]
    #[case::single("a: '~'", "~")]
    #[case::double("a: \"null\"", "null")]
    #[case::empty("a: ''", "")]
    fn quoted_null_forms_stay_strings(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(from_str(text).expect("decode"), json!({"a": expected}));
    }

    #[test]
    fn nulls_inside_sequences_and_nested_mappings() {
        let text = "items: [~, 1, null]\nnested:\n  inner:\n  other: 2";
        assert_eq!(
            from_str(text).expect("decode"),
            json!({"items": [null, 1, null], "nested": {"inner": null, "other": 2}})
        );
    }

    #[test]
    fn document_marker_alone_is_null() {
        assert_eq!(from_str("---\n").expect("decode"), Value::Null);
    }

    #[test]
    fn integers_beyond_u64_decode_as_floats() {
        let value = from_str("big: 18446744073709551616").expect("decode");
        assert!(value["big"].is_f64(), "unexpected value: {value}");
    }
}
