//! Conversion of decoded structured data into tree values.

use serde_json::Value;

use crate::{ConfigValue, Context, MappingNode, Scalar, SequenceNode};

/// Wrap decoded data into a tree value.
///
/// Objects become [`MappingNode`]s and arrays become [`SequenceNode`]s, both
/// carrying `context` and both converted recursively. Everything else passes
/// through as a [`Scalar`].
///
/// # Examples
///
/// ```
/// use conftree::{convert, Context, Shape};
/// use serde_json::json;
///
/// let value = convert(&json!({"b": [1, 2]}), &Context::new());
/// assert_eq!(value.shape(), Shape::Mapping);
/// assert_eq!(convert(&json!("x"), &Context::new()).as_str(), Some("x"));
/// ```
#[must_use]
pub fn convert(raw: &Value, context: &Context) -> ConfigValue {
    match raw {
        Value::Object(map) => {
            let mut node = MappingNode::with_context(context.clone());
            for (key, value) in map {
                node.set(key.clone(), convert(value, context));
            }
            ConfigValue::Mapping(node)
        }
        Value::Array(items) => ConfigValue::Sequence(SequenceNode::from_values(
            context.clone(),
            items.iter().map(|item| convert(item, context)),
        )),
        Value::Null => ConfigValue::NULL,
        Value::Bool(b) => ConfigValue::Scalar(Scalar::Bool(*b)),
        Value::Number(n) => ConfigValue::Scalar(Scalar::Number(n.clone())),
        Value::String(s) => ConfigValue::Scalar(Scalar::String(s.clone())),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::convert;
    use crate::{Context, Shape};

    #[rstest]
    #[case(json!({"a": 1}), Shape::Mapping)]
    #[case(json!({}), Shape::Mapping)]
    #[case(json!([1, "two"]), Shape::Sequence)]
    #[case(json!(3), Shape::Scalar)]
    #[case(json!("text"), Shape::Scalar)]
    #[case(json!(false), Shape::Scalar)]
    #[case(Value::Null, Shape::Null)]
    fn classifies_decoded_data(#[case] raw: Value, #[case] expected: Shape) {
        assert_eq!(convert(&raw, &Context::new()).shape(), expected);
    }

    #[test]
    fn nested_nodes_inherit_the_context() {
        let context = Context::new().with("env", "prod");
        let value = convert(&json!({"a": [{"b": 1}]}), &context);
        let map = value.as_mapping().expect("mapping root");
        let seq = map
            .get("a")
            .ok()
            .and_then(|v| v.as_sequence())
            .expect("sequence under a");
        let inner = seq.get(0).and_then(|v| v.as_mapping()).expect("inner mapping");
        assert!(map.context().ptr_eq(&context));
        assert!(seq.context().ptr_eq(&context));
        assert!(inner.context().ptr_eq(&context));
    }
}
