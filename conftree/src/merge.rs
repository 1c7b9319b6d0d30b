//! The merge driver: normalises sources and feeds them to a target node.

use std::borrow::Cow;

use crate::{ConfigError, ConfigResult, ConfigValue, Node, Source, convert, parse_text};

/// Merge each source into `target`, strictly in the order given.
///
/// Text sources are substituted with the target's context and parsed as
/// YAML; text that yields no content is skipped. Structured data is wrapped
/// through [`convert`] and tree values are used as they are. Later sources
/// win conflicts, so one call with several sources behaves exactly like one
/// call per source.
///
/// # Errors
///
/// Returns [`ConfigError::TypeMismatch`] when a source has a shape the target
/// cannot absorb, and propagates parse failures from text sources. Sources
/// before the failing one have already been merged.
///
/// # Examples
///
/// ```
/// use conftree::{merge, MappingNode};
/// use serde_json::json;
///
/// let mut root = MappingNode::new();
/// merge(&mut root, [json!({"a": {"a1": 1}, "b": [1, 2, 3]}), json!({"b": [4]})])?;
/// assert_eq!(root.get("b")?.as_sequence().map(|b| b.len()), Some(1));
/// # Ok::<_, std::sync::Arc<conftree::ConfigError>>(())
/// ```
pub fn merge<'a, N, I>(target: &mut N, sources: I) -> ConfigResult<()>
where
    N: Node,
    I: IntoIterator,
    I::Item: Into<Source<'a>>,
{
    for source in sources {
        let Some(data) = normalise(target, source.into())? else {
            tracing::debug!("skipping configuration text without content");
            continue;
        };
        if !target.can_merge(&data) {
            return Err(ConfigError::type_mismatch(target.shape(), data.shape()));
        }
        target.merge_into(&data);
    }
    Ok(())
}

fn normalise<'a, N: Node>(
    target: &N,
    source: Source<'a>,
) -> ConfigResult<Option<Cow<'a, ConfigValue>>> {
    Ok(match source {
        Source::Text(text) => parse_text(&text, target.context())?
            .map(|raw| Cow::Owned(convert(&raw, target.context()))),
        Source::Data(raw) => Some(Cow::Owned(convert(&raw, target.context()))),
        Source::Tree(tree) => Some(tree),
    })
}
