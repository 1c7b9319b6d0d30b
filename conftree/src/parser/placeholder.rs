//! `%(name)s` substitution applied to markup text before parsing.

use std::borrow::Cow;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::{ConfigError, ConfigResult, Context};

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal exercised by the unit tests below"
)]
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%(?:\((?P<name>[^)]*)\)s|%)").expect("placeholder pattern compiles")
});

/// Replace `%(name)s` with the context value bound to `name` and `%%` with a
/// literal `%`.
///
/// Text is returned untouched when the context is empty, so markup that
/// happens to contain `%(` parses verbatim in context-free trees. Any other
/// `%` sequence is left as written.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownPlaceholder`] when a name is not bound.
pub(crate) fn substitute<'t>(text: &'t str, context: &Context) -> ConfigResult<Cow<'t, str>> {
    if context.is_empty() || !text.contains('%') {
        return Ok(Cow::Borrowed(text));
    }
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in PLACEHOLDER.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(text.get(last..whole.start()).unwrap_or_default());
        match caps.name("name") {
            Some(name) => {
                let value = context.get(name.as_str()).ok_or_else(|| {
                    Arc::new(ConfigError::UnknownPlaceholder {
                        name: name.as_str().to_owned(),
                    })
                })?;
                out.push_str(value);
            }
            None => out.push('%'),
        }
        last = whole.end();
    }
    out.push_str(text.get(last..).unwrap_or_default());
    Ok(Cow::Owned(out))
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use rstest::rstest;

    use super::substitute;
    use crate::{ConfigError, Context};

    #[rstest]
    #[case("- %(c)s", "- 3")]
    #[case("rate: 100%%", "rate: 100%")]
    #[case("%(c)s%(name)s", "3app")]
    #[case("plain: text", "plain: text")]
    #[case("odd: 5%d", "odd: 5%d")]
    fn substitutes_bound_names(#[case] text: &str, #[case] expected: &str) {
        let context = Context::new().with("c", 3).with("name", "app");
        let out = substitute(text, &context).expect("substitution succeeds");
        assert_eq!(out, expected);
    }

    #[test]
    fn empty_context_leaves_text_verbatim() {
        let out = substitute("a: %(c)s", &Context::new()).expect("no substitution");
        assert!(matches!(out, Cow::Borrowed("a: %(c)s")));
    }

    #[test]
    fn unknown_names_fail() {
        let context = Context::new().with("c", 3);
        let err = substitute("a: %(missing)s", &context).expect_err("unbound name");
        assert!(matches!(&*err, ConfigError::UnknownPlaceholder { name } if name == "missing"));
    }
}
