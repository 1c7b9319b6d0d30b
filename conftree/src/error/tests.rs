//! Tests for error display, construction and conversion.

use std::error::Error as _;

use camino::Utf8Path;
use rstest::rstest;

use super::ConfigError;
use crate::{ConfigResult, ConfigResultExt, Shape};

#[rstest]
#[case::key(
    ConfigError::KeyNotFound { key: "server.port".into() },
    "configuration key not found: 'server.port'"
)]
#[case::mismatch(
    ConfigError::TypeMismatch { target: Shape::Mapping, data: Shape::Sequence },
    "cannot merge sequence data into a mapping node"
)]
#[case::namespace(
    ConfigError::NamespaceConflict { segment: "db".into(), found: Shape::Scalar },
    "namespace segment 'db' holds a scalar value, not a mapping"
)]
#[case::placeholder(
    ConfigError::UnknownPlaceholder { name: "home".into() },
    "unknown placeholder '%(home)s' in configuration text"
)]
#[case::already(ConfigError::AlreadyInitialized, "configuration is already initialised")]
#[case::not_yet(ConfigError::NotInitialized, "configuration is not initialised yet")]
fn display_messages(#[case] err: ConfigError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[test]
fn file_errors_keep_their_source() {
    let err = ConfigError::file(Utf8Path::new("conf/app.yaml"), "unexpected end of input");
    assert_eq!(
        err.to_string(),
        "configuration file error in 'conf/app.yaml': unexpected end of input"
    );
    let source = err.source().expect("file errors carry a source");
    assert_eq!(source.to_string(), "unexpected end of input");
}

#[test]
fn source_not_found_names_the_path() {
    let err = ConfigError::source_not_found(Utf8Path::new("missing.yaml"));
    assert!(matches!(&*err, ConfigError::SourceNotFound { path } if path == "missing.yaml"));
}

#[test]
fn type_mismatch_constructor_records_both_shapes() {
    let err = ConfigError::type_mismatch(Shape::Sequence, Shape::Null);
    assert!(matches!(
        &*err,
        ConfigError::TypeMismatch {
            target: Shape::Sequence,
            data: Shape::Null,
        }
    ));
}

#[test]
fn json_errors_convert_into_deserialize() {
    let result: ConfigResult<u16> = serde_json::from_str("\"eighty\"").into_config();
    let err = result.expect_err("string is not a port");
    assert!(matches!(&*err, ConfigError::Deserialize(_)));
}

#[test]
fn yaml_errors_convert_into_parse() {
    let result: ConfigResult<serde_json::Value> =
        serde_saphyr::from_str("a: [1, 2").into_config();
    let err = result.expect_err("unterminated sequence");
    assert!(matches!(&*err, ConfigError::Parse { .. }));
}
