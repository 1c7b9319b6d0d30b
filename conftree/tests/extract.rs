//! Integration tests for reading merged trees into typed structures.
use anyhow::{Result, anyhow, ensure};
use conftree::{ConfigError, Context, Root};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, PartialEq)]
struct Settings {
    name: String,
    server: Server,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Server {
    host: String,
    port: u16,
}

#[test]
fn merged_tree_deserialises() -> Result<()> {
    let root = Root::from_sources(
        Context::new().with("port", 8080),
        [
            "name: demo\nserver:\n  host: localhost\n  port: 80\ntags: [a, b]",
            "server:\n  port: %(port)s\ntags: [c]",
        ],
    )?;
    let settings: Settings = root.extract()?;
    ensure!(
        settings
            == Settings {
                name: "demo".into(),
                server: Server {
                    host: "localhost".into(),
                    port: 8080,
                },
                tags: vec!["c".into()],
            }
    );
    Ok(())
}

#[test]
fn mismatched_trees_fail_to_deserialise() -> Result<()> {
    let root = Root::from_sources(Context::new(), [json!({"name": "demo", "server": 1})])?;
    let err = root
        .extract::<Settings>()
        .err()
        .ok_or_else(|| anyhow!("server must be a mapping"))?;
    ensure!(matches!(&*err, ConfigError::Deserialize(_)));
    Ok(())
}

#[test]
fn serialisation_keeps_key_order() -> Result<()> {
    let root = Root::from_sources(Context::new(), ["zeta: 1\nalpha: 2\nmid: {b: 1, a: 2}"])?;
    let text = serde_json::to_string(&root)?;
    ensure!(text == r#"{"zeta":1,"alpha":2,"mid":{"b":1,"a":2}}"#, "{text}");
    Ok(())
}
