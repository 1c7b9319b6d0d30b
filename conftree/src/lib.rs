//! Hierarchical configuration trees with deterministic, type-aware merging.
//!
//! A [`Root`] is built from successive sources: YAML text (substituted with
//! a [`Context`] first), decoded [`serde_json::Value`] data, configuration
//! files, or nodes taken from another tree. Each merge follows one rule:
//! mappings merge key by key, recursively, and everything else (sequences
//! and scalars) is replaced wholesale by the later source.
//!
//! ```rust
//! use conftree::Root;
//! use serde_json::json;
//!
//! let mut root = Root::new();
//! root.merge([
//!     json!({"a": {"a1": 1}, "b": [1, 2, 3]}),
//!     json!({"a": {"a2": 2}}),
//!     json!({"b": [4]}),
//! ])?;
//! assert_eq!(root.get_path(&["a", "a1"])?.as_i64(), Some(1));
//! assert_eq!(root.get_path(&["a", "a2"])?.as_i64(), Some(2));
//! assert_eq!(root.get("b")?.as_sequence().map(|b| b.len()), Some(1));
//! # Ok::<_, std::sync::Arc<conftree::ConfigError>>(())
//! ```

use std::sync::Arc;

mod context;
mod convert;
mod error;
mod file;
pub mod handle;
mod merge;
mod node;
mod parser;
mod provider;
mod result_ext;
mod root;
mod source;
mod value;

pub use context::Context;
pub use convert::convert;
pub use error::ConfigError;
pub use merge::merge;
pub use node::{MappingNode, Node, SequenceNode};
pub use parser::{Format, parse_text, parse_with_format};
pub use result_ext::ConfigResultExt;
pub use root::Root;
pub use source::Source;
pub use value::{ConfigValue, Scalar, Shape};

/// Result type used across the crate; errors are shared behind an [`Arc`].
pub type ConfigResult<T> = Result<T, Arc<ConfigError>>;
