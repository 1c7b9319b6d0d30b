//! Process-wide configuration with explicit initialisation and teardown.
//!
//! An application builds its [`Root`] once at startup and installs it with
//! [`initialize`] (or [`load`]). The returned [`ConfigHandle`] is the value to
//! pass to consumers; [`current`] exists for code that cannot be handed one.
//! A second initialisation is rejected unless `force` is set, and
//! [`teardown`] clears the slot again.
//!
//! Installed trees are read-only: callers needing to change configuration
//! build a new root and install it with `force`.
//!
//! # Examples
//!
//! ```
//! use conftree::handle::{self, LoadOptions};
//!
//! let options = LoadOptions::default().source("server:\n  port: 8080");
//! let config = handle::load(options, false)?;
//! assert_eq!(config.get_path(&["server", "port"])?.as_i64(), Some(8080));
//! assert!(handle::load(LoadOptions::default(), false).is_err());
//! handle::teardown();
//! # Ok::<_, std::sync::Arc<conftree::ConfigError>>(())
//! ```

use std::ops::Deref;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use crate::{ConfigError, ConfigResult, Context, Root, Source};

static ACTIVE: LazyLock<RwLock<Option<ConfigHandle>>> = LazyLock::new(RwLock::default);

/// Shared, read-only access to an installed configuration root.
#[derive(Clone, Debug)]
pub struct ConfigHandle {
    root: Arc<Root>,
}

impl ConfigHandle {
    /// Returns `true` when both handles refer to the same installed root.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.root, &other.root)
    }
}

impl Deref for ConfigHandle {
    type Target = Root;

    fn deref(&self) -> &Self::Target {
        &self.root
    }
}

/// Inputs used by [`load`] to build the root before installing it.
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    context: Context,
    sources: Vec<Source<'static>>,
}

impl LoadOptions {
    /// Use `context` for substitution in text sources.
    #[must_use]
    pub fn context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Append an initial source.
    #[must_use]
    pub fn source<'a>(mut self, source: impl Into<Source<'a>>) -> Self {
        self.sources.push(source.into().into_owned());
        self
    }
}

/// Install `root` as the process-wide configuration.
///
/// # Errors
///
/// Returns [`ConfigError::AlreadyInitialized`] when a configuration is
/// already installed and `force` is `false`.
pub fn initialize(root: Root, force: bool) -> ConfigResult<ConfigHandle> {
    let mut slot = ACTIVE.write();
    if slot.is_some() {
        if !force {
            return Err(Arc::new(ConfigError::AlreadyInitialized));
        }
        tracing::warn!("replacing the installed configuration");
    } else {
        tracing::info!("configuration initialised");
    }
    let handle = ConfigHandle {
        root: Arc::new(root),
    };
    *slot = Some(handle.clone());
    Ok(handle)
}

/// Build a root from `options` and install it.
///
/// The slot is checked before any source is parsed, so an
/// [`ConfigError::AlreadyInitialized`] failure does no work.
///
/// # Errors
///
/// Returns [`ConfigError::AlreadyInitialized`] as [`initialize`] does, and
/// propagates merge failures from the sources.
pub fn load(options: LoadOptions, force: bool) -> ConfigResult<ConfigHandle> {
    if !force && ACTIVE.read().is_some() {
        return Err(Arc::new(ConfigError::AlreadyInitialized));
    }
    let root = Root::from_sources(options.context, options.sources)?;
    initialize(root, force)
}

/// The installed configuration.
///
/// # Errors
///
/// Returns [`ConfigError::NotInitialized`] before the first successful
/// [`initialize`] or after [`teardown`].
pub fn current() -> ConfigResult<ConfigHandle> {
    ACTIVE
        .read()
        .clone()
        .ok_or_else(|| Arc::new(ConfigError::NotInitialized))
}

/// Remove the installed configuration, returning it.
///
/// Outstanding handles stay valid; only later [`current`] calls fail.
pub fn teardown() -> Option<ConfigHandle> {
    ACTIVE.write().take()
}
