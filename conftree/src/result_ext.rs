//! `?`-friendly conversion of decoder results into [`ConfigResult`].
//!
//! Any error type with a `From` conversion into [`ConfigError`] can be
//! lifted in one call, which keeps parser glue free of `map_err` closures.
//!
//! ```
//! use conftree::{ConfigError, ConfigResult, ConfigResultExt};
//!
//! fn port(text: &str) -> ConfigResult<u16> {
//!     serde_json::from_str(text).into_config()
//! }
//! assert_eq!(port("8080").ok(), Some(8080));
//! let err = port("\"http\"").unwrap_err();
//! assert!(matches!(*err, ConfigError::Deserialize(_)));
//! ```

use std::sync::Arc;

use crate::{ConfigError, ConfigResult};

/// Lifts `Result<T, E>` into [`ConfigResult<T>`].
pub trait ConfigResultExt<T> {
    /// Convert the error into a shared [`ConfigError`].
    ///
    /// # Errors
    ///
    /// Returns the converted error when `self` is `Err`.
    fn into_config(self) -> ConfigResult<T>;
}

impl<T, E> ConfigResultExt<T> for Result<T, E>
where
    E: Into<ConfigError>,
{
    fn into_config(self) -> ConfigResult<T> {
        self.map_err(|err| Arc::new(err.into()))
    }
}
