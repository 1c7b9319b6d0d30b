//! Error types produced while building and reading configuration trees.

mod constructors;
mod conversions;
mod types;

pub use types::ConfigError;

#[cfg(test)]
mod tests;
