//! Defines some common functions used in this library.

/// Defines some checker functions.
pub(crate) mod checker;
