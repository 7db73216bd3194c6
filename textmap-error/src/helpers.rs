// textmap - textmap-error
// Module: Error Helpers
//
// Copyright (c) 2025 The textmap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error helper functions for common error patterns.

use crate::{Error, Result};

/// Turn an optional argument into a value or a null argument error.
///
/// # Errors
///
/// Returns [`Error::NULL_ARGUMENT`] carrying `what` when `value` is `None`.
pub fn require<T>(value: Option<T>, what: &'static str) -> Result<T> {
    value.ok_or(Error::null_argument(what))
}

/// Create an error for a refused allocation of `what`
#[must_use]
pub const fn allocation_failed_error(what: &'static str) -> Error {
    Error::out_of_memory(what)
}

/// Create an error for a missing entry
#[must_use]
pub const fn missing_key_error(what: &'static str) -> Error {
    Error::item_does_not_exist(what)
}
