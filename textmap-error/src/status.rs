// textmap - textmap-error
// Module: Operation Status
//
// Copyright (c) 2025 The textmap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Four-valued status reported by mutating map operations.
//!
//! `MapStatus` is `#[repr(C)]` and crosses the C ABI unchanged; its
//! discriminants are the `MAP_*` constants of `textmap.h`.

use core::fmt;

use crate::Result;

/// Outcome of a mutating map operation.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapStatus {
    /// The operation completed
    Success          = 0,
    /// A required reference was absent
    NullArgument     = 1,
    /// An allocation failed
    OutOfMemory      = 2,
    /// The remove target was not found
    ItemDoesNotExist = 3,
}

impl MapStatus {
    /// Returns `true` for [`MapStatus::Success`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl<T> From<Result<T>> for MapStatus {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(error) => error.status(),
        }
    }
}

impl fmt::Display for MapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "MAP_SUCCESS",
            Self::NullArgument => "MAP_NULL_ARGUMENT",
            Self::OutOfMemory => "MAP_OUT_OF_MEMORY",
            Self::ItemDoesNotExist => "MAP_ITEM_DOES_NOT_EXIST",
        };
        f.write_str(name)
    }
}
