// textmap - textmap-error
// Module: Error Prelude
//
// Copyright (c) 2025 The textmap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for textmap-error
//!
//! Re-exports the error types and helpers so dependent crates can pull the
//! whole error surface in with a single import.

pub use core::fmt::{
    self,
    Debug,
    Display,
};

pub use crate::helpers::*;
pub use crate::{
    codes,
    Error,
    ErrorCategory,
    MapStatus,
    Result,
};
