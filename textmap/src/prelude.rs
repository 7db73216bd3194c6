// textmap - textmap
// Copyright (c) 2025 The textmap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for textmap
//!
//! Unified imports for std and `no_std` + alloc builds: the owned text and
//! vector types, common core traits, and the error surface of
//! `textmap-error`.

pub use alloc::{
    string::{String, ToString},
    vec::Vec,
};
pub use core::{
    fmt::{self, Debug, Display},
    iter::{ExactSizeIterator, FusedIterator, Iterator},
    mem,
};

pub use textmap_error::{
    allocation_failed_error, codes, missing_key_error, Error, ErrorCategory, MapStatus, Result,
};
