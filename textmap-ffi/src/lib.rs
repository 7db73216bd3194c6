// textmap - textmap-ffi
// Module: C ABI
//
// Copyright (c) 2025 The textmap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! C ABI for `textmap`.
//!
//! Exposes a [`StringMap`](textmap::StringMap) to C as an opaque `Map` handle. The build script
//! generates `include/textmap.h` from these sources with cbindgen, including the `MAP_FOREACH`
//! traversal macro.

pub mod map_api;
pub mod utils;

pub use map_api::*;
pub use textmap_error::MapStatus;
