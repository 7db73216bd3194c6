// textmap - textmap
//
// Copyright (c) 2025 The textmap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Owned string-to-string map.
//!
//! This crate provides [`StringMap`], a small associative container mapping
//! text keys to text values. Keys and values are copied in and owned by the
//! map; lookups scan the live entries linearly; a full map doubles its slot
//! storage. Every allocation is fallible and reported as an
//! [`Error`](textmap_error::Error) instead of aborting, and an optional byte
//! budget ([`MapConfig::with_byte_budget`]) bounds what a map may hold.
//!
//! It supports two configurations:
//! - `std`: Full standard library support (default)
//! - `no_std` + `alloc`: No standard library, heap through `alloc`
//!
//! # Feature Flags
//!
//! - `std`: Enables standard library support
//! - `tracing`: Emits structured events and spans through `tracing`
//!
//! # Example
//!
//! ```
//! use textmap::StringMap;
//!
//! let mut map = StringMap::new()?;
//! map.put("host", "localhost")?;
//! map.put("port", "8080")?;
//!
//! for key in map.keys() {
//!     assert!(map.contains(key));
//! }
//! # Ok::<(), textmap_error::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Prelude module for consistent imports across std and no_std environments
pub mod prelude;

/// Byte accounting for slot storage and text copies
pub mod budget;
/// Construction-time limits
pub mod config;
/// Owned key/value pairs
pub mod entry;
/// The string map itself
pub mod map;

#[cfg(feature = "tracing")]
pub mod tracing;

pub use budget::MemoryBudget;
pub use config::{MapConfig, DEFAULT_INITIAL_CAPACITY, GROWTH_FACTOR};
pub use entry::Entry;
pub use map::{Iter, Keys, StringMap, Values};
// Re-export error related types for convenience
pub use textmap_error::{codes, Error, ErrorCategory, MapStatus};

/// Result type alias for textmap operations using `textmap_error::Error`
pub type Result<T> = core::result::Result<T, Error>;
