// textmap - textmap-error
// Module: Error Handling
//
// Copyright (c) 2025 The textmap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! textmap error handling library
//!
//! Errors are organized into categories, each with its own range of error
//! codes:
//!
//! ## Parameter Errors (1000-1999)
//! - Absent arguments
//! - Malformed text
//!
//! ## Memory Errors (2000-2999)
//! - Allocator refusal
//! - Byte budget exhaustion
//!
//! ## Capacity Errors (3000-3999)
//! - Slot arithmetic overflow
//!
//! ## Resource Errors (4000-4999)
//! - Missing entries
//!
//! ## Validation Errors (5000-5999)
//! - Rejected configuration
//!
//! Every [`Error`] collapses onto a [`MapStatus`], the four-valued result of
//! mutating operations at the C ABI.
//!
//! ```
//! use textmap_error::{codes, Error, ErrorCategory, MapStatus};
//!
//! let error = Error::new(
//!     ErrorCategory::Resource,
//!     codes::ITEM_DOES_NOT_EXIST,
//!     "No entry for key",
//! );
//! assert_eq!(error.status(), MapStatus::ItemDoesNotExist);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes for textmap
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Status taxonomy of mutating operations
pub mod status;

pub mod helpers;
pub mod prelude;

// Re-export key types
pub use errors::{Error, ErrorCategory};
pub use helpers::*;
pub use status::MapStatus;

/// A specialized `Result` type for textmap operations.
pub type Result<T> = core::result::Result<T, Error>;
