// textmap - textmap-error
// Module: Error Types
//
// Copyright (c) 2025 The textmap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

/// Error handling system for textmap
///
/// This module provides the categorized error type shared by every textmap
/// crate, along with the mapping onto the four-valued [`MapStatus`] reported
/// across the C ABI.
use core::fmt;

use crate::{codes, status::MapStatus};

/// `Error` categories for textmap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Parameter errors (absent or malformed arguments)
    Parameter  = 1,
    /// Memory errors (allocator refusal, budget exhaustion)
    Memory     = 2,
    /// Capacity errors (slot arithmetic overflow)
    Capacity   = 3,
    /// Resource errors (missing entries)
    Resource   = 4,
    /// Validation errors (rejected configuration)
    Validation = 5,
}

/// textmap `Error` type
///
/// Errors carry a category, a numeric code from [`codes`] and a static
/// message. They are `Copy` and never allocate, so reporting an
/// out-of-memory condition cannot itself fail.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Budget exceeded error
    pub const BUDGET_EXCEEDED: Self = Self::new(
        ErrorCategory::Memory,
        codes::BUDGET_EXCEEDED,
        "Byte budget exceeded",
    );
    /// Capacity overflow error
    pub const CAPACITY_OVERFLOW: Self = Self::new(
        ErrorCategory::Capacity,
        codes::CAPACITY_OVERFLOW,
        "Slot capacity overflow",
    );
    /// Invalid growth factor error
    pub const INVALID_GROWTH_FACTOR: Self = Self::new(
        ErrorCategory::Validation,
        codes::INVALID_GROWTH_FACTOR,
        "Growth factor must be at least 2",
    );
    /// Invalid initial capacity error
    pub const INVALID_INITIAL_CAPACITY: Self = Self::new(
        ErrorCategory::Validation,
        codes::INVALID_INITIAL_CAPACITY,
        "Initial capacity must be at least 1",
    );
    /// Invalid UTF-8 error
    pub const INVALID_UTF8: Self = Self::new(
        ErrorCategory::Parameter,
        codes::INVALID_UTF8,
        "Text is not valid UTF-8",
    );
    /// Item does not exist error
    pub const ITEM_DOES_NOT_EXIST: Self = Self::new(
        ErrorCategory::Resource,
        codes::ITEM_DOES_NOT_EXIST,
        "Item does not exist",
    );
    /// Null argument error
    pub const NULL_ARGUMENT: Self = Self::new(
        ErrorCategory::Parameter,
        codes::NULL_ARGUMENT,
        "Required argument is null",
    );
    /// Out of memory error
    pub const OUT_OF_MEMORY: Self = Self::new(
        ErrorCategory::Memory,
        codes::OUT_OF_MEMORY,
        "Out of memory",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    // Factory methods

    /// Create an out of memory error with a call-site message
    #[must_use]
    pub const fn out_of_memory(message: &'static str) -> Self {
        Self::new(ErrorCategory::Memory, codes::OUT_OF_MEMORY, message)
    }

    /// Create a null argument error with a call-site message
    #[must_use]
    pub const fn null_argument(message: &'static str) -> Self {
        Self::new(ErrorCategory::Parameter, codes::NULL_ARGUMENT, message)
    }

    /// Create an item does not exist error with a call-site message
    #[must_use]
    pub const fn item_does_not_exist(message: &'static str) -> Self {
        Self::new(ErrorCategory::Resource, codes::ITEM_DOES_NOT_EXIST, message)
    }

    /// Check if this is a parameter error
    #[must_use]
    pub fn is_parameter_error(&self) -> bool {
        self.category == ErrorCategory::Parameter
    }

    /// Check if this is a memory error
    #[must_use]
    pub fn is_memory_error(&self) -> bool {
        self.category == ErrorCategory::Memory
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }

    /// Check if this is a resource error
    #[must_use]
    pub fn is_resource_error(&self) -> bool {
        self.category == ErrorCategory::Resource
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        self.category == ErrorCategory::Validation
    }

    /// Collapse this error onto the status taxonomy of the C ABI.
    ///
    /// Capacity overflow is reported as out-of-memory, since both mean the
    /// slot storage could not be grown. Validation errors only arise from a
    /// rejected configuration and are reported as a bad argument.
    #[must_use]
    pub const fn status(&self) -> MapStatus {
        match self.category {
            ErrorCategory::Parameter | ErrorCategory::Validation => MapStatus::NullArgument,
            ErrorCategory::Memory | ErrorCategory::Capacity => MapStatus::OutOfMemory,
            ErrorCategory::Resource => MapStatus::ItemDoesNotExist,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

impl From<core::str::Utf8Error> for Error {
    fn from(_: core::str::Utf8Error) -> Self {
        Self::INVALID_UTF8
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
