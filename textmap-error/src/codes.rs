// textmap - textmap-error
// Module: Error Codes
//
// Copyright (c) 2025 The textmap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for textmap

// Parameter error codes (1000-1999)
/// A required argument was absent
pub const NULL_ARGUMENT: u16 = 1000;
/// Text argument was not valid UTF-8
pub const INVALID_UTF8: u16 = 1001;

// Memory error codes (2000-2999)
/// The allocator refused a request
pub const OUT_OF_MEMORY: u16 = 2000;
/// The configured byte budget would be exceeded
pub const BUDGET_EXCEEDED: u16 = 2001;

// Capacity error codes (3000-3999)
/// Growing the slot storage overflowed `usize`
pub const CAPACITY_OVERFLOW: u16 = 3000;

// Resource error codes (4000-4999)
/// No entry with the requested key exists
pub const ITEM_DOES_NOT_EXIST: u16 = 4000;

// Validation error codes (5000-5999)
/// Initial capacity must be at least one slot
pub const INVALID_INITIAL_CAPACITY: u16 = 5000;
/// Growth factor must be at least two
pub const INVALID_GROWTH_FACTOR: u16 = 5001;
