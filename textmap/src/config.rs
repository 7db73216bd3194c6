// textmap - textmap
// Module: Map Configuration
//
// Copyright (c) 2025 The textmap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Construction-time limits for a [`StringMap`](crate::StringMap).
//!
//! The defaults reproduce the classic layout: ten slots, doubled whenever the
//! map is full, no byte ceiling. A byte budget turns the map into a bounded
//! container for callers with a fixed memory allowance; exceeding it is
//! reported exactly like an allocator refusal.
//!
//! ```
//! use textmap::MapConfig;
//!
//! let config = MapConfig::new()
//!     .with_initial_capacity(4)
//!     .with_byte_budget(4096);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.initial_capacity, 4);
//! ```

use crate::prelude::*;

/// Slot count of a freshly created map.
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// Multiplier applied to the capacity when a full map grows.
pub const GROWTH_FACTOR: usize = 2;

/// Configuration of a [`StringMap`](crate::StringMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapConfig {
    /// Slots allocated at creation. Must be at least 1.
    pub initial_capacity: usize,
    /// Capacity multiplier on growth. Must be at least 2.
    pub growth_factor:    usize,
    /// Ceiling on heap bytes held by the map, `None` for no ceiling.
    pub byte_budget:      Option<usize>,
}

impl MapConfig {
    /// Default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth_factor:    GROWTH_FACTOR,
            byte_budget:      None,
        }
    }

    /// Set the slot count allocated at creation.
    #[must_use]
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set the capacity multiplier used on growth.
    #[must_use]
    pub const fn with_growth_factor(mut self, growth_factor: usize) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Cap the heap bytes the map may hold.
    #[must_use]
    pub const fn with_byte_budget(mut self, bytes: usize) -> Self {
        self.byte_budget = Some(bytes);
        self
    }

    /// Remove any byte ceiling.
    #[must_use]
    pub const fn unbounded(mut self) -> Self {
        self.byte_budget = None;
        self
    }

    /// Check that the configuration describes a map that can grow.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a zero initial capacity or a growth
    /// factor below 2, either of which would leave a full map stuck.
    pub const fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(Error::INVALID_INITIAL_CAPACITY);
        }
        if self.growth_factor < 2 {
            return Err(Error::INVALID_GROWTH_FACTOR);
        }
        Ok(())
    }

    /// Capacity that follows `current` on growth.
    pub(crate) fn grown_capacity(&self, current: usize) -> Result<usize> {
        current.checked_mul(self.growth_factor).ok_or(Error::CAPACITY_OVERFLOW)
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::new()
    }
}
