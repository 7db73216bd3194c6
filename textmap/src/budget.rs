// textmap - textmap
// Module: Memory Budget
//
// Copyright (c) 2025 The textmap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Byte accounting for a single map.
//!
//! Every heap request a map makes (slot storage and text copies) is first
//! reserved here. A refused reservation surfaces as an out-of-memory error
//! before the allocator is ever asked, which gives deterministic
//! allocation-failure paths on hosts whose allocator never refuses.

use crate::prelude::*;

/// Running total of bytes held by one map, with an optional ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryBudget {
    /// Maximum bytes, `None` for no ceiling
    limit: Option<usize>,
    /// Bytes currently reserved
    /// Invariant: `used <= limit` when a limit is set
    used:  usize,
}

impl MemoryBudget {
    /// Budget without a ceiling.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            limit: None,
            used:  0,
        }
    }

    /// Budget with an optional ceiling.
    #[must_use]
    pub const fn new(limit: Option<usize>) -> Self {
        Self { limit, used: 0 }
    }

    /// Reserve `bytes` against the budget.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BUDGET_EXCEEDED`] if the reservation would cross the
    /// ceiling, or [`Error::CAPACITY_OVERFLOW`] if the running total would
    /// overflow. Nothing is reserved on error.
    pub fn reserve(&mut self, bytes: usize) -> Result<()> {
        let total = self.used.checked_add(bytes).ok_or(Error::CAPACITY_OVERFLOW)?;
        if let Some(limit) = self.limit {
            if total > limit {
                #[cfg(feature = "tracing")]
                crate::tracing::warn!(
                    requested = bytes,
                    used = self.used,
                    limit = limit,
                    "allocation refused by byte budget"
                );
                return Err(Error::BUDGET_EXCEEDED);
            }
        }
        self.used = total;
        Ok(())
    }

    /// Return `bytes` to the budget.
    pub fn release(&mut self, bytes: usize) {
        self.used = self.used.saturating_sub(bytes);
    }

    /// Bytes currently reserved.
    #[must_use]
    pub const fn used(&self) -> usize {
        self.used
    }

    /// Bytes still available, `None` without a ceiling.
    #[must_use]
    pub fn remaining(&self) -> Option<usize> {
        self.limit.map(|limit| limit.saturating_sub(self.used))
    }
}

impl Default for MemoryBudget {
    fn default() -> Self {
        Self::unlimited()
    }
}
