// textmap - textmap
// Module: Map Entry
//
// Copyright (c) 2025 The textmap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! One owned key/value pair.
//!
//! Key and value are stored as independent heap copies, each followed by a
//! NUL byte so the same storage can be handed to C callers as `const char *`
//! without a second allocation. Text containing an interior NUL is kept in
//! full on the Rust side; its C view ends at the first NUL.

use core::ffi::CStr;

use crate::{budget::MemoryBudget, prelude::*};

/// A key/value pair owned by a [`StringMap`](crate::StringMap).
#[derive(PartialEq, Eq)]
pub struct Entry {
    /// Invariant: ends with `'\0'`
    key:   String,
    /// Invariant: ends with `'\0'`
    value: String,
}

impl Entry {
    /// Bytes of slot storage one entry occupies.
    pub const SLOT_BYTES: usize = core::mem::size_of::<Self>();

    pub(crate) fn from_owned(key: String, value: String) -> Self {
        Self { key, value }
    }

    /// The entry's key.
    #[must_use]
    pub fn key(&self) -> &str {
        without_nul(&self.key)
    }

    /// The entry's value.
    #[must_use]
    pub fn value(&self) -> &str {
        without_nul(&self.value)
    }

    /// The key as a NUL-terminated C string.
    #[must_use]
    pub fn key_c_str(&self) -> &CStr {
        as_c_str(&self.key)
    }

    /// The value as a NUL-terminated C string.
    #[must_use]
    pub fn value_c_str(&self) -> &CStr {
        as_c_str(&self.value)
    }

    /// Heap bytes charged for this entry's text.
    #[must_use]
    pub fn text_bytes(&self) -> usize {
        self.key.len() + self.value.len()
    }

    /// Swap in a new owned value, handing back the previous one.
    pub(crate) fn replace_value(&mut self, value: String) -> String {
        core::mem::replace(&mut self.value, value)
    }

    pub(crate) fn into_value(self) -> String {
        into_text(self.value)
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key())
            .field("value", &self.value())
            .finish()
    }
}

/// Bytes a stored copy of `text` occupies, terminator included.
#[must_use]
pub fn stored_bytes(text: &str) -> usize {
    text.len().saturating_add(1)
}

/// Copy `text` into fresh, budget-accounted storage.
///
/// The budget is charged before the allocator is asked, and the charge is
/// returned if the allocator refuses.
pub(crate) fn copy_text(text: &str, budget: &mut MemoryBudget) -> Result<String> {
    let bytes = stored_bytes(text);
    budget.reserve(bytes)?;

    let mut owned = String::new();
    if owned.try_reserve_exact(bytes).is_err() {
        budget.release(bytes);
        #[cfg(feature = "tracing")]
        crate::tracing::warn!(bytes = bytes, "allocator refused text copy");
        return Err(allocation_failed_error("Text copy allocation failed"));
    }
    owned.push_str(text);
    owned.push('\0');
    Ok(owned)
}

/// Strip the stored terminator, yielding the caller-visible text.
pub(crate) fn into_text(mut stored: String) -> String {
    if stored.ends_with('\0') {
        stored.pop();
    }
    stored
}

fn without_nul(stored: &str) -> &str {
    stored.strip_suffix('\0').unwrap_or(stored)
}

fn as_c_str(stored: &str) -> &CStr {
    CStr::from_bytes_until_nul(stored.as_bytes()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_is_terminated_and_charged() -> Result<()> {
        let mut budget = MemoryBudget::unlimited();
        let key = copy_text("alpha", &mut budget)?;
        let value = copy_text("", &mut budget)?;
        let entry = Entry::from_owned(key, value);

        assert_eq!(entry.key(), "alpha");
        assert_eq!(entry.value(), "");
        assert_eq!(entry.key_c_str().to_bytes(), b"alpha");
        assert_eq!(entry.value_c_str().to_bytes(), b"");
        assert_eq!(entry.text_bytes(), 7);
        assert_eq!(budget.used(), 7);
        Ok(())
    }

    #[test]
    fn test_copy_refused_by_budget() {
        let mut budget = MemoryBudget::new(Some(3));
        assert_eq!(copy_text("abc", &mut budget), Err(Error::BUDGET_EXCEEDED));
        assert_eq!(budget.used(), 0);
    }

    #[test]
    fn test_interior_nul_truncates_c_view_only() -> Result<()> {
        let mut budget = MemoryBudget::unlimited();
        let entry = Entry::from_owned(
            copy_text("a\0b", &mut budget)?,
            copy_text("v", &mut budget)?,
        );
        assert_eq!(entry.key(), "a\0b");
        assert_eq!(entry.key_c_str().to_bytes(), b"a");
        Ok(())
    }

    #[test]
    fn test_debug_hides_terminator() -> Result<()> {
        let mut budget = MemoryBudget::unlimited();
        let entry = Entry::from_owned(
            copy_text("k", &mut budget)?,
            copy_text("v", &mut budget)?,
        );
        assert_eq!(format!("{entry:?}"), r#"Entry { key: "k", value: "v" }"#);
        Ok(())
    }

    #[test]
    fn test_replace_and_take_value() -> Result<()> {
        let mut budget = MemoryBudget::unlimited();
        let mut entry = Entry::from_owned(
            copy_text("k", &mut budget)?,
            copy_text("old", &mut budget)?,
        );
        let previous = entry.replace_value(copy_text("new", &mut budget)?);
        assert_eq!(into_text(previous), "old");
        assert_eq!(entry.into_value(), "new");
        Ok(())
    }
}
