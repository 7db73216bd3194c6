// textmap - textmap
// Module: StringMap - Owned string-to-string map
//
// Copyright (c) 2025 The textmap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Owned string-to-string map with linear-scan lookup.
//!
//! `StringMap` keeps its entries in one contiguous slot array and finds keys
//! by comparing them in order. It never hashes and never sorts.
//!
//! # Characteristics
//!
//! - **Owned text**: keys and values are copied in; callers keep their buffers
//! - **O(n) lookup**: linear scan over live entries
//! - **O(1) removal**: the last entry is moved into the freed slot
//! - **Doubling growth**: capacity starts at 10 and doubles when full
//! - **Fallible allocation**: every allocation failure is an `Err`, never an
//!   abort, and leaves the map untouched
//!
//! # Slot order
//!
//! Entries are appended, so a map that has only seen insertions yields its
//! keys in insertion order. Removal breaks that: the last entry takes the
//! removed entry's slot. Callers must not depend on iteration order.

use crate::{
    budget::MemoryBudget,
    config::MapConfig,
    entry::{copy_text, into_text, Entry},
    prelude::*,
};

/// An associative container from owned string keys to owned string values.
///
/// # Invariants
///
/// 1. Keys are unique
/// 2. `len() <= capacity()` always holds
/// 3. `capacity()` never shrinks
/// 4. The slot storage always has room for `capacity()` entries
///
/// # Examples
///
/// ```
/// use textmap::StringMap;
///
/// let mut map = StringMap::new()?;
/// map.put("a", "1")?;
/// map.put("b", "2")?;
/// map.put("a", "3")?;
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get("a"), Some("3"));
/// assert_eq!(map.get("b"), Some("2"));
/// # Ok::<(), textmap_error::Error>(())
/// ```
pub struct StringMap {
    /// Live entries in slot order
    entries:  Vec<Entry>,

    /// Logical slot count
    /// Invariant: entries.len() <= capacity <= entries.capacity()
    capacity: usize,

    /// Position of the internal traversal started by `first_key`
    cursor:   usize,

    config: MapConfig,
    budget: MemoryBudget,
}

impl StringMap {
    /// Creates an empty map with the default configuration (10 slots).
    ///
    /// # Errors
    ///
    /// Returns an out-of-memory error if the slot storage cannot be
    /// allocated.
    pub fn new() -> Result<Self> {
        Self::with_config(MapConfig::default())
    }

    /// Creates an empty map governed by `config`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unusable configuration, or an
    /// out-of-memory error if the initial slots do not fit in the budget or
    /// the allocator refuses them.
    pub fn with_config(config: MapConfig) -> Result<Self> {
        config.validate()?;

        let mut map = Self {
            entries: Vec::new(),
            capacity: 0,
            cursor: 0,
            config,
            budget: MemoryBudget::new(config.byte_budget),
        };
        map.reserve_slots(config.initial_capacity)?;
        Ok(map)
    }

    /// Deep-copies the map under its own configuration.
    ///
    /// The copy owns fresh copies of every key and value and has the
    /// source's capacity.
    ///
    /// # Errors
    ///
    /// Returns an out-of-memory error if any allocation of the copy fails.
    /// The partially built copy is released before returning.
    pub fn try_clone(&self) -> Result<Self> {
        self.try_clone_with(self.config)
    }

    /// Deep-copies the map into a new map governed by `config`.
    ///
    /// The copy's capacity is the larger of the source's capacity and
    /// `config.initial_capacity`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unusable configuration, or an
    /// out-of-memory error if the contents do not fit the new budget or an
    /// allocation fails. The partially built copy is released before
    /// returning and the source is never modified.
    pub fn try_clone_with(&self, config: MapConfig) -> Result<Self> {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::MapTrace::copying(self.len(), self.capacity).entered();

        let mut copy = Self::with_config(config)?;
        if self.capacity > copy.capacity {
            copy.reserve_slots(self.capacity)?;
        }

        for entry in &self.entries {
            let key = copy_text(entry.key(), &mut copy.budget)?;
            let value = copy_text(entry.value(), &mut copy.budget)?;
            copy.entries.push(Entry::from_owned(key, value));
        }

        Ok(copy)
    }

    /// Returns the number of live entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the current slot count.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the next new key will trigger growth.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    /// Returns the configuration the map was created with.
    #[must_use]
    pub const fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Bytes of slot storage and text currently charged to the budget.
    #[must_use]
    pub const fn allocated_bytes(&self) -> usize {
        self.budget.used()
    }

    /// Returns `true` if an entry with exactly this key exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Gets the value stored for `key`.
    ///
    /// The returned text is borrowed from the map and cannot outlive the
    /// next mutation.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entry(key).map(Entry::value)
    }

    /// Gets the stored pair for `key`.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.key() == key)
    }

    /// Associates `value` with `key`.
    ///
    /// An existing key keeps its slot and has its value replaced; the
    /// previous value is returned. A new key is appended after doubling the
    /// capacity if the map is full.
    ///
    /// # Errors
    ///
    /// Returns an out-of-memory error if copying the text or growing the slot
    /// storage fails. The map is unchanged on error: no entry is added, no
    /// value is replaced and the capacity is not grown.
    ///
    /// # Examples
    ///
    /// ```
    /// use textmap::StringMap;
    ///
    /// let mut map = StringMap::new()?;
    /// assert_eq!(map.put("x", "1")?, None);
    /// assert_eq!(map.put("x", "2")?, Some("1".to_string()));
    /// # Ok::<(), textmap_error::Error>(())
    /// ```
    pub fn put(&mut self, key: &str, value: &str) -> Result<Option<String>> {
        #[cfg(feature = "tracing")]
        crate::tracing::trace!(key = key, "map put");

        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key() == key) {
            let replacement = copy_text(value, &mut self.budget)?;
            let previous = entry.replace_value(replacement);
            self.budget.release(previous.len());
            return Ok(Some(into_text(previous)));
        }

        // Copy both texts before touching the slots so any failure below
        // leaves the map as it was.
        let key_text = copy_text(key, &mut self.budget)?;
        let value_text = match copy_text(value, &mut self.budget) {
            Ok(text) => text,
            Err(error) => {
                self.budget.release(key_text.len());
                return Err(error);
            },
        };
        let entry = Entry::from_owned(key_text, value_text);

        if self.is_full() {
            if let Err(error) = self.grow() {
                self.budget.release(entry.text_bytes());
                return Err(error);
            }
        }

        self.entries.push(entry);
        Ok(None)
    }

    /// Inserts every pair from `pairs` in order.
    ///
    /// # Errors
    ///
    /// Stops at, and returns, the first failing [`put`](Self::put). Pairs
    /// before it stay inserted.
    pub fn put_all<'a, I>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in pairs {
            self.put(key, value)?;
        }
        Ok(())
    }

    /// Removes the entry for `key`, returning its value.
    ///
    /// The last entry moves into the freed slot, so the slot order of the
    /// remaining entries may change.
    ///
    /// # Errors
    ///
    /// Returns an item-does-not-exist error if no entry has this key.
    ///
    /// # Examples
    ///
    /// ```
    /// use textmap::{MapStatus, StringMap};
    ///
    /// let mut map = StringMap::new()?;
    /// map.put("x", "1")?;
    /// assert_eq!(map.remove("x")?, "1");
    /// assert_eq!(map.len(), 0);
    ///
    /// let again = map.remove("x").unwrap_err();
    /// assert_eq!(again.status(), MapStatus::ItemDoesNotExist);
    /// # Ok::<(), textmap_error::Error>(())
    /// ```
    pub fn remove(&mut self, key: &str) -> Result<String> {
        let index = self
            .position(key)
            .ok_or(missing_key_error("No entry for key"))?;

        #[cfg(feature = "tracing")]
        crate::tracing::trace!(key = key, slot = index, "map remove");

        let entry = self.entries.swap_remove(index);
        self.budget.release(entry.text_bytes());
        Ok(entry.into_value())
    }

    /// Removes every entry, keeping the capacity.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::MapTrace::clearing(self.len()).entered();

        let text_bytes: usize = self.entries.iter().map(Entry::text_bytes).sum();
        self.entries.clear();
        self.budget.release(text_bytes);
        self.cursor = 0;
    }

    /// Starts the internal traversal and returns the first key.
    ///
    /// Any traversal already in progress is abandoned. Returns `None` for an
    /// empty map.
    pub fn first_key(&mut self) -> Option<&str> {
        self.first_entry().map(Entry::key)
    }

    /// Returns the key under the internal cursor and advances it.
    ///
    /// Returns `None` once every live entry has been visited. After a
    /// structural mutation the cursor keeps its position and is bounded by
    /// the new length.
    pub fn next_key(&mut self) -> Option<&str> {
        self.next_entry().map(Entry::key)
    }

    /// Starts the internal traversal and returns the first entry.
    pub fn first_entry(&mut self) -> Option<&Entry> {
        if self.entries.is_empty() {
            return None;
        }
        self.cursor = 0;
        self.next_entry()
    }

    /// Returns the entry under the internal cursor and advances it.
    pub fn next_entry(&mut self) -> Option<&Entry> {
        let entry = self.entries.get(self.cursor)?;
        self.cursor += 1;
        Some(entry)
    }

    /// Returns an iterator over the entries in slot order.
    ///
    /// Unlike [`first_key`](Self::first_key), the iterator carries its own
    /// position, so any number of traversals may run at once.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            entries: &self.entries,
            index:   0,
        }
    }

    /// Returns an iterator over keys in slot order.
    #[inline]
    #[must_use]
    pub fn keys(&self) -> Keys<'_> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over values in slot order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> Values<'_> {
        Values { inner: self.iter() }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key() == key)
    }

    /// Grow the slots by the configured factor.
    fn grow(&mut self) -> Result<()> {
        let target = self.config.grown_capacity(self.capacity)?;

        #[cfg(feature = "tracing")]
        let _span = crate::tracing::MapTrace::growing(self.capacity, target).entered();

        self.reserve_slots(target)?;

        #[cfg(feature = "tracing")]
        crate::tracing::debug!(capacity = target, len = self.len(), "map grown");

        Ok(())
    }

    /// Make room for `target` slots in total.
    ///
    /// Leaves capacity and budget untouched on error.
    fn reserve_slots(&mut self, target: usize) -> Result<()> {
        let added = target.saturating_sub(self.capacity);
        let bytes = added
            .checked_mul(Entry::SLOT_BYTES)
            .ok_or(Error::CAPACITY_OVERFLOW)?;
        self.budget.reserve(bytes)?;

        let additional = target.saturating_sub(self.entries.len());
        if self.entries.try_reserve_exact(additional).is_err() {
            self.budget.release(bytes);
            #[cfg(feature = "tracing")]
            crate::tracing::warn!(slots = target, "allocator refused slot storage");
            return Err(allocation_failed_error("Slot storage allocation failed"));
        }

        self.capacity = self.capacity.max(target);
        Ok(())
    }
}

impl fmt::Debug for StringMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// Equality ignores slot order and capacity
impl PartialEq for StringMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl Eq for StringMap {}

/// Iterator over `(key, value)` pairs of a [`StringMap`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    entries: &'a [Entry],
    index:   usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.get(self.index)?;
        self.index += 1;
        Some((entry.key(), entry.value()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Iterator over the keys of a [`StringMap`].
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    inner: Iter<'a>,
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Keys<'_> {}

impl FusedIterator for Keys<'_> {}

/// Iterator over the values of a [`StringMap`].
#[derive(Debug, Clone)]
pub struct Values<'a> {
    inner: Iter<'a>,
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Values<'_> {}

impl FusedIterator for Values<'_> {}

impl<'a> IntoIterator for &'a StringMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
