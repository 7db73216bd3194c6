// textmap - textmap-ffi
// Module: Map API
//
// Copyright (c) 2025 The textmap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! This file provides the C API for the Map object
//!
//! The exported symbols keep the `mapCreate`/`mapPut`/... names of the C `map.h` interface, so
//! existing callers relink against this library unchanged.
//!
//! Every function tolerates a null map handle: queries report absence and mutations report
//! `MAP_NULL_ARGUMENT`. Text returned as `char *` is owned by the map and stays valid until the
//! next mutation of that map.

use libc::{c_char, c_int};
use std::ptr;

use textmap::StringMap;
use textmap_error::{require, MapStatus, Result};

use crate::utils::{self, MapPointer};

/// Creates an empty map with room for 10 entries. Returns null if allocation fails
#[unsafe(export_name = "mapCreate")]
pub extern "C" fn map_create() -> MapPointer {
    match StringMap::new() {
        Ok(map) => utils::into_handle(map),
        Err(_) => ptr::null_mut(),
    }
}

/// Frees a map and every key and value it owns. A null handle is ignored
///
/// # Safety
///
/// A non-null `pointer` must come from `mapCreate` or `mapCopy` and must not be used afterwards
#[unsafe(export_name = "mapDestroy")]
pub unsafe extern "C" fn map_destroy(pointer: MapPointer) {
    if pointer.is_null() {
        return;
    }
    unsafe {
        drop(Box::from_raw(pointer.cast::<StringMap>()));
    }
}

/// Deep-copies a map. Returns null for a null handle or if any allocation fails
///
/// # Safety
///
/// A non-null `pointer` must be a live map handle
#[unsafe(export_name = "mapCopy")]
pub unsafe extern "C" fn map_copy(pointer: MapPointer) -> MapPointer {
    let Some(map) = (unsafe { utils::map_ref(pointer) }) else {
        return ptr::null_mut();
    };
    match map.try_clone() {
        Ok(copy) => utils::into_handle(copy),
        Err(_) => ptr::null_mut(),
    }
}

/// Returns the number of entries, or -1 for a null handle
///
/// # Safety
///
/// A non-null `pointer` must be a live map handle
#[unsafe(export_name = "mapGetSize")]
pub unsafe extern "C" fn map_get_size(pointer: MapPointer) -> c_int {
    match unsafe { utils::map_ref(pointer) } {
        Some(map) => c_int::try_from(map.len()).unwrap_or(c_int::MAX),
        None => -1,
    }
}

/// Returns true if the map holds an entry for `key`. A null handle or key yields false
///
/// # Safety
///
/// A non-null `pointer` must be a live map handle and a non-null `key` a NUL-terminated string
#[unsafe(export_name = "mapContains")]
pub unsafe extern "C" fn map_contains(pointer: MapPointer, key: *const c_char) -> bool {
    let Some(map) = (unsafe { utils::map_ref(pointer) }) else {
        return false;
    };
    unsafe { utils::text_arg(key) }.is_ok_and(|key| map.contains(key))
}

/// Stores a copy of `data` under a copy of `key`, replacing any previous value
///
/// # Safety
///
/// A non-null `pointer` must be a live map handle, and non-null `key` and `data` must be
/// NUL-terminated strings
#[unsafe(export_name = "mapPut")]
pub unsafe extern "C" fn map_put(
    pointer: MapPointer,
    key: *const c_char,
    data: *const c_char,
) -> MapStatus {
    let put = || -> Result<()> {
        let map = require(unsafe { utils::map_mut(pointer) }, "map")?;
        let key = unsafe { utils::text_arg(key) }?;
        let data = unsafe { utils::text_arg(data) }?;
        map.put(key, data)?;
        Ok(())
    };
    MapStatus::from(put())
}

/// Returns the value stored for `key`, or null if there is none
///
/// # Safety
///
/// A non-null `pointer` must be a live map handle and a non-null `key` a NUL-terminated string.
/// The returned text must not be freed or written to
#[unsafe(export_name = "mapGet")]
pub unsafe extern "C" fn map_get(pointer: MapPointer, key: *const c_char) -> *mut c_char {
    let Some(map) = (unsafe { utils::map_ref(pointer) }) else {
        return ptr::null_mut();
    };
    let Ok(key) = (unsafe { utils::text_arg(key) }) else {
        return ptr::null_mut();
    };
    utils::c_text(map.entry(key).map(|entry| entry.value_c_str()))
}

/// Removes the entry for `key`. The last entry moves into the freed slot
///
/// # Safety
///
/// A non-null `pointer` must be a live map handle and a non-null `key` a NUL-terminated string
#[unsafe(export_name = "mapRemove")]
pub unsafe extern "C" fn map_remove(pointer: MapPointer, key: *const c_char) -> MapStatus {
    let remove = || -> Result<()> {
        let map = require(unsafe { utils::map_mut(pointer) }, "map")?;
        let key = unsafe { utils::text_arg(key) }?;
        map.remove(key)?;
        Ok(())
    };
    MapStatus::from(remove())
}

/// Restarts the map's traversal and returns its first key, or null for an empty map
///
/// # Safety
///
/// A non-null `pointer` must be a live map handle
#[unsafe(export_name = "mapGetFirst")]
pub unsafe extern "C" fn map_get_first(pointer: MapPointer) -> *mut c_char {
    let Some(map) = (unsafe { utils::map_mut(pointer) }) else {
        return ptr::null_mut();
    };
    utils::c_text(map.first_entry().map(|entry| entry.key_c_str()))
}

/// Returns the next key of the traversal, or null once every key has been returned
///
/// # Safety
///
/// A non-null `pointer` must be a live map handle
#[unsafe(export_name = "mapGetNext")]
pub unsafe extern "C" fn map_get_next(pointer: MapPointer) -> *mut c_char {
    let Some(map) = (unsafe { utils::map_mut(pointer) }) else {
        return ptr::null_mut();
    };
    utils::c_text(map.next_entry().map(|entry| entry.key_c_str()))
}

/// Removes every entry, keeping the map's capacity
///
/// # Safety
///
/// A non-null `pointer` must be a live map handle
#[unsafe(export_name = "mapClear")]
pub unsafe extern "C" fn map_clear(pointer: MapPointer) -> MapStatus {
    match unsafe { utils::map_mut(pointer) } {
        Some(map) => {
            map.clear();
            MapStatus::Success
        }
        None => MapStatus::NullArgument,
    }
}
