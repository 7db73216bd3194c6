// textmap - textmap-ffi
// Module: Handle and Argument Conversion
//
// Copyright (c) 2025 The textmap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Conversions between C handles and arguments and their Rust counterparts.

use libc::{c_char, c_void};
use std::ffi::CStr;
use std::ptr;

use textmap::StringMap;
use textmap_error::{Error, Result};

/// Opaque handle handed to C callers
pub type MapPointer = *mut c_void;

/// Borrows the map behind a handle, `None` for a null handle
///
/// # Safety
///
/// A non-null `pointer` must come from `mapCreate` or `mapCopy`, must not have been passed to
/// `mapDestroy`, and must not be mutated for the duration of the borrow
pub unsafe fn map_ref<'a>(pointer: MapPointer) -> Option<&'a StringMap> {
    unsafe { pointer.cast::<StringMap>().as_ref() }
}

/// Mutably borrows the map behind a handle, `None` for a null handle
///
/// # Safety
///
/// Same as [`map_ref`], and no other borrow of the map may be live
pub unsafe fn map_mut<'a>(pointer: MapPointer) -> Option<&'a mut StringMap> {
    unsafe { pointer.cast::<StringMap>().as_mut() }
}

/// Moves a map onto the heap and hands out its handle
pub fn into_handle(map: StringMap) -> MapPointer {
    Box::into_raw(Box::new(map)).cast()
}

/// Borrows a C string argument as UTF-8 text
///
/// # Safety
///
/// A non-null `data` must point to a NUL-terminated string that stays valid and unmodified for
/// the duration of the borrow
///
/// # Errors
///
/// Returns [`Error::NULL_ARGUMENT`] for a null pointer and [`Error::INVALID_UTF8`] if the string
/// is not valid UTF-8
pub unsafe fn text_arg<'a>(data: *const c_char) -> Result<&'a str> {
    if data.is_null() {
        return Err(Error::NULL_ARGUMENT);
    }
    let text = unsafe { CStr::from_ptr(data) };
    Ok(text.to_str()?)
}

/// Hands map-owned C text out as the `char *` the header declares
pub fn c_text(text: Option<&CStr>) -> *mut c_char {
    text.map_or(ptr::null_mut(), |text| text.as_ptr().cast_mut())
}
