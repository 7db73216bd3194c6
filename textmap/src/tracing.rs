// textmap - textmap
// Module: Tracing Support
//
// Copyright (c) 2025 The textmap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Tracing support for textmap
//!
//! This module provides structured tracing that works in both std and
//! no_std+alloc builds. It wraps the `tracing` crate and provides span
//! helpers for the map operations worth following in a trace: growth,
//! copies and bulk clears.

pub use tracing::{debug, error, info, trace, warn};
pub use tracing::{debug_span, info_span, span, trace_span, warn_span};
pub use tracing::{event, Level, Span};

/// Spans for map lifecycle operations
#[derive(Debug, Clone)]
pub struct MapTrace;

impl MapTrace {
    /// Create a span for a deep copy
    #[inline]
    pub fn copying(len: usize, capacity: usize) -> Span {
        debug_span!("map_copy", len = %len, capacity = %capacity)
    }

    /// Create a span for a bulk clear
    #[inline]
    pub fn clearing(len: usize) -> Span {
        debug_span!("map_clear", len = %len)
    }

    /// Create a span for slot growth
    #[inline]
    pub fn growing(from: usize, to: usize) -> Span {
        trace_span!("map_grow", from = %from, to = %to)
    }
}
