//! Skyline Core
//!
//! Shared utilities for the Skyline data-visualization pipeline: logging
//! setup, math types, optimized collections, and optional profiling hooks.

pub mod alloc;
pub mod logging;
pub mod math;
#[cfg(feature = "profiling")]
pub mod profiling;
