// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains gesture and overlay tunables that are independent
//! of any presentation framework.

pub mod newtypes;

// Re-export commonly used types
pub use newtypes::{DragThreshold, OverlayDelay, TapTimeout};
