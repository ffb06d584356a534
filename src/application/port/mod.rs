// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The playback session talks to the outside world only through these
//! traits. Infrastructure adapters implement them; tests use in-memory fakes.
//!
//! # Available Ports
//!
//! - [`engine`]: Media-playback engine commands and track list
//! - [`device`]: Volume, brightness and orientation of the device
//! - [`probe`]: Blocking metadata probing of the local file
//!
//! # Design Notes
//!
//! - All traits use domain types only
//! - Engine and device commands are infallible and non-blocking
//! - Only [`MetadataProbe`] is `Send + Sync`; it is the one port used off the
//!   session context

pub mod device;
pub mod engine;
pub mod probe;

pub use device::DevicePlatform;
pub use engine::{AudioAttributes, AudioContentType, AudioUsage, MediaEngine};
pub use probe::MetadataProbe;
