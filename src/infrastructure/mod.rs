// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`fake`]: In-memory [`MediaEngine`] and [`DevicePlatform`] that record
//!   every command
//! - [`ffmpeg`]: `FFmpeg`-backed [`MetadataProbe`]
//!
//! [`MediaEngine`]: crate::application::port::MediaEngine
//! [`DevicePlatform`]: crate::application::port::DevicePlatform
//! [`MetadataProbe`]: crate::application::port::MetadataProbe

pub mod fake;
pub mod ffmpeg;

pub use fake::{EngineCommand, FakeDevice, FakeEngine};
pub use ffmpeg::FfmpegProbe;
