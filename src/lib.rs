// SPDX-License-Identifier: MPL-2.0
//! `cinestream` is the playback-control session of a local video player.
//!
//! It turns raw touches into brightness and volume drags or control-bar
//! toggles, runs the auto-hiding overlays, and manages orientation lock,
//! crop mode, audio track selection and the engine lifecycle. The engine and
//! the device are reached through the traits in [`application::port`], so
//! the whole session runs headless against the fakes in [`infrastructure`].

#![doc(html_root_url = "https://docs.rs/cinestream/0.3.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod script;
pub mod session;

#[cfg(test)]
pub mod test_utils;
