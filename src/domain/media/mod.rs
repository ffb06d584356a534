// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! The local media source, the probed details of a video file and the
//! label formatting shown next to it. Independent of the probe that
//! produces the values.

pub mod details;
pub mod source;

// Re-export commonly used types
pub use details::{
    format_bitrate, format_duration, format_file_size, DetailsView, QualityLabel,
    VideoDetails, UNKNOWN_LABEL,
};
pub use source::MediaSource;
