// SPDX-License-Identifier: MPL-2.0
//! Local media source handed to the player.

use crate::domain::error::SessionError;
use std::path::{Path, PathBuf};

const FILE_SCHEME: &str = "file://";

/// A local video file. Network sources are not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSource {
    path: PathBuf,
}

impl MediaSource {
    /// Accepts either a plain path or a `file://` URI.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidMediaPath`] for an empty path or a
    /// URI with a non-`file` scheme.
    pub fn parse(input: &str) -> Result<Self, SessionError> {
        let input = input.trim();
        let path = match input.strip_prefix(FILE_SCHEME) {
            Some(rest) => rest,
            None if input.contains("://") => return Err(SessionError::InvalidMediaPath),
            None => input,
        };
        if path.is_empty() {
            return Err(SessionError::InvalidMediaPath);
        }
        Ok(Self {
            path: PathBuf::from(path),
        })
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the `file://` URI given to the engine.
    #[must_use]
    pub fn uri(&self) -> String {
        format!("{FILE_SCHEME}{}", self.path.display())
    }
}
