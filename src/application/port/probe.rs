// SPDX-License-Identifier: MPL-2.0
//! Metadata probe port definition.
//!
//! Probing may block on I/O, so callers run it on a blocking worker and
//! hand the result back to the session context.

use crate::domain::error::SessionError;
use crate::domain::media::VideoDetails;
use std::path::Path;

/// Port for reading duration, codec and resolution of a local file.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: a shared probe is moved into a
/// blocking worker for every request.
pub trait MetadataProbe: Send + Sync {
    /// Probes `path`. Fields the probe cannot determine stay `None`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MetadataProbeFailed`] if the file cannot be
    /// inspected at all.
    fn probe(&self, path: &Path) -> Result<VideoDetails, SessionError>;
}
