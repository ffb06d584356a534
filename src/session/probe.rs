// SPDX-License-Identifier: MPL-2.0
//! Background metadata probing.
//!
//! Probing may block on I/O, so it runs on tokio's blocking pool. The
//! worker never touches session state: it only sends a [`ProbeResult`] back
//! over a channel, and the session decides on its own context whether the
//! result is still wanted.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::port::MetadataProbe;
use crate::domain::error::SessionError;
use crate::domain::media::VideoDetails;

/// A probe the session wants run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    /// Incremented for every request; stale results are ignored.
    pub generation: u64,
    pub path: PathBuf,
}

/// Outcome of a probe, tagged with the request's generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub generation: u64,
    pub outcome: Result<VideoDetails, SessionError>,
}

/// Runs `request` on the blocking pool and sends the result to `results`.
///
/// If the receiver is gone (session torn down) the result is dropped.
/// Must be called from within a tokio runtime.
pub fn spawn_probe(
    probe: Arc<dyn MetadataProbe>,
    request: ProbeRequest,
    results: mpsc::UnboundedSender<ProbeResult>,
) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        let outcome = probe.probe(&request.path);
        let result = ProbeResult {
            generation: request.generation,
            outcome,
        };
        if results.send(result).is_err() {
            tracing::debug!(
                generation = request.generation,
                "probe finished after session teardown"
            );
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::time::Duration;

    struct SlowProbe;

    impl MetadataProbe for SlowProbe {
        fn probe(&self, path: &Path) -> Result<VideoDetails, SessionError> {
            if path.ends_with("broken.mp4") {
                return Err(SessionError::MetadataProbeFailed("no moov atom".into()));
            }
            Ok(VideoDetails {
                duration: Some(Duration::from_secs(61)),
                resolution: Some((1280, 720)),
                ..VideoDetails::default()
            })
        }
    }

    #[tokio::test]
    async fn result_comes_back_with_its_generation() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_probe(
            Arc::new(SlowProbe),
            ProbeRequest {
                generation: 3,
                path: PathBuf::from("/videos/ok.mp4"),
            },
            tx,
        )
        .await
        .expect("probe task should not panic");

        let result = rx.recv().await.expect("a result");
        assert_eq!(result.generation, 3);
        let details = result.outcome.expect("probe should succeed");
        assert_eq!(details.summary(), "01:01 · 720p");
    }

    #[tokio::test]
    async fn failure_is_delivered_not_raised() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_probe(
            Arc::new(SlowProbe),
            ProbeRequest {
                generation: 1,
                path: PathBuf::from("/videos/broken.mp4"),
            },
            tx,
        )
        .await
        .expect("probe task should not panic");

        let result = rx.recv().await.expect("a result");
        assert!(matches!(
            result.outcome,
            Err(SessionError::MetadataProbeFailed(_))
        ));
    }

    #[tokio::test]
    async fn closed_receiver_drops_result() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        spawn_probe(
            Arc::new(SlowProbe),
            ProbeRequest {
                generation: 1,
                path: PathBuf::from("/videos/ok.mp4"),
            },
            tx,
        )
        .await
        .expect("probe task should not panic");
    }
}
