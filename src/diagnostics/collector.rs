// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector owned by the playback session.
//!
//! The session runs on a single execution context, so events are pushed
//! straight into the buffer; there is no cross-thread handle.

use std::time::Instant;

use chrono::{DateTime, Utc};

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, DiagnosticReport,
    ReportMetadata, SerializableEvent, UserAction,
};

/// Bounded log of what happened during a session.
#[derive(Debug, Clone)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    /// Monotonic start, used for relative event timestamps.
    started_at: Instant,
    /// Wall-clock start, used for report metadata.
    started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    /// Creates a collector whose relative timestamps count from `started_at`.
    #[must_use]
    pub fn new(capacity: BufferCapacity, started_at: Instant) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
            started_at,
            started_at_utc: Utc::now(),
        }
    }

    pub fn log_action(&mut self, action: UserAction, at: Instant) {
        self.push(DiagnosticEventKind::UserAction { action }, at);
    }

    pub fn log_warning(&mut self, message: impl Into<String>, at: Instant) {
        self.push(
            DiagnosticEventKind::Warning {
                message: message.into(),
            },
            at,
        );
    }

    pub fn log_error(&mut self, message: impl Into<String>, at: Instant) {
        self.push(
            DiagnosticEventKind::Error {
                message: message.into(),
            },
            at,
        );
    }

    fn push(&mut self, kind: DiagnosticEventKind, at: Instant) {
        self.buffer.push(DiagnosticEvent::new(kind, at));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Returns the stored user actions, oldest first.
    pub fn actions(&self) -> impl Iterator<Item = &UserAction> {
        self.buffer.iter().filter_map(|event| match &event.kind {
            DiagnosticEventKind::UserAction { action } => Some(action),
            _ => None,
        })
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Builds the report as of `now`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn report(&self, now: Instant) -> DiagnosticReport {
        let duration_ms = now.saturating_duration_since(self.started_at).as_millis() as u64;
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent::new(event.at, self.started_at, event.kind.clone()))
            .collect();
        let metadata = ReportMetadata::new(
            Utc::now(),
            self.started_at_utc,
            duration_ms,
            events.len(),
            self.buffer.evicted(),
        );
        DiagnosticReport::new(metadata, events)
    }

    /// Exports the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self, now: Instant) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.report(now))
    }
}
