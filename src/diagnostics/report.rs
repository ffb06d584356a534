// SPDX-License-Identifier: MPL-2.0
//! Diagnostic report structures exported as JSON.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DiagnosticEventKind;

// =============================================================================
// Report Metadata
// =============================================================================

/// Metadata about a diagnostic report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// When the report was generated (RFC 3339)
    pub generated_at: String,
    /// Version of cinestream that generated the report
    pub cinestream_version: String,
    /// When the session started collecting (RFC 3339)
    pub collection_started_at: String,
    /// Duration of collection in milliseconds
    pub collection_duration_ms: u64,
    /// Number of events in the report
    pub event_count: usize,
    /// Events dropped because the buffer was full
    pub evicted_count: u64,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        generated_at: DateTime<Utc>,
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
        evicted_count: u64,
    ) -> Self {
        Self {
            generated_at: generated_at.to_rfc3339(),
            cinestream_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
            evicted_count,
        }
    }
}

// =============================================================================
// Serializable Event
// =============================================================================

/// An event with its timestamp made relative to the start of collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    /// Milliseconds since collection started
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(at: Instant, collection_start: Instant, kind: DiagnosticEventKind) -> Self {
        let timestamp_ms = at.saturating_duration_since(collection_start).as_millis() as u64;
        Self { timestamp_ms, kind }
    }
}

// =============================================================================
// Report Summary
// =============================================================================

/// Event counts per kind.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSummary {
    pub user_actions: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl ReportSummary {
    #[must_use]
    pub fn from_events(events: &[SerializableEvent]) -> Self {
        events
            .iter()
            .fold(Self::default(), |mut summary, event| {
                match event.kind {
                    DiagnosticEventKind::UserAction { .. } => summary.user_actions += 1,
                    DiagnosticEventKind::Warning { .. } => summary.warnings += 1,
                    DiagnosticEventKind::Error { .. } => summary.errors += 1,
                }
                summary
            })
    }
}

// =============================================================================
// Diagnostic Report
// =============================================================================

/// Complete exported report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub summary: ReportSummary,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(metadata: ReportMetadata, events: Vec<SerializableEvent>) -> Self {
        let summary = ReportSummary::from_events(&events);
        Self {
            metadata,
            summary,
            events,
        }
    }
}
