// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for a playback session.
//!
//! Every user action the session handles is recorded in a memory-bounded
//! circular buffer together with warnings and errors, and can be exported
//! as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A timestamped [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`]: The session-owned log and its JSON export

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::DiagnosticsCollector;
pub use events::{DiagnosticEvent, DiagnosticEventKind, UserAction};
pub use report::{DiagnosticReport, ReportMetadata, ReportSummary, SerializableEvent};
