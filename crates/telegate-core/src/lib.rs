//! Telegate core library for decoding gateway telemetry frames.
//!
//! This crate implements the offline decode pipeline used by the CLI: frame
//! sources feed the report layer, which drives the frame decoder
//! (layout/reader/parser) and aggregates results into a deterministic report.
//! Decoding is byte-oriented and side-effect free; all I/O is isolated in
//! `source` modules. Wire-format conventions are captured in readers so
//! parsers stay minimal.
//!
//! Invariants:
//! - A `TelemetryRecord` is only built after structural validation and
//!   checksum verification both succeed.
//! - Every parse failure maps to exactly one wire result code.
//! - Report outputs are deterministic and stable across runs (record order
//!   follows the input, failure summaries sort by code).
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use telegate_core::decode_hex_file;
//!
//! let report = decode_hex_file(Path::new("frames.hex"))?;
//! println!("decoded {} of {} frames", report.frames_decoded, report.frames_total);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

mod codec;
mod frame;
mod report;
mod source;

pub use codec::{HalfCodecError, f32_to_half, half_to_f32};
pub use frame::{PARSE_SUCCEEDED, ParseFailure, decode_frame};
pub use report::{ReportError, decode_hex_file, decode_source};
pub use source::{FrameEvent, FrameSource, HexFileSource, SourceError};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used when the generation time is unavailable.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// One decoded gateway frame.
///
/// Built only after structural validation and checksum verification both
/// succeed; owned by the decode call that produced it and immutable once
/// built.
///
/// # Examples
/// ```
/// use telegate_core::decode_frame;
///
/// let frame = [
///     0x00, 0xB1, 0x00, 0x01, 0x07, 0xE7, 0x06, 0x0F, 0x0C, 0x1E, 0x00,
///     0x00, 0x02, 0x3C, 0x00, 0x3C,
/// ];
/// let record = decode_frame(Some(&frame), None)?;
/// assert_eq!(record.function_code, "B1");
/// assert_eq!(record.timestamp, "2023-06-15 12:30:00");
/// # Ok::<(), telegate_core::ParseFailure>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryRecord {
    /// Sender IP address as reported by the transport (empty when unknown).
    pub sender_ip: String,
    /// Sender port as reported by the transport (0 when unknown).
    pub sender_port: u16,
    /// Function code rendered as two uppercase hex characters.
    pub function_code: String,
    /// Gateway identifier from the frame header.
    pub gateway_id: u16,
    /// Device timestamp formatted as `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    /// Number of decoded samples.
    pub sample_count: usize,
    /// Decoded sensor readings in payload order.
    pub samples: Vec<f32>,
}

/// Aggregated decode report with deterministic ordering.
///
/// # Examples
/// ```
/// use telegate_core::make_stub_report;
///
/// let report = make_stub_report("frames.hex", 64);
/// assert_eq!(report.report_version, telegate_core::REPORT_VERSION);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeReport {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,
    /// Input file metadata.
    pub input: InputInfo,
    /// Total frames read from the input.
    pub frames_total: u64,
    /// Frames that decoded into a record.
    pub frames_decoded: u64,
    /// Decoded records in input order.
    pub records: Vec<FrameRecord>,
    /// Parse-failure summaries sorted by wire code.
    pub failures: Vec<FailureSummary>,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "telegate").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input file metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the decoder.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// One successfully decoded frame within a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Zero-based index of the frame in the input.
    pub frame_index: u64,
    /// Uppercase hex dump of the raw validated bytes.
    pub raw_hex: String,
    /// The decoded record.
    pub record: TelemetryRecord,
}

/// Aggregated parse failures sharing one wire code.
///
/// # Examples
/// ```
/// use telegate_core::FailureSummary;
///
/// let failure = FailureSummary {
///     code: "0x50".to_string(),
///     label: "checksum mismatch".to_string(),
///     count: 2,
///     examples: vec!["frame 1 @ line 3".to_string()],
/// };
/// assert_eq!(failure.count, 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureSummary {
    /// Wire result code rendered as `0xNN`.
    pub code: String,
    /// Stable failure label (e.g., "checksum mismatch").
    pub label: String,
    /// Number of frames that failed with this code.
    pub count: u64,
    /// At most three example contexts, formatted as `frame N @ line L`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

/// Uppercase hexadecimal projection of raw frame bytes.
///
/// # Examples
/// ```
/// use telegate_core::hex_dump;
///
/// assert_eq!(hex_dump(&[0x00, 0xB1, 0x3C]), "00B13C");
/// ```
pub fn hex_dump(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02X}")).collect()
}

/// Build a stub report with base fields filled and empty aggregates.
///
/// # Examples
/// ```
/// use telegate_core::make_stub_report;
///
/// let report = make_stub_report("frames.hex", 64);
/// assert!(report.records.is_empty());
/// assert!(report.failures.is_empty());
/// ```
pub fn make_stub_report(input_path: &str, input_bytes: u64) -> DecodeReport {
    DecodeReport {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "telegate".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        frames_total: 0,
        frames_decoded: 0,
        records: vec![],
        failures: vec![],
    }
}
