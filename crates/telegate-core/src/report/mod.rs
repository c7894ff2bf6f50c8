use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::frame::decode_frame;
use crate::source::{FrameEvent, FrameSource, HexFileSource, SourceError};
use crate::{DEFAULT_GENERATED_AT, DecodeReport, FrameRecord, hex_dump, make_stub_report};

mod failures;

use failures::{FailureStats, add_failure, build_failure_summaries};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

pub fn decode_hex_file(path: &Path) -> Result<DecodeReport, ReportError> {
    let source = HexFileSource::open(path)?;
    decode_source(path, source)
}

pub fn decode_source<S: FrameSource>(
    path: &Path,
    mut source: S,
) -> Result<DecodeReport, ReportError> {
    let mut frames_total = 0u64;
    let mut records = Vec::new();
    let mut failure_stats: HashMap<u8, FailureStats> = HashMap::new();

    while let Some(FrameEvent { line, data }) = source.next_frame()? {
        let frame_index = frames_total;
        frames_total += 1;
        match decode_frame(Some(&data), None) {
            Ok(record) => records.push(FrameRecord {
                frame_index,
                raw_hex: hex_dump(&data),
                record,
            }),
            Err(failure) => add_failure(&mut failure_stats, &failure, frame_index, line),
        }
    }

    let mut report = make_stub_report(&path.display().to_string(), path.metadata()?.len());
    report.generated_at = generated_at();
    report.frames_total = frames_total;
    report.frames_decoded = records.len() as u64;
    report.records = records;
    report.failures = build_failure_summaries(failure_stats);
    Ok(report)
}

fn generated_at() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| DEFAULT_GENERATED_AT.to_string())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::decode_source;
    use crate::source::{FrameEvent, FrameSource, SourceError};

    fn input_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("frames.hex");
        fs::write(&path, "# placeholder input\n").unwrap();
        path
    }

    struct VecSource {
        frames: std::vec::IntoIter<FrameEvent>,
    }

    impl VecSource {
        fn new(frames: Vec<Vec<u8>>) -> Self {
            let frames: Vec<FrameEvent> = frames
                .into_iter()
                .enumerate()
                .map(|(index, data)| FrameEvent {
                    line: index as u64 + 1,
                    data,
                })
                .collect();
            Self {
                frames: frames.into_iter(),
            }
        }
    }

    impl FrameSource for VecSource {
        fn next_frame(&mut self) -> Result<Option<FrameEvent>, SourceError> {
            Ok(self.frames.next())
        }
    }

    fn valid_frame() -> Vec<u8> {
        vec![
            0x00, 0xB1, 0x00, 0x01, 0x07, 0xE7, 0x06, 0x0F, 0x0C, 0x1E, 0x00, 0x00, 0x02, 0x3C,
            0x00, 0x3C,
        ]
    }

    #[test]
    fn report_counts_records_and_failures() {
        let dir = TempDir::new().unwrap();
        let mut corrupted = valid_frame();
        corrupted[15] = 0x00;
        let mut unknown = valid_frame();
        unknown[1] = 0xA0;
        let source = VecSource::new(vec![valid_frame(), corrupted, unknown]);

        let report = decode_source(&input_file(&dir), source).unwrap();
        assert_eq!(report.frames_total, 3);
        assert_eq!(report.frames_decoded, 1);
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].frame_index, 0);
        assert_eq!(report.records[0].record.gateway_id, 1);
        assert_eq!(report.failures.len(), 2);
    }

    #[test]
    fn failures_are_sorted_by_code() {
        let mut unknown = valid_frame();
        unknown[1] = 0xA0;
        let mut corrupted = valid_frame();
        corrupted[15] = 0x00;
        // Checksum failure arrives first; the summary still sorts by code.
        let source = VecSource::new(vec![corrupted, unknown]);

        let dir = TempDir::new().unwrap();
        let report = decode_source(&input_file(&dir), source).unwrap();
        let codes: Vec<&str> = report
            .failures
            .iter()
            .map(|failure| failure.code.as_str())
            .collect();
        assert_eq!(codes, vec!["0x25", "0x50"]);
    }

    #[test]
    fn failure_examples_are_capped() {
        let mut corrupted = valid_frame();
        corrupted[15] = 0x00;
        let source = VecSource::new(vec![corrupted.clone(); 5]);

        let dir = TempDir::new().unwrap();
        let report = decode_source(&input_file(&dir), source).unwrap();
        assert_eq!(report.failures.len(), 1);
        let failure = &report.failures[0];
        assert_eq!(failure.code, "0x50");
        assert_eq!(failure.label, "checksum mismatch");
        assert_eq!(failure.count, 5);
        assert_eq!(
            failure.examples,
            vec!["frame 0 @ line 1", "frame 1 @ line 2", "frame 2 @ line 3"]
        );
    }

    #[test]
    fn raw_hex_is_uppercase_dump_of_frame() {
        let dir = TempDir::new().unwrap();
        let source = VecSource::new(vec![valid_frame()]);
        let report = decode_source(&input_file(&dir), source).unwrap();
        assert_eq!(
            report.records[0].raw_hex,
            "00B1000107E7060F0C1E0000023C003C"
        );
    }
}
