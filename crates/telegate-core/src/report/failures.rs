use std::collections::HashMap;

use crate::FailureSummary;
use crate::frame::ParseFailure;

/// At most this many example contexts are kept per failure code.
pub(crate) const MAX_FAILURE_EXAMPLES: usize = 3;

#[derive(Debug, Default, Clone)]
pub(crate) struct FailureStats {
    pub label: &'static str,
    pub count: u64,
    pub examples: Vec<String>,
}

pub(crate) fn add_failure(
    stats: &mut HashMap<u8, FailureStats>,
    failure: &ParseFailure,
    frame_index: u64,
    line: u64,
) {
    let entry = stats.entry(failure.code()).or_default();
    entry.label = failure.label();
    entry.count += 1;
    if entry.examples.len() < MAX_FAILURE_EXAMPLES {
        entry.examples.push(format!("frame {frame_index} @ line {line}"));
    }
}

pub(crate) fn build_failure_summaries(stats: HashMap<u8, FailureStats>) -> Vec<FailureSummary> {
    let mut failures: Vec<FailureSummary> = stats
        .into_iter()
        .map(|(code, stats)| FailureSummary {
            code: format!("{code:#04x}"),
            label: stats.label.to_string(),
            count: stats.count,
            examples: stats.examples,
        })
        .collect();

    failures.sort_by(|a, b| a.code.cmp(&b.code));
    failures
}
