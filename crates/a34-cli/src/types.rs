use std::path::PathBuf;

use a34_tidy::GroupTotal;
use serde::Serialize;

/// Grouped totals of one tidy CSV, as printed by `a34 summary`.
#[derive(Debug, Serialize)]
pub struct SummaryResult {
    pub input: PathBuf,
    pub dimension: String,
    pub records: usize,
    pub total_count: u64,
    /// Groups before `--top` was applied.
    pub groups: usize,
    pub totals: Vec<GroupTotal>,
}
