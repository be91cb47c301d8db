use anyhow::{Context, Result};
use tracing::{info, info_span};

use a34_classify::{ClassifyReport, process_dataset};
use a34_ingest::LocalCorpus;
use a34_tidy::{Dimension, TidyReport, group_totals, read_tidy_csv, run_tidy};

use crate::cli::{ClassifyArgs, SummaryArgs, TidyArgs};
use crate::types::SummaryResult;

pub fn run_tidy_command(args: &TidyArgs) -> Result<TidyReport> {
    let span = info_span!("tidy", input = %args.input.display());
    let _guard = span.enter();
    run_tidy(&args.input, &args.output, &args.layout())
        .with_context(|| format!("tidy {}", args.input.display()))
}

pub fn run_classify(args: &ClassifyArgs) -> Result<ClassifyReport> {
    let span = info_span!("classify", dataset = %args.dataset);
    let _guard = span.enter();
    let corpus = LocalCorpus::new(&args.corpus_dir);
    process_dataset(&corpus, &args.dataset, &args.output_dir)
        .with_context(|| format!("classify dataset {}", args.dataset))
}

pub fn run_summary(args: &SummaryArgs) -> Result<SummaryResult> {
    let dimension = Dimension::from(args.by);
    let span = info_span!("summary", input = %args.input.display(), by = %dimension);
    let _guard = span.enter();

    let records = read_tidy_csv(&args.input).context("load tidy table")?;
    let mut totals = group_totals(&records, dimension);
    let groups = totals.len();
    if let Some(top) = args.top {
        totals.truncate(top);
    }
    info!(records = records.len(), groups, "summarized tidy table");
    Ok(SummaryResult {
        input: args.input.clone(),
        dimension: dimension.to_string(),
        records: records.len(),
        total_count: records.iter().map(|r| r.count).sum(),
        groups,
        totals,
    })
}
