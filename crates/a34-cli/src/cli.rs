//! CLI argument definitions for the A34 toolkit.

use std::path::PathBuf;

use a34_ingest::{DEFAULT_SKIP_FOOTER, DEFAULT_SKIP_HEADER, SheetLayout};
use a34_tidy::Dimension;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "a34",
    version,
    about = "A34 inadmissibility toolkit - tidy refusal statistics and classify case law",
    long_about = "Tidy the section-delimited A34 refusal spreadsheet into one row per \
                  observation, and classify immigration case law into inadmissibility \
                  grounds with ordered regex rules."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reshape the A34 spreadsheet into a tidy CSV.
    Tidy(TidyArgs),

    /// Classify one partition of the legal-document corpus.
    Classify(ClassifyArgs),

    /// Aggregate a tidy CSV by one column.
    Summary(SummaryArgs),

    /// List classifier labels in evaluation order.
    Categories,
}

#[derive(Parser)]
pub struct TidyArgs {
    /// A34 workbook (.xlsx, .xls, .ods) or CSV export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination of the tidy CSV (parent directories are created).
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Metadata rows above the column header row.
    #[arg(long = "skip-header", value_name = "ROWS", default_value_t = DEFAULT_SKIP_HEADER)]
    pub skip_header: usize,

    /// Metadata rows below the last data row.
    #[arg(long = "skip-footer", value_name = "ROWS", default_value_t = DEFAULT_SKIP_FOOTER)]
    pub skip_footer: usize,

    /// Worksheet to read (first sheet by default).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,
}

impl TidyArgs {
    pub fn layout(&self) -> SheetLayout {
        SheetLayout {
            skip_header: self.skip_header,
            skip_footer: self.skip_footer,
            sheet: self.sheet.clone(),
        }
    }
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Corpus partition name (e.g. FC, RAD).
    #[arg(long = "dataset", value_name = "NAME")]
    pub dataset: String,

    /// Directory for `<NAME>_data.csv`.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Directory holding corpus partitions as `<NAME>.parquet`, `<NAME>.csv`
    /// or `<NAME>/train.parquet`.
    #[arg(long = "corpus-dir", value_name = "DIR", default_value = "data/raw/corpus")]
    pub corpus_dir: PathBuf,
}

#[derive(Parser)]
pub struct SummaryArgs {
    /// Tidy CSV written by `a34 tidy`.
    #[arg(value_name = "TIDY_CSV")]
    pub input: PathBuf,

    /// Column to group by.
    #[arg(long = "by", value_enum, default_value = "grounds")]
    pub by: DimensionArg,

    /// Show only the first N groups.
    #[arg(long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: SummaryFormatArg,
}

/// Tidy columns available for grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DimensionArg {
    Grounds,
    Country,
    Year,
    CorStatus,
    Resident,
}

impl From<DimensionArg> for Dimension {
    fn from(arg: DimensionArg) -> Self {
        match arg {
            DimensionArg::Grounds => Dimension::Grounds,
            DimensionArg::Country => Dimension::Country,
            DimensionArg::Year => Dimension::Year,
            DimensionArg::CorStatus => Dimension::CorStatus,
            DimensionArg::Resident => Dimension::Resident,
        }
    }
}

/// Summary output choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_tidy_defaults_to_published_layout() {
        let cli = Cli::try_parse_from(["a34", "tidy", "in.xlsx", "out.csv"]).unwrap();
        let Command::Tidy(args) = cli.command else {
            panic!("expected tidy command");
        };
        assert_eq!(args.layout(), SheetLayout::default());
    }

    #[test]
    fn test_classify_requires_dataset() {
        assert!(Cli::try_parse_from(["a34", "classify", "--output-dir", "out"]).is_err());
        let cli = Cli::try_parse_from(["a34", "classify", "--dataset", "FC", "--output-dir", "out"])
            .unwrap();
        let Command::Classify(args) = cli.command else {
            panic!("expected classify command");
        };
        assert_eq!(args.dataset, "FC");
        assert_eq!(args.corpus_dir, PathBuf::from("data/raw/corpus"));
    }

    #[test]
    fn test_summary_dimension_values() {
        let cli = Cli::try_parse_from([
            "a34", "summary", "tidy.csv", "--by", "cor-status", "--top", "3", "--format", "json",
        ])
        .unwrap();
        let Command::Summary(args) = cli.command else {
            panic!("expected summary command");
        };
        assert_eq!(args.by, DimensionArg::CorStatus);
        assert_eq!(Dimension::from(args.by), Dimension::CorStatus);
        assert_eq!(args.top, Some(3));
        assert_eq!(args.format, SummaryFormatArg::Json);
    }
}
