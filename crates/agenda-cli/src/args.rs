use crate::types::{LogLevel, OutputFormat};
use agenda_types::LookupColumn;
use clap::{Args, Parser};
use std::path::PathBuf;

/// Options shared by both tools.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// SQLite database file [env: AGENDA_DB] [default: interview_test.db]
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// TOML config file [env: AGENDA_CONFIG] [default: ./agenda.toml if present]
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(Debug, Parser)]
#[command(name = "import_agenda")]
#[command(about = "Import a conference agenda spreadsheet into the agenda database", long_about = None)]
#[command(version)]
pub struct ImportCli {
    /// Agenda spreadsheet (.xls, .xlsx, .xlsm, .xlsb, .xla, .xlam, .ods or .csv)
    pub file: PathBuf,

    /// Rows to skip before the first agenda row
    #[arg(long)]
    pub header_rows: Option<usize>,

    /// Write all rows in one transaction; nothing is kept if any insert fails
    #[arg(long)]
    pub atomic: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Parser)]
#[command(name = "lookup_agenda")]
#[command(about = "Look up agenda sessions by one column", long_about = None)]
#[command(version)]
pub struct LookupCli {
    /// Column to match: date, time_start, time_end, session_title, location,
    /// description or speakers
    pub column: LookupColumn,

    /// Value to match. Case-insensitive whole value, except `speakers`, which
    /// matches a case-sensitive substring
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    #[arg(long, default_value = "plain")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}
