use crate::aggregator::OperationKind;
use crate::output::OutputFormat;
use std::path::PathBuf;

/// Arguments for the byte-operation report commands
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Path to the SSA trace JSON file
    pub trace_path: PathBuf,

    /// Operation kinds to report, each in its own pass
    pub kinds: Vec<OperationKind>,

    /// Requested output format
    pub format: OutputFormat,

    /// Report file (None or "-" = stdout)
    pub outfile: Option<PathBuf>,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            trace_path: PathBuf::from("trace.json"),
            kinds: OperationKind::ALL.to_vec(),
            format: OutputFormat::Plain,
            outfile: None,
        }
    }
}

/// Arguments for the program listing command
#[derive(Debug, Clone)]
pub struct ProgramArgs {
    /// Path to the SSA trace JSON file
    pub trace_path: PathBuf,

    /// Listing file (None or "-" = stdout)
    pub outfile: Option<PathBuf>,
}
