//! Configuration and constants for the CLI.

/// Path value that selects standard output instead of a file
pub const STDOUT_MARKER: &str = "-";

/// Command-line option naming the report destination
pub const OUTFILE_OPTION: &str = "--outfile";

/// Exit status for invocations the tool refuses to run (sysexits EX_USAGE)
pub const EXIT_USAGE_ERROR: i32 = 64;

// Expression tags of the byte-level reinterpretation operators
pub const ID_BYTE_EXTRACT_LITTLE_ENDIAN: &str = "byte_extract_little_endian";
pub const ID_BYTE_EXTRACT_BIG_ENDIAN: &str = "byte_extract_big_endian";
pub const ID_BYTE_UPDATE_LITTLE_ENDIAN: &str = "byte_update_little_endian";
pub const ID_BYTE_UPDATE_BIG_ENDIAN: &str = "byte_update_big_endian";

/// Parent key of the structured document when several kinds are reported
pub const BYTE_OPS_STATS_KEY: &str = "byteOpsStats";
