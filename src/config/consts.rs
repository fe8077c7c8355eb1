/// File the mockup simulation writes into its run directory
pub const MOCKUP_OUTPUT_FILE: &str = "mockup.out";
/// Result field the mockup postprocessor fills
pub const MOCKUP_RESULT_KEY: &str = "f";
/// Output file used by configurable postprocessors when no `path` is given
pub const DEFAULT_OUTPUT_PATH: &str = "stdout";
/// Comment marker for numeric text output
pub const DEFAULT_COMMENT_MARKER: &str = "#";
