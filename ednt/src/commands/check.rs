//! Check command implementation.
//!
//! Parses every input file and reports a line-numbered diagnostic for
//! each failure. The process exits non-zero when any file fails.

use std::path::PathBuf;

use tracing::debug;

use crate::error::{EdntError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Files to check.
    pub files: Vec<PathBuf>,
}

/// Runs the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    if args.files.is_empty() {
        return Err(EdntError::Validation("no input files given".to_string()));
    }

    let mut failures = 0usize;
    for path in &args.files {
        debug!(path = %path.display(), "checking");
        match ednr::parse_file(path) {
            Ok(values) => {
                println!("{}: OK ({} forms)", path.display(), values.len());
            },
            Err(err) => {
                failures += 1;
                eprintln!("{}: {}", path.display(), err);
            },
        }
    }

    if failures > 0 {
        return Err(EdntError::CommandExecution(format!(
            "{failures} of {} files failed",
            args.files.len()
        )));
    }
    Ok(())
}
