//! Format command implementation.
//!
//! Re-renders an EDN file canonically: one top-level form per line, a
//! single space between container items, comments and discarded-form
//! whitespace normalized away.

use std::path::PathBuf;

use tracing::debug;

use ednr::PrintOptions;

use crate::config::Config;
use crate::error::Result;

/// Arguments for the format command.
#[derive(Debug, Clone)]
pub struct FormatArgs {
    /// File to format.
    pub file: PathBuf,

    /// Emit `\newline`-style names for control characters.
    pub char_names: bool,
}

/// Runs the format command, writing the canonical text to stdout.
pub fn run_format(args: FormatArgs, config: &Config) -> Result<()> {
    debug!(path = %args.file.display(), "formatting");

    let values = ednr::parse_file(&args.file)?;
    let options = PrintOptions {
        char_names: args.char_names || config.format.char_names,
    };
    println!("{}", ednr::print_all(&values, &options));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EdntError;

    #[test]
    fn test_rejects_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        std::fs::write(&path, "{}").unwrap();

        let result = run_format(
            FormatArgs {
                file: path,
                char_names: false,
            },
            &Config::default(),
        );
        assert!(matches!(
            result,
            Err(EdntError::Reader(ednr::Error::InvalidExtension(_)))
        ));
    }

    #[test]
    fn test_formats_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.edn");
        std::fs::write(&path, ";; comment\n{ :a,1 }").unwrap();

        let result = run_format(
            FormatArgs {
                file: path,
                char_names: false,
            },
            &Config::default(),
        );
        assert!(result.is_ok());
    }
}
