//! Command modules for the ednt CLI.
//!
//! Each subcommand lives in its own file and exposes an args struct plus
//! a `run_*` entry point called from `main`.

pub mod check;
pub mod convert;
pub mod format;

pub use check::{run_check, CheckArgs};
pub use convert::{run_convert, ConvertArgs};
pub use format::{run_format, FormatArgs};
