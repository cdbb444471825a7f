//! CLI argument parsing for sprout-tui.

mod args;

pub use args::{CliConfig, VERSION, parse_args};
