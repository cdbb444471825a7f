//! CLI argument parsing and configuration.

use std::io;
use std::path::PathBuf;

use crate::models::Screen;
use crate::storage;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name used in greetings when --name is not given
const DEFAULT_NAME: &str = "superstar";

/// Configuration from CLI arguments
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub child_name: String,
    pub start_screen: Screen,
    pub reset_progress: bool,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Sprout TUI - playful terminal learning app for young children");
    eprintln!();
    eprintln!("Usage: sprout-tui [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --name <NAME>       Child's name used in greetings (default: {DEFAULT_NAME})");
    eprintln!("  --data-dir <PATH>   Where to keep saved stars (default: platform data dir)");
    eprintln!("  --screen <SCREEN>   Start screen: home, shapes, colors, numbers, alphabet");
    eprintln!("  --reset             Clear all saved stars before starting");
    eprintln!("  -h, --help          Show this help message");
    eprintln!("  -V, --version       Show version");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  sprout-tui --name Mia              # Greet Mia on the home screen");
    eprintln!("  sprout-tui --screen numbers        # Jump straight to the numbers screen");
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> io::Result<CliConfig> {
    let args: Vec<String> = std::env::args().collect();
    let mut data_dir: Option<PathBuf> = None;
    let mut child_name: Option<String> = None;
    let mut start_screen = Screen::Home;
    let mut reset_progress = false;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-h" || arg == "--help" {
            print_usage();
            std::process::exit(0);
        } else if arg == "-V" || arg == "--version" {
            println!("sprout-tui {}", VERSION);
            std::process::exit(0);
        } else if arg == "--reset" {
            reset_progress = true;
            i += 1;
        } else if arg == "--name" {
            i += 1;
            if i >= args.len() {
                print_usage();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Missing value for --name",
                ));
            }
            child_name = Some(args[i].clone());
            i += 1;
        } else if arg == "--data-dir" {
            i += 1;
            if i >= args.len() {
                print_usage();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Missing value for --data-dir",
                ));
            }
            data_dir = Some(PathBuf::from(&args[i]));
            i += 1;
        } else if arg == "--screen" {
            i += 1;
            if i >= args.len() {
                print_usage();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Missing value for --screen",
                ));
            }
            start_screen = Screen::from_key(&args[i]).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Unknown screen: {}", args[i]),
                )
            })?;
            i += 1;
        } else {
            print_usage();
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }

    Ok(CliConfig {
        data_dir: data_dir.unwrap_or_else(storage::default_data_dir),
        child_name: child_name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
        start_screen,
        reset_progress,
    })
}
