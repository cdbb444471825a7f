//! Durable key-value storage for progress data.
//!
//! One file per key under the app data directory. Values are plain strings;
//! a missing or unreadable value surfaces as `None` so callers can fall
//! back to defaults instead of erroring.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Directory name under the platform data dir
const APP_DIR: &str = "sprout-tui";

/// String-valued key-value store rooted at a directory
#[derive(Debug, Clone)]
pub struct KvStore {
    root: PathBuf,
}

impl KvStore {
    /// Open a store rooted at `root`. The directory is created lazily on
    /// the first write.
    pub fn open(root: PathBuf) -> Self {
        Self { root }
    }

    /// Read the value stored under `key`, if any
    pub fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.root.join(key)).ok()
    }

    /// Write `value` under `key`, overwriting any prior value
    pub fn set(&self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.root.join(key), value)
    }
}

/// Default storage location: the platform data dir, or the current
/// directory when none is available
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}
