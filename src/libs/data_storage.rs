//! Platform data directory for voxdo's configuration file.

use anyhow::Result;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const APP_NAME: &str = "voxdo";

/// Resolves voxdo's per-user data directory and hands out paths inside it.
pub struct DataStorage {
    root: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        Self {
            root: Self::platform_root().join(APP_NAME),
        }
    }

    /// Conventional per-user application data location, falling back to the
    /// working directory when the environment gives no anchor.
    fn platform_root() -> PathBuf {
        let root = match env::consts::OS {
            "windows" => env::var_os("LOCALAPPDATA").map(PathBuf::from),
            "macos" => env::var_os("HOME").map(|home| PathBuf::from(home).join("Library/Application Support")),
            _ => env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/share")),
        };
        root.unwrap_or_else(|| PathBuf::from("."))
    }

    /// Path of `file_name` inside the data directory, creating the directory
    /// on first use.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)?;
        Ok(self.root.join(file_name))
    }
}
