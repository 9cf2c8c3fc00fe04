// config.rs

use directories::ProjectDirs;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "todos.json";

/// Where todos and logs live. Built once in `main` and handed down.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    /// `None` disables logging.
    pub log_dir: Option<PathBuf>,
    pub log_level: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_dir: default_log_dir(),
            log_level: default_log_level(),
        }
    }
}

pub fn default_log_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "todo-cli")
        .map(|dirs| dirs.data_local_dir().join("logs"))
}

pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}
