// store.rs

use crate::error::TodoError;
use crate::todo::Todo;
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Whole-document persistence of the todo list as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every todo. A missing file is an empty list.
    pub fn load(&self) -> Result<Vec<Todo>, TodoError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(
                    "event=store_load status=missing path={}",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(TodoError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        let todos: Vec<Todo> = match serde_json::from_str::<Option<Vec<Todo>>>(&data) {
            Ok(todos) => todos.unwrap_or_default(),
            Err(source) => return Err(self.parse_error(source)),
        };
        debug!(
            "event=store_load status=ok path={} count={}",
            self.path.display(),
            todos.len()
        );
        Ok(todos)
    }

    /// Replaces the document with `todos`. The new content goes to a sibling
    /// temp file first and is renamed into place.
    pub fn save(&self, todos: &[Todo]) -> Result<(), TodoError> {
        let json = serde_json::to_string_pretty(todos)?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| self.write_error(e))?;
        }
        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(|e| self.write_error(e))?;
        if let Err(source) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(self.write_error(source));
        }

        debug!(
            "event=store_save status=ok path={} count={}",
            self.path.display(),
            todos.len()
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn parse_error(&self, source: serde_json::Error) -> TodoError {
        TodoError::Parse {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: std::io::Error) -> TodoError {
        TodoError::Write {
            path: self.path.clone(),
            source,
        }
    }
}
