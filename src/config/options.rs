// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub url: String,
    /// `None` blocks until the remote host answers or drops the connection.
    pub timeout: Option<Duration>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            url: SOURCE_URL.to_string(),
            timeout: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub file_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_name: EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        self.out_dir.join(&self.file_name)
    }

    /// Accept either a directory or a full file path.
    /// A path with an extension is treated as the target file.
    pub fn set_path(&mut self, text: &str) {
        let p = PathBuf::from(text.trim());
        if p.extension().is_some() {
            if let Some(parent) = p.parent() {
                self.out_dir = parent.to_path_buf();
            }
            if let Some(name) = p.file_name() {
                self.file_name = name.to_string_lossy().into_owned();
            }
        } else {
            self.out_dir = p;
        }
    }
}
