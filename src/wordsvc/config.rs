//! # Configuration
//!
//! Settings live in a JSON file and are all optional.
//!
//! ## Resolution
//!
//! 1. `--config <file>` on the command line, otherwise
//! 2. `config.json` in the platform config directory (via `directories`)
//! 3. Compiled defaults when no file exists
//!
//! The documents directory is further overridden by `WORDSVC_DOCUMENTS_DIR` and
//! then by `--documents-dir`, which wins over everything.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `documents_dir` | working directory | Where document names are resolved |
//! | `server_name` | `MCP Word Service` | Name reported in the MCP handshake |

use crate::error::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
pub const DOCUMENTS_DIR_ENV: &str = "WORDSVC_DOCUMENTS_DIR";
const DEFAULT_SERVER_NAME: &str = "MCP Word Service";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordConfig {
    #[serde(default)]
    pub documents_dir: Option<PathBuf>,

    #[serde(default = "default_server_name")]
    pub server_name: String,
}

fn default_server_name() -> String {
    DEFAULT_SERVER_NAME.to_string()
}

impl Default for WordConfig {
    fn default() -> Self {
        Self {
            documents_dir: None,
            server_name: default_server_name(),
        }
    }
}

impl WordConfig {
    /// Platform config directory, if one can be determined.
    pub fn default_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "wordsvc", "wordsvc").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load config from `config.json` in the given directory, or defaults if absent.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        Self::load_file(config_dir.as_ref().join(CONFIG_FILENAME))
    }

    /// Load config from an explicit file path, or defaults if absent.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Effective documents directory: flag, then env value, then the file
    /// setting, then `cwd`.
    pub fn documents_dir(&self, flag: Option<&Path>, env: Option<&str>, cwd: &Path) -> PathBuf {
        if let Some(dir) = flag {
            return dir.to_path_buf();
        }
        if let Some(dir) = env.filter(|v| !v.is_empty()) {
            return PathBuf::from(dir);
        }
        self.documents_dir
            .clone()
            .unwrap_or_else(|| cwd.to_path_buf())
    }
}
