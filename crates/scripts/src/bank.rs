//! Disk-backed script bank.
//!
//! Layout rooted at a data directory:
//!
//! ```text
//! <root>/bank-path.txt        one line naming the bank dir, relative to root
//! <bank>/script_count.txt     decimal count N
//! <bank>/script_<i>.lasm      script text for index i, 0-based
//! ```
//!
//! The pointer file may carry trailing CR/LF from whatever wrote it; it is
//! stripped before the path is used.

use std::fs;
use std::path::{Path, PathBuf};

use simulation::deploy::{ScriptSource, SourceError};

use super::error::ScriptBankError;

/// File under the data root naming the active bank directory.
pub const POINTER_FILE: &str = "bank-path.txt";
/// File inside a bank directory holding the script count.
pub const COUNT_FILE: &str = "script_count.txt";

#[derive(Debug)]
pub struct ScriptBank {
    dir: PathBuf,
}

impl ScriptBank {
    /// Resolve the bank named by `<root>/bank-path.txt`.
    pub fn open(root: &Path) -> Result<Self, ScriptBankError> {
        let pointer = root.join(POINTER_FILE);
        let raw = fs::read_to_string(&pointer).map_err(|err| {
            ScriptBankError::Unavailable(format!("cannot read {}: {err}", pointer.display()))
        })?;
        let name = raw.trim_end_matches(['\r', '\n']);
        if name.is_empty() {
            return Err(ScriptBankError::Unavailable(format!(
                "{} names no bank directory",
                pointer.display()
            )));
        }
        Ok(Self::from_dir(root.join(name)))
    }

    /// Use a bank directory directly, without pointer resolution.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Total number of scripts the bank advertises.
    pub fn count(&self) -> Result<usize, ScriptBankError> {
        let path = self.dir.join(COUNT_FILE);
        let text = fs::read_to_string(&path).map_err(|err| {
            ScriptBankError::Unavailable(format!("cannot read {}: {err}", path.display()))
        })?;
        text.trim()
            .parse::<usize>()
            .map_err(|err| ScriptBankError::InvalidCount(format!("{:?}: {err}", text.trim())))
    }

    pub fn script_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("script_{index}.lasm"))
    }

    /// Raw text of the script at `index`.
    pub fn read(&self, index: usize) -> Result<String, ScriptBankError> {
        fs::read_to_string(self.script_path(index))
            .map_err(|source| ScriptBankError::MissingScript { index, source })
    }
}

impl ScriptSource for ScriptBank {
    fn script_count(&self) -> Result<usize, SourceError> {
        self.count()
            .map_err(|err| SourceError::Unavailable(err.to_string()))
    }

    fn read_script(&self, index: usize) -> Result<String, SourceError> {
        self.read(index).map_err(|err| match err {
            ScriptBankError::MissingScript { index, source } => SourceError::Missing {
                index,
                reason: source.to_string(),
            },
            other => SourceError::Unavailable(other.to_string()),
        })
    }
}
