use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, RosterError};

use super::{format, Roster};

/// Data file used when no path is configured.
pub const DEFAULT_DATA_FILE: &str = "attendance_data.txt";

/// What happened when the data file was read at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No readable file; the roster starts empty.
    Missing,
    /// `count` students were loaded. `truncated` is set when reading stopped
    /// at a malformed record.
    Loaded { count: usize, truncated: bool },
}

/// The flat text file a roster is persisted to.
#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Clear `roster` and refill it from the file.
    ///
    /// A missing or unreadable file is not an error. Reading stops at the first
    /// malformed record, keeping the students read before it.
    pub fn load_into(&self, roster: &mut Roster) -> LoadOutcome {
        roster.clear();
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                if e.kind() == io::ErrorKind::NotFound {
                    tracing::info!(path = %self.path.display(), "no data file, starting fresh");
                } else {
                    tracing::warn!(path = %self.path.display(), error = %e, "data file unreadable, starting fresh");
                }
                return LoadOutcome::Missing;
            }
        };

        let mut truncated = false;
        for record in format::records(&contents) {
            let added = record.and_then(|student| roster.add(student).map(|_| ()));
            if let Err(e) = added {
                tracing::warn!(
                    path = %self.path.display(),
                    loaded = roster.len(),
                    error = %e,
                    "stopped reading data file at malformed record"
                );
                truncated = true;
                break;
            }
        }

        tracing::info!(path = %self.path.display(), count = roster.len(), "roster loaded");
        LoadOutcome::Loaded {
            count: roster.len(),
            truncated,
        }
    }

    /// Overwrite the file with every student in `roster`.
    pub fn save(&self, roster: &Roster) -> Result<()> {
        let save_err = |source: io::Error| RosterError::Save {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(save_err)?;
        }
        fs::write(&self.path, format::encode(roster)).map_err(save_err)?;

        tracing::info!(path = %self.path.display(), count = roster.len(), "roster saved");
        Ok(())
    }
}
