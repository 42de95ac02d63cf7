/*
 * Reading and writing the quiz data file.
 */
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::common::{QuizError, Result};
use super::quiz::QuizData;

/// The single JSON file that holds every question and the streak.
///
/// Writes are not atomic: an interrupted save can leave a truncated file behind, and
/// two processes playing against the same file will overwrite each other.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: PathBuf) -> Self {
        Store { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the data file. A missing file is reported as `QuizError::DataFileNotFound`
    /// since only the generator creates it.
    pub fn load(&self) -> Result<QuizData> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(ref e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(QuizError::DataFileNotFound(self.path.clone()));
            }
            Err(e) => return Err(QuizError::Io(e)),
        };
        let data: QuizData = serde_json::from_str(&contents)?;
        debug!(
            path = %self.path.display(),
            questions = data.questions.len(),
            code_reviews = data.code_reviews().len(),
            "loaded quiz data"
        );
        Ok(data)
    }

    /// Overwrite the data file with `data`, pretty-printed.
    pub fn save(&self, data: &QuizData) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized).map_err(|source| QuizError::CannotWriteToFile {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "saved quiz data");
        Ok(())
    }
}
