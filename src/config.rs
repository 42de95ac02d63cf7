/*
 * Resolved runtime configuration. Everything that depends on the environment is
 * looked up once here and handed to the rest of the program.
 */
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use super::common::{QuizError, Result};

/// Location of the data file relative to the home directory.
const DATA_FILE: [&str; 3] = ["devmaxxing", "trivia", "questions.json"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_path: PathBuf,
    /// Clear the terminal before each question.
    pub clear_screen: bool,
}

impl Config {
    pub fn from_home(home: &Path) -> Self {
        let mut data_path = home.to_path_buf();
        data_path.extend(DATA_FILE.iter());
        Config {
            data_path,
            clear_screen: false,
        }
    }

    /// Build the configuration from the user's home directory. The screen is only
    /// cleared between questions when standard output is a terminal.
    pub fn discover() -> Result<Self> {
        let home = dirs::home_dir().ok_or(QuizError::NoHomeDirectory)?;
        let mut config = Config::from_home(&home);
        config.clear_screen = std::io::stdout().is_terminal();
        Ok(config)
    }
}
