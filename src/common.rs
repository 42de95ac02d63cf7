/*
 * Definitions of data structures used by several modules, such as `QuizError` and the
 * struct that holds command-line arguments.
 */
use std::io;
use std::path::PathBuf;

use clap::Parser;
use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    /// The data file is produced by the generator step, never by us.
    #[error(
        "no trivia file found at '{}'. Run /end-day first to generate questions.",
        .0.display()
    )]
    DataFileNotFound(PathBuf),
    #[error("could not determine the home directory")]
    NoHomeDirectory,
    #[error("could not parse JSON ({0})")]
    Json(#[from] serde_json::Error),
    #[error("cannot write to file '{}' ({source})", .path.display())]
    CannotWriteToFile { path: PathBuf, source: io::Error },
    #[error("IO error ({0})")]
    Io(#[from] io::Error),
    #[error("could not read from the terminal ({0})")]
    Readline(ReadlineError),
    #[error("interrupted")]
    ReadlineInterrupted,
    #[error("no questions found")]
    EmptyQuiz,
}

impl QuizError {
    /// The process exit status for an error that ends the program.
    pub fn exit_code(&self) -> i32 {
        match self {
            QuizError::DataFileNotFound(_) => 1,
            _ => 2,
        }
    }

    pub fn is_broken_pipe(&self) -> bool {
        match self {
            QuizError::Io(e) => e.kind() == io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }
}

pub type Result<T> = ::std::result::Result<T, QuizError>;

/// Holds the command-line configuration for the application.
#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    version,
    about = "Quiz yourself on business logic and code review questions."
)]
pub struct Options {
    /// One of 'stats', 'code', 'biz' or 'help'. Anything else filters questions by
    /// system and code reviews by category.
    pub command: Option<String>,
    /// Filter business logic questions by system (only with 'biz').
    pub filter: Option<String>,
    /// Do not emit colorized output.
    #[arg(long = "no-color")]
    pub no_color: bool,
    /// Log debugging output to standard error.
    #[arg(short, long)]
    pub verbose: bool,
    /// Further arguments are accepted and ignored.
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

/// What the program was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Questions and code reviews, optionally filtered by system or category.
    All {
        filter: Option<String>,
    },
    /// Business logic questions only, optionally filtered by system.
    Questions {
        system: Option<String>,
    },
    CodeReviews,
    Stats,
    Help,
}

impl Mode {
    pub fn from_args(command: Option<&str>, filter: Option<&str>) -> Self {
        let command = command.map(|c| c.trim().to_lowercase());
        match command.as_deref() {
            None | Some("") => Mode::All { filter: None },
            Some("stats") | Some("s") => Mode::Stats,
            Some("code") | Some("c") | Some("cr") => Mode::CodeReviews,
            Some("biz") | Some("b") | Some("q") => Mode::Questions {
                system: filter
                    .map(str::trim)
                    .filter(|f| !f.is_empty())
                    .map(String::from),
            },
            Some("help") => Mode::Help,
            Some(other) => Mode::All {
                filter: Some(other.to_string()),
            },
        }
    }
}

impl Options {
    pub fn mode(&self) -> Mode {
        Mode::from_args(self.command.as_deref(), self.filter.as_deref())
    }
}
