/*
 * Take a trivia quiz on questions drawn from your own pull requests.
 */
#[macro_use]
mod iohelper;

pub mod common;
pub mod config;
pub mod logging;
pub mod persistence;
pub mod quiz;
pub mod repetition;
pub mod stats;
pub mod ui;

pub use common::{Mode, Options, QuizError, Result};
pub use config::Config;
pub use iohelper::{LineReader, Terminal};
pub use persistence::Store;
pub use quiz::{QuizData, SessionResult};
