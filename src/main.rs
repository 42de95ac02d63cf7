/*
 * Command-line entry point for the trivia quiz.
 */
use std::io;
use std::io::Write;

use clap::Parser;
use colored::*;
use tracing::debug;

use trivia::repetition::build_pool;
use trivia::ui::{self, CmdUI};
use trivia::{stats, Config, Mode, Options, QuizError, Result, Store, Terminal};

fn main() {
    let options = Options::parse();
    trivia::logging::init(options.verbose);

    if options.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&options) {
        if !e.is_broken_pipe() {
            eprintln!("{}: {}", "Error".red(), e);
            ::std::process::exit(e.exit_code());
        }
    }
}

fn run(options: &Options) -> Result<()> {
    let mode = options.mode();
    debug!(?mode, "parsed command line");
    if mode == Mode::Help {
        return ui::usage(&mut io::stdout());
    }

    let config = Config::discover()?;
    let store = Store::new(config.data_path.clone());
    let mut data = store.load()?;

    if mode == Mode::Stats {
        let report = stats::report(&data);
        return write!(io::stdout(), "{}", report).map_err(QuizError::Io);
    }

    let pool = build_pool(&data, &mode);
    if pool.is_empty() {
        writeln!(io::stdout(), "No questions found. Run /end-day to generate some!")?;
        return Ok(());
    }

    let mut ui = CmdUI::new(io::stdout(), Terminal::new()?, config.clear_screen);
    data.take(&pool, &store, &mut ui, &mut rand::thread_rng())?;
    Ok(())
}
