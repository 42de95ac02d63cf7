/*
 * The command-line user interface for taking quizzes.
 */
use std::io::Write;

use colored::*;

use super::common::Result;
use super::iohelper::{prettyprint, prompt, LineReader};
use super::quiz::{CodeReview, Item, Question, SessionResult};

const BOX_WIDTH: usize = 49;

pub struct CmdUI<W: Write, L: LineReader> {
    out: W,
    input: L,
    clear_screen: bool,
}

impl<W: Write, L: LineReader> CmdUI<W, L> {
    pub fn new(out: W, input: L, clear_screen: bool) -> Self {
        Self {
            out,
            input,
            clear_screen,
        }
    }

    /// Release the output and input.
    pub fn into_parts(self) -> (W, L) {
        (self.out, self.input)
    }

    pub fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            my_print!(self.out, "\x1b[2J\x1b[H")?;
        }
        Ok(())
    }

    pub fn item(&mut self, item: Item) -> Result<()> {
        match item {
            Item::Question(q) => self.question(q),
            Item::CodeReview(cr) => self.code_review(cr),
        }
    }

    fn question(&mut self, q: &Question) -> Result<()> {
        my_println!(self.out, "{} {}\n", " TRIVIA ".on_blue().bold(), q.system.dimmed())?;
        let source = format!("Source: {} → {}", q.source_pr, q.source_file);
        my_println!(self.out, "{}\n", source.dimmed())?;
        my_println!(self.out, "{}\n", q.question.yellow())?;
        self.flush()
    }

    fn code_review(&mut self, cr: &CodeReview) -> Result<()> {
        my_println!(
            self.out,
            "{} {}\n",
            " CODE REVIEW ".on_magenta().bold(),
            cr.category.as_str().dimmed()
        )?;
        let from = format!("From: {} on {}", cr.reviewer, cr.source_pr);
        my_println!(self.out, "{}", from.dimmed())?;
        let file = format!("File: {}", cr.source_file);
        my_println!(self.out, "{}\n", file.dimmed())?;
        my_println!(self.out, "{}\n", "What's wrong with this code?".yellow())?;

        let rule = "─".repeat(BOX_WIDTH);
        my_println!(self.out, "{}", format!("┌{}┐", rule).cyan())?;
        for line in cr.code_snippet.split('\n') {
            my_println!(self.out, "{} {}", "│".cyan(), line)?;
        }
        my_println!(self.out, "{}\n", format!("└{}┘", rule).cyan())?;
        self.flush()
    }

    /// Wait for the operator to ask for the answer.
    pub fn reveal(&mut self) -> Result<Option<String>> {
        self.prompt(&format!("{}", "[Press Enter to reveal]".dimmed()))
    }

    pub fn answer(&mut self, answer: &str) -> Result<()> {
        my_println!(self.out, "\n{}", "Answer:".green().bold())?;
        prettyprint(&mut self.out, answer)?;
        my_println!(self.out)?;
        self.flush()
    }

    pub fn grade(&mut self) -> Result<Option<String>> {
        let message = format!(
            "Did you get it? {}/{}/{}: ",
            "(y)".green(),
            "(n)".red(),
            "(q)uit".dimmed()
        );
        self.prompt(&message)
    }

    pub fn correct(&mut self, streak: u32) -> Result<()> {
        my_println!(self.out, "\n{} Streak: {}", "✓ Nice!".green(), streak)
    }

    pub fn incorrect(&mut self) -> Result<()> {
        my_println!(self.out, "\n{}", "○ You'll get it next time".yellow())
    }

    /// Wait for the operator to move on to the next question.
    pub fn next(&mut self) -> Result<Option<String>> {
        self.prompt(&format!("{} ", "[Enter for next, q to quit]".dimmed()))
    }

    pub fn results(&mut self, results: &SessionResult) -> Result<()> {
        my_println!(
            self.out,
            "\n{} Streak: {} | Best: {}",
            "Session complete!".bold(),
            results.current_streak,
            results.best_streak
        )?;
        if results.total > 0 {
            let noun = if results.total == 1 { "question" } else { "questions" };
            my_println!(
                self.out,
                "  {} of {} {} correct",
                format!("{}", results.total_correct).green(),
                format!("{}", results.total).cyan(),
                noun
            )?;
        }
        my_println!(self.out)
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        self.flush()?;
        prompt(&mut self.input, message)
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush().map_err(Into::into)
    }
}

/// Print the usage text for the `help` command.
pub fn usage<W: Write>(out: &mut W) -> Result<()> {
    my_println!(out, "\n{}\n", "Trivia Quiz".bold())?;
    my_println!(out, "Usage:")?;
    my_println!(out, "  trivia              Random question (all types)")?;
    my_println!(out, "  trivia stats        Show your stats")?;
    my_println!(out, "  trivia code         Code review questions only")?;
    my_println!(out, "  trivia biz [system] Business logic questions only")?;
    my_println!(
        out,
        "  trivia <filter>     Filter by system or category (e.g., trivia payments)"
    )?;
    my_println!(out, "\nDuring quiz:")?;
    my_println!(out, "  Enter     Reveal answer")?;
    my_println!(out, "  y         Got it right")?;
    my_println!(out, "  n         Got it wrong")?;
    my_println!(out, "  q         Quit")
}
