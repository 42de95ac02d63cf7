/*
 * The quiz data file and the interactive session that updates it.
 */
use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::common::{QuizError, Result};
use super::iohelper::LineReader;
use super::persistence::Store;
use super::repetition;
use super::ui::CmdUI;

/// Represents the entire data file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct QuizData {
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_reviews: Option<Vec<CodeReview>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
    /// Fields written by the generator that we don't use but must not drop.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A business logic question.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub system: String,
    #[serde(default)]
    pub source_pr: String,
    #[serde(default)]
    pub source_file: String,
    #[serde(default)]
    pub added_date: String,
    #[serde(flatten)]
    pub progress: Progress,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A snippet of code that drew a review comment. The answer is what the reviewer said.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CodeReview {
    pub id: String,
    pub code_snippet: String,
    pub answer: String,
    pub category: Category,
    #[serde(default)]
    pub reviewer: String,
    #[serde(default)]
    pub source_pr: String,
    #[serde(default)]
    pub source_file: String,
    #[serde(default)]
    pub added_date: String,
    #[serde(flatten)]
    pub progress: Progress,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Database,
    Performance,
    Security,
    Style,
    Logic,
}

/// How often an item has been asked, and how often it was answered correctly.
/// `times_correct` never exceeds `times_asked`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    #[serde(default)]
    pub times_asked: u32,
    #[serde(default)]
    pub times_correct: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub best_streak: u32,
    #[serde(default)]
    pub last_played: Option<NaiveDate>,
}

/// A handle to one item of a `QuizData`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKey {
    Question(usize),
    CodeReview(usize),
}

/// A borrowed item of either kind.
#[derive(Debug, Clone, Copy)]
pub enum Item<'a> {
    Question(&'a Question),
    CodeReview(&'a CodeReview),
}

/// What the operator said after seeing the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Correct,
    Incorrect,
    Quit,
}

/// Represents the results of one sitting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionResult {
    pub total: usize,
    pub total_correct: usize,
    pub current_streak: u32,
    pub best_streak: u32,
}

impl QuizData {
    pub fn code_reviews(&self) -> &[CodeReview] {
        self.code_reviews.as_deref().unwrap_or(&[])
    }

    /// Look up an item. Panics if `key` did not come from this data.
    pub fn item(&self, key: ItemKey) -> Item<'_> {
        match key {
            ItemKey::Question(i) => Item::Question(&self.questions[i]),
            ItemKey::CodeReview(i) => Item::CodeReview(&self.code_reviews()[i]),
        }
    }

    fn progress_mut(&mut self, key: ItemKey) -> &mut Progress {
        match key {
            ItemKey::Question(i) => &mut self.questions[i].progress,
            ItemKey::CodeReview(i) => {
                let reviews = self.code_reviews.get_or_insert_with(Vec::new);
                &mut reviews[i].progress
            }
        }
    }

    /// Record one graded round for the item at `key` and update the streak.
    pub fn record(&mut self, key: ItemKey, correct: bool, today: NaiveDate) -> &Stats {
        self.progress_mut(key).record(correct);
        let stats = self.stats.get_or_insert_with(Stats::default);
        stats.record(correct, today);
        stats
    }

    /// Ask questions from `pool` until the operator quits or input runs out, saving
    /// the data to `store` after every graded round.
    pub fn take<W: Write, L: LineReader, R: Rng>(
        &mut self,
        pool: &[ItemKey],
        store: &Store,
        ui: &mut CmdUI<W, L>,
        rng: &mut R,
    ) -> Result<SessionResult> {
        if pool.is_empty() {
            return Err(QuizError::EmptyQuiz);
        }
        info!(pool = pool.len(), "starting session");

        let mut result = SessionResult::default();
        loop {
            ui.clear()?;
            let key = repetition::choose(self, pool, rng).ok_or(QuizError::EmptyQuiz)?;
            debug!(id = self.item(key).id(), "presenting");
            ui.item(self.item(key))?;
            if ui.reveal()?.is_none() {
                break;
            }

            ui.answer(self.item(key).answer())?;
            let correct = match Grade::from_response(ui.grade()?.as_deref()) {
                Grade::Quit => break,
                Grade::Correct => true,
                Grade::Incorrect => false,
            };

            let today = chrono::Utc::now().date_naive();
            let streak = self.record(key, correct, today).current_streak;
            result.total += 1;
            if correct {
                result.total_correct += 1;
                ui.correct(streak)?;
            } else {
                ui.incorrect()?;
            }
            store.save(self)?;

            match ui.next()? {
                Some(ref response) if is_quit(response) => break,
                Some(_) => {}
                None => break,
            }
        }

        let stats = self.stats.clone().unwrap_or_default();
        result.current_streak = stats.current_streak;
        result.best_streak = stats.best_streak;
        ui.results(&result)?;
        Ok(result)
    }
}

impl Progress {
    pub fn record(&mut self, correct: bool) {
        self.times_asked += 1;
        if correct {
            self.times_correct += 1;
        }
    }
}

impl Stats {
    pub fn record(&mut self, correct: bool, today: NaiveDate) {
        if correct {
            self.current_streak += 1;
            if self.current_streak > self.best_streak {
                self.best_streak = self.current_streak;
            }
        } else {
            self.current_streak = 0;
        }
        self.last_played = Some(today);
    }
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Database => "database",
            Category::Performance => "performance",
            Category::Security => "security",
            Category::Style => "style",
            Category::Logic => "logic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'a> Item<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            Item::Question(q) => &q.id,
            Item::CodeReview(cr) => &cr.id,
        }
    }

    pub fn answer(&self) -> &'a str {
        match self {
            Item::Question(q) => &q.answer,
            Item::CodeReview(cr) => &cr.answer,
        }
    }

    pub fn progress(&self) -> &'a Progress {
        match self {
            Item::Question(q) => &q.progress,
            Item::CodeReview(cr) => &cr.progress,
        }
    }
}

impl Grade {
    /// Interpret a trimmed, lowercased response. No response at all means quit.
    pub fn from_response(response: Option<&str>) -> Self {
        match response {
            None => Grade::Quit,
            Some(r) if is_quit(r) => Grade::Quit,
            Some("y") | Some("yes") => Grade::Correct,
            Some(_) => Grade::Incorrect,
        }
    }
}

fn is_quit(response: &str) -> bool {
    response == "q" || response == "quit"
}

#[cfg(test)]
impl Question {
    pub fn new(id: &str, system: &str, question: &str, answer: &str) -> Self {
        Question {
            id: id.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            system: system.to_string(),
            source_pr: String::from("#1"),
            source_file: String::from("src/lib.rs"),
            added_date: String::from("2026-10-01"),
            progress: Progress::default(),
            extra: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
impl CodeReview {
    pub fn new(id: &str, category: Category, code_snippet: &str, answer: &str) -> Self {
        CodeReview {
            id: id.to_string(),
            code_snippet: code_snippet.to_string(),
            answer: answer.to_string(),
            category,
            reviewer: String::from("alice"),
            source_pr: String::from("#2"),
            source_file: String::from("src/db.rs"),
            added_date: String::from("2026-10-01"),
            progress: Progress::default(),
            extra: BTreeMap::new(),
        }
    }
}
