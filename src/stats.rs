/*
 * Aggregate results across the whole data file, for the `stats` command.
 */
use std::fmt;

use colored::*;

use super::quiz::{Progress, QuizData};

/// Totals for one kind of item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindSummary {
    pub total: usize,
    /// Number of items asked at least once.
    pub attempted: usize,
    pub total_correct: u64,
    pub total_asked: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub questions: KindSummary,
    pub code_reviews: KindSummary,
    pub current_streak: u32,
    pub best_streak: u32,
    /// Distinct systems in the order they first appear.
    pub systems: Vec<String>,
}

impl KindSummary {
    fn from_progress<'a, I: Iterator<Item = &'a Progress>>(items: I) -> Self {
        let mut summary = KindSummary::default();
        for progress in items {
            summary.total += 1;
            if progress.times_asked > 0 {
                summary.attempted += 1;
            }
            summary.total_correct += u64::from(progress.times_correct);
            summary.total_asked += u64::from(progress.times_asked);
        }
        summary
    }

    /// Percentage of attempts answered correctly, rounded to the nearest integer.
    pub fn accuracy(&self) -> u64 {
        if self.total_asked == 0 {
            return 0;
        }
        (100.0 * self.total_correct as f64 / self.total_asked as f64).round() as u64
    }
}

/// Summarize `data`. Never modifies it.
pub fn report(data: &QuizData) -> Report {
    let stats = data.stats.clone().unwrap_or_default();
    let mut systems: Vec<String> = Vec::new();
    for q in data.questions.iter() {
        if !systems.contains(&q.system) {
            systems.push(q.system.clone());
        }
    }

    Report {
        questions: KindSummary::from_progress(data.questions.iter().map(|q| &q.progress)),
        code_reviews: KindSummary::from_progress(data.code_reviews().iter().map(|cr| &cr.progress)),
        current_streak: stats.current_streak,
        best_streak: stats.best_streak,
        systems,
    }
}

impl fmt::Display for KindSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "  Total: {} | Attempted: {} | Accuracy: {}%",
            self.total,
            self.attempted,
            self.accuracy()
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "\n{}\n", "📊 Trivia Stats".bold())?;
        writeln!(f, "{}", "Business Logic Questions:".cyan())?;
        writeln!(f, "{}", self.questions)?;

        if self.code_reviews.total > 0 {
            writeln!(f, "\n{}", "Code Review Questions:".magenta())?;
            writeln!(f, "{}", self.code_reviews)?;
        }

        let streak = format!("🔥 Streak: {} | Best: {}", self.current_streak, self.best_streak);
        writeln!(f, "\n{}\n", streak.yellow())?;

        if !self.systems.is_empty() {
            let systems = format!("Systems: {}", self.systems.join(", "));
            writeln!(f, "{}\n", systems.dimmed())?;
        }
        Ok(())
    }
}
