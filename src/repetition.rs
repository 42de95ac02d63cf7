/*
 * Choose which question to ask next based on past results.
 *
 * Every item gets a weight of `2 * freshness + difficulty`, where freshness is
 * `1 / (times_asked + 1)` and difficulty is the fraction of past attempts that were
 * wrong (0.5 for items never asked). Items are then drawn at random in proportion to
 * their weights, so rarely asked and often missed items come up more, but no item ever
 * drops out entirely.
 */
use rand::Rng;
use tracing::trace;
use unicode_normalization::UnicodeNormalization;

use super::common::Mode;
use super::quiz::{ItemKey, Progress, QuizData};

// Difficulty assumed for an item that has never been asked.
const UNSEEN_DIFFICULTY: f64 = 0.5;
const FRESHNESS_FACTOR: f64 = 2.0;

/// The selection weight of an item. Always strictly positive.
pub fn weight(progress: &Progress) -> f64 {
    let asked = f64::from(progress.times_asked);
    let freshness = 1.0 / (asked + 1.0);
    let difficulty = if progress.times_asked > 0 {
        // Clamped in case a hand-edited file claims more correct answers than attempts.
        (1.0 - f64::from(progress.times_correct) / asked).max(0.0)
    } else {
        UNSEEN_DIFFICULTY
    };
    freshness * FRESHNESS_FACTOR + difficulty
}

/// Draw an index at random in proportion to `weights`. Returns `None` only when
/// `weights` is empty.
pub fn pick<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Option<usize> {
    let last = weights.len().checked_sub(1)?;
    let total: f64 = weights.iter().sum();
    let mut remainder = rng.gen::<f64>() * total;
    for (i, w) in weights.iter().enumerate() {
        remainder -= w;
        if remainder <= 0.0 {
            return Some(i);
        }
    }
    // Rounding error can leave a sliver of the total unclaimed.
    Some(last)
}

/// Choose the next item to ask from `pool`.
pub fn choose<R: Rng + ?Sized>(data: &QuizData, pool: &[ItemKey], rng: &mut R) -> Option<ItemKey> {
    let weights: Vec<f64> = pool
        .iter()
        .map(|key| weight(data.item(*key).progress()))
        .collect();
    trace!(?weights, "selection weights");
    pick(&weights, rng).map(|i| pool[i])
}

/// Collect the items eligible for a quiz in `mode`, questions first.
pub fn build_pool(data: &QuizData, mode: &Mode) -> Vec<ItemKey> {
    let (include_questions, include_reviews, filter) = match mode {
        Mode::All { filter } => (true, true, filter.as_deref()),
        Mode::Questions { system } => (true, false, system.as_deref()),
        Mode::CodeReviews => (false, true, None),
        Mode::Stats | Mode::Help => (false, false, None),
    };

    let mut pool = Vec::new();
    if include_questions {
        for (i, q) in data.questions.iter().enumerate() {
            if filter.map_or(true, |f| matches(&q.system, f)) {
                pool.push(ItemKey::Question(i));
            }
        }
    }
    if include_reviews {
        for (i, cr) in data.code_reviews().iter().enumerate() {
            if filter.map_or(true, |f| matches(cr.category.as_str(), f)) {
                pool.push(ItemKey::CodeReview(i));
            }
        }
    }
    pool
}

/// Return `true` if `filter` occurs in `text`, ignoring case.
pub fn matches(text: &str, filter: &str) -> bool {
    normalize(text).contains(&normalize(filter))
}

fn normalize(s: &str) -> String {
    s.to_lowercase().nfc().collect::<String>()
}
