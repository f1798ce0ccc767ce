//! Shared builder functions used by every archetype generator.
//!
//! Each generator does the same bookkeeping around its own arithmetic:
//! bounded sampling, distractor de-duplication, option shuffling with id
//! assignment, and assembling the final [`Puzzle`]. Those live here so the
//! topic files contain only their rule logic.
//!
//! ## Bounded loops
//!
//! Every random loop here has an explicit cap taken from
//! [`GenerationPolicy`](crate::config::GenerationPolicy). Running out of
//! attempts is not an error: [`sample_bounded`] hands back its last draw and
//! [`distinct_distractors`] pads with synthetic values, so a generator always
//! returns a complete puzzle.

use rand::Rng;
use tracing::debug;

use crate::puzzle_engine::{
    models::*,
    random::shuffle,
};

/// Pick the right wording for the active language.
///
/// Numbers and answers are identical in both branches; only text differs.
pub fn localized(language: Language, en: String, tr: String) -> String {
    match language {
        Language::En => en,
        Language::Tr => tr,
    }
}

/// Result of [`sample_bounded`].
#[derive(Debug, Clone)]
pub struct Sampled<T> {
    pub value: T,
    pub attempts: u32,
    /// True when no draw was accepted and `value` is simply the last one.
    pub exhausted: bool,
}

/// Draw until `accept` holds or `max_attempts` draws were made.
///
/// At least one draw is always made, even with a cap of 0.
pub fn sample_bounded<R, T, D, A>(rng: &mut R, max_attempts: u32, mut draw: D, accept: A) -> Sampled<T>
where
    R: Rng,
    D: FnMut(&mut R) -> T,
    A: Fn(&T) -> bool,
{
    let cap = max_attempts.max(1);
    let mut attempts = 1;
    let mut value = draw(rng);
    while !accept(&value) {
        if attempts >= cap {
            return Sampled { value, attempts, exhausted: true };
        }
        value = draw(rng);
        attempts += 1;
    }
    Sampled { value, attempts, exhausted: false }
}

/// Push `candidate` if it passes `accept` and differs from `correct` and
/// everything already in `values`.
pub fn push_unique(values: &mut Vec<i64>, correct: i64, candidate: i64, accept: impl Fn(i64) -> bool) -> bool {
    if candidate == correct || !accept(candidate) || values.contains(&candidate) {
        return false;
    }
    values.push(candidate);
    true
}

/// Top `values` up to `count` entries with deterministic synthetic numbers.
///
/// Walks upward from just above the largest value seen, so it terminates
/// whenever `accept` holds for all large enough numbers (e.g. `v > 0`).
pub fn pad_distinct(values: &mut Vec<i64>, correct: i64, count: usize, accept: impl Fn(i64) -> bool) {
    if values.len() >= count {
        return;
    }
    let start = values.iter().copied().chain(std::iter::once(correct)).max().unwrap_or(correct);
    let mut next = start.saturating_add(1);
    debug!(missing = count - values.len(), correct, "padding distractors after exhausted draws");
    while values.len() < count {
        push_unique(values, correct, next, &accept);
        next = next.saturating_add(1);
    }
}

/// `count` distinct numeric distractors, none equal to `correct`.
///
/// Colliding candidates are simply redrawn; the correct value is never
/// touched. After `max_attempts` draws the list is padded.
pub fn distinct_distractors<R, C, A>(
    rng: &mut R,
    correct: i64,
    count: usize,
    max_attempts: u32,
    mut candidate: C,
    accept: A,
) -> Vec<i64>
where
    R: Rng,
    C: FnMut(&mut R) -> i64,
    A: Fn(i64) -> bool,
{
    let mut values = Vec::with_capacity(count);
    let mut attempts = 0;
    while values.len() < count && attempts < max_attempts {
        let v = candidate(rng);
        push_unique(&mut values, correct, v, &accept);
        attempts += 1;
    }
    pad_distinct(&mut values, correct, count, &accept);
    values
}

/// An option before it has an id.
#[derive(Debug, Clone)]
pub struct OptionDraft {
    pub value: OptionValue,
    pub visual: Option<VisualData>,
}

impl OptionDraft {
    pub fn number(n: i64) -> Self {
        Self { value: OptionValue::Number(n), visual: None }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self { value: OptionValue::Text(s.into()), visual: None }
    }

    pub fn with_visual(mut self, visual: VisualData) -> Self {
        self.visual = Some(visual);
        self
    }
}

/// Shuffle the correct option in among the distractors and assign ids
/// `"{prefix}-{index}"` in final order.
///
/// Returns `(options, correct_option_id)`.
pub fn shuffled_options<R: Rng>(
    rng: &mut R,
    prefix: &str,
    correct: OptionDraft,
    distractors: Vec<OptionDraft>,
) -> (Vec<PuzzleOption>, String) {
    let mut drafts: Vec<(bool, OptionDraft)> = Vec::with_capacity(distractors.len() + 1);
    drafts.push((true, correct));
    drafts.extend(distractors.into_iter().map(|d| (false, d)));

    let mut correct_id = String::new();
    let options = shuffle(rng, &drafts)
        .into_iter()
        .enumerate()
        .map(|(idx, (is_correct, draft))| {
            let id = format!("{prefix}-{idx}");
            if is_correct {
                correct_id = id.clone();
            }
            PuzzleOption { id, value: draft.value, visual_data: draft.visual }
        })
        .collect();
    (options, correct_id)
}

/// Assemble the final [`Puzzle`]; the category is derived from the type.
pub fn puzzle(
    id: String, puzzle_type: PuzzleType, difficulty: Difficulty,
    data: PuzzleData, question: impl Into<String>,
    options: Vec<PuzzleOption>, correct_option_id: String, explanation: String,
) -> Puzzle {
    Puzzle {
        id,
        puzzle_type,
        category: puzzle_type.category(),
        difficulty,
        data,
        question: question.into(),
        options,
        correct_option_id,
        explanation,
    }
}

/// Wrap negative numbers in parentheses for inline arithmetic.
pub fn signed(n: i64) -> String {
    if n < 0 { format!("({n})") } else { n.to_string() }
}
