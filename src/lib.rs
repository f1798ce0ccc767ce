//! # aptitude_drill_gen
//!
//! An offline, deterministic generator of aptitude-exam puzzles in Turkish
//! and English, with an exam runner that scores answers and reports
//! per-category weaknesses.
//!
//! Eight puzzle archetypes are covered: triangle arithmetic, rotating
//! matrices, balance-scale algebra, cube nets, symbol equation systems, odd one
//! out, word problems and analytic geometry. Each puzzle carries its data
//! payload, shuffled multiple-choice options, the correct option id and a
//! worked explanation that quotes the same numbers shown in the puzzle.
//!
//! ## How it works
//!
//! 1. Create a [`PuzzleRequest`] with a difficulty, language, and optionally a
//!    fixed archetype, RNG seed and retry policy.
//! 2. Call [`generate_puzzle`]: the engine draws parameters, computes the
//!    answer with the rule for that difficulty, builds distinct distractors
//!    and shuffles the options.
//! 3. Feed answers into a [`UserSession`] (or let an [`Exam`] do it) and build
//!    an [`ExamReport`] at the end.
//!
//! ## Key features
//!
//! - **Deterministic**: `rng_seed: Some(u64)` reproduces the exact same puzzle.
//! - **Always complete**: every random loop is bounded by [`GenerationPolicy`];
//!   running out of attempts pads the options instead of failing.
//! - **Two languages**: `Language::Tr` (default) and `Language::En`; numbers
//!   and answers are identical in both.
//!
//! ## Quick start
//!
//! ```rust
//! use aptitude_drill_gen::{
//!     generate_puzzle, generate_question, Difficulty, Language, PuzzleRequest, PuzzleType,
//! };
//!
//! // Random archetype, entropy seed:
//! let puzzle = generate_question(Difficulty::Easy, Language::En);
//! println!("Q: {}", puzzle.question);
//!
//! // Full control:
//! let puzzle = generate_puzzle(
//!     PuzzleRequest::new(Difficulty::Hard, Language::Tr)
//!         .with_type(PuzzleType::SymbolEquation)
//!         .with_seed(42),
//! );
//! for opt in &puzzle.options {
//!     let mark = if puzzle.is_correct(&opt.id) { "+" } else { " " };
//!     println!("[{mark}] {} {}", opt.id, opt.value);
//! }
//! assert!(puzzle.check_invariants().is_empty());
//! ```

pub mod config;
pub mod display;
pub mod exam;
pub mod explain;
pub mod puzzle_engine;
pub mod report;
pub mod session;
pub mod telemetry;

// Convenience re-exports so callers can use `aptitude_drill_gen::generate_puzzle`
// directly without reaching into `puzzle_engine::`.
pub use config::{ConfigError, ExamConfig, GenerationPolicy, TrainerConfig, TutorConfig};
pub use exam::Exam;
pub use puzzle_engine::{
    generate_puzzle, generate_question, Difficulty, Language, OptionValue, Puzzle,
    PuzzleCategory, PuzzleData, PuzzleDefect, PuzzleOption, PuzzleRequest, PuzzleType,
    VisualData,
};
pub use report::{CategoryStats, ExamReport, ReviewItem};
pub use session::{HistoryItem, SessionError, UserSession};

#[cfg(test)]
mod tests;
