//! Core puzzle engine: parameter drawing, rule evaluation and option building.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: puzzle record, payloads, options, request |
//! | `random`    | Bounded integer draws and Fisher-Yates shuffle over an injected RNG |
//! | `rules`     | Fixed formulas and tables: triangle rules, rotation steps, cube faces, triples |
//! | `i18n`      | Turkish and English phrase tables |
//! | `helpers`   | Shared builders: bounded sampling, distractors, option shuffling |
//! | `generator` | Entry points `generate_puzzle()` / `generate_question()`, dispatches to topics |
//! | `topics`    | 8 archetype generators grouped by category |

pub mod generator;
pub mod helpers;
pub mod i18n;
pub mod models;
pub mod random;
pub mod rules;
pub mod topics;

// Re-export the public API surface so callers can use
// `puzzle_engine::generate_puzzle` without reaching into sub-modules.
pub use generator::{generate_puzzle, generate_question, generate_with_rng};
pub use models::{
    Difficulty, Language, OptionValue, Puzzle, PuzzleCategory, PuzzleData, PuzzleDefect,
    PuzzleOption, PuzzleRequest, PuzzleType, VisualData,
};
