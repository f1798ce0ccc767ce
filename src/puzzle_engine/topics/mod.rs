//! Archetype generators, one module per puzzle type.
//!
//! Every module exposes the same entry point:
//!
//! ```ignore
//! pub fn generate<R: Rng>(
//!     rng: &mut R,
//!     difficulty: Difficulty,
//!     language: Language,
//!     policy: &GenerationPolicy,
//!     puzzle_id: String,
//! ) -> Puzzle
//! ```
//!
//! Most also split parameter drawing (`draw_params`) from puzzle assembly
//! (`build`) so tests can pin the parameters. The generator dispatches to
//! these via `generator.rs`.

/// NUMERICAL
pub mod analytic_geo;
pub mod symbol_equation;
pub mod triangle_math;
/// VISUAL
pub mod cube_folding;
pub mod matrix_logic;
pub mod odd_one_out;
/// LOGIC
pub mod balance_scale;
pub mod word_problem;
