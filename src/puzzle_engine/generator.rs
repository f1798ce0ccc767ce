use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use tracing::debug;

use crate::config::GenerationPolicy;
use crate::puzzle_engine::{
    models::{Difficulty, Language, Puzzle, PuzzleRequest, PuzzleType},
    random::pick,
    topics,
};

/// Puzzle id from the archetype prefix and 32 bits of the generation RNG.
fn make_puzzle_id(puzzle_type: PuzzleType, rng: &mut impl RngCore) -> String {
    format!("{}-{:08X}", puzzle_type.id_prefix(), rng.next_u32())
}

/// Uniform choice over all eight archetypes.
pub fn pick_archetype<R: Rng>(rng: &mut R) -> PuzzleType {
    *pick(rng, &PuzzleType::ALL)
}

/// Core dispatch on a caller-owned RNG: routes to the archetype module.
///
/// `None` picks the archetype uniformly at random.
pub fn generate_with_rng<R: Rng>(
    rng: &mut R,
    puzzle_type: Option<PuzzleType>,
    difficulty: Difficulty,
    language: Language,
    policy: &GenerationPolicy,
) -> Puzzle {
    let puzzle_type = match puzzle_type {
        Some(t) => t,
        None    => pick_archetype(rng),
    };
    let puzzle_id = make_puzzle_id(puzzle_type, rng);
    debug!(%puzzle_type, %difficulty, %language, %puzzle_id, "generating puzzle");

    match puzzle_type {
        PuzzleType::TriangleMath =>
            topics::triangle_math::generate(rng, difficulty, language, policy, puzzle_id),

        PuzzleType::MatrixLogic =>
            topics::matrix_logic::generate(rng, difficulty, language, policy, puzzle_id),

        PuzzleType::BalanceScale =>
            topics::balance_scale::generate(rng, difficulty, language, policy, puzzle_id),

        PuzzleType::CubeFolding =>
            topics::cube_folding::generate(rng, difficulty, language, policy, puzzle_id),

        PuzzleType::SymbolEquation =>
            topics::symbol_equation::generate(rng, difficulty, language, policy, puzzle_id),

        PuzzleType::OddOneOut =>
            topics::odd_one_out::generate(rng, difficulty, language, policy, puzzle_id),

        PuzzleType::WordProblem =>
            topics::word_problem::generate(rng, difficulty, language, policy, puzzle_id),

        PuzzleType::AnalyticGeo =>
            topics::analytic_geo::generate(rng, difficulty, language, policy, puzzle_id),
    }
}

/// Full entry point: optional fixed archetype, optional seed, retry policy.
pub fn generate_puzzle(request: PuzzleRequest) -> Puzzle {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_with_rng(
        &mut rng,
        request.puzzle_type,
        request.difficulty,
        request.language,
        &request.policy,
    )
}

/// Random archetype at the given difficulty, entropy seed, default policy.
pub fn generate_question(difficulty: Difficulty, language: Language) -> Puzzle {
    generate_puzzle(PuzzleRequest::new(difficulty, language))
}
