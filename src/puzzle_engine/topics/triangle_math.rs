use rand::Rng;
use tracing::debug;

use crate::config::GenerationPolicy;
use crate::puzzle_engine::{
    helpers::{distinct_distractors, localized, puzzle, sample_bounded, shuffled_options, OptionDraft},
    i18n::{phrases, triangle_rule_text},
    models::{Difficulty, Language, Puzzle, PuzzleData, PuzzleType, TriangleData, TriangleRule},
    random::{pick, random_int, signed_offset},
    rules::{corner_range, CENTER_RANGE},
};

/// Distractors sit this far (either side) from the center value.
const DISTRACTOR_OFFSET: (i64, i64) = (5, 20);
const DISTRACTOR_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleParams {
    pub rule: TriangleRule,
    pub top: i64,
    pub left: i64,
    pub right: i64,
}

impl TriangleParams {
    pub fn center(&self) -> i64 {
        self.rule.apply(self.top, self.left, self.right)
    }
}

/// Choose a rule for the tier and draw corners until the center lands in
/// 1..=999, giving up after `policy.triangle_max_attempts` draws.
pub fn draw_params<R: Rng>(rng: &mut R, difficulty: Difficulty, policy: &GenerationPolicy) -> TriangleParams {
    let rule = *pick(rng, TriangleRule::for_difficulty(difficulty));
    let (lo, hi) = corner_range(difficulty);

    let sampled = sample_bounded(
        rng,
        policy.triangle_max_attempts,
        |rng| (random_int(rng, lo, hi), random_int(rng, lo, hi), random_int(rng, lo, hi)),
        |&(top, left, right)| CENTER_RANGE.contains(&rule.apply(top, left, right)),
    );
    if sampled.exhausted {
        debug!(?rule, attempts = sampled.attempts, "triangle sampling exhausted; keeping last draw");
    }

    let (top, left, right) = sampled.value;
    TriangleParams { rule, top, left, right }
}

pub fn build<R: Rng>(
    rng: &mut R,
    params: TriangleParams,
    difficulty: Difficulty,
    language: Language,
    policy: &GenerationPolicy,
    puzzle_id: String,
) -> Puzzle {
    let TriangleParams { rule, top, left, right } = params;
    let center = params.center();

    let (off_lo, off_hi) = DISTRACTOR_OFFSET;
    let distractors = distinct_distractors(
        rng,
        center,
        DISTRACTOR_COUNT,
        policy.distractor_max_attempts,
        |rng| center + signed_offset(rng, off_lo, off_hi),
        |v| v > 0,
    );

    let (options, correct_option_id) = shuffled_options(
        rng,
        PuzzleType::TriangleMath.id_prefix(),
        OptionDraft::number(center),
        distractors.into_iter().map(OptionDraft::number).collect(),
    );

    let p = phrases(language);
    let rule_text = triangle_rule_text(language, rule);
    let worked = rule.worked(top, left, right);
    let explanation = localized(
        language,
        format!("{}: {rule_text}.\nFor ({top}, {left}, {right}): {worked}.", p.rule_label),
        format!("{}: {rule_text}.\n({top}, {left}, {right}) için: {worked}.", p.rule_label),
    );

    let data = PuzzleData::Triangle(TriangleData {
        top,
        left,
        right,
        rule,
        rule_description: rule_text.to_string(),
    });

    puzzle(
        puzzle_id, PuzzleType::TriangleMath, difficulty, data,
        p.question_for(PuzzleType::TriangleMath), options, correct_option_id, explanation,
    )
}

pub fn generate<R: Rng>(
    rng: &mut R,
    difficulty: Difficulty,
    language: Language,
    policy: &GenerationPolicy,
    puzzle_id: String,
) -> Puzzle {
    let params = draw_params(rng, difficulty, policy);
    build(rng, params, difficulty, language, policy, puzzle_id)
}
