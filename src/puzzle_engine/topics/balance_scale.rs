use rand::Rng;

use crate::config::GenerationPolicy;
use crate::puzzle_engine::{
    helpers::{localized, puzzle, shuffled_options, OptionDraft},
    i18n::{phrases, shape_name},
    models::{
        BalanceData, Difficulty, Language, Puzzle, PuzzleData, PuzzleType, Scale, Shape, ShapeCount,
        VisualData,
    },
    random::{random_int, shuffle},
};

/// Tried in order; the first three positive values become distractors.
const NEARBY: [i64; 5] = [-1, 1, 2, -2, 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `A = first·B`, `B = second·C`; asks `A = ?C`.
    Chain { first: u32, second: u32 },
    /// `A + B = C`, `A = ratio·B`; asks `C = ?B`.
    Combination { ratio: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceParams {
    /// A, B, C in that order.
    pub shapes: [Shape; 3],
    pub layout: Layout,
}

impl BalanceParams {
    /// Shape and count that balance the question pan.
    pub fn answer(&self) -> (Shape, u32) {
        let [_, b, c] = self.shapes;
        match self.layout {
            Layout::Chain { first, second } => (c, first * second),
            Layout::Combination { ratio }   => (b, ratio + 1),
        }
    }
}

pub fn draw_params<R: Rng>(rng: &mut R, difficulty: Difficulty) -> BalanceParams {
    let drawn = shuffle(rng, &[Shape::Square, Shape::Circle, Shape::Triangle]);
    let shapes = [drawn[0], drawn[1], drawn[2]];
    let layout = match difficulty {
        Difficulty::Easy   => Layout::Chain { first: 2, second: 2 },
        Difficulty::Medium => Layout::Combination { ratio: 2 },
        Difficulty::Hard   => Layout::Combination { ratio: random_int(rng, 2, 3) as u32 },
    };
    BalanceParams { shapes, layout }
}

fn one(shape: Shape) -> ShapeCount {
    ShapeCount { shape, count: 1 }
}

fn many(shape: Shape, count: u32) -> ShapeCount {
    ShapeCount { shape, count }
}

pub fn build<R: Rng>(
    rng: &mut R,
    params: BalanceParams,
    difficulty: Difficulty,
    language: Language,
    puzzle_id: String,
) -> Puzzle {
    let [a, b, c] = params.shapes;
    let (answer_shape, answer_count) = params.answer();
    let [na, nb, nc] = params.shapes.map(|s| shape_name(language, s));

    let (data, explanation) = match params.layout {
        Layout::Chain { first, second } => {
            let data = BalanceData {
                scales: vec![
                    Scale { left: vec![one(a)], right: vec![many(b, first)] },
                    Scale { left: vec![one(b)], right: vec![many(c, second)] },
                ],
                question: vec![one(a)],
            };
            let explanation = localized(
                language,
                format!(
                    "Scale 1: 1 {na} = {first} {nb}.\nScale 2: 1 {nb} = {second} {nc}.\n\
                     Substitute: 1 {na} = {first} x {second} {nc} = {answer_count} {nc}."
                ),
                format!(
                    "1. Terazi: 1 {na} = {first} {nb}.\n2. Terazi: 1 {nb} = {second} {nc}.\n\
                     Yerine koyma: 1 {na} = {first} x {second} {nc} = {answer_count} {nc}."
                ),
            );
            (data, explanation)
        }
        Layout::Combination { ratio } => {
            let data = BalanceData {
                scales: vec![
                    Scale { left: vec![one(a), one(b)], right: vec![one(c)] },
                    Scale { left: vec![one(a)], right: vec![many(b, ratio)] },
                ],
                question: vec![one(c)],
            };
            let explanation = localized(
                language,
                format!(
                    "Scale 2: 1 {na} = {ratio} {nb}.\nScale 1: ({ratio} {nb}) + 1 {nb} = 1 {nc}.\n\
                     Result: 1 {nc} = {answer_count} {nb}."
                ),
                format!(
                    "2. Terazi: 1 {na} = {ratio} {nb}.\n1. Terazide yerine koy: ({ratio} {nb}) + 1 {nb} = 1 {nc}.\n\
                     Sonuç: 1 {nc} = {answer_count} {nb}."
                ),
            );
            (data, explanation)
        }
    };

    let option = |count: u32| {
        OptionDraft::number(i64::from(count)).with_visual(VisualData::Shapes { shape: answer_shape, count })
    };
    let correct = i64::from(answer_count);
    let distractors = NEARBY
        .iter()
        .map(|d| correct + d)
        .filter(|v| *v > 0)
        .take(3)
        .map(|v| option(v as u32))
        .collect();

    let (options, correct_option_id) = shuffled_options(
        rng,
        PuzzleType::BalanceScale.id_prefix(),
        option(answer_count),
        distractors,
    );

    puzzle(
        puzzle_id, PuzzleType::BalanceScale, difficulty, PuzzleData::Balance(data),
        phrases(language).question_for(PuzzleType::BalanceScale), options, correct_option_id, explanation,
    )
}

pub fn generate<R: Rng>(
    rng: &mut R,
    difficulty: Difficulty,
    language: Language,
    _policy: &GenerationPolicy,
    puzzle_id: String,
) -> Puzzle {
    let params = draw_params(rng, difficulty);
    build(rng, params, difficulty, language, puzzle_id)
}
