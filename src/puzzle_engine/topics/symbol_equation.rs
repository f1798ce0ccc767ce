use rand::Rng;

use crate::config::GenerationPolicy;
use crate::puzzle_engine::{
    helpers::{distinct_distractors, localized, puzzle, shuffled_options, signed, OptionDraft},
    i18n::{phrases, shape_name},
    models::{
        Difficulty, EquationItem, Language, Operator, Puzzle, PuzzleData, PuzzleType, Shape,
        SymbolEquation, SymbolEquationData,
    },
    random::{random_int, shuffle, signed_offset},
};

const VALUE_RANGE: (i64, i64) = (3, 15);
const DISTRACTOR_OFFSET: (i64, i64) = (1, 15);
const DISTRACTOR_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolParams {
    pub shapes: [Shape; 3],
    pub values: [i64; 3],
}

impl SymbolParams {
    pub fn total(&self) -> i64 {
        self.values.iter().sum()
    }
}

pub fn draw_params<R: Rng>(rng: &mut R) -> SymbolParams {
    let drawn = shuffle(rng, &[Shape::Circle, Shape::Square, Shape::Triangle, Shape::Star]);
    let (lo, hi) = VALUE_RANGE;
    SymbolParams {
        shapes: [drawn[0], drawn[1], drawn[2]],
        values: [random_int(rng, lo, hi), random_int(rng, lo, hi), random_int(rng, lo, hi)],
    }
}

/// Which pair of symbols each equation combines, as indices into A, B, C.
fn system(difficulty: Difficulty) -> [(usize, Operator, usize); 3] {
    use Operator::{Minus, Plus};
    match difficulty {
        Difficulty::Easy   => [(0, Plus, 0), (0, Plus, 1), (1, Plus, 2)],
        Difficulty::Medium => [(0, Plus, 1), (1, Plus, 2), (0, Plus, 2)],
        Difficulty::Hard   => [(0, Plus, 1), (1, Minus, 2), (0, Minus, 2)],
    }
}

fn equation(params: &SymbolParams, (l, op, r): (usize, Operator, usize)) -> SymbolEquation {
    let result = match op {
        Operator::Plus  => params.values[l] + params.values[r],
        Operator::Minus => params.values[l] - params.values[r],
    };
    SymbolEquation {
        items: vec![
            EquationItem::Symbol(params.shapes[l]),
            EquationItem::Op(op),
            EquationItem::Symbol(params.shapes[r]),
        ],
        result,
    }
}

fn explain(params: &SymbolParams, results: [i64; 3], difficulty: Difficulty, language: Language) -> String {
    let [na, nb, nc] = params.shapes.map(|s| shape_name(language, s));
    let [a, b, c] = params.values;
    let [r1, r2, r3] = results;
    let total = params.total();

    match difficulty {
        Difficulty::Easy => localized(
            language,
            format!(
                "Eq 1: 2 x {na} = {r1}, so {na} = {a}.\nEq 2: {a} + {nb} = {r2}, so {nb} = {b}.\n\
                 Eq 3: {b} + {nc} = {r3}, so {nc} = {c}.\n{a} + {b} + {c} = {total}."
            ),
            format!(
                "1. Denklem: 2 x {na} = {r1} ise {na} = {a}.\n2. Denklem: {a} + {nb} = {r2} ise {nb} = {b}.\n\
                 3. Denklem: {b} + {nc} = {r3} ise {nc} = {c}.\n{a} + {b} + {c} = {total}."
            ),
        ),
        Difficulty::Medium => {
            let doubled = r1 + r2 + r3;
            localized(
                language,
                format!(
                    "Add all three equations: 2 x ({na} + {nb} + {nc}) = {r1} + {r2} + {r3} = {doubled}.\n\
                     {na} + {nb} + {nc} = {doubled} / 2 = {total}."
                ),
                format!(
                    "Üç denklemi taraf tarafa topla: 2 x ({na} + {nb} + {nc}) = {r1} + {r2} + {r3} = {doubled}.\n\
                     {na} + {nb} + {nc} = {doubled} / 2 = {total}."
                ),
            )
        }
        Difficulty::Hard => {
            let a_plus_c = r1 - r2;
            let two_a = a_plus_c + r3;
            let (s_r2, s_r3) = (signed(r2), signed(r3));
            localized(
                language,
                format!(
                    "Eq 1 - Eq 2: {na} + {nc} = {r1} - {s_r2} = {a_plus_c}.\n\
                     Add Eq 3: 2 x {na} = {a_plus_c} + {s_r3} = {two_a}, so {na} = {a}.\n\
                     Then {nb} = {r1} - {a} = {b} and {nc} = {a} - {s_r3} = {c}.\n{a} + {b} + {c} = {total}."
                ),
                format!(
                    "1. Denklemden 2. Denklemi çıkar: {na} + {nc} = {r1} - {s_r2} = {a_plus_c}.\n\
                     3. Denklemi ekle: 2 x {na} = {a_plus_c} + {s_r3} = {two_a}, yani {na} = {a}.\n\
                     Buradan {nb} = {r1} - {a} = {b} ve {nc} = {a} - {s_r3} = {c}.\n{a} + {b} + {c} = {total}."
                ),
            )
        }
    }
}

pub fn build<R: Rng>(
    rng: &mut R,
    params: SymbolParams,
    difficulty: Difficulty,
    language: Language,
    policy: &GenerationPolicy,
    puzzle_id: String,
) -> Puzzle {
    let equations: Vec<SymbolEquation> = system(difficulty)
        .into_iter()
        .map(|term| equation(&params, term))
        .collect();
    let results = [equations[0].result, equations[1].result, equations[2].result];

    let [a, b, c] = params.shapes;
    let question = vec![
        EquationItem::Symbol(a),
        EquationItem::Op(Operator::Plus),
        EquationItem::Symbol(b),
        EquationItem::Op(Operator::Plus),
        EquationItem::Symbol(c),
    ];

    let total = params.total();
    let (off_lo, off_hi) = DISTRACTOR_OFFSET;
    let distractors = distinct_distractors(
        rng,
        total,
        DISTRACTOR_COUNT,
        policy.distractor_max_attempts,
        |rng| total + signed_offset(rng, off_lo, off_hi),
        |v| v > 0,
    );
    let (options, correct_option_id) = shuffled_options(
        rng,
        PuzzleType::SymbolEquation.id_prefix(),
        OptionDraft::number(total),
        distractors.into_iter().map(OptionDraft::number).collect(),
    );

    let explanation = explain(&params, results, difficulty, language);
    let data = PuzzleData::SymbolEquation(SymbolEquationData { equations, question });

    puzzle(
        puzzle_id, PuzzleType::SymbolEquation, difficulty, data,
        phrases(language).question_for(PuzzleType::SymbolEquation), options, correct_option_id, explanation,
    )
}

pub fn generate<R: Rng>(
    rng: &mut R,
    difficulty: Difficulty,
    language: Language,
    policy: &GenerationPolicy,
    puzzle_id: String,
) -> Puzzle {
    let params = draw_params(rng);
    build(rng, params, difficulty, language, policy, puzzle_id)
}
