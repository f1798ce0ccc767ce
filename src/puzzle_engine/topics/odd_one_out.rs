use rand::Rng;

use crate::config::GenerationPolicy;
use crate::puzzle_engine::{
    helpers::{localized, puzzle, shuffled_options, OptionDraft},
    i18n::{color_name, phrases},
    models::{Color, Difficulty, Language, OddOneOutData, OddRule, Puzzle, PuzzleData, PuzzleType, VisualData},
    random::{coin_flip, pick, random_int, shuffle},
};

const EVEN: &[i64] = &[2, 4, 6, 8, 10];
const NOT_EVEN: &[i64] = &[3, 5, 7];
const THREES: &[i64] = &[3, 6, 9, 12, 15];
const NOT_THREES: &[i64] = &[4, 5, 7, 8];

/// (pattern values, off-pattern values)
fn count_sets(difficulty: Difficulty) -> (&'static [i64], &'static [i64]) {
    match difficulty {
        Difficulty::Hard => (THREES, NOT_THREES),
        _                => (EVEN, NOT_EVEN),
    }
}

fn dots(count: i64) -> OptionDraft {
    OptionDraft::number(count).with_visual(VisualData::Dots { count: count as u32 })
}

fn grid(colors: [Color; 4]) -> OptionDraft {
    let code: String = colors.iter().map(|c| c.code()).collect();
    OptionDraft::text(code).with_visual(VisualData::ColorGrid { colors })
}

/// Four cells of `fill` with a single `odd` cell at `position`.
fn single_cell(fill: Color, odd: Color, position: usize) -> [Color; 4] {
    let mut cells = [fill; 4];
    cells[position] = odd;
    cells
}

fn count_rule<R: Rng>(rng: &mut R, difficulty: Difficulty, language: Language) -> (OptionDraft, Vec<OptionDraft>, String) {
    let (valid, invalid) = count_sets(difficulty);
    let distractors = shuffle(rng, valid).into_iter().take(4).map(dots).collect();
    let target = *pick(rng, invalid);

    let explanation = match difficulty {
        Difficulty::Hard => localized(
            language,
            format!("Every other option is a multiple of 3; {target} is not."),
            format!("Diğer seçenekler 3'ün katıdır; {target} değildir."),
        ),
        _ => localized(
            language,
            format!("Every other option is an even number; {target} is odd."),
            format!("Diğer seçenekler çift sayıdır; {target} tek sayıdır."),
        ),
    };
    (dots(target), distractors, explanation)
}

fn color_rule<R: Rng>(rng: &mut R, language: Language) -> (OptionDraft, Vec<OptionDraft>, String) {
    let palette = shuffle(rng, &[Color::Red, Color::Blue, Color::Green, Color::Yellow]);
    let (major, minor) = (palette[0], palette[1]);

    // The four 3:1 arrangements, one per position of the minority cell.
    let distractors = (0..4).map(|pos| grid(single_cell(major, minor, pos))).collect();
    let target = single_cell(minor, major, random_int(rng, 0, 3) as usize);

    let (ma, mi) = (color_name(language, major), color_name(language, minor));
    let explanation = localized(
        language,
        format!("Every other grid has three {ma} cells and one {mi} cell; this one has one {ma} and three {mi}."),
        format!("Diğer kutularda üç {ma} ve bir {mi} kare vardır; bu kutuda ise bir {ma} ve üç {mi} kare vardır."),
    );
    (grid(target), distractors, explanation)
}

pub fn generate<R: Rng>(
    rng: &mut R,
    difficulty: Difficulty,
    language: Language,
    _policy: &GenerationPolicy,
    puzzle_id: String,
) -> Puzzle {
    let rule = if coin_flip(rng) { OddRule::Count } else { OddRule::Color };
    let (correct, distractors, explanation) = match rule {
        OddRule::Count => count_rule(rng, difficulty, language),
        OddRule::Color => color_rule(rng, language),
    };

    let (options, correct_option_id) = shuffled_options(
        rng,
        PuzzleType::OddOneOut.id_prefix(),
        correct,
        distractors,
    );

    puzzle(
        puzzle_id, PuzzleType::OddOneOut, difficulty,
        PuzzleData::OddOneOut(OddOneOutData { rule }),
        phrases(language).question_for(PuzzleType::OddOneOut), options, correct_option_id, explanation,
    )
}
