use rand::Rng;

use crate::config::GenerationPolicy;
use crate::puzzle_engine::{
    helpers::{localized, puzzle, shuffled_options, OptionDraft},
    i18n::{phrases, rotation_text},
    models::{
        Difficulty, Language, MatrixData, Puzzle, PuzzleData, PuzzleType, VisualData, MATRIX_SENTINEL,
    },
    random::random_int,
    rules::{rotation_state, rotation_step},
};

/// Fill a 3x3 grid in reading order starting from `base`; returns the grid
/// with the last cell blanked and the state that belongs there.
pub fn build_grid(base: i8, step: i8) -> ([[i8; 3]; 3], i8) {
    let mut grid = [[0i8; 3]; 3];
    for (r, row) in grid.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = rotation_state(base, r * 3 + c, step);
        }
    }
    let answer = grid[2][2];
    grid[2][2] = MATRIX_SENTINEL;
    (grid, answer)
}

fn rotation_option(state: i8) -> OptionDraft {
    OptionDraft::number(i64::from(state)).with_visual(VisualData::Rotation { quarter_turns: state as u8 })
}

pub fn generate<R: Rng>(
    rng: &mut R,
    difficulty: Difficulty,
    language: Language,
    _policy: &GenerationPolicy,
    puzzle_id: String,
) -> Puzzle {
    let step = rotation_step(difficulty);
    let base = random_int(rng, 0, 3) as i8;
    let (grid, answer) = build_grid(base, step);

    // Every rotation state appears exactly once among the options.
    let distractors = (0..4i8)
        .filter(|s| *s != answer)
        .map(rotation_option)
        .collect();
    let (options, correct_option_id) = shuffled_options(
        rng,
        PuzzleType::MatrixLogic.id_prefix(),
        rotation_option(answer),
        distractors,
    );

    let turn = rotation_text(language, step);
    let start_deg = i32::from(base) * 90;
    let end_deg = i32::from(answer) * 90;
    let explanation = localized(
        language,
        format!("Each shape turns {turn} from the previous one. Starting at {start_deg}°, the ninth shape ends at {end_deg}°."),
        format!("Her şekil bir öncekine göre {turn} döner. {start_deg}° ile başlayan dizide dokuzuncu şekil {end_deg}° olur."),
    );

    puzzle(
        puzzle_id, PuzzleType::MatrixLogic, difficulty,
        PuzzleData::Matrix(MatrixData { grid, step }),
        phrases(language).question_for(PuzzleType::MatrixLogic), options, correct_option_id, explanation,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn grid_follows_step_and_blanks_last_cell() {
        let (grid, answer) = build_grid(0, 1);
        assert_eq!(grid[0], [0, 1, 2]);
        assert_eq!(grid[1], [3, 0, 1]);
        assert_eq!(grid[2], [2, 3, MATRIX_SENTINEL]);
        assert_eq!(answer, 0);

        let (grid, answer) = build_grid(1, -1);
        assert_eq!(grid[0], [1, 0, 3]);
        assert_eq!(answer, 1);
    }

    #[test]
    fn half_turn_grid_alternates_two_states() {
        let (grid, answer) = build_grid(3, 2);
        assert_eq!(grid[0], [3, 1, 3]);
        assert_eq!(answer, 3);
    }

    #[test]
    fn options_are_the_four_rotation_states() {
        let policy = GenerationPolicy::default();
        for seed in 0..30u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = generate(&mut rng, Difficulty::Medium, Language::En, &policy, "mat-t".into());
            let mut values: Vec<i64> = p.options.iter().filter_map(|o| o.value.as_number()).collect();
            values.sort_unstable();
            assert_eq!(values, vec![0, 1, 2, 3]);
            for opt in &p.options {
                let Some(VisualData::Rotation { quarter_turns }) = &opt.visual_data else {
                    panic!("matrix option without rotation visual");
                };
                assert_eq!(i64::from(*quarter_turns), opt.value.as_number().unwrap());
            }
            assert!(p.explanation.contains("90° counter-clockwise"));
        }
    }
}
