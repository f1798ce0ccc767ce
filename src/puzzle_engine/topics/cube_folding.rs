use rand::Rng;
use tracing::debug;

use crate::config::GenerationPolicy;
use crate::puzzle_engine::{
    helpers::{localized, puzzle, shuffled_options, OptionDraft},
    i18n::phrases,
    models::{CubeData, Difficulty, Language, Puzzle, PuzzleData, PuzzleType, VisualData},
    random::{pick, random_int, shuffle},
    rules::{CUBE_CORNERS, OPPOSITE_FACES},
};

const LETTERS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];
const GLYPHS: [&str; 6] = ["●", "○", "◎", "⊙", "⊕", "⊗"];
const DISTRACTOR_COUNT: usize = 3;

fn symbol_pool(difficulty: Difficulty) -> &'static [&'static str; 6] {
    match difficulty {
        Difficulty::Hard => &GLYPHS,
        _                => &LETTERS,
    }
}

fn face_set(faces: &[usize; 3]) -> [usize; 3] {
    let mut sorted = *faces;
    sorted.sort_unstable();
    sorted
}

/// Every impossible view built from one opposite pair plus a third face.
fn all_impossible_views() -> impl Iterator<Item = [usize; 3]> {
    OPPOSITE_FACES.into_iter().flat_map(|(a, b)| {
        (0..6usize)
            .filter(move |f| *f != a && *f != b)
            .map(move |third| [a, b, third])
    })
}

/// Three distinct impossible views (by face set), each in shuffled order.
pub fn impossible_views<R: Rng>(rng: &mut R, max_attempts: u32) -> Vec<[usize; 3]> {
    let mut views: Vec<[usize; 3]> = Vec::with_capacity(DISTRACTOR_COUNT);
    let mut attempts = 0;
    while views.len() < DISTRACTOR_COUNT && attempts < max_attempts {
        attempts += 1;
        let (a, b) = *pick(rng, &OPPOSITE_FACES);
        let third = random_int(rng, 0, 5) as usize;
        if third == a || third == b {
            continue;
        }
        let shuffled = shuffle(rng, &[a, b, third]);
        let view = [shuffled[0], shuffled[1], shuffled[2]];
        if views.iter().all(|v| face_set(v) != face_set(&view)) {
            views.push(view);
        }
    }

    if views.len() < DISTRACTOR_COUNT {
        debug!(found = views.len(), "cube distractor draws exhausted; padding from enumeration");
        for view in all_impossible_views() {
            if views.len() == DISTRACTOR_COUNT {
                break;
            }
            if views.iter().all(|v| face_set(v) != face_set(&view)) {
                views.push(view);
            }
        }
    }
    views
}

fn view_option(net: &[String], view: [usize; 3]) -> OptionDraft {
    let faces = view.map(|i| net[i].clone());
    OptionDraft::text(faces.join(" ")).with_visual(VisualData::CubeFaces { faces, face_indices: view })
}

pub fn generate<R: Rng>(
    rng: &mut R,
    difficulty: Difficulty,
    language: Language,
    policy: &GenerationPolicy,
    puzzle_id: String,
) -> Puzzle {
    let net: Vec<String> = shuffle(rng, symbol_pool(difficulty))
        .into_iter()
        .map(str::to_string)
        .collect();

    let chosen = *pick(rng, &CUBE_CORNERS);
    let corner = shuffle(rng, &chosen);
    let correct = view_option(&net, [corner[0], corner[1], corner[2]]);
    let distractors = impossible_views(rng, policy.distractor_max_attempts)
        .into_iter()
        .map(|v| view_option(&net, v))
        .collect();

    let (options, correct_option_id) = shuffled_options(
        rng,
        PuzzleType::CubeFolding.id_prefix(),
        correct,
        distractors,
    );

    let pairs = OPPOSITE_FACES
        .iter()
        .map(|(a, b)| format!("{}-{}", net[*a], net[*b]))
        .collect::<Vec<_>>()
        .join(", ");
    let explanation = localized(
        language,
        format!("Opposite faces can never be seen together. The opposite pairs are {pairs}; the correct view shows one face from each pair."),
        format!("Kural: Karşılıklı yüzler aynı anda görülemez. Zıt yüz çiftleri {pairs}; doğru seçenekte her çiftten yalnızca bir yüz görünür."),
    );

    puzzle(
        puzzle_id, PuzzleType::CubeFolding, difficulty, PuzzleData::Cube(CubeData { net }),
        phrases(language).question_for(PuzzleType::CubeFolding), options, correct_option_id, explanation,
    )
}
