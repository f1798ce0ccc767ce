use rand::Rng;
use tracing::debug;

use crate::config::GenerationPolicy;
use crate::puzzle_engine::{
    helpers::{distinct_distractors, localized, puzzle, shuffled_options, OptionDraft},
    i18n::phrases,
    models::{Difficulty, GeoKind, GeometryData, Language, Point, Puzzle, PuzzleData, PuzzleType},
    random::{coin_flip, pick, random_int, signed_offset},
    rules::triples_for,
};

const DISTRACTOR_COUNT: usize = 4;
/// Range for the coordinates of a fake midpoint.
const FAKE_COORD: (i64, i64) = (2, 40);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoParams {
    Midpoint { a: Point, b: Point },
    /// `b = a + (dx, dy)` where `(dx, dy, hyp)` is a Pythagorean triple.
    Distance { a: Point, dx: i64, dy: i64, hyp: i64 },
}

impl GeoParams {
    pub fn points(&self) -> (Point, Point) {
        match *self {
            GeoParams::Midpoint { a, b } => (a, b),
            GeoParams::Distance { a, dx, dy, .. } => (a, Point { x: a.x + dx, y: a.y + dy }),
        }
    }
}

fn even_coord<R: Rng>(rng: &mut R) -> i64 {
    random_int(rng, 2, 20) * 2
}

pub fn draw_params<R: Rng>(rng: &mut R, difficulty: Difficulty) -> GeoParams {
    match difficulty {
        Difficulty::Easy => GeoParams::Midpoint {
            a: Point { x: even_coord(rng), y: even_coord(rng) },
            b: Point { x: even_coord(rng), y: even_coord(rng) },
        },
        _ => {
            let (p, q, hyp) = *pick(rng, triples_for(difficulty));
            let (dx, dy) = if coin_flip(rng) { (p, q) } else { (q, p) };
            let a = Point { x: random_int(rng, 5, 15), y: random_int(rng, 5, 15) };
            GeoParams::Distance { a, dx, dy, hyp }
        }
    }
}

/// Four fake midpoints, distinct from each other and from `correct`.
fn fake_midpoints<R: Rng>(rng: &mut R, correct: Point, max_attempts: u32) -> Vec<Point> {
    let (lo, hi) = FAKE_COORD;
    let mut fakes: Vec<Point> = Vec::with_capacity(DISTRACTOR_COUNT);
    let mut attempts = 0;
    while fakes.len() < DISTRACTOR_COUNT && attempts < max_attempts {
        attempts += 1;
        let p = Point { x: random_int(rng, lo, hi), y: random_int(rng, lo, hi) };
        if p != correct && !fakes.contains(&p) {
            fakes.push(p);
        }
    }
    if fakes.len() < DISTRACTOR_COUNT {
        debug!(found = fakes.len(), "midpoint distractor draws exhausted; padding");
        let mut shift = 1;
        while fakes.len() < DISTRACTOR_COUNT {
            let p = Point { x: correct.x + shift, y: correct.y };
            if !fakes.contains(&p) {
                fakes.push(p);
            }
            shift += 1;
        }
    }
    fakes
}

pub fn build<R: Rng>(
    rng: &mut R,
    params: GeoParams,
    difficulty: Difficulty,
    language: Language,
    policy: &GenerationPolicy,
    puzzle_id: String,
) -> Puzzle {
    let p = phrases(language);
    let (a, b) = params.points();

    let (kind, text, sub_text, correct, distractors, explanation) = match params {
        GeoParams::Midpoint { .. } => {
            let mid = Point { x: (a.x + b.x) / 2, y: (a.y + b.y) / 2 };
            let text = localized(
                language,
                format!("Find the midpoint of points A{a} and B{b}."),
                format!("A{a} ve B{b} noktalarının orta noktası aşağıdakilerden hangisidir?"),
            );
            let explanation = format!(
                "{}: ((x1+x2)/2, (y1+y2)/2).\nX: ({}+{})/2 = {}.\nY: ({}+{})/2 = {}.",
                p.midpoint_formula, a.x, b.x, mid.x, a.y, b.y, mid.y
            );
            let fakes: Vec<OptionDraft> = fake_midpoints(rng, mid, policy.distractor_max_attempts)
                .into_iter()
                .map(|f| OptionDraft::text(f.to_string()))
                .collect();
            (GeoKind::Midpoint, text, p.midpoint_formula, OptionDraft::text(mid.to_string()), fakes, explanation)
        }
        GeoParams::Distance { dx, dy, hyp, .. } => {
            let units = p.units;
            let text = localized(
                language,
                format!("What is the distance between points A{a} and B{b}?"),
                format!("A{a} ve B{b} noktaları arasındaki uzaklık kaç birimdir?"),
            );
            let explanation = format!(
                "{}: √((x2-x1)² + (y2-y1)²).\n√({dx}² + {dy}²) = √({} + {}) = {hyp} {units}.",
                p.distance_formula,
                dx * dx,
                dy * dy
            );
            let fakes: Vec<OptionDraft> = distinct_distractors(
                rng,
                hyp,
                DISTRACTOR_COUNT,
                policy.distractor_max_attempts,
                |rng| hyp + signed_offset(rng, 1, 5),
                |v| v > 0,
            )
            .into_iter()
            .map(|v| OptionDraft::text(format!("{v} {units}")))
            .collect();
            let correct = OptionDraft::text(format!("{hyp} {units}"));
            (GeoKind::Distance, text, p.distance_formula, correct, fakes, explanation)
        }
    };

    let (options, correct_option_id) = shuffled_options(rng, PuzzleType::AnalyticGeo.id_prefix(), correct, distractors);

    let data = PuzzleData::Geometry(GeometryData { kind, a, b, text, sub_text: sub_text.to_string() });

    puzzle(
        puzzle_id, PuzzleType::AnalyticGeo, difficulty, data,
        p.question_for(PuzzleType::AnalyticGeo), options, correct_option_id, explanation,
    )
}

pub fn generate<R: Rng>(
    rng: &mut R,
    difficulty: Difficulty,
    language: Language,
    policy: &GenerationPolicy,
    puzzle_id: String,
) -> Puzzle {
    let params = draw_params(rng, difficulty);
    build(rng, params, difficulty, language, policy, puzzle_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn midpoint_of_even_coordinates_is_integral() {
        let mut rng = StdRng::seed_from_u64(4);
        let params = GeoParams::Midpoint { a: Point { x: 4, y: 10 }, b: Point { x: 12, y: 30 } };
        let p = build(&mut rng, params, Difficulty::Easy, Language::En, &GenerationPolicy::default(), "geo-t".into());
        assert_eq!(p.correct_option().unwrap().value.to_string(), "(8, 20)");
        assert!(p.explanation.contains("X: (4+12)/2 = 8."));
        let PuzzleData::Geometry(data) = &p.data else { panic!("wrong payload") };
        assert_eq!(data.kind, GeoKind::Midpoint);
        assert!(data.text.contains("A(4, 10)"));
    }

    #[test]
    fn distance_uses_the_triple_hypotenuse() {
        for seed in 0..40u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let params = draw_params(&mut rng, Difficulty::Hard);
            let GeoParams::Distance { dx, dy, hyp, a } = params else { panic!("hard is a distance question") };
            assert_eq!(dx * dx + dy * dy, hyp * hyp);
            assert!((5..=15).contains(&a.x) && (5..=15).contains(&a.y));

            let p = build(&mut rng, params, Difficulty::Hard, Language::Tr, &GenerationPolicy::default(), "geo-h".into());
            assert_eq!(p.correct_option().unwrap().value.to_string(), format!("{hyp} br"));
            assert_eq!(p.options.len(), 5);
            assert!(p.check_invariants().is_empty());
        }
    }

    #[test]
    fn medium_keeps_to_small_triples() {
        for seed in 0..40u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let GeoParams::Distance { hyp, .. } = draw_params(&mut rng, Difficulty::Medium) else {
                panic!("medium is a distance question");
            };
            assert!(hyp == 5 || hyp == 10);
        }
    }

    #[test]
    fn fake_midpoints_are_padded_without_draws() {
        let mut rng = StdRng::seed_from_u64(0);
        let fakes = fake_midpoints(&mut rng, Point { x: 10, y: 10 }, 0);
        assert_eq!(fakes.len(), 4);
        assert!(!fakes.contains(&Point { x: 10, y: 10 }));
    }
}
