//! Crate-level tests for `aptitude_drill_gen`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed gives an identical puzzle; different seeds vary |
//! | Structural | Every archetype x difficulty x language passes `check_invariants` |
//! | Ids | Puzzle and option ids carry the archetype prefix |
//! | Per-archetype | Triangle rule, matrix progression, cube opposite faces |
//! | Explanations | Every explanation quotes the numbers of its own payload, in both languages |
//! | Language | Language changes wording only, never the answer |
//! | Dispatcher | Entropy-seeded calls never panic and stay schema-complete |
//! | Session + report | Score, accuracy and the remediation hints for a scripted run |

use rand::{rngs::StdRng, SeedableRng};

use crate::config::GenerationPolicy;
use crate::puzzle_engine::{
    generate_puzzle, generate_question, generate_with_rng,
    helpers::signed,
    models::{GeoKind, OddRule, OptionValue, Point, PuzzleData, VisualData, MATRIX_SENTINEL},
    rules::{opposite_pairs_in, rotation_state, CENTER_RANGE, OPPOSITE_FACES},
    Difficulty, Language, Puzzle, PuzzleCategory, PuzzleRequest, PuzzleType,
};
use crate::puzzle_engine::i18n::{color_name, phrases, remediation_hint, rotation_text, shape_name};
use crate::report::ExamReport;
use crate::session::UserSession;

// ── helpers ──────────────────────────────────────────────────────────────────

/// Deterministic request for one archetype.
fn req(t: PuzzleType, difficulty: Difficulty, language: Language, seed: u64) -> PuzzleRequest {
    PuzzleRequest::new(difficulty, language).with_type(t).with_seed(seed)
}

fn gen(t: PuzzleType, difficulty: Difficulty, seed: u64) -> Puzzle {
    generate_puzzle(req(t, difficulty, Language::En, seed))
}

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_puzzle() {
    for t in PuzzleType::ALL {
        for difficulty in Difficulty::ALL {
            let a = gen(t, difficulty, 12345);
            let b = gen(t, difficulty, 12345);
            assert_eq!(a, b, "puzzle mismatch for {t:?} {difficulty:?}");
        }
    }
}

#[test]
fn different_seeds_produce_varied_puzzles() {
    let mut same = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = gen(PuzzleType::TriangleMath, Difficulty::Medium, seed);
        let b = gen(PuzzleType::TriangleMath, Difficulty::Medium, seed + 500);
        if a.data == b.data {
            same += 1;
        }
    }
    assert!(same < pairs as usize / 4, "too many identical puzzles ({same}/{pairs})");
}

#[test]
fn one_rng_drives_a_reproducible_sequence() {
    let run = || {
        let mut rng = StdRng::seed_from_u64(2024);
        let policy = GenerationPolicy::default();
        (0..20)
            .map(|_| generate_with_rng(&mut rng, None, Difficulty::Hard, Language::Tr, &policy))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

// ── structural invariants ─────────────────────────────────────────────────────

#[test]
fn every_combination_passes_invariant_checks() {
    for t in PuzzleType::ALL {
        for difficulty in Difficulty::ALL {
            for language in Language::ALL {
                for seed in SEEDS {
                    let p = generate_puzzle(req(t, difficulty, language, seed));
                    let defects = p.check_invariants();
                    assert!(
                        defects.is_empty(),
                        "{t:?} {difficulty:?} {language:?} seed={seed}: {defects:?}"
                    );
                    assert_eq!(p.puzzle_type, t);
                    assert_eq!(p.difficulty, difficulty);
                    let expected = match t {
                        PuzzleType::MatrixLogic | PuzzleType::BalanceScale | PuzzleType::CubeFolding => 4,
                        _ => 5,
                    };
                    assert_eq!(p.options.len(), expected, "{t:?} option count");
                }
            }
        }
    }
}

#[test]
fn ids_carry_the_archetype_prefix() {
    for t in PuzzleType::ALL {
        for seed in SEEDS {
            let p = gen(t, Difficulty::Medium, seed);
            let prefix = format!("{}-", t.id_prefix());
            assert!(p.id.starts_with(&prefix), "puzzle id {} for {t:?}", p.id);
            assert_eq!(p.id.len(), prefix.len() + 8);
            assert!(p.options.iter().all(|o| o.id.starts_with(&prefix)));
        }
    }
}

// ── per-archetype properties ─────────────────────────────────────────────────

#[test]
fn triangle_answer_follows_the_stated_rule() {
    for difficulty in Difficulty::ALL {
        for seed in 0..50u64 {
            let p = gen(PuzzleType::TriangleMath, difficulty, seed);
            let PuzzleData::Triangle(t) = &p.data else { panic!("wrong payload") };
            let center = t.rule.apply(t.top, t.left, t.right);
            assert_eq!(p.correct_option().unwrap().value.as_number(), Some(center));
            assert!(CENTER_RANGE.contains(&center), "{difficulty:?} seed={seed} center={center}");
            assert!(p.explanation.contains(&t.rule.worked(t.top, t.left, t.right)));
        }
    }
}

#[test]
fn matrix_grid_is_a_progression_mod_four() {
    for difficulty in Difficulty::ALL {
        for seed in SEEDS {
            let p = gen(PuzzleType::MatrixLogic, difficulty, seed);
            let PuzzleData::Matrix(m) = &p.data else { panic!("wrong payload") };
            assert_eq!(m.grid[2][2], MATRIX_SENTINEL);

            let answer = p.correct_option().unwrap().value.as_number().unwrap() as i8;
            let mut restored = m.grid;
            restored[2][2] = answer;
            let base = restored[0][0];
            for i in 0..9 {
                assert_eq!(restored[i / 3][i % 3], rotation_state(base, i, m.step), "cell {i}");
            }

            let mut values: Vec<_> = p.options.iter().filter_map(|o| o.value.as_number()).collect();
            values.sort_unstable();
            assert_eq!(values, vec![0, 1, 2, 3]);
        }
    }
}

#[test]
fn cube_distractors_show_an_opposite_pair() {
    for difficulty in Difficulty::ALL {
        for seed in 0..30u64 {
            let p = gen(PuzzleType::CubeFolding, difficulty, seed);
            for opt in &p.options {
                let Some(VisualData::CubeFaces { face_indices, .. }) = &opt.visual_data else {
                    panic!("cube option without faces");
                };
                let pairs = opposite_pairs_in(face_indices);
                assert_eq!(pairs == 0, p.is_correct(&opt.id), "{difficulty:?} seed={seed} {face_indices:?}");
            }
        }
    }
}

// ── explanations ─────────────────────────────────────────────────────────────

/// Pick the phrase for `language`; keeps the per-archetype checks readable.
fn tr_en<'a>(language: Language, tr: &'a str, en: &'a str) -> &'a str {
    match language {
        Language::Tr => tr,
        Language::En => en,
    }
}

fn numbers_in(text: &str) -> Vec<i64> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect()
}

/// Assert that `p.explanation` is built from the numbers in `p.data`.
fn assert_explanation_quotes_payload(p: &Puzzle, language: Language) {
    let ex = &p.explanation;
    let correct = p.correct_option().unwrap();
    let ctx = format!("{} {:?} {language:?}:\n{ex}", p.puzzle_type, p.difficulty);

    match &p.data {
        PuzzleData::Triangle(t) => {
            assert!(ex.contains(&t.rule.worked(t.top, t.left, t.right)), "{ctx}");
            assert!(ex.contains(&t.rule_description), "{ctx}");
            assert!(ex.contains(&format!("({}, {}, {})", t.top, t.left, t.right)), "{ctx}");
        }
        PuzzleData::Matrix(m) => {
            let start = i32::from(m.grid[0][0]) * 90;
            let end = correct.value.as_number().unwrap() * 90;
            let (from, to) = match language {
                Language::Tr => (format!("{start}° ile başlayan"), format!("şekil {end}° olur")),
                Language::En => (format!("Starting at {start}°"), format!("ends at {end}°")),
            };
            assert!(ex.contains(&from) && ex.contains(&to), "{ctx}");
            assert!(ex.contains(rotation_text(language, m.step)), "{ctx}");
        }
        PuzzleData::Balance(b) => {
            for scale in &b.scales {
                for sc in scale.left.iter().chain(&scale.right) {
                    let quoted = format!("{} {}", sc.count, shape_name(language, sc.shape));
                    assert!(ex.contains(&quoted), "missing {quoted:?} in {ctx}");
                }
            }
            let answer = correct.value.as_number().unwrap();
            assert!(ex.contains(&format!("= {answer} ")), "{ctx}");
        }
        PuzzleData::Cube(c) => {
            for (a, b) in OPPOSITE_FACES {
                let pair = format!("{}-{}", c.net[a], c.net[b]);
                assert!(ex.contains(&pair), "missing pair {pair} in {ctx}");
            }
        }
        PuzzleData::SymbolEquation(s) => {
            for eq in &s.equations {
                assert!(ex.contains(&signed(eq.result)), "missing result {} in {ctx}", eq.result);
            }
            let total = correct.value.as_number().unwrap();
            assert!(ex.contains(&format!("= {total}")), "{ctx}");
        }
        PuzzleData::OddOneOut(o) => match (o.rule, &correct.value, &correct.visual_data) {
            (OddRule::Count, OptionValue::Number(n), _) => {
                assert!(ex.contains(&format!("; {n} ")), "{ctx}");
            }
            (OddRule::Color, _, Some(VisualData::ColorGrid { colors })) => {
                let majority = colors
                    .iter()
                    .find(|c| colors.iter().filter(|d| d == c).count() == 3)
                    .unwrap();
                let quoted = format!("{} {}", tr_en(language, "üç", "three"), color_name(language, *majority));
                assert!(ex.contains(&quoted), "missing {quoted:?} in {ctx}");
            }
            other => panic!("odd-one-out option does not match its rule: {other:?}"),
        },
        PuzzleData::Text(t) => {
            for n in numbers_in(&t.text) {
                assert!(ex.contains(&n.to_string()), "number {n} from the text missing in {ctx}");
            }
            let answer = correct.value.as_number().unwrap();
            assert!(ex.contains(&format!("= {answer}.")), "{ctx}");
        }
        PuzzleData::Geometry(g) => {
            let (a, b) = (g.a, g.b);
            match g.kind {
                GeoKind::Midpoint => {
                    let mid = Point { x: (a.x + b.x) / 2, y: (a.y + b.y) / 2 };
                    assert_eq!(correct.value, OptionValue::Text(mid.to_string()), "{ctx}");
                    assert!(ex.contains(&format!("X: ({}+{})/2 = {}.", a.x, b.x, mid.x)), "{ctx}");
                    assert!(ex.contains(&format!("Y: ({}+{})/2 = {}.", a.y, b.y, mid.y)), "{ctx}");
                }
                GeoKind::Distance => {
                    let (dx, dy) = (b.x - a.x, b.y - a.y);
                    assert!(ex.contains(&format!("√({dx}² + {dy}²) = √({} + {})", dx * dx, dy * dy)), "{ctx}");
                    assert!(ex.contains(&correct.value.to_string()), "{ctx}");
                }
            }
        }
    }
}

#[test]
fn explanations_quote_the_payload() {
    for t in PuzzleType::ALL {
        for difficulty in Difficulty::ALL {
            for language in Language::ALL {
                for seed in 0..40u64 {
                    let p = generate_puzzle(req(t, difficulty, language, seed));
                    assert_explanation_quotes_payload(&p, language);
                }
            }
        }
    }
}

// ── language ─────────────────────────────────────────────────────────────────

#[test]
fn language_does_not_affect_the_answer() {
    for t in PuzzleType::ALL {
        for seed in SEEDS {
            let tr = generate_puzzle(req(t, Difficulty::Medium, Language::Tr, seed));
            let en = generate_puzzle(req(t, Difficulty::Medium, Language::En, seed));
            assert_eq!(tr.id, en.id);
            assert_eq!(tr.correct_option_id, en.correct_option_id, "{t:?}");
            assert_eq!(tr.question, phrases(Language::Tr).question_for(t));
            assert_eq!(en.question, phrases(Language::En).question_for(t));
        }
    }
}

// ── dispatcher ───────────────────────────────────────────────────────────────

#[test]
fn dispatcher_never_panics_and_stays_complete() {
    let mut seen = std::collections::HashSet::new();
    for i in 0..300 {
        let difficulty = Difficulty::ALL[i % 3];
        let p = generate_question(difficulty, Language::ALL[i % 2]);
        assert!(p.check_invariants().is_empty(), "{:?}", p.check_invariants());
        assert!((4..=5).contains(&p.options.len()));
        seen.insert(p.puzzle_type);
    }
    // 300 uniform draws over 8 archetypes: all of them show up.
    assert_eq!(seen.len(), PuzzleType::ALL.len());
}

#[test]
fn exhausted_policy_still_yields_complete_puzzles() {
    let policy = GenerationPolicy { triangle_max_attempts: 1, distractor_max_attempts: 0 };
    for t in PuzzleType::ALL {
        for difficulty in Difficulty::ALL {
            let p = generate_puzzle(req(t, difficulty, Language::En, 5).with_policy(policy.clone()));
            assert!(p.check_invariants().is_empty(), "{t:?} {difficulty:?}: {:?}", p.check_invariants());
        }
    }
}

// ── session + report ─────────────────────────────────────────────────────────

fn answer(session: &mut UserSession, t: PuzzleType, seed: u64, correct: bool) {
    let p = gen(t, Difficulty::Medium, seed);
    let id = if correct {
        p.correct_option_id.clone()
    } else {
        p.options.iter().find(|o| !p.is_correct(&o.id)).unwrap().id.clone()
    };
    session.record_answer(&p, &id, 30).unwrap();
}

#[test]
fn scripted_run_scores_and_flags_numerical() {
    let mut session = UserSession::new();
    // 5 numerical, only the first right.
    let numerical = [
        PuzzleType::TriangleMath,
        PuzzleType::SymbolEquation,
        PuzzleType::AnalyticGeo,
        PuzzleType::TriangleMath,
        PuzzleType::SymbolEquation,
    ];
    for (i, t) in numerical.into_iter().enumerate() {
        answer(&mut session, t, 100 + i as u64, i == 0);
    }
    // 3 visual, 2 logic, all right.
    for (i, t) in [PuzzleType::MatrixLogic, PuzzleType::CubeFolding, PuzzleType::OddOneOut].into_iter().enumerate() {
        answer(&mut session, t, 200 + i as u64, true);
    }
    for (i, t) in [PuzzleType::BalanceScale, PuzzleType::WordProblem].into_iter().enumerate() {
        answer(&mut session, t, 300 + i as u64, true);
    }

    assert_eq!(session.total_questions(), 10);
    assert_eq!(session.correct_count(), 6);
    assert_eq!(session.score(), 60);
    assert_eq!(session.accuracy(), 60);

    let report = ExamReport::from_session(&session, Language::Tr);
    assert_eq!(report.category(PuzzleCategory::Numerical).unwrap().accuracy, 20);
    assert_eq!(report.category(PuzzleCategory::Visual).unwrap().accuracy, 100);
    assert_eq!(report.category(PuzzleCategory::Logic).unwrap().accuracy, 100);
    assert_eq!(
        report.recommendations,
        vec![remediation_hint(Language::Tr, PuzzleCategory::Numerical).to_string()]
    );
    assert_eq!(report.review.len(), 4);
}
