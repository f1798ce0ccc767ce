use rand::Rng;

use crate::config::GenerationPolicy;
use crate::puzzle_engine::{
    helpers::{localized, pad_distinct, puzzle, push_unique, shuffled_options, OptionDraft},
    i18n::{phrases, tr_ablative, tr_genitive},
    models::{Difficulty, Language, Puzzle, PuzzleData, PuzzleType, TextPuzzleData},
    random::{random_int, shuffle},
};

pub const NAME_POOL: [&str; 6] = ["Ali", "Ayşe", "Mehmet", "Zeynep", "Can", "Elif"];
const DISTRACTOR_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// First person is `diff` years older than the second; asks for the sum.
    Difference { diff: i64, age2: i64 },
    /// First person is `ratio` times the second; asks for the first age.
    Ratio { ratio: i64, age2: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordParams {
    pub names: [String; 2],
    pub relation: Relation,
}

impl WordParams {
    pub fn age1(&self) -> i64 {
        match self.relation {
            Relation::Difference { diff, age2 } => age2 + diff,
            Relation::Ratio { ratio, age2 }     => age2 * ratio,
        }
    }

    pub fn answer(&self) -> i64 {
        match self.relation {
            Relation::Difference { age2, .. } => self.age1() + age2,
            Relation::Ratio { .. }            => self.age1(),
        }
    }

    /// A value a careless reader lands on: the older person's age for
    /// the sum question, the younger one's for the ratio question.
    pub fn decoy(&self) -> i64 {
        match self.relation {
            Relation::Difference { .. }   => self.age1(),
            Relation::Ratio { age2, .. }  => age2,
        }
    }
}

pub fn draw_params<R: Rng>(rng: &mut R, difficulty: Difficulty) -> WordParams {
    let names = shuffle(rng, &NAME_POOL);
    let names = [names[0].to_string(), names[1].to_string()];
    let relation = match difficulty {
        Difficulty::Easy => Relation::Difference {
            diff: random_int(rng, 4, 20),
            age2: random_int(rng, 10, 30),
        },
        Difficulty::Medium => Relation::Ratio {
            ratio: random_int(rng, 2, 3),
            age2: random_int(rng, 5, 15),
        },
        Difficulty::Hard => Relation::Ratio {
            ratio: random_int(rng, 2, 4),
            age2: random_int(rng, 5, 15),
        },
    };
    WordParams { names, relation }
}

fn texts(params: &WordParams, language: Language) -> (String, String) {
    let [n1, n2] = &params.names;
    let age1 = params.age1();
    match params.relation {
        Relation::Difference { diff, age2 } => {
            let sum = age1 + age2;
            let text = localized(
                language,
                format!("{n1} is {diff} years older than {n2}. If {n2} is {age2} years old, what is the sum of their ages?"),
                format!("{n1}, {} {diff} yaş büyüktür. {n2} {age2} yaşında olduğuna göre, ikisinin yaşları toplamı kaçtır?", tr_ablative(n2)),
            );
            let explanation = localized(
                language,
                format!("Step 1: {n2} = {age2}.\nStep 2: {n1} = {age2} + {diff} = {age1}.\nStep 3: Sum = {age1} + {age2} = {sum}."),
                format!("Adım 1: {n2} = {age2}.\nAdım 2: {n1} = {age2} + {diff} = {age1}.\nAdım 3: Toplam = {age1} + {age2} = {sum}."),
            );
            (text, explanation)
        }
        Relation::Ratio { ratio, age2 } => {
            let total = age1 + age2;
            let parts = ratio + 1;
            let text = localized(
                language,
                format!("The sum of {n1}'s and {n2}'s ages is {total}. {n1} is {ratio} times as old as {n2}. How old is {n1}?"),
                format!(
                    "{} yaşı {} yaşının {ratio} katıdır. İkisinin yaşları toplamı {total} olduğuna göre, {n1} kaç yaşındadır?",
                    tr_genitive(n1),
                    tr_genitive(n2),
                ),
            );
            let explanation = localized(
                language,
                format!(
                    "Step 1: Let {n2} = x, so {n1} = {ratio}x.\nStep 2: x + {ratio}x = {parts}x = {total}.\n\
                     Step 3: x = {total} / {parts} = {age2} ({n2}).\nStep 4: {n1} = {ratio} x {age2} = {age1}."
                ),
                format!(
                    "Adım 1: {n2} = x dersek, {n1} = {ratio}x olur.\nAdım 2: x + {ratio}x = {parts}x = {total}.\n\
                     Adım 3: x = {total} / {parts} = {age2} ({n2}).\nAdım 4: {n1} = {ratio} x {age2} = {age1}."
                ),
            );
            (text, explanation)
        }
    }
}

pub fn build<R: Rng>(
    rng: &mut R,
    params: WordParams,
    difficulty: Difficulty,
    language: Language,
    puzzle_id: String,
) -> Puzzle {
    let correct = params.answer();
    let positive = |v: i64| v > 0;

    let mut distractors = Vec::with_capacity(DISTRACTOR_COUNT);
    for candidate in [
        correct + random_int(rng, 1, 3),
        correct - random_int(rng, 1, 3),
        params.decoy(),
        correct + 10,
    ] {
        push_unique(&mut distractors, correct, candidate, positive);
    }
    pad_distinct(&mut distractors, correct, DISTRACTOR_COUNT, positive);

    let (options, correct_option_id) = shuffled_options(
        rng,
        PuzzleType::WordProblem.id_prefix(),
        OptionDraft::number(correct),
        distractors.into_iter().map(OptionDraft::number).collect(),
    );

    let (text, explanation) = texts(&params, language);
    let data = PuzzleData::Text(TextPuzzleData { text, sub_text: None });

    puzzle(
        puzzle_id, PuzzleType::WordProblem, difficulty, data,
        phrases(language).question_for(PuzzleType::WordProblem), options, correct_option_id, explanation,
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

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn easy_sum_with_fixed_names() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = WordParams {
            names: ["Ali".into(), "Ayşe".into()],
            relation: Relation::Difference { diff: 5, age2: 20 },
        };
        let p = build(&mut rng, params, Difficulty::Easy, Language::En, "word-t".into());
        let correct = p.correct_option().unwrap().value.as_number().unwrap();
        assert_eq!(correct, 45);
        assert!(p.explanation.contains("20 + 5 = 25"));
        assert_ne!(correct, 25);
        // The older person's age is offered as a trap.
        assert!(p.options.iter().any(|o| o.value.as_number() == Some(25)));
        assert_eq!(p.options.len(), 5);
    }

    #[test]
    fn ratio_question_asks_for_the_older_age() {
        let mut rng = StdRng::seed_from_u64(2);
        let params = WordParams {
            names: ["Can".into(), "Elif".into()],
            relation: Relation::Ratio { ratio: 3, age2: 7 },
        };
        let p = build(&mut rng, params, Difficulty::Hard, Language::Tr, "word-h".into());
        assert_eq!(p.correct_option().unwrap().value.as_number(), Some(21));
        assert!(p.explanation.contains("4x = 28"));
        let PuzzleData::Text(data) = &p.data else { panic!("wrong payload") };
        assert!(data.text.contains("28"));
        assert!(data.text.starts_with("Can'ın yaşı Elif'in yaşının 3 katıdır."));
    }

    #[test]
    fn turkish_text_inflects_names() {
        let mut rng = StdRng::seed_from_u64(4);
        let params = WordParams {
            names: ["Can".into(), "Mehmet".into()],
            relation: Relation::Difference { diff: 6, age2: 30 },
        };
        let p = build(&mut rng, params, Difficulty::Easy, Language::Tr, "word-tr".into());
        let PuzzleData::Text(data) = &p.data else { panic!("wrong payload") };
        assert!(data.text.starts_with("Can, Mehmet'ten 6 yaş büyüktür."), "{}", data.text);
        assert!(!data.text.contains("'den"));
    }

    #[test]
    fn names_are_distinct_and_from_the_pool() {
        for seed in 0..50u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let params = draw_params(&mut rng, Difficulty::Medium);
            assert_ne!(params.names[0], params.names[1]);
            assert!(params.names.iter().all(|n| NAME_POOL.contains(&n.as_str())));
            let Relation::Ratio { ratio, age2 } = params.relation else { panic!("medium is a ratio question") };
            assert!((2..=3).contains(&ratio));
            assert!((5..=15).contains(&age2));
        }
    }

    #[test]
    fn small_answers_still_get_four_positive_distractors() {
        let mut rng = StdRng::seed_from_u64(3);
        let params = WordParams {
            names: ["Ali".into(), "Can".into()],
            relation: Relation::Ratio { ratio: 2, age2: 1 },
        };
        let p = build(&mut rng, params, Difficulty::Medium, Language::En, "word-s".into());
        assert!(p.check_invariants().is_empty());
        assert!(p.options.iter().all(|o| o.value.as_number().unwrap() > 0));
    }
}
