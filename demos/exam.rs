//! A scripted exam run from start to report.
//!
//! Run with: `cargo run --example exam`
//!
//! Loads `TrainerConfig` from `TRAINER_CONFIG_PATH` (defaults otherwise),
//! runs a seeded exam that answers every third puzzle wrong, prints the
//! per-category report, then asks the optional tutor about the first
//! missed puzzle. Without `TUTOR_API_KEY` the built-in explanation is shown.

use aptitude_drill_gen::{
    explain::{explain_with_fallback, OpenAiTutor},
    puzzle_engine::i18n::phrases,
    telemetry::init_tracing,
    Exam, TrainerConfig,
};

#[tokio::main]
async fn main() {
    init_tracing();
    let config = TrainerConfig::load_from_env();

    let mut exam = match Exam::start_seeded(config.exam.clone(), config.policy.clone(), 2024) {
        Ok(exam) => exam,
        Err(e) => {
            eprintln!("cannot start exam: {e}");
            std::process::exit(1);
        }
    };
    if let Some(limit) = exam.time_limit() {
        println!("Time limit: {} min", limit.as_secs() / 60);
    }

    let mut missed = None;
    while let Some(puzzle) = exam.current() {
        let n = exam.question_number();
        let choice = if n % 3 == 0 {
            puzzle.options.iter().find(|o| !puzzle.is_correct(&o.id)).map(|o| o.id.clone())
        } else {
            Some(puzzle.correct_option_id.clone())
        };
        if n % 3 == 0 && missed.is_none() {
            missed = Some(puzzle.clone());
        }
        if let Some(id) = choice {
            match exam.answer(&id, 20) {
                Ok(item) => println!(
                    "{n:>2}. {:<16} {} -> {}",
                    item.puzzle.puzzle_type.tag(),
                    id,
                    if item.is_correct { "correct" } else { "wrong" }
                ),
                Err(e) => eprintln!("{n:>2}. answer rejected: {e}"),
            }
        }
        exam.advance();
    }

    let report = exam.report();
    println!();
    println!("Score: {}  Accuracy: %{}  ({} / {})",
        report.score, report.accuracy, report.correct_count, report.total_questions);
    for c in &report.categories {
        println!("  {:<14} {:>2} answered  %{}", c.label, c.answered, c.accuracy);
    }
    for hint in &report.recommendations {
        println!("  * {hint}");
    }

    if let Some(puzzle) = missed {
        let tutor = OpenAiTutor::from_config_if_enabled(&config.tutor);
        let text = explain_with_fallback(tutor.as_ref(), &puzzle, config.tutor.timeout()).await;
        println!();
        println!("Review {}: {}", puzzle.id, puzzle.question);
        if tutor.is_some() && !text.is_from_tutor() {
            println!("({})", phrases(config.exam.language).explanation_unavailable);
        }
        println!("{text}");
    }
}
