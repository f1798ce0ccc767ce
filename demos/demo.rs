//! One puzzle of every archetype, in both languages.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Language comparison**: the same seeded triangle puzzle in Turkish
//!    and English. The numbers and the correct option are identical; only
//!    the wording changes.
//!
//! 2. **All 8 archetypes**: one Medium puzzle each with fixed seeds, so the
//!    output is reproducible.
//!
//! 3. **Client payload**: the JSON a display client receives, without the
//!    answer.
//!
//! Set `LOG_LEVEL=debug` to see the generator's sampling logs.

use aptitude_drill_gen::{
    display::client_view, generate_puzzle, generate_question, telemetry::init_tracing,
    Difficulty, Language, PuzzleRequest, PuzzleType,
};

fn print_puzzle(puzzle_type: PuzzleType, difficulty: Difficulty, language: Language, seed: u64) {
    let puzzle = generate_puzzle(
        PuzzleRequest::new(difficulty, language).with_type(puzzle_type).with_seed(seed),
    );

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{} / {}]  {}  Lang: {}  ID: {}",
        puzzle.puzzle_type, puzzle.category, puzzle.difficulty, language, puzzle.id);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Q: {}", puzzle.question);
    println!();
    for opt in &puzzle.options {
        let marker = if puzzle.is_correct(&opt.id) { "✓" } else { " " };
        println!("  [{}] {marker} {}", opt.id, opt.value);
    }
    println!();
    for line in puzzle.explanation.lines() {
        println!("       {}", line);
    }
    println!();
}

fn main() {
    init_tracing();

    // ── Minimal API ────────────────────────────────────────────────────────
    println!();
    println!("══ Minimal API: generate_question() ══");
    println!();
    let p = generate_question(Difficulty::Easy, Language::Tr);
    println!("  Random archetype: {}  ID: {}", p.puzzle_type, p.id);
    println!();

    // ── Language comparison ────────────────────────────────────────────────
    println!("══ Same seed, two languages ══");
    println!();
    for language in Language::ALL {
        print_puzzle(PuzzleType::TriangleMath, Difficulty::Hard, language, 42);
    }

    // ── All archetypes ─────────────────────────────────────────────────────
    println!("══ All 8 archetypes (Medium, English) ══");
    println!();
    for (i, t) in PuzzleType::ALL.into_iter().enumerate() {
        print_puzzle(t, Difficulty::Medium, Language::En, 100 + i as u64);
    }

    // ── Client payload ─────────────────────────────────────────────────────
    println!("══ Client view ══");
    println!();
    let cube = generate_puzzle(
        PuzzleRequest::new(Difficulty::Easy, Language::En)
            .with_type(PuzzleType::CubeFolding)
            .with_seed(7),
    );
    match serde_json::to_string_pretty(&client_view(&cube)) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("could not serialize client view: {e}"),
    }
}
