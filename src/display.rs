//! JSON views of a [`Puzzle`] for a display client.
//!
//! The client picks a widget from the `renderer` field and draws `data` with
//! it. The answer and explanation stay server-side until [`reveal_view`].

use serde_json::{json, Value};

use crate::puzzle_engine::models::{Puzzle, PuzzleType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Renderer {
    TrianglePanel,
    MatrixGrid,
    BalanceScales,
    CubeNet,
    SymbolEquations,
    PatternChoices,
    TextCard,
    /// A type tag this build does not know; the client shows a placeholder.
    Unsupported(String),
}

impl Renderer {
    pub fn name(&self) -> &str {
        match self {
            Renderer::TrianglePanel   => "triangle_panel",
            Renderer::MatrixGrid      => "matrix_grid",
            Renderer::BalanceScales   => "balance_scales",
            Renderer::CubeNet         => "cube_net",
            Renderer::SymbolEquations => "symbol_equations",
            Renderer::PatternChoices  => "pattern_choices",
            Renderer::TextCard        => "text_card",
            Renderer::Unsupported(_)  => "unsupported",
        }
    }
}

pub fn renderer_for(puzzle_type: PuzzleType) -> Renderer {
    match puzzle_type {
        PuzzleType::TriangleMath   => Renderer::TrianglePanel,
        PuzzleType::MatrixLogic    => Renderer::MatrixGrid,
        PuzzleType::BalanceScale   => Renderer::BalanceScales,
        PuzzleType::CubeFolding    => Renderer::CubeNet,
        PuzzleType::SymbolEquation => Renderer::SymbolEquations,
        PuzzleType::OddOneOut      => Renderer::PatternChoices,
        PuzzleType::WordProblem    => Renderer::TextCard,
        PuzzleType::AnalyticGeo    => Renderer::TextCard,
    }
}

/// Renderer for a raw type tag as it arrives over the wire.
pub fn renderer_for_tag(tag: &str) -> Renderer {
    match PuzzleType::from_tag(tag) {
        Some(t) => renderer_for(t),
        None    => Renderer::Unsupported(tag.to_string()),
    }
}

/// Everything the client needs to draw the puzzle, minus the answer.
pub fn client_view(puzzle: &Puzzle) -> Value {
    json!({
        "id": puzzle.id,
        "type": puzzle.puzzle_type.tag(),
        "category": puzzle.category,
        "difficulty": puzzle.difficulty,
        "renderer": renderer_for(puzzle.puzzle_type).name(),
        "question": puzzle.question,
        "data": puzzle.data,
        "options": puzzle.options,
    })
}

/// Client view plus the answer, the explanation and how `selected` fared.
pub fn reveal_view(puzzle: &Puzzle, selected: Option<&str>) -> Value {
    let mut view = client_view(puzzle);
    if let Value::Object(map) = &mut view {
        map.insert("correct_option_id".into(), json!(puzzle.correct_option_id));
        map.insert("explanation".into(), json!(puzzle.explanation));
        map.insert("selected_option_id".into(), json!(selected));
        map.insert("is_correct".into(), json!(selected.map(|id| puzzle.is_correct(id))));
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle_engine::{generate_puzzle, Difficulty, Language, PuzzleRequest};

    fn sample(t: PuzzleType) -> Puzzle {
        generate_puzzle(PuzzleRequest::new(Difficulty::Medium, Language::Tr).with_type(t).with_seed(17))
    }

    #[test]
    fn every_type_has_a_concrete_renderer() {
        for t in PuzzleType::ALL {
            assert!(!matches!(renderer_for(t), Renderer::Unsupported(_)));
            assert_eq!(renderer_for_tag(t.tag()), renderer_for(t));
        }
    }

    #[test]
    fn unknown_tag_falls_back_to_unsupported() {
        assert_eq!(renderer_for_tag("SHAPE_MATH"), Renderer::Unsupported("SHAPE_MATH".into()));
        assert_eq!(renderer_for_tag("SHAPE_MATH").name(), "unsupported");
    }

    #[test]
    fn client_view_hides_the_answer() {
        let p = sample(PuzzleType::CubeFolding);
        let view = client_view(&p);
        assert_eq!(view["type"], "CUBE_FOLDING");
        assert_eq!(view["category"], "VISUAL");
        assert_eq!(view["renderer"], "cube_net");
        assert_eq!(view["options"].as_array().unwrap().len(), 4);
        assert!(view.get("correct_option_id").is_none());
        assert!(view.get("explanation").is_none());
    }

    #[test]
    fn reveal_view_reports_the_selection() {
        let p = sample(PuzzleType::TriangleMath);
        let view = reveal_view(&p, Some(&p.correct_option_id));
        assert_eq!(view["correct_option_id"], p.correct_option_id.as_str());
        assert_eq!(view["is_correct"], true);
        assert_eq!(view["explanation"], p.explanation.as_str());

        let skipped = reveal_view(&p, None);
        assert!(skipped["is_correct"].is_null());
    }
}
