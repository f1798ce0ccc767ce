//! End-of-exam summary built from a finished (or abandoned) session.

use serde::{Deserialize, Serialize};

use crate::puzzle_engine::{
    i18n::{category_label, phrases, remediation_hint},
    models::{Language, PuzzleCategory, PuzzleType},
};
use crate::session::{percent, UserSession};

/// Categories answered below this accuracy get a remediation hint.
pub const REMEDIATION_THRESHOLD: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: PuzzleCategory,
    pub label: String,
    pub answered: u32,
    pub correct: u32,
    /// Rounded percentage; 0 when nothing was answered.
    pub accuracy: u32,
}

/// A wrongly answered puzzle, with what was picked and what was right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewItem {
    pub puzzle_id: String,
    pub puzzle_type: PuzzleType,
    pub question: String,
    pub selected: String,
    pub correct: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamReport {
    pub score: u32,
    pub total_questions: u32,
    pub correct_count: u32,
    pub wrong_count: u32,
    pub accuracy: u32,
    /// Always all three categories, in report order.
    pub categories: Vec<CategoryStats>,
    pub recommendations: Vec<String>,
    pub review: Vec<ReviewItem>,
}

impl ExamReport {
    pub fn from_session(session: &UserSession, language: Language) -> Self {
        let categories: Vec<CategoryStats> = PuzzleCategory::ALL
            .iter()
            .map(|&category| {
                let (answered, correct) = session
                    .history()
                    .iter()
                    .filter(|h| h.category() == category)
                    .fold((0, 0), |(n, ok), h| (n + 1, ok + u32::from(h.is_correct)));
                CategoryStats {
                    category,
                    label: category_label(language, category).to_string(),
                    answered,
                    correct,
                    accuracy: percent(correct, answered),
                }
            })
            .collect();

        let mut recommendations: Vec<String> = categories
            .iter()
            .filter(|c| c.answered > 0 && c.accuracy < REMEDIATION_THRESHOLD)
            .map(|c| remediation_hint(language, c.category).to_string())
            .collect();
        if recommendations.is_empty() && session.total_questions() > 0 {
            recommendations.push(phrases(language).congratulations.to_string());
        }

        let review = session
            .history()
            .iter()
            .filter(|h| !h.is_correct)
            .map(|h| {
                let shown = |id: &str| h.puzzle.option(id).map(|o| o.value.to_string()).unwrap_or_default();
                ReviewItem {
                    puzzle_id: h.puzzle.id.clone(),
                    puzzle_type: h.puzzle.puzzle_type,
                    question: h.puzzle.question.clone(),
                    selected: shown(&h.selected_option_id),
                    correct: shown(&h.puzzle.correct_option_id),
                    explanation: h.puzzle.explanation.clone(),
                }
            })
            .collect();

        Self {
            score: session.score(),
            total_questions: session.total_questions(),
            correct_count: session.correct_count(),
            wrong_count: session.wrong_count(),
            accuracy: session.accuracy(),
            categories,
            recommendations,
            review,
        }
    }

    pub fn category(&self, category: PuzzleCategory) -> Option<&CategoryStats> {
        self.categories.iter().find(|c| c.category == category)
    }
}
