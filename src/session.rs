//! Score and answer history for one exam attempt.
//!
//! The session is a plain owned value. It changes only through
//! [`UserSession::record_answer`] and [`UserSession::reset`]; everything
//! else is a read-only view used by the report layer.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::puzzle_engine::models::{Puzzle, PuzzleCategory};

/// Points awarded for each correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("option {option_id} does not belong to puzzle {puzzle_id}")]
    UnknownOption { puzzle_id: String, option_id: String },
    #[error("puzzle {0} has already been answered")]
    AlreadyAnswered(String),
    #[error("the exam is already finished")]
    Finished,
    #[error("there is no puzzle waiting for an answer")]
    NoActivePuzzle,
    #[error("inconsistent session record: {0}")]
    Inconsistent(String),
}

/// One committed answer. Never changed after it is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub puzzle: Puzzle,
    pub selected_option_id: String,
    pub is_correct: bool,
    /// Seconds spent on the puzzle.
    pub time_spent: u32,
}

impl HistoryItem {
    pub fn category(&self) -> PuzzleCategory {
        self.puzzle.category
    }
}

/// Counters are re-checked against the history on deserialization, so a
/// stored session cannot claim more correct answers than it holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct UserSession {
    score: u32,
    total_questions: u32,
    correct_count: u32,
    history: Vec<HistoryItem>,
}

#[derive(Deserialize)]
struct SessionRecord {
    score: u32,
    total_questions: u32,
    correct_count: u32,
    #[serde(default)]
    history: Vec<HistoryItem>,
}

impl TryFrom<SessionRecord> for UserSession {
    type Error = SessionError;

    fn try_from(r: SessionRecord) -> Result<Self, Self::Error> {
        let answered = r.history.len();
        let correct = r.history.iter().filter(|h| h.is_correct).count();
        if r.total_questions as usize != answered {
            return Err(SessionError::Inconsistent(format!(
                "total_questions {} but {answered} history items",
                r.total_questions
            )));
        }
        if r.correct_count as usize != correct {
            return Err(SessionError::Inconsistent(format!(
                "correct_count {} but {correct} correct history items",
                r.correct_count
            )));
        }
        if Some(r.score) != r.correct_count.checked_mul(POINTS_PER_CORRECT) {
            return Err(SessionError::Inconsistent(format!(
                "score {} does not match {} correct answers",
                r.score, r.correct_count
            )));
        }
        Ok(Self {
            score: r.score,
            total_questions: r.total_questions,
            correct_count: r.correct_count,
            history: r.history,
        })
    }
}

impl UserSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn wrong_count(&self) -> u32 {
        self.total_questions.saturating_sub(self.correct_count)
    }

    pub fn history(&self) -> &[HistoryItem] {
        &self.history
    }

    /// Overall accuracy as a rounded percentage; 0 for an empty session.
    pub fn accuracy(&self) -> u32 {
        percent(self.correct_count, self.total_questions)
    }

    /// Commit an answer. An option id the puzzle does not offer, or a second
    /// answer to the same puzzle, is rejected and leaves the session as is.
    pub fn record_answer(
        &mut self,
        puzzle: &Puzzle,
        selected_option_id: &str,
        time_spent: u32,
    ) -> Result<&HistoryItem, SessionError> {
        if puzzle.option(selected_option_id).is_none() {
            return Err(SessionError::UnknownOption {
                puzzle_id: puzzle.id.clone(),
                option_id: selected_option_id.to_string(),
            });
        }
        if self.history.iter().any(|h| h.puzzle.id == puzzle.id) {
            return Err(SessionError::AlreadyAnswered(puzzle.id.clone()));
        }

        let is_correct = puzzle.is_correct(selected_option_id);
        self.total_questions += 1;
        if is_correct {
            self.correct_count += 1;
            self.score += POINTS_PER_CORRECT;
        }
        info!(
            puzzle_id = %puzzle.id,
            category = %puzzle.category,
            is_correct,
            score = self.score,
            "answer recorded"
        );

        self.history.push(HistoryItem {
            puzzle: puzzle.clone(),
            selected_option_id: selected_option_id.to_string(),
            is_correct,
            time_spent,
        });
        Ok(&self.history[self.history.len() - 1])
    }

    pub fn reset(&mut self) {
        info!(answered = self.total_questions, "session reset");
        *self = Self::default();
    }
}

/// `part / whole` as a percentage rounded half up; 0 when `whole` is 0.
pub fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part * 200 + whole) / (whole * 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle_engine::{generate_puzzle, Difficulty, Language, PuzzleRequest, PuzzleType};

    fn puzzle(seed: u64) -> Puzzle {
        generate_puzzle(
            PuzzleRequest::new(Difficulty::Easy, Language::En)
                .with_type(PuzzleType::TriangleMath)
                .with_seed(seed),
        )
    }

    fn wrong_id(p: &Puzzle) -> String {
        p.options.iter().find(|o| o.id != p.correct_option_id).unwrap().id.clone()
    }

    #[test]
    fn correct_answer_adds_ten_points() {
        let mut session = UserSession::new();
        let p = puzzle(1);
        let item = session.record_answer(&p, &p.correct_option_id, 12).unwrap();
        assert!(item.is_correct);
        assert_eq!(item.time_spent, 12);
        assert_eq!(session.score(), 10);
        assert_eq!(session.correct_count(), 1);
        assert_eq!(session.total_questions(), 1);
        assert_eq!(session.accuracy(), 100);
    }

    #[test]
    fn wrong_answer_counts_but_scores_nothing() {
        let mut session = UserSession::new();
        let p = puzzle(2);
        let item = session.record_answer(&p, &wrong_id(&p), 5).unwrap();
        assert!(!item.is_correct);
        assert_eq!(session.score(), 0);
        assert_eq!(session.wrong_count(), 1);
        assert_eq!(session.accuracy(), 0);
    }

    #[test]
    fn unknown_option_leaves_session_unchanged() {
        let mut session = UserSession::new();
        let p = puzzle(3);
        let err = session.record_answer(&p, "nope", 1).unwrap_err();
        assert!(matches!(err, SessionError::UnknownOption { .. }));
        assert_eq!(session, UserSession::new());
    }

    #[test]
    fn second_answer_to_same_puzzle_is_rejected() {
        let mut session = UserSession::new();
        let p = puzzle(4);
        session.record_answer(&p, &p.correct_option_id, 1).unwrap();
        let err = session.record_answer(&p, &p.correct_option_id, 1).unwrap_err();
        assert_eq!(err, SessionError::AlreadyAnswered(p.id.clone()));
        assert_eq!(session.total_questions(), 1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = UserSession::new();
        let p = puzzle(5);
        session.record_answer(&p, &p.correct_option_id, 1).unwrap();
        session.reset();
        assert_eq!(session, UserSession::default());
        assert!(session.history().is_empty());
    }

    #[test]
    fn stored_session_round_trips() {
        let mut session = UserSession::new();
        let p = puzzle(6);
        session.record_answer(&p, &p.correct_option_id, 9).unwrap();
        let q = puzzle(7);
        session.record_answer(&q, &wrong_id(&q), 3).unwrap();

        let json = serde_json::to_string(&session).unwrap();
        let restored: UserSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
        assert_eq!(restored.wrong_count(), 1);
    }

    #[test]
    fn inconsistent_stored_session_is_rejected() {
        let bad = [
            r#"{"score":0,"total_questions":0,"correct_count":1,"history":[]}"#,
            r#"{"score":10,"total_questions":0,"correct_count":0,"history":[]}"#,
            r#"{"score":0,"total_questions":3,"correct_count":0,"history":[]}"#,
        ];
        for json in bad {
            let err = serde_json::from_str::<UserSession>(json).unwrap_err();
            assert!(err.to_string().contains("inconsistent session record"), "{json}: {err}");
        }
        let empty: UserSession = serde_json::from_str(r#"{"score":0,"total_questions":0,"correct_count":0}"#).unwrap();
        assert_eq!(empty, UserSession::new());
        assert_eq!(crate::report::ExamReport::from_session(&empty, Language::En).wrong_count, 0);
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(6, 10), 60);
    }
}
