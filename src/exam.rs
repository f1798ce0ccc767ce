//! A timed exam run: a fixed number of puzzles served one at a time.
//!
//! The runner owns the RNG, the session and the puzzle currently on screen.
//! It keeps no clock; the caller tracks [`Exam::time_limit`] and calls
//! [`Exam::finish`] when it runs out.

use std::time::Duration;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;

use crate::config::{ConfigError, ExamConfig, GenerationPolicy};
use crate::puzzle_engine::{generate_with_rng, models::Puzzle};
use crate::report::ExamReport;
use crate::session::{HistoryItem, SessionError, UserSession};

pub struct Exam<R: Rng = StdRng> {
    config: ExamConfig,
    policy: GenerationPolicy,
    rng: R,
    session: UserSession,
    current: Option<Puzzle>,
    current_answered: bool,
    served: u32,
    finished: bool,
}

impl Exam<StdRng> {
    pub fn start(config: ExamConfig, policy: GenerationPolicy) -> Result<Self, ConfigError> {
        Self::with_rng(config, policy, StdRng::from_entropy())
    }

    /// Same seed, same puzzle sequence.
    pub fn start_seeded(config: ExamConfig, policy: GenerationPolicy, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, policy, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Exam<R> {
    /// Validate the configuration and serve the first puzzle.
    pub fn with_rng(config: ExamConfig, policy: GenerationPolicy, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        policy.validate()?;
        info!(
            questions = config.question_count,
            difficulty = %config.difficulty,
            language = %config.language,
            "exam started"
        );
        let mut exam = Self {
            config,
            policy,
            rng,
            session: UserSession::new(),
            current: None,
            current_answered: false,
            served: 0,
            finished: false,
        };
        exam.serve_next();
        Ok(exam)
    }

    fn serve_next(&mut self) {
        let puzzle = generate_with_rng(
            &mut self.rng,
            None,
            self.config.difficulty,
            self.config.language,
            &self.policy,
        );
        self.current = Some(puzzle);
        self.current_answered = false;
        self.served += 1;
    }

    pub fn config(&self) -> &ExamConfig {
        &self.config
    }

    /// The puzzle waiting for an answer; `None` once the exam is finished.
    pub fn current(&self) -> Option<&Puzzle> {
        self.current.as_ref()
    }

    /// 1-based number of the current puzzle.
    pub fn question_number(&self) -> u32 {
        self.served
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn session(&self) -> &UserSession {
        &self.session
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.config.time_limit()
    }

    /// Answer the current puzzle. Only one answer per puzzle is accepted.
    pub fn answer(&mut self, option_id: &str, time_spent: u32) -> Result<&HistoryItem, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        let Some(puzzle) = self.current.as_ref() else {
            return Err(SessionError::NoActivePuzzle);
        };
        if self.current_answered {
            return Err(SessionError::AlreadyAnswered(puzzle.id.clone()));
        }
        let item = self.session.record_answer(puzzle, option_id, time_spent)?;
        self.current_answered = true;
        Ok(item)
    }

    /// Move to the next puzzle, or finish after the last one.
    ///
    /// An unanswered puzzle is skipped and does not count toward the score.
    pub fn advance(&mut self) -> Option<&Puzzle> {
        if self.finished {
            return None;
        }
        if self.served >= self.config.question_count {
            self.finish();
            return None;
        }
        self.serve_next();
        self.current.as_ref()
    }

    /// End the exam now, e.g. when the timer runs out.
    pub fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        self.current = None;
        info!(
            served = self.served,
            answered = self.session.total_questions(),
            score = self.session.score(),
            accuracy = self.session.accuracy(),
            "exam finished"
        );
    }

    pub fn report(&self) -> ExamReport {
        ExamReport::from_session(&self.session, self.config.language)
    }
}
