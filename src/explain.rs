//! Optional tutor that rewrites a puzzle's explanation in friendlier words.
//!
//! The tutor is off the scoring path. Every failure (no key, network error,
//! HTTP status, timeout, empty reply) ends in the puzzle's own explanation
//! being returned unchanged by [`explain_with_fallback`].
//!
//! NOTE: the API key is read from `TUTOR_API_KEY` only and is never logged.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::TutorConfig;
use crate::puzzle_engine::models::{Puzzle, PuzzleData};

pub const API_KEY_ENV: &str = "TUTOR_API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ExplainError {
    #[error("TUTOR_API_KEY is not set")]
    MissingCredential,
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("tutor returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("tutor did not answer within {0:?}")]
    Timeout(Duration),
    #[error("tutor returned an empty reply")]
    EmptyReply,
}

/// Text shown under a reviewed puzzle, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Explanation {
    Tutor(String),
    /// The puzzle's own explanation; the tutor was off or failed.
    BuiltIn(String),
}

impl Explanation {
    pub fn text(&self) -> &str {
        match self {
            Explanation::Tutor(t) | Explanation::BuiltIn(t) => t,
        }
    }

    pub fn is_from_tutor(&self) -> bool {
        matches!(self, Explanation::Tutor(_))
    }
}

impl std::fmt::Display for Explanation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Anything that can turn a prompt into text.
pub trait TutorBackend {
    fn complete(&self, prompt: &str) -> impl Future<Output = Result<String, ExplainError>> + Send;
}

/// Prompt for one puzzle. Triangle puzzles list their corners so the tutor
/// can walk through the arithmetic.
pub fn build_prompt(puzzle: &Puzzle) -> String {
    match &puzzle.data {
        PuzzleData::Triangle(t) => format!(
            "I am preparing for a general aptitude exam.\n\
             Here is a triangle number puzzle.\n\
             Triangle corners are: Top={}, Left={}, Right={}.\n\
             The center number follows this rule: {}.\n\
             Worked solution: {}\n\
             Act as a friendly tutor. Explain step by step how to reach the result using these numbers.\n\
             Keep it under 3 sentences and encouraging.",
            t.top, t.left, t.right, t.rule_description, puzzle.explanation
        ),
        _ => format!(
            "I am preparing for a general aptitude exam.\n\
             Puzzle type: {}.\n\
             Question: {}\n\
             Explain the pattern behind this solution: {}\n\
             Keep it concise.",
            puzzle.puzzle_type, puzzle.question, puzzle.explanation
        ),
    }
}

/// Ask the tutor once, bounded by `timeout`.
pub async fn explain<B: TutorBackend>(backend: &B, puzzle: &Puzzle, timeout: Duration) -> Result<String, ExplainError> {
    let prompt = build_prompt(puzzle);
    let reply = tokio::time::timeout(timeout, backend.complete(&prompt))
        .await
        .map_err(|_| ExplainError::Timeout(timeout))??;
    let reply = reply.trim();
    if reply.is_empty() {
        return Err(ExplainError::EmptyReply);
    }
    Ok(reply.to_string())
}

/// Tutor text when available, otherwise the puzzle's own explanation.
pub async fn explain_with_fallback<B: TutorBackend>(backend: Option<&B>, puzzle: &Puzzle, timeout: Duration) -> Explanation {
    let Some(backend) = backend else {
        debug!(puzzle_id = %puzzle.id, "no tutor configured; using built-in explanation");
        return Explanation::BuiltIn(puzzle.explanation.clone());
    };
    match explain(backend, puzzle, timeout).await {
        Ok(text) => Explanation::Tutor(text),
        Err(e) => {
            warn!(puzzle_id = %puzzle.id, error = %e, "tutor explanation failed; using built-in explanation");
            Explanation::BuiltIn(puzzle.explanation.clone())
        }
    }
}

// ---------------------------------------------------------------------------
// OpenAI-compatible chat completions
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body).ok().map(|b| b.error.message)
}

#[derive(Clone)]
pub struct OpenAiTutor {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for OpenAiTutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiTutor")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl OpenAiTutor {
    /// Build a client from config plus `TUTOR_API_KEY`.
    pub fn from_config(config: &TutorConfig) -> Result<Self, ExplainError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ExplainError::MissingCredential)?;
        Self::with_key(config, api_key)
    }

    pub fn with_key(config: &TutorConfig, api_key: String) -> Result<Self, ExplainError> {
        let client = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    /// `None` when the tutor is disabled or cannot be built; the reason is logged.
    pub fn from_config_if_enabled(config: &TutorConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }
        match Self::from_config(config) {
            Ok(tutor) => {
                info!(model = %tutor.model, "tutor enabled");
                Some(tutor)
            }
            Err(e) => {
                warn!(error = %e, "tutor enabled in config but unavailable");
                None
            }
        }
    }
}

impl TutorBackend for OpenAiTutor {
    async fn complete(&self, prompt: &str) -> Result<String, ExplainError> {
        let url = format!("{}/chat/completions", self.base_url);
        let req = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage { role: "user", content: prompt }],
            temperature: 0.3,
        };

        let res = self
            .client
            .post(&url)
            .header(USER_AGENT, concat!("aptitude-drill-gen/", env!("CARGO_PKG_VERSION")))
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            let message = api_error_message(&body).unwrap_or(body);
            return Err(ExplainError::Status { status, message });
        }

        let body: ChatCompletionResponse = res.json().await?;
        Ok(body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default())
    }
}
