//! Answer evaluators score one interview answer on correctness, communication
//! and relevance (each 0–10) plus written feedback.
//!
//! Default: `MockEvaluator` (fixed scores). Live: `LlmEvaluator`, which falls back to
//! neutral default scores whenever the call or the reply parsing fails.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::advice::ContentSource;
use crate::interview::prompts::EVALUATION_PROMPT_TEMPLATE;
use crate::llm_client::prompts::CAREER_COACH_SYSTEM;
use crate::llm_client::LlmClient;

pub const MAX_SCORE: u8 = 10;
pub const MOCK_FEEDBACK: &str = "Good answer. Could be more detailed.";
pub const FALLBACK_FEEDBACK: &str = "Error in evaluation. Using default scores.";

static SCORE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[\s*_#-]*(correctness|communication|relevance)[\s*_]*:[\s*_]*(\d+(?:\.\d+)?)")
        .expect("score line pattern")
});
static FEEDBACK_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[\s*_#-]*feedback[\s*_]*:\s*").expect("feedback label pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub correctness: u8,
    pub communication: u8,
    pub relevance: u8,
}

impl Scores {
    pub const MOCK: Scores = Scores {
        correctness: 8,
        communication: 7,
        relevance: 9,
    };
    pub const FALLBACK: Scores = Scores {
        correctness: 5,
        communication: 5,
        relevance: 5,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub scores: Scores,
    pub feedback: String,
    pub source: ContentSource,
}

impl Evaluation {
    fn fallback() -> Self {
        Self {
            scores: Scores::FALLBACK,
            feedback: FALLBACK_FEEDBACK.to_string(),
            source: ContentSource::Mock,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Never fails: implementations return default scores instead.
#[async_trait]
pub trait AnswerEvaluator: Send + Sync {
    async fn evaluate(&self, role: &str, question: &str, answer: &str) -> Evaluation;
}

// ────────────────────────────────────────────────────────────────────────────
// MockEvaluator
// ────────────────────────────────────────────────────────────────────────────

pub struct MockEvaluator;

#[async_trait]
impl AnswerEvaluator for MockEvaluator {
    async fn evaluate(&self, _role: &str, _question: &str, _answer: &str) -> Evaluation {
        Evaluation {
            scores: Scores::MOCK,
            feedback: MOCK_FEEDBACK.to_string(),
            source: ContentSource::Mock,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmEvaluator
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmEvaluator(pub LlmClient);

#[async_trait]
impl AnswerEvaluator for LlmEvaluator {
    async fn evaluate(&self, role: &str, question: &str, answer: &str) -> Evaluation {
        let prompt = EVALUATION_PROMPT_TEMPLATE
            .replace("{role}", role)
            .replace("{question}", question)
            .replace("{answer}", answer);

        let reply = match self.0.call_text(&prompt, CAREER_COACH_SYSTEM).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Live evaluation failed, using default scores: {e}");
                return Evaluation::fallback();
            }
        };

        match parse_evaluation(&reply) {
            Some((scores, feedback)) => Evaluation {
                scores,
                feedback,
                source: ContentSource::Llm,
            },
            None => {
                warn!("Could not parse evaluation reply, using default scores");
                Evaluation::fallback()
            }
        }
    }
}

/// Reads the three `Label: n` score lines out of a reply; every other non-blank line
/// becomes feedback. Scores are rounded and clamped to 0–10. `None` unless all three
/// labels are present.
pub fn parse_evaluation(reply: &str) -> Option<(Scores, String)> {
    let mut correctness = None;
    let mut communication = None;
    let mut relevance = None;
    let mut feedback = Vec::new();

    for line in reply.lines() {
        if let Some(caps) = SCORE_LINE.captures(line) {
            let score = caps[2]
                .parse::<f64>()
                .ok()
                .map(|v| v.round().clamp(0.0, MAX_SCORE as f64) as u8);
            match caps[1].to_lowercase().as_str() {
                "correctness" => correctness = score,
                "communication" => communication = score,
                _ => relevance = score,
            }
            continue;
        }
        let line = FEEDBACK_LABEL.replace(line, "");
        let line = line.trim();
        if !line.is_empty() {
            feedback.push(line.to_string());
        }
    }

    let scores = Scores {
        correctness: correctness?,
        communication: communication?,
        relevance: relevance?,
    };
    Some((scores, feedback.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::{fake_llm, text_reply};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_scores_are_fixed() {
        let evaluation = MockEvaluator
            .evaluate("Data Scientist", "What is PCA?", "Dimensionality reduction.")
            .await;
        assert_eq!(evaluation.scores, Scores::MOCK);
        assert_eq!(evaluation.feedback, MOCK_FEEDBACK);
    }

    #[test]
    fn test_parse_well_formed_reply() {
        let reply = "Correctness: 7\nCommunication: 6\nRelevance: 9\nFeedback: Solid.\nMention variance.";
        let (scores, feedback) = parse_evaluation(reply).unwrap();
        assert_eq!(
            scores,
            Scores {
                correctness: 7,
                communication: 6,
                relevance: 9
            }
        );
        assert_eq!(feedback, "Solid.\nMention variance.");
    }

    #[test]
    fn test_parse_tolerates_markdown_and_order() {
        let reply = "**Relevance:** 8\n- Correctness: 6.6\n**Communication**: 5\n\nGreat structure.";
        let (scores, feedback) = parse_evaluation(reply).unwrap();
        assert_eq!(scores.correctness, 7);
        assert_eq!(scores.communication, 5);
        assert_eq!(scores.relevance, 8);
        assert_eq!(feedback, "Great structure.");
    }

    #[test]
    fn test_parse_clamps_out_of_range() {
        let reply = "Correctness: 14\nCommunication: 0\nRelevance: 10";
        let (scores, feedback) = parse_evaluation(reply).unwrap();
        assert_eq!(scores.correctness, MAX_SCORE);
        assert_eq!(scores.communication, 0);
        assert!(feedback.is_empty());
    }

    #[test]
    fn test_parse_requires_all_three_scores() {
        assert!(parse_evaluation("Correctness: 7\nRelevance: 9\nNice.").is_none());
        assert!(parse_evaluation("I'd rate this highly.").is_none());
    }

    #[test]
    fn test_fallback_evaluation() {
        let evaluation = Evaluation::fallback();
        assert_eq!(evaluation.scores, Scores::FALLBACK);
        assert_eq!(evaluation.feedback, FALLBACK_FEEDBACK);
    }

    #[tokio::test]
    async fn test_live_evaluation_parses_reply() {
        let (client, _) = fake_llm(
            StatusCode::OK,
            text_reply("Correctness: 9\nCommunication: 8\nRelevance: 7\nFeedback: Clear and correct."),
        )
        .await;
        let evaluation = LlmEvaluator(client)
            .evaluate("Data Scientist", "What is PCA?", "Dimensionality reduction.")
            .await;
        assert_eq!(evaluation.source, ContentSource::Llm);
        assert_eq!(
            evaluation.scores,
            Scores {
                correctness: 9,
                communication: 8,
                relevance: 7
            }
        );
        assert_eq!(evaluation.feedback, "Clear and correct.");
    }

    #[tokio::test]
    async fn test_live_evaluation_defaults_when_call_fails() {
        let (client, _) = fake_llm(StatusCode::INTERNAL_SERVER_ERROR, json!({})).await;
        let evaluation = LlmEvaluator(client).evaluate("Data Scientist", "Q", "A").await;
        assert_eq!(evaluation.scores, Scores::FALLBACK);
        assert_eq!(evaluation.feedback, FALLBACK_FEEDBACK);
        assert_eq!(evaluation.source, ContentSource::Mock);
    }

    #[tokio::test]
    async fn test_live_evaluation_defaults_when_reply_is_unparseable() {
        let (client, _) = fake_llm(StatusCode::OK, text_reply("Nice answer overall.")).await;
        let evaluation = LlmEvaluator(client).evaluate("Data Scientist", "Q", "A").await;
        assert_eq!(evaluation.scores, Scores::FALLBACK);
        assert_eq!(evaluation.feedback, FALLBACK_FEEDBACK);
    }
}
