use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::advice::{Advisor, LlmAdvisor, MockAdvisor};
use crate::config::Config;
use crate::extract::GithubClient;
use crate::interview::{AnswerEvaluator, InterviewSession, LlmEvaluator, MockEvaluator, QuizSession, SessionStore};
use crate::llm_client::LlmClient;
use crate::matching::handlers::take_top;
use crate::matching::{Match, MatchCache, CATALOG};
use crate::skills::SkillsDatabase;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub skills: Arc<SkillsDatabase>,
    pub match_cache: Arc<MatchCache>,
    pub github: GithubClient,
    /// Pluggable advice backends. `advisor()` picks one per request.
    pub mock_advisor: Arc<dyn Advisor>,
    pub llm_advisor: Option<Arc<dyn Advisor>>,
    pub mock_evaluator: Arc<dyn AnswerEvaluator>,
    pub llm_evaluator: Option<Arc<dyn AnswerEvaluator>>,
    pub interviews: Arc<SessionStore<InterviewSession>>,
    pub quizzes: Arc<SessionStore<QuizSession>>,
}

impl AppState {
    /// Live backends are only wired when an Anthropic key is configured.
    pub fn new(config: &Config, skills: SkillsDatabase) -> Result<Self> {
        let github = GithubClient::new(config.github_api_url.clone(), config.github_token.clone())
            .context("Failed to build GitHub client")?;

        let llm = config
            .anthropic_api_key
            .clone()
            .map(|key| LlmClient::new(config.anthropic_api_url.clone(), key))
            .transpose()
            .context("Failed to build LLM client")?;
        let llm_advisor = llm
            .clone()
            .map(|client| Arc::new(LlmAdvisor(client)) as Arc<dyn Advisor>);
        let llm_evaluator = llm.map(|client| Arc::new(LlmEvaluator(client)) as Arc<dyn AnswerEvaluator>);

        Ok(Self {
            skills: Arc::new(skills),
            match_cache: Arc::new(MatchCache::new(
                config.match_cache_capacity,
                Duration::from_secs(config.match_cache_ttl_secs),
            )),
            github,
            mock_advisor: Arc::new(MockAdvisor),
            llm_advisor,
            mock_evaluator: Arc::new(MockEvaluator),
            llm_evaluator,
            interviews: Arc::new(SessionStore::new("Interview", config.session_capacity)),
            quizzes: Arc::new(SessionStore::new("Quiz", config.session_capacity)),
        })
    }

    pub fn live_mode_available(&self) -> bool {
        self.llm_advisor.is_some()
    }

    /// The live advisor when requested and configured, otherwise the mock one.
    pub fn advisor(&self, use_llm: bool) -> Arc<dyn Advisor> {
        match (&self.llm_advisor, use_llm) {
            (Some(live), true) => Arc::clone(live),
            _ => Arc::clone(&self.mock_advisor),
        }
    }

    pub fn evaluator(&self, use_llm: bool) -> Arc<dyn AnswerEvaluator> {
        match (&self.llm_evaluator, use_llm) {
            (Some(live), true) => Arc::clone(live),
            _ => Arc::clone(&self.mock_evaluator),
        }
    }

    /// Best catalog matches for an already-cleaned skill list, via the memo.
    pub fn top_matches(&self, skills: &[String]) -> Vec<Match> {
        take_top(&self.match_cache.get_or_compute(skills, CATALOG))
    }
}
