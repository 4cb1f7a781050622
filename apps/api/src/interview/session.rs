//! One mock interview: fixed questions, one evaluated answer per question, and a
//! scorecard once the last one is answered.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::evaluator::Evaluation;
use crate::interview::questions::{questions_for, Difficulty};

pub const EMPTY_ANSWER_MESSAGE: &str = "Please provide an answer before submitting.";
/// Averages below this mark a weak area.
const WEAK_THRESHOLD: f64 = 7.0;
const STRONG_PERFORMANCE_NOTE: &str =
    "Strong performance across all areas! Suggested job roles: Senior positions or specializations in your field.";

#[derive(Debug, Clone, Serialize)]
pub struct AnsweredQuestion {
    pub question: &'static str,
    pub answer: String,
    pub evaluation: Evaluation,
}

#[derive(Debug, Clone)]
pub struct InterviewSession {
    pub id: Uuid,
    /// The role whose bank is used (after fallback).
    pub role: &'static str,
    pub difficulty: Difficulty,
    pub questions: Vec<&'static str>,
    pub answers: Vec<AnsweredQuestion>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn from_overall(overall: f64) -> Self {
        if overall > 8.0 {
            Confidence::High
        } else if overall > 5.0 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Averages {
    pub correctness: f64,
    pub communication: f64,
    pub relevance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeakArea {
    pub area: &'static str,
    pub resource: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewSummary {
    pub averages: Averages,
    /// Mean of the three averages, 0–10.
    pub overall: f64,
    pub confidence: Confidence,
    pub weak_areas: Vec<WeakArea>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
    /// `overall × 10`; selects the learning-resource tier.
    pub score_percent: f64,
}

#[derive(Debug, Serialize)]
pub struct CurrentQuestion {
    /// 1-based.
    pub number: usize,
    pub text: &'static str,
}

/// What the API returns for an interview.
#[derive(Debug, Serialize)]
pub struct InterviewView {
    pub id: Uuid,
    pub role: &'static str,
    pub difficulty: Difficulty,
    pub total_questions: usize,
    pub answered: usize,
    pub current_question: Option<CurrentQuestion>,
    pub answers: Vec<AnsweredQuestion>,
    pub summary: Option<InterviewSummary>,
    pub created_at: DateTime<Utc>,
}

impl InterviewSession {
    pub fn new(role: &str, difficulty: Difficulty) -> Self {
        let (role, questions) = questions_for(role, difficulty);
        Self {
            id: Uuid::new_v4(),
            role,
            difficulty,
            questions,
            answers: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.answers.len() >= self.questions.len()
    }

    /// Index and text of the question awaiting an answer.
    pub fn current_question(&self) -> Option<(usize, &'static str)> {
        self.questions
            .get(self.answers.len())
            .map(|q| (self.answers.len(), *q))
    }

    /// Checks an answer can be taken and returns the question it answers.
    pub fn pending_question(&self, answer: &str) -> Result<(usize, &'static str), AppError> {
        if answer.trim().is_empty() {
            return Err(AppError::Validation(EMPTY_ANSWER_MESSAGE.to_string()));
        }
        self.current_question()
            .ok_or_else(|| AppError::Conflict("This interview is already complete.".to_string()))
    }

    /// Stores the evaluated answer for question `index`. Fails if another answer got there first.
    pub fn record(
        &mut self,
        index: usize,
        answer: String,
        evaluation: Evaluation,
    ) -> Result<(), AppError> {
        match self.current_question() {
            Some((current, question)) if current == index => {
                self.answers.push(AnsweredQuestion {
                    question,
                    answer,
                    evaluation,
                });
                Ok(())
            }
            _ => Err(AppError::Conflict(
                "This question has already been answered.".to_string(),
            )),
        }
    }

    /// Starts over, optionally at a different difficulty.
    pub fn retry(&mut self, difficulty: Option<Difficulty>) {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        let (role, questions) = questions_for(self.role, self.difficulty);
        self.role = role;
        self.questions = questions;
        self.answers.clear();
    }

    /// The scorecard; only once every question is answered.
    pub fn summary(&self) -> Option<InterviewSummary> {
        if !self.is_finished() || self.answers.is_empty() {
            return None;
        }
        Some(summarize(&self.answers))
    }

    pub fn view(&self) -> InterviewView {
        InterviewView {
            id: self.id,
            role: self.role,
            difficulty: self.difficulty,
            total_questions: self.questions.len(),
            answered: self.answers.len(),
            current_question: self.current_question().map(|(i, text)| CurrentQuestion {
                number: i + 1,
                text,
            }),
            answers: self.answers.clone(),
            summary: self.summary(),
            created_at: self.created_at,
        }
    }
}

fn summarize(answers: &[AnsweredQuestion]) -> InterviewSummary {
    let n = answers.len() as f64;
    let mean = |score: fn(&AnsweredQuestion) -> u8| {
        answers.iter().map(|a| score(a) as f64).sum::<f64>() / n
    };
    let averages = Averages {
        correctness: mean(|a| a.evaluation.scores.correctness),
        communication: mean(|a| a.evaluation.scores.communication),
        relevance: mean(|a| a.evaluation.scores.relevance),
    };
    let overall = (averages.correctness + averages.communication + averages.relevance) / 3.0;

    let weak_areas: Vec<WeakArea> = [
        (
            averages.correctness,
            "Technical knowledge",
            "Online courses on Coursera or edX for role-specific skills.",
        ),
        (
            averages.communication,
            "Communication skills",
            "Practice mock interviews or join Toastmasters.",
        ),
        (
            averages.relevance,
            "Relevance and problem-solving",
            "Read books like 'Cracking the PM Interview' or solve case studies.",
        ),
    ]
    .into_iter()
    .filter(|(avg, _, _)| *avg < WEAK_THRESHOLD)
    .map(|(_, area, resource)| WeakArea { area, resource })
    .collect();

    InterviewSummary {
        averages,
        overall,
        confidence: Confidence::from_overall(overall),
        note: weak_areas.is_empty().then_some(STRONG_PERFORMANCE_NOTE),
        weak_areas,
        score_percent: overall * 10.0,
    }
}
