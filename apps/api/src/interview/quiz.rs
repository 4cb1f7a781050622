//! Multiple-choice quizzes: a shuffled draw from a small per-role bank, scored as the
//! percentage of correct choices.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::questions::{Difficulty, FALLBACK_ROLE};

pub const EMPTY_CHOICE_MESSAGE: &str = "Please select an answer before submitting.";

#[derive(Debug)]
pub struct McqQuestion {
    pub question: &'static str,
    pub options: &'static [&'static str],
    pub answer: &'static str,
}

struct McqBank {
    role: &'static str,
    questions: &'static [McqQuestion],
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizChoice {
    pub question: &'static str,
    pub choice: String,
    pub correct: bool,
    pub correct_answer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResult {
    pub correct: usize,
    pub total: usize,
    pub score_percent: f64,
    pub verdict: &'static str,
}

#[derive(Debug, Serialize)]
pub struct QuizQuestionView {
    /// 1-based.
    pub number: usize,
    pub question: &'static str,
    pub options: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct QuizView {
    pub id: Uuid,
    pub role: &'static str,
    pub difficulty: Difficulty,
    pub total_questions: usize,
    pub answered: usize,
    pub current_question: Option<QuizQuestionView>,
    pub choices: Vec<QuizChoice>,
    pub result: Option<QuizResult>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    pub id: Uuid,
    pub role: &'static str,
    pub difficulty: Difficulty,
    questions: Vec<&'static McqQuestion>,
    choices: Vec<QuizChoice>,
    pub created_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn new(role: &str, difficulty: Difficulty) -> Self {
        let bank = bank_for(role);
        Self {
            id: Uuid::new_v4(),
            role: bank.role,
            difficulty,
            questions: draw(bank, difficulty),
            choices: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.choices.len() >= self.questions.len()
    }

    /// Scores `choice` against the current question and advances.
    pub fn answer(&mut self, choice: &str) -> Result<QuizChoice, AppError> {
        let choice = choice.trim();
        if choice.is_empty() {
            return Err(AppError::Validation(EMPTY_CHOICE_MESSAGE.to_string()));
        }
        let question = self
            .questions
            .get(self.choices.len())
            .copied()
            .ok_or_else(|| AppError::Conflict("This quiz is already complete.".to_string()))?;
        if !question.options.iter().any(|option| *option == choice) {
            return Err(AppError::Validation(format!(
                "'{choice}' is not one of the options for this question"
            )));
        }

        let recorded = QuizChoice {
            question: question.question,
            choice: choice.to_string(),
            correct: choice == question.answer,
            correct_answer: question.answer,
        };
        self.choices.push(recorded.clone());
        Ok(recorded)
    }

    /// Draws a fresh shuffled set, optionally at a different difficulty.
    pub fn retry(&mut self, difficulty: Option<Difficulty>) {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        self.questions = draw(bank_for(self.role), self.difficulty);
        self.choices.clear();
    }

    pub fn result(&self) -> Option<QuizResult> {
        if !self.is_finished() || self.questions.is_empty() {
            return None;
        }
        let correct = self.choices.iter().filter(|c| c.correct).count();
        Some(score(correct, self.questions.len()))
    }

    pub fn view(&self) -> QuizView {
        let index = self.choices.len();
        QuizView {
            id: self.id,
            role: self.role,
            difficulty: self.difficulty,
            total_questions: self.questions.len(),
            answered: index,
            current_question: self.questions.get(index).map(|q| QuizQuestionView {
                number: index + 1,
                question: q.question,
                options: q.options,
            }),
            choices: self.choices.clone(),
            result: self.result(),
            created_at: self.created_at,
        }
    }
}

fn bank_for(role: &str) -> &'static McqBank {
    let role = role.trim();
    MCQ_BANK
        .iter()
        .find(|b| b.role.eq_ignore_ascii_case(role))
        .or_else(|| MCQ_BANK.iter().find(|b| b.role == FALLBACK_ROLE))
        .unwrap_or(&MCQ_BANK[0])
}

/// The first min(N, bank size) questions of a shuffled copy of the bank.
fn draw(bank: &'static McqBank, difficulty: Difficulty) -> Vec<&'static McqQuestion> {
    let mut questions: Vec<&'static McqQuestion> = bank.questions.iter().collect();
    questions.shuffle(&mut rand::rng());
    questions.truncate(difficulty.question_count());
    questions
}

pub fn score(correct: usize, total: usize) -> QuizResult {
    let score_percent = if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64 * 100.0
    };
    let verdict = if score_percent >= 80.0 {
        "Excellent work! You have a strong grasp of the concepts."
    } else if score_percent >= 50.0 {
        "Good effort! There are some areas where you can improve."
    } else {
        "Keep practicing! Reviewing the fundamentals will help a lot."
    };
    QuizResult {
        correct,
        total,
        score_percent,
        verdict,
    }
}

static MCQ_BANK: &[McqBank] = &[
    McqBank {
        role: "AI Engineer",
        questions: &[
            McqQuestion {
                question: "What is the primary purpose of a validation set in model training?",
                options: &[
                    "To train the final model",
                    "To tune hyperparameters",
                    "To test the model after training",
                    "To provide initial data",
                ],
                answer: "To tune hyperparameters",
            },
            McqQuestion {
                question: "Which activation function is most commonly used for output layers in binary classification problems?",
                options: &["ReLU", "Tanh", "Sigmoid", "Softmax"],
                answer: "Sigmoid",
            },
            McqQuestion {
                question: "What does the term 'overfitting' mean in machine learning?",
                options: &[
                    "The model performs poorly on training data.",
                    "The model is too simple to capture the data's complexity.",
                    "The model performs well on training data but poorly on unseen data.",
                    "The model has not been trained for enough epochs.",
                ],
                answer: "The model performs well on training data but poorly on unseen data.",
            },
            McqQuestion {
                question: "Which technique randomly disables neurons during training to reduce overfitting?",
                options: &["Batch normalization", "Dropout", "Early stopping", "Data augmentation"],
                answer: "Dropout",
            },
            McqQuestion {
                question: "What does the attention mechanism in a Transformer compute?",
                options: &[
                    "A fixed convolution over the input",
                    "Weighted combinations of token representations",
                    "The gradient of the loss function",
                    "A random projection of the embeddings",
                ],
                answer: "Weighted combinations of token representations",
            },
            McqQuestion {
                question: "Which optimizer adapts the learning rate per parameter using running averages of gradients?",
                options: &["Plain SGD", "Adam", "Newton's method", "Grid search"],
                answer: "Adam",
            },
            McqQuestion {
                question: "What is transfer learning?",
                options: &[
                    "Moving a model between servers",
                    "Reusing a model trained on one task as the starting point for another",
                    "Converting a model to a different framework",
                    "Training two models on the same data",
                ],
                answer: "Reusing a model trained on one task as the starting point for another",
            },
            McqQuestion {
                question: "Which metric is most appropriate for a heavily imbalanced classification problem?",
                options: &["Accuracy", "F1 score", "Mean squared error", "R-squared"],
                answer: "F1 score",
            },
        ],
    },
    McqBank {
        role: "Data Scientist",
        questions: &[
            McqQuestion {
                question: "What is the main difference between classification and regression?",
                options: &[
                    "Classification predicts continuous values, regression predicts discrete classes.",
                    "Classification predicts discrete classes, regression predicts continuous values.",
                    "Both predict continuous values.",
                    "Both predict discrete classes.",
                ],
                answer: "Classification predicts discrete classes, regression predicts continuous values.",
            },
            McqQuestion {
                question: "Which of these is a measure of central tendency?",
                options: &["Standard Deviation", "Variance", "Range", "Median"],
                answer: "Median",
            },
            McqQuestion {
                question: "In A/B testing, what is the purpose of the p-value?",
                options: &[
                    "To determine the sample size.",
                    "To measure the effect size of the change.",
                    "To determine the statistical significance of the results.",
                    "To set the budget for the test.",
                ],
                answer: "To determine the statistical significance of the results.",
            },
            McqQuestion {
                question: "What does PCA primarily do?",
                options: &[
                    "Clusters similar observations",
                    "Reduces dimensionality by projecting onto directions of maximum variance",
                    "Imputes missing values",
                    "Balances class labels",
                ],
                answer: "Reduces dimensionality by projecting onto directions of maximum variance",
            },
            McqQuestion {
                question: "Which SQL clause filters rows after aggregation?",
                options: &["WHERE", "GROUP BY", "HAVING", "ORDER BY"],
                answer: "HAVING",
            },
            McqQuestion {
                question: "What is the purpose of k-fold cross-validation?",
                options: &[
                    "To speed up training",
                    "To estimate how a model generalizes to unseen data",
                    "To increase the size of the dataset",
                    "To select the number of clusters",
                ],
                answer: "To estimate how a model generalizes to unseen data",
            },
            McqQuestion {
                question: "Precision is defined as:",
                options: &[
                    "TP / (TP + FN)",
                    "TP / (TP + FP)",
                    "TN / (TN + FP)",
                    "(TP + TN) / total",
                ],
                answer: "TP / (TP + FP)",
            },
            McqQuestion {
                question: "Which plot best shows the distribution of a single continuous variable?",
                options: &["Histogram", "Pie chart", "Scatter plot", "Bar chart of categories"],
                answer: "Histogram",
            },
        ],
    },
];
