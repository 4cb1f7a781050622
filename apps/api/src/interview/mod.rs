// Mock interviews (open answers, evaluated) and multiple-choice quizzes.

pub mod evaluator;
pub mod handlers;
pub mod prompts;
pub mod questions;
pub mod quiz;
pub mod session;
pub mod store;

pub use evaluator::{AnswerEvaluator, LlmEvaluator, MockEvaluator};
pub use quiz::QuizSession;
pub use session::InterviewSession;
pub use store::SessionStore;
