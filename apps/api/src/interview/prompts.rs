// Prompt template for live answer evaluation.
//
// The reply format is parsed line by line in evaluator.rs; keep the labels in sync.

pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"You are interviewing a candidate for the role of {role}.

Question:
{question}

Candidate's answer:
{answer}

Score the answer out of 10 on three dimensions and then give brief feedback.
Reply in exactly this format, with whole numbers:

Correctness: <0-10>
Communication: <0-10>
Relevance: <0-10>
Feedback: <two or three sentences>"#;
