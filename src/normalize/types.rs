use serde::{Deserialize, Serialize};

/// Response schema for `/api/vlm`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemResult {
    pub question: String,
    pub answer: String,
    pub hints: Vec<String>,
    pub explanation: String,
    pub tags: Vec<String>,
}

/// Response schema for `/api/vlm/evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub score: f64,
    pub feedback: String,
    pub improvements: Vec<String>,
    pub strengths: Vec<String>,
    pub grammar_score: u8,
    pub vocabulary_score: u8,
    pub content_score: u8,
    pub fluency_score: u8,
}

impl ProblemResult {
    /// Fixed problem substituted when the model produced no parsable JSON.
    /// The raw generated text, if any, is kept as the answer so the client
    /// still sees what the model said.
    pub fn fallback(raw_text: &str) -> Self {
        let answer = if raw_text.is_empty() {
            "Describe the contents of the image.".to_string()
        } else {
            raw_text.to_string()
        };

        Self {
            question: "Describe what you can see in this image.".to_string(),
            answer,
            hints: vec!["Look closely at the details of the image.".to_string()],
            explanation: "Generated by the vision-language model.".to_string(),
            tags: vec!["generated".to_string(), "fallback".to_string()],
        }
    }
}

impl EvaluationResult {
    /// Fixed, encouraging evaluation substituted when the model produced no
    /// parsable JSON.
    pub fn fallback() -> Self {
        Self {
            score: 0.75,
            feedback: "Well written. Adding more detail would make it even better.".to_string(),
            improvements: vec![
                "Try adding more specific descriptions.".to_string(),
                "Try using connectives to link your sentences.".to_string(),
            ],
            strengths: vec![
                "The core content is understood.".to_string(),
                "The sentences are grammatically correct.".to_string(),
            ],
            grammar_score: 8,
            vocabulary_score: 7,
            content_score: 8,
            fluency_score: 7,
        }
    }
}
