use serde::{Deserialize, Serialize};

use crate::common::{null_to_default, trimmed};
use crate::Searchable;

/// A question on the community board and its answer, if any.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QnaEntry {
    pub id: i64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub question: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub answer: String,
}

impl QnaEntry {
    pub fn is_answered(&self) -> bool {
        !self.answer.trim().is_empty()
    }
}

impl Searchable for QnaEntry {
    fn search_text(&self) -> String {
        format!("{} {}", self.question, self.answer)
    }
}

/// Form for posting a question with an optional first answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateQuestionRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Question is required"))
    )]
    pub question: String,
    #[serde(default, skip_serializing)]
    pub answer: String,
}

impl CreateQuestionRequest {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: trimmed(question),
            answer: trimmed(answer),
        }
    }

    /// The answer to post after the question is created, if one was given.
    pub fn answer_to_post(&self) -> Option<&str> {
        (!self.answer.is_empty()).then_some(self.answer.as_str())
    }
}

/// Response of the question create endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionCreated {
    pub id: i64,
}

/// Body of the answer create endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateAnswerRequest {
    pub answer: String,
    #[serde(rename = "questionId")]
    pub question_id: i64,
}
