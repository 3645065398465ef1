use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question answer cannot be empty")]
    EmptyAnswer,
}

/// A single flashcard: the prompt on the front, the answer on the back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion", into = "RawQuestion")]
pub struct Question {
    prompt: String,
    answer: String,
}

impl Question {
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or answer is blank after trimming.
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Result<Self, QuestionError> {
        let prompt = prompt.into().trim().to_owned();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        let answer = answer.into().trim().to_owned();
        if answer.is_empty() {
            return Err(QuestionError::EmptyAnswer);
        }
        Ok(Self { prompt, answer })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

#[derive(Serialize, Deserialize)]
struct RawQuestion {
    prompt: String,
    answer: String,
}

impl TryFrom<RawQuestion> for Question {
    type Error = QuestionError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        Self::new(raw.prompt, raw.answer)
    }
}

impl From<Question> for RawQuestion {
    fn from(question: Question) -> Self {
        Self {
            prompt: question.prompt,
            answer: question.answer,
        }
    }
}
