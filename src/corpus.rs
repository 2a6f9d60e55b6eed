// src/corpus.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse difficulty tier attached to every catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// One teachable phrase. Loaded once, identified by `id`, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phrase {
    pub id: String,
    pub english: String,
    pub tamil: String,
    pub transliteration: String,
    pub category: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub cultural_context: Option<String>,
}

/// One multiple-choice quiz question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub category: String,
    pub difficulty: Difficulty,
    pub explanation: String,
}

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to parse embedded catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question '{id}' has correct_answer {index} but only {options} options")]
    AnswerIndexOutOfRange {
        id: String,
        index: usize,
        options: usize,
    },
}

const PHRASES_JSON: &str = include_str!("../data/phrases.json");
const QUESTIONS_JSON: &str = include_str!("../data/questions.json");

/// Suggested opening utterances, surfaced by the chat UI as tap-to-send prompts.
const CONVERSATION_STARTERS: &[&str] = &[
    "What's a common Tamil greeting?",
    "How do you say 'thank you' in Tamil?",
    "Teach me a useful Tamil phrase",
    "Give me a Tamil quiz question",
    "Tell me about Tamil culture",
];

/// Immutable catalogs of phrases and quiz questions, parsed from the
/// embedded JSON at construction. The rest of the crate samples from these
/// read-only slices and never writes back.
pub struct CorpusProvider {
    phrases: Vec<Phrase>,
    questions: Vec<Question>,
}

impl CorpusProvider {
    /// Parses and validates both catalogs. Every question's answer index
    /// must point inside its options list.
    pub fn load() -> Result<Self, CorpusError> {
        let phrases: Vec<Phrase> = serde_json::from_str(PHRASES_JSON)?;
        let questions: Vec<Question> = serde_json::from_str(QUESTIONS_JSON)?;

        for q in &questions {
            if q.correct_answer >= q.options.len() {
                return Err(CorpusError::AnswerIndexOutOfRange {
                    id: q.id.clone(),
                    index: q.correct_answer,
                    options: q.options.len(),
                });
            }
        }

        Ok(Self { phrases, questions })
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Pre-loaded questions for one category, e.g. "greetings".
    pub fn questions_by_category(&self, category: &str) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.category == category)
            .collect()
    }

    pub fn conversation_starters(&self) -> &'static [&'static str] {
        CONVERSATION_STARTERS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_load_and_validate() {
        let corpus = CorpusProvider::load().unwrap();
        assert!(!corpus.phrases().is_empty());
        assert!(!corpus.questions().is_empty());
        for q in corpus.questions() {
            assert!(q.correct_answer < q.options.len());
        }
    }

    #[test]
    fn category_filter_matches_only_that_category() {
        let corpus = CorpusProvider::load().unwrap();
        let greetings = corpus.questions_by_category("greetings");
        assert!(!greetings.is_empty());
        assert!(greetings.iter().all(|q| q.category == "greetings"));
    }

    #[test]
    fn starters_are_exposed() {
        let corpus = CorpusProvider::load().unwrap();
        assert_eq!(corpus.conversation_starters().len(), 5);
    }
}
