// src/translate.rs
use crate::corpus::Phrase;
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// The two languages the tutor moves between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ta,
}

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("translation service unavailable: {0}")]
    Unavailable(String),
    #[error("language detection failed for {0:?}")]
    Detection(String),
}

/// Prefix of the sentinel string a provider returns for an unknown phrase.
/// The responder matches this prefix to show its own "not found" fallback
/// instead of surfacing the sentinel text. Kept as a shared constant so the
/// contract lives in one place.
pub const NOT_FOUND_PREFIX: &str = "Translation not available";

/// The translation collaborator consumed by the chat core. Detection and
/// translation may suspend and may fail; the core awaits one call at a time
/// and recovers locally from errors.
#[async_trait]
pub trait TranslationProvider {
    async fn detect_language(&self, text: &str) -> Result<Language, TranslationError>;

    /// Translates English text to Tamil. An unknown phrase yields a sentinel
    /// string prefixed with [`NOT_FOUND_PREFIX`], not an error.
    async fn translate_to_tamil(&self, text: &str) -> Result<String, TranslationError>;

    async fn translate_to_english(&self, text: &str) -> Result<String, TranslationError>;

    /// Mapping from translated string to its transliteration. Consumed by
    /// the audio feature for voice selection, not by the chat core.
    fn transliteration_rules(&self) -> HashMap<String, String>;
}

const TAMIL_BLOCK: std::ops::RangeInclusive<char> = '\u{0B80}'..='\u{0BFF}';

/// Reference provider backed by the phrase catalog. Good enough for the
/// demo binary and tests; a real deployment swaps in a dictionary service
/// behind the same trait.
pub struct PhrasebookTranslator {
    to_tamil: HashMap<String, String>,
    to_english: HashMap<String, String>,
    transliterations: HashMap<String, String>,
}

impl PhrasebookTranslator {
    pub fn from_phrases(phrases: &[Phrase]) -> Self {
        let mut to_tamil = HashMap::new();
        let mut to_english = HashMap::new();
        let mut transliterations = HashMap::new();

        for p in phrases {
            to_tamil.insert(normalize_key(&p.english), p.tamil.clone());
            // Romanized spellings resolve to the Tamil script form too.
            to_tamil.insert(normalize_key(&p.transliteration), p.tamil.clone());
            to_english.insert(p.tamil.clone(), p.english.clone());
            transliterations.insert(p.tamil.clone(), p.transliteration.clone());
        }

        Self {
            to_tamil,
            to_english,
            transliterations,
        }
    }
}

fn normalize_key(text: &str) -> String {
    text.trim()
        .trim_end_matches(['?', '!', '.'])
        .to_lowercase()
}

fn contains_tamil(text: &str) -> bool {
    text.chars().any(|c| TAMIL_BLOCK.contains(&c))
}

#[async_trait]
impl TranslationProvider for PhrasebookTranslator {
    async fn detect_language(&self, text: &str) -> Result<Language, TranslationError> {
        if text.trim().is_empty() {
            return Err(TranslationError::Detection(text.to_string()));
        }
        if contains_tamil(text) {
            Ok(Language::Ta)
        } else {
            Ok(Language::En)
        }
    }

    async fn translate_to_tamil(&self, text: &str) -> Result<String, TranslationError> {
        Ok(self
            .to_tamil
            .get(&normalize_key(text))
            .cloned()
            .unwrap_or_else(|| format!("{NOT_FOUND_PREFIX} for \"{text}\"")))
    }

    async fn translate_to_english(&self, text: &str) -> Result<String, TranslationError> {
        Ok(self
            .to_english
            .get(text.trim())
            .cloned()
            .unwrap_or_else(|| format!("{NOT_FOUND_PREFIX} for \"{text}\"")))
    }

    fn transliteration_rules(&self) -> HashMap<String, String> {
        self.transliterations.clone()
    }
}
