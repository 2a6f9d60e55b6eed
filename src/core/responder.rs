// src/core/responder.rs
use crate::core::types::{Intent, Reply};
use crate::corpus::CorpusProvider;
use crate::translate::{Language, TranslationError, TranslationProvider, NOT_FOUND_PREFIX};
use log::warn;
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

const GREETINGS: &[&str] = &[
    "வணக்கம்! Welcome to your Tamil learning journey!",
    "Hello! I'm here to help you learn Tamil. How can I assist you today?",
    "நமஸ்காரம்! Ready to explore the beautiful Tamil language?",
];

const HELP: &[&str] = &[
    "I can help you with translations, pronunciations, grammar, and cultural context!",
    "Ask me about Tamil phrases, take quizzes, or practice conversations!",
    "Try asking: 'How do you say hello in Tamil?' or 'Give me a Tamil phrase'",
];

const TRANSLATION_LEADS: &[&str] = &[
    "Let me translate that for you!",
    "Here's the translation you requested:",
    "Great question! Here's how you say that in Tamil:",
];

const PHRASE_LEADS: &[&str] = &[
    "Here's a useful Tamil phrase for you:",
    "Let me teach you a new phrase:",
    "This phrase will be helpful in conversations:",
];

const QUIZ_LEADS: &[&str] = &[
    "Ready for a challenge? Here's a question for you:",
    "Let's test your Tamil knowledge:",
    "Time for a quick quiz!",
];

/// Shown by quiz/game callers after a correct answer; the intent rules
/// never route here.
const ENCOURAGEMENT: &[&str] = &[
    "Great job! You're making excellent progress!",
    "நன்றாக இருக்கிறது! (That's great!) Keep it up!",
    "Wonderful! Your Tamil skills are improving!",
];

const GRAMMAR_TIPS: &[&str] = &[
    "Tamil verbs change based on tense, person, and number. For example: 'படி' (padi) becomes 'படிக்கிறேன்' (padikkireen) for 'I read'.",
    "Tamil has different levels of formality. Use 'நீங்கள்' (neengal) for formal 'you' and 'நீ' (nee) for informal.",
    "Word order in Tamil is typically Subject-Object-Verb (SOV), unlike English which is Subject-Verb-Object.",
    "Tamil has agglutination - words are formed by adding suffixes to root words.",
];

const CULTURAL_FACTS: &[&str] = &[
    "Tamil culture values respect for elders. Always use formal language when speaking to older people.",
    "Pongal is one of the most important Tamil festivals, celebrating the harvest season.",
    "Tamil literature is over 2000 years old, with works like Thirukkural being philosophical masterpieces.",
    "Traditional Tamil food includes rice, sambar, rasam, and various vegetarian dishes.",
];

const DEFAULT_PROMPTS: &[&str] = &[
    "I'm here to help you learn Tamil! Try asking me to translate something or teach you a new phrase.",
    "Great question! I can help with translations, phrases, quizzes, and cultural information about Tamil.",
    "Let's continue your Tamil learning journey! Ask me about grammar, vocabulary, or Tamil culture.",
];

/// Pulls the snippet to translate out of an utterance: double-quoted text,
/// else single-quoted text, else the trailing bare-word run.
static SNIPPET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]+)"|'([^']+)'|\b([\w\s]+)\b$"#).unwrap());

pub(crate) fn extract_snippet(message: &str) -> Option<&str> {
    let caps = SNIPPET_RE.captures(message)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map(|m| m.as_str())
}

/// Turns a classified intent into a reply. Stateless; template and corpus
/// picks go through the caller-supplied random source so tests can seed it.
pub struct ResponseGenerator;

impl ResponseGenerator {
    pub fn new() -> Self {
        Self
    }

    pub async fn generate<T, R>(
        &self,
        intent: Intent,
        utterance: &str,
        corpus: &CorpusProvider,
        translator: &T,
        rng: &mut R,
    ) -> Reply
    where
        T: TranslationProvider,
        R: Rng,
    {
        let text = match intent {
            Intent::Greeting => pick(GREETINGS, rng),
            Intent::Help => pick(HELP, rng),
            Intent::Translation => self.handle_translation(utterance, translator, rng).await,
            Intent::Phrase => self.handle_phrase(corpus, rng),
            Intent::Quiz => self.handle_quiz(corpus, rng),
            Intent::Grammar => pick(GRAMMAR_TIPS, rng),
            Intent::Cultural => pick(CULTURAL_FACTS, rng),
            Intent::Default => pick(DEFAULT_PROMPTS, rng),
        };

        Reply {
            text,
            kind: intent.reply_kind(),
        }
    }

    pub fn encouragement<R: Rng>(&self, rng: &mut R) -> String {
        pick(ENCOURAGEMENT, rng)
    }

    async fn handle_translation<T, R>(&self, utterance: &str, translator: &T, rng: &mut R) -> String
    where
        T: TranslationProvider,
        R: Rng,
    {
        let Some(snippet) = extract_snippet(utterance) else {
            return "Could you specify what you'd like me to translate? \
                    Try: 'How do you say \"hello\" in Tamil?'"
                .to_string();
        };

        match self.run_translation(snippet, translator).await {
            Ok(translation) if translation.starts_with(NOT_FOUND_PREFIX) => {
                format!("I don't have \"{snippet}\" in my dictionary yet. Try another word or phrase!")
            }
            Ok(translation) => {
                format!(
                    "{}\n\n\"{snippet}\" = \"{translation}\"",
                    pick(TRANSLATION_LEADS, rng)
                )
            }
            Err(err) => {
                // The one place a collaborator error is swallowed rather
                // than propagated; the user can simply re-send.
                warn!("translation of {snippet:?} failed: {err}");
                "I'm having trouble with that translation. Could you try rephrasing your request?"
                    .to_string()
            }
        }
    }

    async fn run_translation<T>(
        &self,
        snippet: &str,
        translator: &T,
    ) -> Result<String, TranslationError>
    where
        T: TranslationProvider,
    {
        match translator.detect_language(snippet).await? {
            Language::En => translator.translate_to_tamil(snippet).await,
            Language::Ta => translator.translate_to_english(snippet).await,
        }
    }

    fn handle_phrase<R: Rng>(&self, corpus: &CorpusProvider, rng: &mut R) -> String {
        let Some(phrase) = corpus.phrases().choose(rng) else {
            return pick(DEFAULT_PROMPTS, rng);
        };

        let mut out = format!(
            "{}\n\n**English:** {}\n**Tamil:** {}\n**Pronunciation:** {}",
            pick(PHRASE_LEADS, rng),
            phrase.english,
            phrase.tamil,
            phrase.transliteration
        );
        if let Some(context) = &phrase.cultural_context {
            out.push_str(&format!("\n\n**Cultural Context:** {context}"));
        }
        out
    }

    fn handle_quiz<R: Rng>(&self, corpus: &CorpusProvider, rng: &mut R) -> String {
        let Some(question) = corpus.questions().choose(rng) else {
            return pick(DEFAULT_PROMPTS, rng);
        };

        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| format!("{}. {option}", (b'A' + i as u8) as char))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "{}\n\n**{}**\n\n{options}\n\nWhat's your answer?",
            pick(QUIZ_LEADS, rng),
            question.question
        )
    }
}

impl Default for ResponseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn pick<R: Rng>(pool: &[&str], rng: &mut R) -> String {
    pool[rng.gen_range(0..pool.len())].to_string()
}
