// src/core/engine.rs
use crate::core::classifier::IntentClassifier;
use crate::core::context::ConversationContext;
use crate::core::responder::ResponseGenerator;
use crate::core::types::ChatMessage;
use crate::corpus::{CorpusError, CorpusProvider};
use crate::translate::TranslationProvider;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

const CONTEXT_WINDOW_SIZE: usize = 5;

/// One tutoring chat session: corpus, classifier, responder, bounded
/// conversation context, the translation collaborator, and the session's
/// random source. Explicitly constructed per chat; nothing here is shared
/// process-wide.
pub struct TutorSession<T: TranslationProvider> {
    corpus: CorpusProvider,
    classifier: IntentClassifier,
    responder: ResponseGenerator,
    context: ConversationContext,
    translator: T,
    rng: StdRng,
}

impl<T: TranslationProvider> TutorSession<T> {
    pub fn new(translator: T) -> Result<Self, CorpusError> {
        Self::build(translator, StdRng::from_entropy())
    }

    /// Deterministic session for tests and replay: a fixed seed makes every
    /// template and corpus pick reproducible.
    pub fn with_seed(translator: T, seed: u64) -> Result<Self, CorpusError> {
        Self::build(translator, StdRng::seed_from_u64(seed))
    }

    fn build(translator: T, rng: StdRng) -> Result<Self, CorpusError> {
        Ok(Self {
            corpus: CorpusProvider::load()?,
            classifier: IntentClassifier::new(),
            responder: ResponseGenerator::new(),
            context: ConversationContext::new(CONTEXT_WINDOW_SIZE),
            translator,
            rng,
        })
    }

    /// Handles one user message end to end: normalize, remember, classify,
    /// respond. The only await is the translation collaborator; everything
    /// else is synchronous. Never fails: degenerate input falls through to
    /// the default intent.
    pub async fn process_message(&mut self, text: &str) -> ChatMessage {
        let message = text.trim().to_lowercase();
        self.context.push(message.clone());

        let history = self.context.snapshot();
        let intent = self.classifier.classify(&message, &history);
        let reply = self
            .responder
            .generate(intent, &message, &self.corpus, &self.translator, &mut self.rng)
            .await;

        let now = Utc::now();
        ChatMessage {
            id: now.timestamp_millis().to_string(),
            text: reply.text,
            is_bot: true,
            timestamp: now,
            kind: reply.kind,
        }
    }

    /// A cheer line for quiz/game callers to show after a correct answer.
    pub fn encouragement(&mut self) -> String {
        self.responder.encouragement(&mut self.rng)
    }

    pub fn conversation_starters(&self) -> &'static [&'static str] {
        self.corpus.conversation_starters()
    }

    pub fn corpus(&self) -> &CorpusProvider {
        &self.corpus
    }

    /// The retained recent turns, oldest first.
    pub fn context_snapshot(&self) -> Vec<String> {
        self.context.snapshot()
    }
}
