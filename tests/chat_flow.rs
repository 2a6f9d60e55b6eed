// End-to-end session behavior through the public API.
use tutor_core::corpus::CorpusProvider;
use tutor_core::translate::PhrasebookTranslator;
use tutor_core::{ReplyKind, TutorSession};

fn session(seed: u64) -> TutorSession<PhrasebookTranslator> {
    let corpus = CorpusProvider::load().unwrap();
    let translator = PhrasebookTranslator::from_phrases(corpus.phrases());
    TutorSession::with_seed(translator, seed).unwrap()
}

#[tokio::test]
async fn greeting_message_round_trip() {
    let mut session = session(42);
    let message = session.process_message("Hello").await;
    assert!(message.is_bot);
    assert!(!message.id.is_empty());
    assert_eq!(message.kind, ReplyKind::Text);
    assert!(!message.text.is_empty());
}

#[tokio::test]
async fn phrase_request_yields_a_catalog_lesson() {
    let mut session = session(42);
    let message = session.process_message("give me a phrase").await;
    assert_eq!(message.kind, ReplyKind::Lesson);
    assert!(message.text.contains("English:"));
    assert!(message.text.contains("Tamil:"));

    let corpus = CorpusProvider::load().unwrap();
    assert!(corpus
        .phrases()
        .iter()
        .any(|p| message.text.contains(&p.tamil)));
}

#[tokio::test]
async fn quoted_snippet_is_translated() {
    let mut session = session(42);
    let message = session.process_message("what does \"nandri\" mean").await;
    assert_eq!(message.kind, ReplyKind::Translation);
    assert!(message.text.contains("\"nandri\" = \"நன்றி\""));
}

#[tokio::test]
async fn greeting_outranks_quiz_in_mixed_utterances() {
    let mut session = session(42);
    let message = session.process_message("hello, give me a quiz").await;
    assert_eq!(message.kind, ReplyKind::Text);
    assert!(!message.text.contains("What's your answer?"));
}

#[tokio::test]
async fn context_buffer_evicts_oldest_turn() {
    let mut session = session(42);
    for i in 0..6 {
        session.process_message(&format!("say something {i}")).await;
    }
    let history = session.context_snapshot();
    assert_eq!(history.len(), 5);
    assert!(!history.contains(&"say something 0".to_string()));
    assert!(history.contains(&"say something 5".to_string()));
}

#[tokio::test]
async fn seeded_sessions_replay_identically() {
    let mut a = session(7);
    let mut b = session(7);
    let ra = a.process_message("teach me a phrase").await;
    let rb = b.process_message("teach me a phrase").await;
    assert_eq!(ra.text, rb.text);
    assert_eq!(ra.kind, rb.kind);
}

#[tokio::test]
async fn degenerate_input_still_answers() {
    let mut session = session(42);
    for weird in ["", "   ", "!!??", "ズボン"] {
        let message = session.process_message(weird).await;
        assert_eq!(message.kind, ReplyKind::Text);
        assert!(!message.text.is_empty());
    }
}
