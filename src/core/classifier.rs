// src/core/classifier.rs
use crate::core::types::Intent;
use log::debug;

/// One prioritized dispatch rule: the first rule whose keyword set has a
/// substring hit against the utterance decides the intent.
struct IntentRule {
    intent: Intent,
    keywords: &'static [&'static str],
}

/// Priority order matters: an utterance matching several rules resolves to
/// the earliest one, not the best-scoring one. Matching is substring
/// containment, not whole-word, so a keyword embedded in unrelated text can
/// false-positive (e.g. "mean" inside "meaning"); accepted trade-off for a
/// rule set this small.
const RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Greeting,
        keywords: &[
            "hello",
            "hi",
            "வணக்கம்",
            "vanakkam",
            "hey",
            "good morning",
            "good evening",
        ],
    },
    IntentRule {
        intent: Intent::Help,
        keywords: &["help", "assist", "what can you do", "how do you work"],
    },
    IntentRule {
        intent: Intent::Translation,
        keywords: &["translate", "how do you say", "what does", "mean", "translation"],
    },
    IntentRule {
        intent: Intent::Phrase,
        keywords: &["phrase", "teach me", "learn", "show me"],
    },
    IntentRule {
        intent: Intent::Quiz,
        keywords: &["quiz", "test", "question", "challenge"],
    },
    IntentRule {
        intent: Intent::Grammar,
        keywords: &["grammar", "conjugate", "tense", "verb", "noun", "adjective"],
    },
    IntentRule {
        intent: Intent::Cultural,
        keywords: &["culture", "tradition", "custom", "festival", "food", "history"],
    },
];

/// Ordered keyword-rule intent dispatch. Total: every utterance, however
/// degenerate, maps to some [`Intent`].
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classifies one utterance. Input is lowercased and trimmed before
    /// matching. `recent_history` is reserved for context-aware rules and
    /// does not affect the decision yet.
    pub fn classify(&self, utterance: &str, _recent_history: &[String]) -> Intent {
        let message = utterance.trim().to_lowercase();

        for rule in RULES {
            if rule.keywords.iter().any(|kw| message.contains(kw)) {
                debug!("classified {:?} -> {:?}", message, rule.intent);
                return rule.intent;
            }
        }

        debug!("classified {:?} -> Default", message);
        Intent::Default
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(s: &str) -> Intent {
        IntentClassifier::new().classify(s, &[])
    }

    #[test]
    fn greeting_from_hello() {
        assert_eq!(classify("Hello"), Intent::Greeting);
        assert_eq!(classify("  vanakkam!  "), Intent::Greeting);
        assert_eq!(classify("வணக்கம்"), Intent::Greeting);
    }

    #[test]
    fn one_rule_per_category() {
        assert_eq!(classify("can you help me"), Intent::Help);
        assert_eq!(classify("what does \"nandri\" mean"), Intent::Translation);
        assert_eq!(classify("give me a phrase"), Intent::Phrase);
        assert_eq!(classify("give me a quiz"), Intent::Quiz);
        assert_eq!(classify("explain verb tense"), Intent::Grammar);
        assert_eq!(classify("tell me about a festival"), Intent::Cultural);
    }

    #[test]
    fn priority_order_beats_later_rules() {
        // Contains both a greeting and a quiz keyword; greeting is earlier.
        assert_eq!(classify("hello, give me a quiz"), Intent::Greeting);
    }

    #[test]
    fn unmatched_input_is_default() {
        assert_eq!(classify("xyzzy"), Intent::Default);
        assert_eq!(classify(""), Intent::Default);
        assert_eq!(classify("!!??"), Intent::Default);
    }
}
