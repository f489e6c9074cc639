//! Scripted keyword responder for the chat feature
//!
//! Stands in for a live AI backend: a message is answered by the first rule
//! in an ordered table whose any keyword appears in the lowercased message,
//! falling back to a fixed answer directing the user to a human. Stateless
//! and total — every input, including the empty string, yields an answer.

use crate::config::{ChatConfig, ChatRule};

/// Keyword-to-answer mapping backing the chat endpoint
pub struct Responder {
    rules: Vec<ChatRule>,
    fallback: String,
}

impl Responder {
    /// Build a responder from a rule table and fallback answer.
    ///
    /// Keywords are normalized to lowercase here so `respond` only has to
    /// lowercase the message.
    pub fn new(rules: Vec<ChatRule>, fallback: String) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| ChatRule {
                keywords: rule.keywords.iter().map(|k| k.to_lowercase()).collect(),
                answer: rule.answer,
            })
            .collect();

        Self { rules, fallback }
    }

    /// Build a responder from the chat configuration section
    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(config.rules.clone(), config.fallback.clone())
    }

    /// Answer a free-text message.
    ///
    /// First matching rule wins, in table order; no scoring and no
    /// combination of partial matches.
    pub fn respond(&self, message: &str) -> &str {
        let message = message.to_lowercase();

        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| message.contains(k.as_str())))
            .map(|rule| rule.answer.as_str())
            .unwrap_or(&self.fallback)
    }

    /// The fallback answer returned when no rule matches
    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::from_config(&ChatConfig::default())
    }
}
