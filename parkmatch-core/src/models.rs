use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A quiz question with its multiple-choice options. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Look up an option by its short code within this question.
    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

/// One answer choice and the trait scores it contributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Short code unique within the question, e.g. "A".
    pub id: String,
    pub text: String,
    /// Trait name -> raw score in [0, 5].
    pub scores: BTreeMap<String, f64>,
}

/// A national park archetype: one possible quiz outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Park {
    pub id: String,
    pub name: String,
    pub state: String,
    pub primary_group: String,
    pub secondary_groups: Vec<String>,
    /// Trait name -> normalized value in [0, 1].
    pub traits: BTreeMap<String, f64>,
    pub tags: Vec<String>,
    pub image_url: String,
    pub description: String,
}

/// Accumulated answers for one quiz attempt: question id -> chosen option id.
///
/// A `BTreeMap` keeps iteration over the set deterministic, so URL encoding
/// order and every tie-break derived from it are stable across runs.
pub type AnswerSet = BTreeMap<String, String>;

/// The computed outcome of a quiz attempt. Derived per request, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct MatchOutcome {
    pub park: Park,
    /// Normalized user trait vector in [0, 1].
    pub user_traits: BTreeMap<String, f64>,
    /// Euclidean distance between the user and park vectors; lower is better.
    pub match_score: f64,
    /// Up to three trait names on which user and park agree most closely.
    pub top_traits: Vec<String>,
}
