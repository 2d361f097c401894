#![allow(dead_code)] // each test binary compiles this module separately

use actix_web::web;
use parkmatch_core::{AnswerOption, Catalog, Park, Question};
use parkmatch_server::handlers::AppState;
use parkmatch_server::templates::TemplateRenderer;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::SystemTime;

fn option(id: &str, text: &str, scores: &[(&str, f64)]) -> AnswerOption {
    AnswerOption {
        id: id.to_string(),
        text: text.to_string(),
        scores: scores
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect(),
    }
}

fn question(id: &str, prompt: &str, options: Vec<AnswerOption>) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options,
    }
}

fn park(id: &str, name: &str, traits: &[(&str, f64)]) -> Park {
    Park {
        id: id.to_string(),
        name: name.to_string(),
        state: "Test State".to_string(),
        primary_group: "mountain".to_string(),
        secondary_groups: vec!["forest".to_string()],
        traits: traits
            .iter()
            .map(|(n, v)| (n.to_string(), *v))
            .collect::<BTreeMap<String, f64>>(),
        tags: vec!["testing".to_string()],
        image_url: format!("/images/{id}.jpg"),
        description: format!("{name} description."),
    }
}

/// A three-question, two-park catalog small enough to reason about in
/// assertions. "Quiet Hollow" sits at low energy, "Summit Rush" at high.
pub fn test_catalog() -> Catalog {
    Catalog::from_parts(
        vec![
            question(
                "Q1",
                "How do you like to start a day off?",
                vec![
                    option("A", "Early and loud", &[("energy", 5.0)]),
                    option("B", "Slow and quiet", &[("energy", 1.0), ("solitude", 4.0)]),
                ],
            ),
            question(
                "Q2",
                "Pick a weekend plan.",
                vec![
                    option("A", "Summit push", &[("energy", 5.0), ("adventure", 5.0)]),
                    option("B", "Reading by a lake", &[("solitude", 5.0)]),
                ],
            ),
            question(
                "Q3",
                "Choose a soundscape.",
                vec![
                    option("A", "Rapids", &[("adventure", 4.0), ("energy", 4.0)]),
                    option("B", "Wind", &[("solitude", 4.0)]),
                ],
            ),
        ],
        vec![
            park(
                "quiet-hollow",
                "Quiet Hollow",
                &[("energy", 0.1), ("solitude", 0.9), ("adventure", 0.2)],
            ),
            park(
                "summit-rush",
                "Summit Rush",
                &[("energy", 0.95), ("adventure", 0.9), ("solitude", 0.1)],
            ),
        ],
    )
}

/// Application state over the standard test catalog.
pub fn test_state() -> web::Data<AppState> {
    state_with(test_catalog())
}

pub fn state_with(catalog: Catalog) -> web::Data<AppState> {
    web::Data::new(AppState {
        catalog: Arc::new(catalog),
        renderer: TemplateRenderer::new().expect("templates must register"),
        start_time: SystemTime::now(),
    })
}
