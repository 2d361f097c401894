use parkmatch_core::{AnswerSet, MatchOutcome, Park, Question};
use serde::Serialize;

/// Context for the landing page.
#[derive(Debug, Serialize)]
pub struct HomeView {
    pub title: String,
    pub total_questions: usize,
}

/// Context for one question page, including everything the form needs to
/// carry the accumulated answers forward.
#[derive(Debug, Serialize)]
pub struct QuizView {
    pub title: String,
    pub question: Question,
    /// 1-based question number.
    pub current_question: usize,
    pub total_questions: usize,
    /// Integer percentage: current * 100 / total.
    pub progress_percent: usize,
    pub is_last_question: bool,
    /// Every answer carried into this request, re-emitted as hidden fields.
    pub previous_answers: AnswerSet,
    /// The carried answers minus the immediately preceding question's, used
    /// for the back link so going back does not double-submit.
    pub previous_answers_except_last: AnswerSet,
    pub prev_question: usize,
    pub has_previous: bool,
}

impl QuizView {
    pub fn build(
        question: Question,
        number: usize,
        total: usize,
        previous_answers: AnswerSet,
    ) -> Self {
        let mut except_last = previous_answers.clone();
        if number > 1 {
            except_last.remove(&format!("Q{}", number - 1));
        }

        Self {
            title: format!("Question {number} of {total}"),
            question,
            current_question: number,
            total_questions: total,
            progress_percent: number * 100 / total,
            is_last_question: number == total,
            previous_answers,
            previous_answers_except_last: except_last,
            prev_question: number - 1,
            has_previous: number > 1,
        }
    }
}

/// One row of the user-versus-park trait table, precomputed as integer
/// percentages so the template needs no arithmetic.
#[derive(Debug, Serialize)]
pub struct TraitComparison {
    pub name: String,
    pub user_percent: u32,
    pub park_percent: u32,
}

/// Context for the results page.
#[derive(Debug, Serialize)]
pub struct ResultsView {
    pub title: String,
    pub park: Park,
    pub match_score: f64,
    pub top_traits: Vec<String>,
    pub trait_comparisons: Vec<TraitComparison>,
}

impl ResultsView {
    pub fn from_outcome(outcome: MatchOutcome) -> Self {
        let trait_comparisons = outcome
            .user_traits
            .iter()
            .map(|(name, user_value)| TraitComparison {
                name: name.clone(),
                user_percent: (user_value * 100.0).round() as u32,
                park_percent: (outcome.park.traits.get(name).copied().unwrap_or(0.0) * 100.0)
                    .round() as u32,
            })
            .collect();

        Self {
            title: format!("Your park match: {}", outcome.park.name),
            match_score: outcome.match_score,
            top_traits: outcome.top_traits,
            trait_comparisons,
            park: outcome.park,
        }
    }
}

/// Health endpoint payload.
#[derive(Debug, Serialize)]
pub struct ServerStatus {
    pub status: String,
    pub version: String,
    pub uptime: u64,
}
