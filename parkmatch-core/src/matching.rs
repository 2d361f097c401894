use crate::catalog::Catalog;
use crate::models::{AnswerSet, MatchOutcome};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("no parks loaded")]
    NoParksLoaded,

    #[error("no matching park found")]
    NoMatchingPark,
}

/// Raw option scores range over [0, MAX_RAW_SCORE].
const MAX_RAW_SCORE: f64 = 5.0;

const TOP_TRAIT_LIMIT: usize = 3;

/// Find the park whose trait vector lies closest to the profile implied by
/// the user's answers.
///
/// Unknown question or option identifiers contribute nothing; they are
/// skipped rather than rejected, so a stale or hand-crafted answer set still
/// produces a result.
pub fn compute_match(catalog: &Catalog, answers: &AnswerSet) -> Result<MatchOutcome, MatchError> {
    let parks = catalog.parks();
    if parks.is_empty() {
        return Err(MatchError::NoParksLoaded);
    }

    let user_traits = accumulate_user_traits(catalog, answers);

    let mut best: Option<(usize, f64)> = None;
    for (index, park) in parks.iter().enumerate() {
        let distance = trait_distance(&user_traits, &park.traits);
        // Strict improvement only: ties keep the earlier catalog entry.
        let improves = match best {
            Some((_, best_distance)) => distance < best_distance,
            None => distance < f64::MAX,
        };
        if improves {
            best = Some((index, distance));
        }
    }

    let (index, match_score) = best.ok_or(MatchError::NoMatchingPark)?;
    let park = &parks[index];
    let top_traits = top_traits(&user_traits, &park.traits, TOP_TRAIT_LIMIT);

    Ok(MatchOutcome {
        park: park.clone(),
        user_traits,
        match_score,
        top_traits,
    })
}

/// Fold every recognized answer into a normalized trait vector: per trait,
/// the mean of contributed raw scores rescaled from [0, 5] to [0, 1].
/// Traits with no contributions are absent, not zero.
fn accumulate_user_traits(catalog: &Catalog, answers: &AnswerSet) -> BTreeMap<String, f64> {
    let mut sums: BTreeMap<String, f64> = BTreeMap::new();
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();

    for (question_id, option_id) in answers {
        let Some(question) = catalog.question_by_id(question_id) else {
            continue;
        };
        let Some(option) = question.option(option_id) else {
            continue;
        };

        for (trait_name, score) in &option.scores {
            *sums.entry(trait_name.clone()).or_insert(0.0) += score;
            *counts.entry(trait_name.clone()).or_insert(0) += 1;
        }
    }

    sums.into_iter()
        .map(|(trait_name, total)| {
            let count = counts[&trait_name] as f64;
            (trait_name, total / count / MAX_RAW_SCORE)
        })
        .collect()
}

/// Euclidean distance over the union of trait names; a trait absent from
/// either vector counts as 0.
fn trait_distance(user: &BTreeMap<String, f64>, park: &BTreeMap<String, f64>) -> f64 {
    let names: BTreeSet<&str> = user.keys().chain(park.keys()).map(String::as_str).collect();

    let sum_squares: f64 = names
        .into_iter()
        .map(|name| {
            let user_value = user.get(name).copied().unwrap_or(0.0);
            let park_value = park.get(name).copied().unwrap_or(0.0);
            let diff = user_value - park_value;
            diff * diff
        })
        .sum();

    sum_squares.sqrt()
}

/// Rank traits present in both vectors by similarity = 1 - |user - park|,
/// unclamped. Equal similarities fall back to lexicographic name order.
fn top_traits(
    user: &BTreeMap<String, f64>,
    park: &BTreeMap<String, f64>,
    limit: usize,
) -> Vec<String> {
    let mut ranked: Vec<(String, f64)> = user
        .iter()
        .filter_map(|(name, user_value)| {
            park.get(name)
                .map(|park_value| (name.clone(), 1.0 - (user_value - park_value).abs()))
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked.truncate(limit);

    ranked.into_iter().map(|(name, _)| name).collect()
}
