// Main handlers (landing page and health)
pub mod main_handlers;
pub use main_handlers::AppState;

// Quiz flow handlers
pub mod quiz_handlers;

// Results handlers
pub mod results_handlers;

use actix_web::http::header;
use actix_web::HttpResponse;
use parkmatch_core::AnswerSet;
use std::collections::HashMap;

/// Query parameter prefix carrying answers between question requests.
pub(crate) const PREV_PARAM_PREFIX: &str = "prev_";

/// Query parameter prefix carrying answers into the results request.
pub(crate) const ANSWER_PARAM_PREFIX: &str = "answer_";

/// Collect `<prefix><question_id>=<option_id>` parameters into an answer
/// set. Duplicate question ids resolve last-write-wins.
pub(crate) fn collect_prefixed(params: &HashMap<String, String>, prefix: &str) -> AnswerSet {
    params
        .iter()
        .filter_map(|(key, value)| {
            key.strip_prefix(prefix)
                .map(|question_id| (question_id.to_string(), value.clone()))
        })
        .collect()
}

pub(crate) fn see_other(location: String) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}
