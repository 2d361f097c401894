use crate::error::AppError;
use crate::handlers::{collect_prefixed, html, see_other, AppState, ANSWER_PARAM_PREFIX};
use crate::models::ResultsView;
use crate::templates::RESULTS_TEMPLATE;
use actix_web::{web, HttpResponse, Result};
use parkmatch_core::compute_match;
use std::collections::HashMap;

/// GET /results: run the matching engine over the answers carried in the
/// query string and render the matched park. Arriving with no answers just
/// sends the user back to the landing page.
pub async fn show_results(
    data: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let answers = collect_prefixed(&query, ANSWER_PARAM_PREFIX);

    if answers.is_empty() {
        return Ok(see_other("/".to_string()));
    }

    let outcome = compute_match(&data.catalog, &answers)?;

    let view = ResultsView::from_outcome(outcome);
    let body = data.renderer.render(RESULTS_TEMPLATE, &view)?;
    Ok(html(body))
}
