use crate::error::AppError;
use crate::handlers::{collect_prefixed, html, see_other, AppState, PREV_PARAM_PREFIX};
use crate::models::QuizView;
use crate::templates::QUIZ_TEMPLATE;
use actix_web::{web, HttpResponse, Result};
use parkmatch_core::AnswerSet;
use std::collections::HashMap;

/// GET /quiz: render one question with progress metadata and the carried
/// answer set re-encoded for the next hop.
pub async fn show_question(
    data: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let total = data.catalog.total_questions();

    // Missing, unparseable, or sub-1 question numbers all mean question 1.
    let number = query
        .get("question")
        .and_then(|raw| raw.parse::<usize>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(1);

    if number > total {
        return Ok(see_other(format!("/quiz?question={total}")));
    }

    let question = data
        .catalog
        .question_by_index(number - 1)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("question {number} not found")))?;

    let previous_answers = collect_prefixed(&query, PREV_PARAM_PREFIX);

    let view = QuizView::build(question, number, total, previous_answers);
    let body = data.renderer.render(QUIZ_TEMPLATE, &view)?;
    Ok(html(body))
}

/// POST /quiz: merge the submitted answer into the carried set, then
/// redirect to the next question or to the results page. No state is kept
/// server-side; the full answer history rides in the redirect URL.
pub async fn submit_answer(
    data: web::Data<AppState>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let current = form
        .get("current_question")
        .and_then(|raw| raw.parse::<usize>().ok())
        .ok_or_else(|| AppError::InvalidRequest("invalid question number".to_string()))?;

    let answer = form
        .get("answer")
        .filter(|a| !a.is_empty())
        .ok_or_else(|| AppError::InvalidRequest("no answer selected".to_string()))?;

    let mut answers = collect_prefixed(&form, PREV_PARAM_PREFIX);
    answers.insert(format!("Q{current}"), answer.clone());

    let total = data.catalog.total_questions();

    if current >= total {
        return Ok(see_other(results_url(&answers)));
    }

    Ok(see_other(next_question_url(current + 1, &answers)))
}

fn results_url(answers: &AnswerSet) -> String {
    let params: Vec<String> = answers
        .iter()
        .map(|(question_id, option_id)| {
            format!(
                "answer_{}={}",
                urlencoding::encode(question_id),
                urlencoding::encode(option_id)
            )
        })
        .collect();
    format!("/results?{}", params.join("&"))
}

fn next_question_url(next: usize, answers: &AnswerSet) -> String {
    let mut url = format!("/quiz?question={next}");
    for (question_id, option_id) in answers {
        url.push_str(&format!(
            "&prev_{}={}",
            urlencoding::encode(question_id),
            urlencoding::encode(option_id)
        ));
    }
    url
}
