//! Centralized route configuration for the parkmatch server.
//!
//! Both the binary and the integration tests build their `App` from this
//! function, so the routing table is exercised exactly as deployed.

use crate::handlers::{main_handlers, quiz_handlers, results_handlers};
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(main_handlers::index))
        .route("/health", web::get().to(main_handlers::health_check))
        .route("/quiz", web::get().to(quiz_handlers::show_question))
        .route("/quiz", web::post().to(quiz_handlers::submit_answer))
        .route("/results", web::get().to(results_handlers::show_results));
}
