use crate::error::AppError;
use crate::handlers::html;
use crate::models::{HomeView, ServerStatus};
use crate::templates::{TemplateRenderer, HOME_TEMPLATE};
use actix_web::{web, HttpResponse, Result};
use parkmatch_core::Catalog;
use std::sync::Arc;
use std::time::SystemTime;

/// Shared per-process state. The catalog is read-only after startup, so
/// handlers share it behind an `Arc` with no locking.
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub renderer: TemplateRenderer,
    pub start_time: SystemTime,
}

pub async fn index(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let view = HomeView {
        title: "Find your national park".to_string(),
        total_questions: data.catalog.total_questions(),
    };

    let body = data.renderer.render(HOME_TEMPLATE, &view)?;
    Ok(html(body))
}

pub async fn health_check(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let uptime = data
        .start_time
        .elapsed()
        .map_err(|e| AppError::Internal(format!("Failed to calculate uptime: {e}")))?
        .as_secs();

    let status = ServerStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime,
    };

    Ok(HttpResponse::Ok().json(status))
}
