use crate::error::{AppError, AppResult};
use handlebars::Handlebars;
use serde::Serialize;

pub const HOME_TEMPLATE: &str = "home";
pub const QUIZ_TEMPLATE: &str = "quiz";
pub const RESULTS_TEMPLATE: &str = "results";

/// Handlebars-backed view renderer. Every template and partial is embedded
/// at compile time, so registration can only fail on a malformed template.
#[derive(Clone)]
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    pub fn new() -> AppResult<Self> {
        let mut registry = Handlebars::new();
        // Strict mode turns a missing view field into a render error
        // instead of silent empty output.
        registry.set_strict_mode(true);

        register(&mut registry, "header", include_str!("../templates/header.hbs"))?;
        register(&mut registry, "footer", include_str!("../templates/footer.hbs"))?;
        register(&mut registry, HOME_TEMPLATE, include_str!("../templates/home.hbs"))?;
        register(&mut registry, QUIZ_TEMPLATE, include_str!("../templates/quiz.hbs"))?;
        register(
            &mut registry,
            RESULTS_TEMPLATE,
            include_str!("../templates/results.hbs"),
        )?;

        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> AppResult<String> {
        self.registry
            .render(name, data)
            .map_err(|e| AppError::Template(format!("failed to render {name}: {e}")))
    }
}

fn register(registry: &mut Handlebars<'static>, name: &str, source: &'static str) -> AppResult<()> {
    registry
        .register_template_string(name, source)
        .map_err(|e| AppError::Template(format!("failed to register {name}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HomeView;

    #[test]
    fn registers_and_renders_all_pages() {
        let renderer = TemplateRenderer::new().unwrap();
        let view = HomeView {
            title: "Find your park".to_string(),
            total_questions: 8,
        };

        let html = renderer.render(HOME_TEMPLATE, &view).unwrap();
        assert!(html.contains("Find your park"));
        assert!(html.contains("8"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        let renderer = TemplateRenderer::new().unwrap();
        let err = renderer
            .render("nonexistent", &serde_json::json!({}))
            .unwrap_err();
        assert!(matches!(err, AppError::Template(_)));
    }

    #[test]
    fn strict_mode_rejects_missing_fields() {
        let renderer = TemplateRenderer::new().unwrap();
        // The home template needs title and total_questions.
        let err = renderer
            .render(HOME_TEMPLATE, &serde_json::json!({"title": "x"}))
            .unwrap_err();
        assert!(matches!(err, AppError::Template(_)));
    }
}
