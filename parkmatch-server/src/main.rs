use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::{Arg, Command};
use parkmatch_core::Catalog;
use parkmatch_server::config::AppConfig;
use parkmatch_server::error::AppResult;
use parkmatch_server::handlers::AppState;
use parkmatch_server::routes::configure_routes;
use parkmatch_server::templates::TemplateRenderer;
use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[actix_web::main]
async fn main() -> AppResult<()> {
    let matches = Command::new("parkmatch-server")
        .version(env!("CARGO_PKG_VERSION"))
        .about("parkmatch - national park personality quiz server")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to configuration file")
                .value_name("FILE"),
        )
        .get_matches();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("parkmatch_server=info".parse().unwrap()))
        .init();

    tracing::info!("Starting parkmatch server");

    let config_file = matches.get_one::<String>("config").map(Path::new);
    let config = AppConfig::load(config_file)?;

    tracing::info!("Loading quiz catalog");
    let catalog = match Catalog::load(&config.data.questions_path, &config.data.parks_path) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            tracing::error!("Failed to load quiz catalog: {e}");
            return Err(e.into());
        }
    };

    let renderer = match TemplateRenderer::new() {
        Ok(renderer) => renderer,
        Err(e) => {
            tracing::error!("Failed to set up templates: {e}");
            return Err(e);
        }
    };

    let app_state = web::Data::new(AppState {
        catalog,
        renderer,
        start_time: SystemTime::now(),
    });

    let server_addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Starting HTTP server on http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await?;

    Ok(())
}
