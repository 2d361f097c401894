use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub questions_path: PathBuf,
    pub parks_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional TOML file, and
    /// `PARKMATCH`-prefixed environment variables. A bare `PORT` variable
    /// wins over everything else for the listen port.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("data.questions_path", "data/questions.json")?
            .set_default("data.parks_path", "data/parks.json")?;

        builder = match config_file {
            // An explicitly requested file must exist.
            Some(path) => builder.add_source(File::from(path.to_path_buf())),
            None => builder.add_source(File::with_name("parkmatch").required(false)),
        };

        builder = builder.add_source(Environment::with_prefix("PARKMATCH").separator("__"));

        let mut app_config: AppConfig = builder.build()?.try_deserialize()?;

        if let Ok(port) = env::var("PORT") {
            app_config.server.port = port
                .parse()
                .map_err(|_| ConfigError::Message(format!("invalid PORT value: {port}")))?;
        }

        Ok(app_config)
    }
}
