//! Frontend Configuration
//!
//! Resolved once at startup from values baked in at build time:
//! `TODO_API_URL` and `TODO_OWNER_ID`.

use todo_engine::EngineConfig;

const DEFAULT_API_URL: &str = "https://mate.academy/students-api";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the todo service (without `/todos`)
    pub api_url: String,
    pub engine: EngineConfig,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        let config = Self::resolve(option_env!("TODO_API_URL"), option_env!("TODO_OWNER_ID"));
        tracing::info!(
            api_url = %config.api_url,
            owner_id = config.engine.owner_id,
            "configuration resolved"
        );
        config
    }

    fn resolve(api_url: Option<&str>, owner_id: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_string();

        let mut engine = EngineConfig::default();
        if let Some(raw) = owner_id {
            match raw.trim().parse() {
                Ok(id) => engine.owner_id = id,
                Err(_) => tracing::warn!(raw, "TODO_OWNER_ID is not a number, using the default owner"),
            }
        }

        Self { api_url, engine }
    }
}
