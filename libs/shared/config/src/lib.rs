use std::env;
use tracing::warn;

const DEFAULT_SEARCH_API_URL: &str = "https://motor-busqueda-rfcjnvenka-uk.a.run.app";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub search_api_url: String,
    pub doctor_search_path: String,
    pub semantic_search_path: String,
    pub metadata_path: String,
    pub medicine_search_path: String,
    pub server_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_api_url: DEFAULT_SEARCH_API_URL.to_string(),
            doctor_search_path: "/search/busqueda_medicos".to_string(),
            semantic_search_path: "/search/busqueda_semantica".to_string(),
            metadata_path: "/search/metadata".to_string(),
            medicine_search_path: "/search/busqueda_medicamentos".to_string(),
            server_port: 3000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            search_api_url: env::var("SEARCH_API_URL")
                .unwrap_or_else(|_| {
                    warn!("SEARCH_API_URL not set, using default");
                    defaults.search_api_url.clone()
                }),
            doctor_search_path: env::var("DOCTOR_SEARCH_PATH")
                .unwrap_or(defaults.doctor_search_path),
            semantic_search_path: env::var("SEMANTIC_SEARCH_PATH")
                .unwrap_or(defaults.semantic_search_path),
            metadata_path: env::var("METADATA_PATH")
                .unwrap_or(defaults.metadata_path),
            medicine_search_path: env::var("MEDICINE_SEARCH_PATH")
                .unwrap_or(defaults.medicine_search_path),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|port| match port.parse() {
                    Ok(port) => Some(port),
                    Err(_) => {
                        warn!("SERVER_PORT '{}' is not a valid port, using default", port);
                        None
                    }
                })
                .unwrap_or(defaults.server_port),
        };

        if !config.is_configured() {
            warn!("Search API not configured - every search will return empty results");
        }

        config
    }

    /// Builds a config pointing every collaborator path at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            search_api_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.search_api_url.is_empty()
            && self.search_api_url.starts_with("http")
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.search_api_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = AppConfig::with_base_url("http://localhost:8080/");
        assert_eq!(
            config.endpoint(&config.doctor_search_path),
            "http://localhost:8080/search/busqueda_medicos"
        );
    }

    #[test]
    fn test_is_configured() {
        assert!(AppConfig::default().is_configured());
        assert!(!AppConfig::with_base_url("").is_configured());
        assert!(!AppConfig::with_base_url("not-a-url").is_configured());
    }
}
