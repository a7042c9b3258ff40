use serde::{Deserialize, Serialize};

const DEFAULT_BACKEND_URL: &str = "http://localhost:4000/api";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Socios por página en el listado
    pub items_per_page: usize,
    /// Segundos que el kiosco muestra el resultado del check-in
    pub check_in_result_seconds: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            items_per_page: 10,
            check_in_result_seconds: 5,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(normalize_base_url)
                .unwrap_or(defaults.backend_url),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            items_per_page: option_env!("ITEMS_PER_PAGE")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.items_per_page),
            check_in_result_seconds: option_env!("CHECK_IN_RESULT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.check_in_result_seconds),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log efectivo para wasm-logger
    pub fn log_level(&self) -> log::Level {
        match (self.enable_logging, self.is_production()) {
            (false, _) => log::Level::Error,
            (true, true) => log::Level::Info,
            (true, false) => log::Level::Debug,
        }
    }
}

/// Quita la barra final para poder concatenar rutas "/clients"
fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
