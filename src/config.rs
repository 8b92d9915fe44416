use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const ITINERARY_API_BASE: &str = "https://generativelanguage.googleapis.com";
const ITINERARY_MODEL: &str = "gemini-1.5-flash";
const ITINERARY_TIMEOUT_SECS: u64 = 30;
const SEARCH_DELAY_MS: u64 = 1500;
const DEFAULT_JWT_SECRET: &str = "default_secret";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("Unknown chat backend '{0}', expected 'template' or 'hosted'")]
    UnknownChatBackend(String),
    #[error("CHAT_MODEL_URL must be set when CHAT_BACKEND=hosted")]
    MissingChatModelUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatBackend {
    Template,
    Hosted,
}

impl FromStr for ChatBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "template" => Ok(ChatBackend::Template),
            "hosted" => Ok(ChatBackend::Hosted),
            other => Err(ConfigError::UnknownChatBackend(other.to_string())),
        }
    }
}

impl ChatBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatBackend::Template => "template",
            ChatBackend::Hosted => "hosted",
        }
    }
}

/// Settings for the generative text endpoint that writes itineraries.
#[derive(Debug, Clone)]
pub struct ItineraryApiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub backend: ChatBackend,
    pub model_url: Option<String>,
    pub model_token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub itinerary_api: ItineraryApiConfig,
    pub chat: ChatConfig,
    pub jwt_secret: String,
    /// Pause before a search or login answers, mimicking the booking round trip.
    pub search_delay: Duration,
    pub destinations_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            environment: "development".to_string(),
            itinerary_api: ItineraryApiConfig {
                api_key: None,
                base_url: ITINERARY_API_BASE.to_string(),
                model: ITINERARY_MODEL.to_string(),
                timeout: Duration::from_secs(ITINERARY_TIMEOUT_SECS),
            },
            chat: ChatConfig {
                backend: ChatBackend::Template,
                model_url: None,
                model_token: None,
            },
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            search_delay: Duration::from_millis(SEARCH_DELAY_MS),
            destinations_file: None,
        }
    }
}

impl AppConfig {
    /// Build the configuration from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let chat_backend = match non_empty_var("CHAT_BACKEND") {
            Some(value) => value.parse()?,
            None => defaults.chat.backend.clone(),
        };
        let chat_model_url = non_empty_var("CHAT_MODEL_URL");
        if chat_backend == ChatBackend::Hosted && chat_model_url.is_none() {
            return Err(ConfigError::MissingChatModelUrl);
        }

        Ok(Self {
            host: non_empty_var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", "port number")?.unwrap_or(defaults.port),
            environment: non_empty_var("RUST_ENV").unwrap_or(defaults.environment),
            itinerary_api: ItineraryApiConfig {
                api_key: non_empty_var("ITINERARY_API_KEY"),
                base_url: non_empty_var("ITINERARY_API_BASE")
                    .unwrap_or(defaults.itinerary_api.base_url),
                model: non_empty_var("ITINERARY_MODEL").unwrap_or(defaults.itinerary_api.model),
                timeout: parse_var("ITINERARY_TIMEOUT_SECS", "number of seconds")?
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.itinerary_api.timeout),
            },
            chat: ChatConfig {
                backend: chat_backend,
                model_url: chat_model_url,
                model_token: non_empty_var("CHAT_MODEL_TOKEN"),
            },
            jwt_secret: non_empty_var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            search_delay: parse_var("SEARCH_DELAY_MS", "number of milliseconds")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.search_delay),
            destinations_file: non_empty_var("DESTINATIONS_FILE").map(PathBuf::from),
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_var<T: FromStr>(
    name: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    match non_empty_var(name) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                name,
                expected,
                value,
            }),
        None => Ok(None),
    }
}
