use async_trait::async_trait;
use thiserror::Error;

use crate::config::{ChatBackend, ChatConfig};

pub mod hosted;
pub mod template;

pub use hosted::HostedResponder;
pub use template::TemplateResponder;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Model request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Model returned no generated text")]
    EmptyResponse,
    #[error("Chat backend misconfigured: {0}")]
    Config(String),
}

/// A strategy that answers one chat prompt.
#[async_trait]
pub trait ChatResponder: Send + Sync {
    fn name(&self) -> &'static str;

    async fn respond(&self, prompt: &str) -> Result<String, ChatError>;
}

pub struct ChatService {
    responder: Box<dyn ChatResponder>,
}

impl ChatService {
    pub fn new(responder: Box<dyn ChatResponder>) -> Self {
        Self { responder }
    }

    pub fn from_config(config: &ChatConfig) -> Result<Self, ChatError> {
        let responder: Box<dyn ChatResponder> = match config.backend {
            ChatBackend::Template => Box::new(TemplateResponder::new()),
            ChatBackend::Hosted => {
                let url = config
                    .model_url
                    .clone()
                    .ok_or_else(|| ChatError::Config("CHAT_MODEL_URL not set".to_string()))?;
                Box::new(HostedResponder::new(url, config.model_token.clone()))
            }
        };
        log::info!("Chat backend: {}", responder.name());
        Ok(Self::new(responder))
    }

    pub fn backend_name(&self) -> &'static str {
        self.responder.name()
    }

    pub async fn respond(&self, prompt: &str) -> Result<String, ChatError> {
        self.responder.respond(prompt).await
    }
}
