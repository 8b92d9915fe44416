use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{ChatError, ChatResponder};

const MAX_NEW_TOKENS: u32 = 250;

#[derive(Debug, Serialize)]
struct PipelineRequest<'a> {
    inputs: &'a str,
    parameters: PipelineParameters,
}

#[derive(Debug, Serialize)]
struct PipelineParameters {
    max_new_tokens: u32,
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

/// Forwards prompts to a hosted text-generation pipeline.
pub struct HostedResponder {
    client: Client,
    url: String,
    token: Option<String>,
}

impl HostedResponder {
    pub fn new(url: String, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            url,
            token,
        }
    }
}

#[async_trait]
impl ChatResponder for HostedResponder {
    fn name(&self) -> &'static str {
        "hosted"
    }

    async fn respond(&self, prompt: &str) -> Result<String, ChatError> {
        let mut request = self.client.post(&self.url).json(&PipelineRequest {
            inputs: prompt,
            parameters: PipelineParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                return_full_text: false,
            },
        });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ChatError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let generated: Vec<GeneratedText> = response.json().await?;
        generated
            .into_iter()
            .next()
            .map(|g| g.generated_text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(ChatError::EmptyResponse)
    }
}
