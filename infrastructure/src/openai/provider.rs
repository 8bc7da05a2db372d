//! OpenAI provider implementation.

use crate::openai::api::{FunctionTool, ResponsesRequest, classify_output_unit};
use async_trait::async_trait;
use intent_application::ports::llm_provider::{LlmProvider, ModelOutput, ProviderError};
use intent_domain::{Conversation, ToolDescriptor};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// [`LlmProvider`] adapter for the OpenAI Responses API.
pub struct OpenAiProvider {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn infer(
        &self,
        conversation: &Conversation,
        tools: &[ToolDescriptor],
    ) -> Result<ModelOutput, ProviderError> {
        let url = format!("{}/responses", self.config.base_url);

        let input = serde_json::to_string(conversation.turns())
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let body = ResponsesRequest {
            model: self.config.model.clone(),
            input,
            tools: tools.iter().map(FunctionTool::from_descriptor).collect(),
        };

        debug!(
            "POST {} (model {}, {} turns, {} tools)",
            url,
            self.config.model,
            conversation.len(),
            tools.len()
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => ProviderError::Credential(body),
                429 => ProviderError::RateLimited(body),
                _ => ProviderError::Rejected {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        let reply: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        let first_unit = reply
            .get("output")
            .and_then(|v| v.as_array())
            .and_then(|units| units.first())
            .ok_or_else(|| {
                ProviderError::MalformedResponse("response carried no output units".to_string())
            })?;

        Ok(classify_output_unit(first_unit))
    }
}
