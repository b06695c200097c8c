use reqwest::header::{ACCEPT, CONTENT_TYPE};
use suggestion_logging::{suggest_debug, suggest_warn};

use crate::parse::snippet;
use crate::wire::{ChatCompletionRequest, ChatCompletionResponse};
use crate::{ClientSettings, FailureKind, SuggestionError};

/// The remote completion endpoint, reduced to "instruction in, text out".
#[async_trait::async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, instruction: &str) -> Result<String, SuggestionError>;
}

/// OpenAI-compatible chat-completions endpoint over reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestCompletionService {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestCompletionService {
    pub fn new(settings: ClientSettings) -> Result<Self, SuggestionError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SuggestionError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl CompletionService for ReqwestCompletionService {
    async fn complete(&self, instruction: &str) -> Result<String, SuggestionError> {
        let api_key = self.settings.api_key.as_deref().ok_or_else(|| {
            SuggestionError::new(
                FailureKind::MissingCredential,
                "SUGGEST_API_KEY is not configured",
            )
        })?;

        let request = ChatCompletionRequest::single_turn(&self.settings.model, instruction);
        let body = serde_json::to_vec(&request).map_err(|err| {
            SuggestionError::new(FailureKind::Network, format!("encode request: {err}"))
        })?;

        let url = self.settings.completions_url();
        suggest_debug!(
            "POST {} model={} instruction_len={}",
            url,
            self.settings.model,
            instruction.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = match response.bytes().await {
                Ok(bytes) => snippet(&String::from_utf8_lossy(&bytes)),
                Err(_) => String::new(),
            };
            suggest_warn!("completion endpoint answered {}", status);
            return Err(SuggestionError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("{status}; body: {detail}"),
            ));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes).map_err(|err| {
            SuggestionError::new(
                FailureKind::MalformedResponse,
                format!(
                    "completion envelope: {err}; body: {}",
                    snippet(&String::from_utf8_lossy(&bytes))
                ),
            )
        })?;

        parsed.into_first_content().ok_or_else(|| {
            SuggestionError::new(
                FailureKind::MalformedResponse,
                "completion carried no message content",
            )
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SuggestionError {
    if err.is_timeout() {
        return SuggestionError::new(FailureKind::Timeout, err.to_string());
    }
    SuggestionError::new(FailureKind::Network, err.to_string())
}
