use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Errors that can occur when calling the Groq API
#[derive(Debug, Error)]
pub enum GroqError {
    #[error("GROQ API key is not set")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Groq API request failed ({status}): {snippet}")]
    ApiError { status: u16, snippet: String },

    #[error("Groq API returned empty content")]
    EmptyContent,
}

/// Groq chat-completions client used for brief generation
pub struct GroqClient {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl GroqClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, model, GROQ_API_URL.to_string())
    }

    /// Mainly for tests pointing at a mock server
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key,
            model,
            base_url,
            client,
        }
    }

    /// Send one prompt and return the raw completion text
    pub async fn generate(&self, prompt: &str) -> Result<String, GroqError> {
        if self.api_key.trim().is_empty() {
            return Err(GroqError::MissingApiKey);
        }

        let body = serde_json::json!({
            "model": self.model,
            "temperature": 0.25,
            "messages": [
                {
                    "role": "system",
                    "content": "You generate influencer campaign briefs. Respond with strict JSON only, no markdown or explanation text.",
                },
                {
                    "role": "user",
                    "content": prompt,
                },
            ],
        });

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            // Truncate on char boundaries; error bodies are not always ASCII
            let snippet = if text.chars().count() > 200 {
                let head: String = text.chars().take(200).collect();
                format!("{}…", head)
            } else {
                text
            };
            return Err(GroqError::ApiError {
                status: status.as_u16(),
                snippet,
            });
        }

        let json: ChatCompletionResponse = response.json().await?;

        json.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|c| !c.is_empty())
            .ok_or(GroqError::EmptyContent)
    }
}
