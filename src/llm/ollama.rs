use anyhow::{Context, Result, anyhow};
use musli::json;
use musli::{Decode, Encode};
use reqwest::blocking::Client;
use std::time::Duration;

use super::{GENERATION, Summarizer, prompt_builder};

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3.2:1b";

#[derive(Debug, Encode, Decode)]
struct OllamaMessage {
    role: String,
    content: String,
}

#[derive(Debug, Encode, Decode)]
struct OllamaChatResponse {
    message: OllamaMessage,
}

/// Request structs we encode with musli::json.
#[derive(Debug, Encode)]
struct ChatOptions {
    num_predict: u32,
    temperature: f32,
    top_k: u32,
    seed: u32,
}

#[derive(Debug, Encode)]
struct ChatRequest {
    model: String,
    stream: bool,
    messages: Vec<OllamaMessage>,
    options: ChatOptions,
}

/// Synchronous client for a local Ollama server using /api/chat.
pub struct OllamaSummarizer {
    http: Client,
    base_url: String,
    model: String,
}

impl OllamaSummarizer {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        // Cold model loads can take a while on first use.
        let http = Client::builder()
            .timeout(Duration::from_secs(180))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    fn request_body(&self, prompt: &str) -> Result<String> {
        let prompts = prompt_builder::chat_prompt(prompt);
        let req = ChatRequest {
            model: self.model.clone(),
            stream: false,
            messages: vec![
                OllamaMessage {
                    role: "system".to_string(),
                    content: prompts.system,
                },
                OllamaMessage {
                    role: "user".to_string(),
                    content: prompts.user,
                },
            ],
            options: ChatOptions {
                num_predict: GENERATION.max_new_tokens,
                temperature: if GENERATION.sample { 0.8 } else { 0.0 },
                top_k: if GENERATION.sample { 40 } else { 1 },
                seed: 0,
            },
        };

        json::to_string(&req).map_err(|e| anyhow!("Failed to encode Ollama JSON request: {e}"))
    }
}

fn parse_chat_response(body: &str) -> Result<String> {
    let parsed: OllamaChatResponse =
        json::from_str(body).map_err(|e| anyhow!("Failed to decode Ollama JSON: {e}"))?;
    Ok(parsed.message.content.trim().to_string())
}

impl Summarizer for OllamaSummarizer {
    fn summarize(&self, prompt: &str) -> Result<String> {
        let body = self.request_body(prompt)?;
        log::trace!("Ollama request body: {body}");

        let url = format!("{}/api/chat", self.base_url);
        log::info!("Calling Ollama model {:?} at {url}", self.model);

        let resp = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|e| anyhow!("Error calling Ollama at {url}: {e}"))?
            .error_for_status()
            .map_err(|e| anyhow!("Ollama HTTP error from {url}: {e}"))?;

        let text = resp
            .text()
            .map_err(|e| anyhow!("Failed to read Ollama response body: {e}"))?;
        log::trace!("Ollama raw JSON response: {text}");

        parse_chat_response(&text)
    }
}
