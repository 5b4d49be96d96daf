use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use quiz_core::model::Question;

use super::prompt::{SYSTEM_INSTRUCTION, build_prompt, response_schema};
use super::validate::parse_questions;
use super::{QuestionSupplier, SupplyRequest};
use crate::error::SupplyError;

const API_KEY_VAR: &str = "QUIZ_AI_API_KEY";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct SupplierConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl SupplierConfig {
    /// Read the supplier configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `SupplyError::Unconfigured` when `QUIZ_AI_API_KEY` is missing or blank.
    pub fn from_env() -> Result<Self, SupplyError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, with a custom variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `SupplyError::Unconfigured` when the API key is missing or blank.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SupplyError> {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(SupplyError::Unconfigured(API_KEY_VAR))?;
        let base_url = lookup("QUIZ_AI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let model = lookup("QUIZ_AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into());
        let timeout_secs = lookup("QUIZ_AI_TIMEOUT_SECS")
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Ok(Self {
            base_url,
            api_key,
            model,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// `QuestionSupplier` backed by the Gemini `generateContent` API.
#[derive(Clone)]
pub struct GeminiSupplier {
    client: Client,
    config: SupplierConfig,
}

impl GeminiSupplier {
    /// # Errors
    ///
    /// Returns `SupplyError::Unconfigured` when the environment lacks an API key.
    pub fn from_env() -> Result<Self, SupplyError> {
        Self::new(SupplierConfig::from_env()?)
    }

    /// # Errors
    ///
    /// Returns `SupplyError::Unknown` if the HTTP client cannot be built.
    pub fn new(config: SupplierConfig) -> Result<Self, SupplyError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| SupplyError::Unknown(err.to_string()))?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, SupplyError> {
        let payload = GenerateRequest {
            system_instruction: InstructionContent {
                parts: vec![TextPart {
                    text: SYSTEM_INSTRUCTION,
                }],
            },
            contents: vec![UserContent {
                role: "user",
                parts: vec![TextPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        let response = self
            .client
            .post(self.config.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    tracing::debug!(error = %err, %status, "could not read error response body");
                    String::new()
                }
            };
            return Err(classify_status(status, &body));
        }

        let body: GenerateResponse = response.json().await.map_err(classify_transport)?;
        candidate_text(body)
            .ok_or_else(|| SupplyError::Malformed("response contained no candidate text".into()))
    }
}

#[async_trait]
impl QuestionSupplier for GeminiSupplier {
    async fn supply(&self, request: &SupplyRequest) -> Result<Vec<Question>, SupplyError> {
        tracing::debug!(
            topic = %request.topic(),
            count = request.count(),
            difficulty = %request.difficulty(),
            model = %self.config.model,
            "requesting quiz questions"
        );
        let prompt = build_prompt(request);
        let result = match self.generate(&prompt).await {
            Ok(text) => parse_questions(&text),
            Err(err) => Err(err),
        };
        match result {
            Ok(questions) => {
                tracing::debug!(received = questions.len(), "quiz questions ready");
                Ok(questions)
            }
            Err(err) => {
                tracing::error!(error = %err, "generating quiz questions failed");
                Err(err)
            }
        }
    }
}

//
// ─── ERROR CLASSIFICATION ──────────────────────────────────────────────────────
//

const MAX_LOGGED_BODY: usize = 300;

fn classify_status(status: StatusCode, body: &str) -> SupplyError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => SupplyError::RateLimited,
        StatusCode::INTERNAL_SERVER_ERROR
        | StatusCode::BAD_GATEWAY
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::GATEWAY_TIMEOUT => SupplyError::ServiceUnavailable(format!("status {status}")),
        _ => {
            let excerpt: String = body.chars().take(MAX_LOGGED_BODY).collect();
            SupplyError::Unknown(format!("status {status}: {excerpt}"))
        }
    }
}

fn classify_transport(err: reqwest::Error) -> SupplyError {
    if err.is_timeout() || err.is_connect() {
        SupplyError::ServiceUnavailable(err.to_string())
    } else if err.is_decode() {
        SupplyError::Malformed(err.to_string())
    } else {
        SupplyError::Unknown(err.to_string())
    }
}

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: InstructionContent<'a>,
    contents: Vec<UserContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct InstructionContent<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct UserContent<'a> {
    role: &'static str,
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

fn candidate_text(body: GenerateResponse) -> Option<String> {
    let content = body.candidates.into_iter().next()?.content?;
    let text: String = content
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
