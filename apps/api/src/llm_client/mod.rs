/// LLM Client — the boundary between the timeline and the generative model.
///
/// The rest of the crate depends only on the `GenerativeBackend` trait and
/// `call_json`. `GeminiClient` is the production backend (Google Gemini REST API);
/// tests swap in their own implementations.
///
/// One attempt per call: no retry, no backoff.
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// Model used for structured text generation.
pub const TEXT_MODEL: &str = "gemini-2.5-flash";
/// Model used for image generation.
pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image";
/// Environment variable holding the credential. Read at call time.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
const FALLBACK_API_KEY_VAR: &str = "API_KEY";
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("No API key configured (set GEMINI_API_KEY)")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("LLM response contained no image")]
    NoImage,
}

/// Image bytes returned inline by the model, still base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

impl InlineImage {
    /// Embeddable `data:` URI.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// A generative text/image service.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// False when no credential is configured. Checked before any network call.
    fn is_available(&self) -> bool;

    /// Sends `prompt` with a strict response schema and returns the raw JSON text.
    async fn generate_json(&self, prompt: &str, schema: &Value) -> Result<String, LlmError>;

    /// Sends a free-form image request and returns the first inline image.
    async fn generate_image(&self, prompt: &str) -> Result<InlineImage, LlmError>;
}

/// Calls the backend and deserializes the text response as `T`.
/// Deserialization is the schema check: missing required fields fail here.
pub async fn call_json<T: DeserializeOwned>(
    backend: &dyn GenerativeBackend,
    prompt: &str,
    schema: &Value,
) -> Result<T, LlmError> {
    let text = backend.generate_json(prompt, schema).await?;
    let text = strip_json_fences(&text);
    if text.is_empty() {
        return Err(LlmError::EmptyContent);
    }
    serde_json::from_str(text).map_err(LlmError::Parse)
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    pub text: Option<String>,
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl GenerateContentResponse {
    fn parts(&self) -> impl Iterator<Item = &ResponsePart> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .into_iter()
            .flat_map(|c| c.parts.iter())
    }

    /// Concatenated text of the first candidate, if it has any.
    pub fn text(&self) -> Option<String> {
        let text: String = self.parts().filter_map(|p| p.text.as_deref()).collect();
        (!text.is_empty()).then_some(text)
    }

    /// First inline image part of the first candidate.
    pub fn first_image(&self) -> Option<InlineImage> {
        self.parts()
            .filter_map(|p| p.inline_data.as_ref())
            .find(|d| !d.data.is_empty())
            .map(|d| InlineImage {
                mime_type: d.mime_type.clone(),
                data: d.data.clone(),
            })
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Credential {
    /// Looked up in the process environment on every call.
    Environment,
    #[cfg(test)]
    Fixed(Option<String>),
}

/// Gemini REST client.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    credential: Credential,
    base_url: String,
}

impl GeminiClient {
    /// Client that reads the API key from the environment at call time.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::build(Credential::Environment)
    }

    /// Client with a fixed credential; `None` means permanently unavailable.
    #[cfg(test)]
    pub fn with_api_key(api_key: Option<String>) -> Result<Self, LlmError> {
        Self::build(Credential::Fixed(api_key))
    }

    fn build(credential: Credential) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            credential,
            base_url: GEMINI_API_BASE.to_string(),
        })
    }

    fn api_key(&self) -> Option<String> {
        let key = match &self.credential {
            Credential::Environment => std::env::var(API_KEY_VAR)
                .or_else(|_| std::env::var(FALLBACK_API_KEY_VAR))
                .ok(),
            #[cfg(test)]
            Credential::Fixed(key) => key.clone(),
        };
        key.filter(|k| !k.trim().is_empty())
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest<'_>,
    ) -> Result<GenerateContentResponse, LlmError> {
        let api_key = self.api_key().ok_or(LlmError::MissingCredential)?;
        let url = format!("{}/{}:generateContent", self.base_url, model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        debug!(model, candidates = parsed.candidates.len(), "Gemini call succeeded");
        Ok(parsed)
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    fn is_available(&self) -> bool {
        self.api_key().is_some()
    }

    async fn generate_json(&self, prompt: &str, schema: &Value) -> Result<String, LlmError> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            }),
        };
        let response = self.generate_content(TEXT_MODEL, &request).await?;
        response.text().ok_or(LlmError::EmptyContent)
    }

    async fn generate_image(&self, prompt: &str) -> Result<InlineImage, LlmError> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: None,
        };
        let response = self.generate_content(IMAGE_MODEL, &request).await?;
        response.first_image().ok_or(LlmError::NoImage)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(str::trim)
                .unwrap_or(stripped)
        }
        None => text,
    }
}
