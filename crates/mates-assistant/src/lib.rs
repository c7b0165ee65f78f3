//! BloodMates assistant
//!
//! A rule-gated conversational helper. Input is classified against a
//! fixed keyword allow-list before any network call is made: messages
//! off the list get the canned assistant reply locally; messages on the
//! list are forwarded, with the rolling transcript, to the generative
//! endpoint.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default generative endpoint base URL
pub const GENERATIVE_API: &str = "https://generativelanguage.googleapis.com";

/// Model path used for content generation
const MODEL_PATH: &str = "/v1beta/models/gemini-pro:generateContent";

/// The keyword allow-list gating outbound calls. Matching is
/// case-insensitive substring. The list is carried over verbatim from
/// the deployed gate, misspelling included, since changing it would
/// change which messages reach the endpoint.
pub const KEYWORDS: &[&str] = &[
    "blood",
    "sugar",
    "pressure",
    "lipid profile",
    "cholesterol",
    "dibaties",
];

/// Reply used for messages that do not pass the gate, carried over
/// verbatim like the keyword list
pub const DEFAULT_REPLY: &str =
    "I am your BloodMates assistant !! Ask me anything on your health and Blood \u{1FA78}\u{1FA78}";

/// Whether a message warrants a call to the external endpoint
pub fn needs_external_call(text: &str) -> bool {
    let text = text.to_lowercase();
    KEYWORDS.iter().any(|keyword| text.contains(keyword))
}

/// Speaker of a chat turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One fragment of a turn's content
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPart {
    pub text: String,
}

/// One turn of the rolling transcript
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub parts: Vec<ChatPart>,
}

impl ChatTurn {
    /// A user turn with a single text part
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            parts: vec![ChatPart { text: text.into() }],
        }
    }

    /// A model turn with a single text part
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            parts: vec![ChatPart { text: text.into() }],
        }
    }

    /// First text part, empty if none
    pub fn text(&self) -> &str {
        self.parts.first().map(|p| p.text.as_str()).unwrap_or("")
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: &'a [ChatTurn],
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ChatTurn,
}

/// Assistant error; surfaced to the user as a retryable message
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    /// The endpoint could not be reached or answered malformed content
    #[error("assistant request failed: {0}")]
    Request(String),
    /// The endpoint answered with a non-success status
    #[error("assistant endpoint returned HTTP status {0}")]
    Status(u16),
    /// The endpoint returned no candidate reply
    #[error("assistant returned no reply")]
    EmptyReply,
}

/// Client for the generative endpoint plus the keyword gate
pub struct Assistant {
    client: Client,
    base_url: String,
    api_key: String,
}

impl Assistant {
    /// Create an assistant against the default endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(GENERATIVE_API, api_key)
    }

    /// Create an assistant against a custom endpoint (tests, proxies)
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Produce the model reply for a transcript whose last turn is the
    /// user's message. Off-list messages never leave the process.
    pub async fn reply(&self, transcript: &[ChatTurn]) -> Result<ChatTurn, AssistantError> {
        let last_user_text = transcript
            .iter()
            .rev()
            .find(|t| t.role == ChatRole::User)
            .map(ChatTurn::text)
            .unwrap_or("");

        if !needs_external_call(last_user_text) {
            debug!("message off the keyword list, using canned reply");
            return Ok(ChatTurn::model(DEFAULT_REPLY));
        }

        self.generate(transcript).await
    }

    async fn generate(&self, transcript: &[ChatTurn]) -> Result<ChatTurn, AssistantError> {
        let url = format!("{}{}?key={}", self.base_url, MODEL_PATH, self.api_key);

        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest {
                contents: transcript,
            })
            .send()
            .await
            .map_err(|e| AssistantError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssistantError::Status(status.as_u16()));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::Request(e.to_string()))?;

        body.candidates
            .into_iter()
            .next()
            .map(|c| ChatTurn::model(c.content.text()))
            .filter(|turn| !turn.text().is_empty())
            .ok_or(AssistantError::EmptyReply)
    }
}
