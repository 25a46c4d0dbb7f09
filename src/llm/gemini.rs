use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::prompt_builder::{self, PromptMessage, Role};
use super::MsgGenerator;
use crate::text;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Minimal request/response structs for the Gemini generateContent API.
#[derive(Serialize)]
struct GenerateContentRequest {
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Gemini-backed implementation of MsgGenerator.
pub struct GeminiMsgGenerator {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiMsgGenerator {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, model: String, base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(90))
            .build()
            .expect("failed to build HTTP client");

        GeminiMsgGenerator {
            http,
            api_key,
            model,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Endpoint URL; the API key travels as the `key` query parameter,
    /// so this must never be logged.
    fn generate_url(&self) -> String {
        format!(
            "{base}/v1/models/{model}:generateContent?key={key}",
            base = self.base_url,
            model = self.model,
            key = self.api_key
        )
    }

    /// Inner call that keeps the real failure cause. `generate` logs it
    /// and replaces it with the generic error callers see.
    fn call_generate(&self, messages: &[PromptMessage]) -> Result<String> {
        log::info!("Calling Gemini model {:?}", &self.model);

        let req = build_request(messages);

        let resp = self
            .http
            .post(self.generate_url())
            .json(&req)
            .send()
            .context("failed to send request to Gemini")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_default();
            return Err(anyhow!(
                "Gemini API error: HTTP {} - {}",
                status.as_u16(),
                text
            ));
        }

        let body: GenerateContentResponse =
            resp.json().context("failed to parse Gemini response")?;

        first_candidate_text(&body)
            .ok_or_else(|| anyhow!("No commit message was generated. Try again."))
    }
}

impl MsgGenerator for GeminiMsgGenerator {
    fn generate(&self, diff: &str, delimiter: Option<&str>) -> Result<String> {
        let messages = prompt_builder::commit_message_prompt(diff);

        match self.call_generate(&messages) {
            Ok(content) => Ok(text::trim_new_lines(&content, delimiter)),
            Err(err) => {
                log::error!("Error generating commit message: {err:#}");
                Err(anyhow!("Failed to generate commit message"))
            }
        }
    }
}

/// Map the role-tagged prompt sequence onto the Gemini wire shape: the
/// system entry becomes `systemInstruction`, assistant turns use role
/// "model", and user turns use role "user".
fn build_request(messages: &[PromptMessage]) -> GenerateContentRequest {
    let mut system_instruction = None;
    let mut contents = Vec::new();

    for message in messages {
        let content = |role: Option<&str>| Content {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: message.content.clone(),
            }],
        };

        match message.role {
            Role::System => system_instruction = Some(content(None)),
            Role::User => contents.push(content(Some("user"))),
            Role::Assistant => contents.push(content(Some("model"))),
        }
    }

    GenerateContentRequest {
        system_instruction,
        contents,
    }
}

/// Text of the first candidate, with multi-part answers concatenated.
/// `None` when the response carries no usable content.
fn first_candidate_text(resp: &GenerateContentResponse) -> Option<String> {
    let parts = &resp.candidates.first()?.content.as_ref()?.parts;

    let text: String = parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect();

    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
    use super::super::prompt_builder::commit_message_prompt;
    use super::*;
    use serde_json::json;

    #[test]
    fn request_maps_roles_to_gemini_wire_shape() {
        let messages = commit_message_prompt("diff --git a/x b/x");
        let value = serde_json::to_value(build_request(&messages)).unwrap();

        assert!(value["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("conventional commit"));

        let contents = value["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["role"], "user");
        assert_eq!(contents[2]["parts"][0]["text"], "diff --git a/x b/x");
        assert!(contents.iter().all(|c| c["role"] != "system"));
    }

    #[test]
    fn response_text_comes_from_first_candidate() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "feat: one" }], "role": "model" } },
                { "content": { "parts": [{ "text": "feat: two" }], "role": "model" } }
            ]
        }))
        .unwrap();

        assert_eq!(first_candidate_text(&resp).as_deref(), Some("feat: one"));
    }

    #[test]
    fn multipart_answer_is_concatenated() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "feat: a" }, { "text": "\nfix: b" }] } }
            ]
        }))
        .unwrap();

        assert_eq!(first_candidate_text(&resp).as_deref(), Some("feat: a\nfix: b"));
    }

    #[test]
    fn missing_content_yields_none() {
        for body in [
            json!({}),
            json!({ "candidates": [] }),
            json!({ "candidates": [{}] }),
            json!({ "candidates": [{ "content": { "parts": [] } }] }),
            json!({ "candidates": [{ "content": { "parts": [{ "text": "" }] } }] }),
        ] {
            let resp: GenerateContentResponse = serde_json::from_value(body).unwrap();
            assert!(first_candidate_text(&resp).is_none());
        }
    }

    #[test]
    fn url_embeds_model_and_key_as_query_param() {
        let generator = GeminiMsgGenerator::with_base_url(
            "secret".to_string(),
            "gemini-pro".to_string(),
            "http://localhost:9999/",
        );

        assert_eq!(
            generator.generate_url(),
            "http://localhost:9999/v1/models/gemini-pro:generateContent?key=secret"
        );
    }

    #[test]
    fn transport_failure_surfaces_generic_error() {
        // Discard port; nothing listens here, so the send fails.
        let generator = GeminiMsgGenerator::with_base_url(
            "key".to_string(),
            "gemini-pro".to_string(),
            "http://127.0.0.1:9",
        );

        let err = generator.generate("diff --git a/x b/x", None).unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate commit message");
    }
}
