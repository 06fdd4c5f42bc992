use crate::domain::error::DomainError;
use crate::domain::ports::coach_provider::CoachProvider;
use crate::domain::values::coach::{CoachMode, CoachRequest, COACH_TEMPERATURE, THINKING_BUDGET};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const FAST_MODEL: &str = "gemini-3-flash-preview";
const THINKING_MODEL: &str = "gemini-3-pro-preview";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

pub struct GeminiCoach {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
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

impl GeminiCoach {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn model_for(mode: CoachMode) -> &'static str {
        match mode {
            CoachMode::Fast => FAST_MODEL,
            CoachMode::Thinking => THINKING_MODEL,
        }
    }

    fn build_body(request: &CoachRequest) -> GenerateRequest<'_> {
        GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: request.system_instruction,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                temperature: COACH_TEMPERATURE,
                thinking_config: match request.mode {
                    CoachMode::Thinking => Some(ThinkingConfig {
                        thinking_budget: THINKING_BUDGET,
                    }),
                    CoachMode::Fast => None,
                },
            },
        }
    }

    /// Concatenated text parts of the first candidate.
    fn extract_text(response: GenerateResponse) -> String {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl CoachProvider for GeminiCoach {
    async fn generate(&self, request: &CoachRequest) -> Result<String, DomainError> {
        let model = Self::model_for(request.mode);
        let url = format!("{}/v1beta/models/{model}:generateContent", self.base_url);

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::build_body(request))
            .send()
            .await
            .map_err(|e| DomainError::Coach(format!("Gemini API error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Coach(format!("Gemini API {status}: {body}")));
        }

        let result: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("Parse error: {e}")))?;
        Ok(Self::extract_text(result))
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::coach::COACH_SYSTEM_INSTRUCTION;

    fn request(mode: CoachMode) -> CoachRequest {
        CoachRequest {
            prompt: "I lost three trades in a row".into(),
            system_instruction: COACH_SYSTEM_INSTRUCTION,
            mode,
        }
    }

    #[test]
    fn test_model_selection() {
        assert_eq!(GeminiCoach::model_for(CoachMode::Fast), "gemini-3-flash-preview");
        assert_eq!(GeminiCoach::model_for(CoachMode::Thinking), "gemini-3-pro-preview");
    }

    #[test]
    fn test_fast_body_has_no_thinking_budget() {
        let req = request(CoachMode::Fast);
        let body = serde_json::to_value(GeminiCoach::build_body(&req)).unwrap();
        assert_eq!(body["generationConfig"]["temperature"], 0.8);
        assert!(body["generationConfig"].get("thinkingConfig").is_none());
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "I lost three trades in a row");
        assert!(body["systemInstruction"].get("role").is_none());
    }

    #[test]
    fn test_thinking_body_sets_budget() {
        let req = request(CoachMode::Thinking);
        let body = serde_json::to_value(GeminiCoach::build_body(&req)).unwrap();
        assert_eq!(
            body["generationConfig"]["thinkingConfig"]["thinkingBudget"],
            15000
        );
    }

    #[test]
    fn test_extract_text() {
        let resp: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Stay "},{"text":"disciplined."}]}}]}"#,
        )
        .unwrap();
        assert_eq!(GeminiCoach::extract_text(resp), "Stay disciplined.");

        let empty: GenerateResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(GeminiCoach::extract_text(empty), "");

        let blocked: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert_eq!(GeminiCoach::extract_text(blocked), "");
    }
}
