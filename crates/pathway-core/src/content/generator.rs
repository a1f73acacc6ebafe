//! Text generation endpoint client.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{GenerationResultExt, PathwayError, Result};

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Produces text for a prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the raw generated text for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    output: String,
}

/// Generator backed by an HTTP endpoint.
///
/// Sends `POST {endpoint}` with `{"prompt": "..."}` and reads `output` from
/// the JSON reply.
#[derive(Debug, Clone)]
pub struct HttpGenerator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGenerator {
    /// Creates a generator for `endpoint` with a per-request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            return Err(PathwayError::invalid_input("generator_url").with_reason("must not be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .generation_context("Failed to build HTTP client")?;

        Ok(Self { client, endpoint })
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TextGenerator for HttpGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!("POST {} ({} prompt bytes)", self.endpoint, prompt.len());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&GenerateRequest { prompt })
            .send()
            .await
            .generation_context("Request to text generation endpoint failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PathwayError::generation(format!(
                "Endpoint returned {status}: {body}"
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .generation_context("Malformed response from text generation endpoint")?;

        Ok(body.output)
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_generate_posts_prompt_and_reads_output() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/gemini")
            .match_body(Matcher::Json(json!({ "prompt": "Say hi" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"output":"Hi there!"}"#)
            .create_async()
            .await;

        let generator =
            HttpGenerator::new(format!("{}/api/gemini", server.url()), DEFAULT_TIMEOUT).unwrap();
        let output = generator.generate("Say hi").await.unwrap();

        assert_eq!(generator.endpoint(), format!("{}/api/gemini", server.url()));
        assert_eq!(output, "Hi there!");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_reports_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/gemini")
            .with_status(500)
            .with_body("quota exceeded")
            .create_async()
            .await;

        let generator =
            HttpGenerator::new(format!("{}/api/gemini", server.url()), DEFAULT_TIMEOUT).unwrap();
        let err = generator.generate("Say hi").await.unwrap_err();

        assert!(matches!(err, PathwayError::Generation { .. }));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_generate_rejects_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/gemini")
            .with_status(200)
            .with_body(r#"{"text":"wrong field"}"#)
            .create_async()
            .await;

        let generator =
            HttpGenerator::new(format!("{}/api/gemini", server.url()), DEFAULT_TIMEOUT).unwrap();
        assert!(generator.generate("Say hi").await.is_err());
    }

    #[test]
    fn test_empty_endpoint_is_rejected() {
        assert!(matches!(
            HttpGenerator::new("  ", DEFAULT_TIMEOUT),
            Err(PathwayError::InvalidInput { .. })
        ));
    }
}
