// src/core/service_client.rs
//! HTTP client for the resume analysis service

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use tracing::{error, info, trace};

use crate::error::AnalyzeError;
use crate::input::{FileCandidate, PDF_MEDIA_TYPE};
use crate::types::analysis::{AnalysisResult, HealthResponse, ServiceErrorBody};

const ANALYZE_ENDPOINT: &str = "/analyze";
const HEALTH_ENDPOINT: &str = "/health";

const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Fallback shown when the service gives no usable detail message.
pub const GENERIC_REQUEST_ERROR: &str = "Error analyzing resume. Please try again.";

/// The one field carried by an analysis request. Exactly one of the two ever
/// goes into the multipart body.
#[derive(Debug, Clone)]
pub enum AnalysisPayload {
    File(FileCandidate),
    Text(String),
}

pub struct AnalysisClient {
    client: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    /// Create a new client for the service at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Submit one resume for analysis.
    ///
    /// The multipart body carries exactly one field: `file` for a staged PDF,
    /// `text` for pasted text. Any failure is reduced to the message the user
    /// should see: the service's `detail` string when it sent one, the
    /// generic fallback for transport errors and unparseable bodies.
    pub async fn analyze(&self, payload: AnalysisPayload) -> Result<AnalysisResult, AnalyzeError> {
        let url = format!("{}{}", self.base_url, ANALYZE_ENDPOINT);

        let form = match payload {
            AnalysisPayload::File(file) => {
                let part = Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(PDF_MEDIA_TYPE)
                    .map_err(|err| {
                        error!("Failed to create multipart: {}", err);
                        AnalyzeError::RequestFailed(GENERIC_REQUEST_ERROR.to_string())
                    })?;
                Form::new().part("file", part)
            }
            AnalysisPayload::Text(text) => Form::new().text("text", text),
        };

        info!("Calling resume analysis service: {}", url);

        let response = match self.client.post(&url).multipart(form).send().await {
            Ok(response) => response,
            Err(err) => {
                error!("Analysis request failed to send: {}", err);
                return Err(AnalyzeError::RequestFailed(GENERIC_REQUEST_ERROR.to_string()));
            }
        };

        let status = response.status();
        trace!("Response status: {}", status);

        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            parse_result_body(&body)
        } else {
            error!("Analysis service error response ({}): {}", status, body);
            Err(AnalyzeError::RequestFailed(error_message_from_body(&body)))
        }
    }

    /// Check that the service is up.
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}{}", self.base_url, HEALTH_ENDPOINT);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<HealthResponse>()
                .await
                .context("Failed to parse health response")
        } else {
            anyhow::bail!("Health check returned status {}", status)
        }
    }
}

/// Parse a success body into the typed result.
fn parse_result_body(body: &str) -> Result<AnalysisResult, AnalyzeError> {
    serde_json::from_str(body).map_err(|err| {
        error!("Failed to parse analysis response: {}", err);
        AnalyzeError::RequestFailed(GENERIC_REQUEST_ERROR.to_string())
    })
}

/// Reduce an error body to the message shown to the user: the service's
/// `detail` field when present, the generic fallback otherwise.
fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<ServiceErrorBody>(body)
        .ok()
        .and_then(|body| body.detail)
        .unwrap_or_else(|| GENERIC_REQUEST_ERROR.to_string())
}
