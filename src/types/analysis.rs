// src/types/analysis.rs
//! Response structures for the resume analysis service

use serde::{Deserialize, Serialize};

// ===== Service Response Types =====

/// Structured analysis returned by the `/analyze` endpoint.
///
/// Contact fields are optional; absent ones render as "N/A". `skills` and
/// `education` keep the service's ordering and may be empty. `confidence`
/// arrives already clamped to [0, 1] by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub experience_years: f64,
    pub experience_level: String,
    pub classification: String,
    pub confidence: f64,
    /// Truncated echo of the text the service extracted. Kept so the full
    /// response deserializes; not rendered.
    pub raw_text: Option<String>,
}

/// Error payload shape the service uses on non-success statuses. `detail`
/// is shown verbatim when present.
#[derive(Debug, Deserialize)]
pub struct ServiceErrorBody {
    pub detail: Option<String>,
}

/// `/health` response.
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
