use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CommonResult;
use crate::strength::StrengthClass;

/// Request body for POST /generate-password
///
/// Fields missing from the body take the generator defaults (16 characters,
/// every character class enabled).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
    pub length: i64,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 16,
            include_upper: true,
            include_lower: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

/// Request body for POST /analyze-password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub password: String,
}

/// Strength analysis of a single password, shared by both endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub length: usize,
    pub entropy: f64,
    pub score: u32,
    pub strength: String,
    /// Kept as the raw wire tag so unknown classes survive deserialization.
    pub strength_class: String,
    #[serde(default)]
    pub feedback: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_types: Option<u8>,
}

impl AnalysisResult {
    /// The parsed strength class, `None` when the backend sent an unknown tag.
    pub fn class(&self) -> Option<StrengthClass> {
        StrengthClass::parse(&self.strength_class)
    }
}

/// Response from POST /generate-password
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub password: String,
    pub analysis: AnalysisResult,
}

/// Response from POST /analyze-password
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub password: String,
    pub analysis: AnalysisResult,
}

/// Error body returned by either endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response from GET /health
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// A response body from either endpoint: the error shape or the success shape.
///
/// A body with an `error` string is always a failure, whatever else it
/// carries, so `Failure` must stay the first variant. This includes an empty
/// string: `{"error": ""}` is a failure here even though a browser page
/// testing the field for truthiness would treat it as success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiReply<T> {
    Failure(ErrorResponse),
    Success(T),
}

impl<T: DeserializeOwned> ApiReply<T> {
    pub fn from_slice(bytes: &[u8]) -> CommonResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
