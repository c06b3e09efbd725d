//! Form state to request payloads.

use passkit_common::{AnalysisRequest, GenerationRequest};

use crate::config::GeneratorDefaults;
use crate::error::{ClientError, Result};

pub const EMPTY_PASSWORD_NOTICE: &str = "Please enter a password to analyze";

/// Current values of the generator controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorForm {
    pub length: i64,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl From<&GeneratorDefaults> for GeneratorForm {
    fn from(defaults: &GeneratorDefaults) -> Self {
        Self {
            length: defaults.length,
            include_upper: defaults.include_upper,
            include_lower: defaults.include_lower,
            include_numbers: defaults.include_numbers,
            include_symbols: defaults.include_symbols,
        }
    }
}

/// Current value of the analyzer text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerForm {
    pub password: String,
}

impl AnalyzerForm {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }
}

/// Read the generator controls. Values are forwarded untouched; range and
/// class checks belong to the backend.
pub fn collect_generation(form: &GeneratorForm) -> GenerationRequest {
    GenerationRequest {
        length: form.length,
        include_upper: form.include_upper,
        include_lower: form.include_lower,
        include_numbers: form.include_numbers,
        include_symbols: form.include_symbols,
    }
}

/// Read the analyzer input, trimmed. Blank input never reaches the network.
pub fn collect_analysis(form: &AnalyzerForm) -> Result<AnalysisRequest> {
    let password = form.password.trim();
    if password.is_empty() {
        return Err(ClientError::Validation(EMPTY_PASSWORD_NOTICE.to_string()));
    }
    Ok(AnalysisRequest {
        password: password.to_string(),
    })
}
