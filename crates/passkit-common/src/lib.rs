pub mod api;
pub mod error;
pub mod strength;

pub use api::{
    AnalysisRequest, AnalysisResponse, AnalysisResult, ApiReply, ErrorResponse,
    GenerationRequest, GenerationResult, HealthResponse,
};
pub use error::{CommonError, CommonResult};
pub use strength::StrengthClass;
