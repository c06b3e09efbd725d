use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommonError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CommonResult<T> = std::result::Result<T, CommonError>;
