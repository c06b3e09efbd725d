use passkit_common::{
    AnalysisRequest, AnalysisResponse, ApiReply, GenerationRequest, GenerationResult,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// The request never produced a usable reply: network failure or a body
/// that is neither the success nor the error shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

/// The two password endpoints.
#[allow(async_fn_in_trait)]
pub trait PasswordApi {
    async fn generate(
        &self,
        req: &GenerationRequest,
    ) -> Result<ApiReply<GenerationResult>, TransportError>;

    async fn analyze(
        &self,
        req: &AnalysisRequest,
    ) -> Result<ApiReply<AnalysisResponse>, TransportError>;
}

/// HTTP client for communicating with the passkit server.
///
/// No timeout is configured: a call waits until the transport resolves.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body and decode the reply. The HTTP status is not
    /// consulted: the body alone decides success or failure.
    async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiReply<T>, TransportError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        ApiReply::from_slice(&bytes).map_err(|e| {
            tracing::debug!(%status, path, "undecodable response body");
            TransportError(e.to_string())
        })
    }
}

impl PasswordApi for ApiClient {
    async fn generate(
        &self,
        req: &GenerationRequest,
    ) -> Result<ApiReply<GenerationResult>, TransportError> {
        self.post("/generate-password", req).await
    }

    async fn analyze(
        &self,
        req: &AnalysisRequest,
    ) -> Result<ApiReply<AnalysisResponse>, TransportError> {
        self.post("/analyze-password", req).await
    }
}
