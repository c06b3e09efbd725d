use std::net::SocketAddr;

use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use axum::Json;
use passkit_common::{AnalysisRequest, AnalysisResponse, GenerationRequest, GenerationResult};

use crate::analyzer::analyze;
use crate::error::{Result, ServerError};
use crate::generator::generate;
use crate::router::AppState;

async fn enforce_rate_limit(
    state: &AppState,
    peer: Option<ConnectInfo<SocketAddr>>,
) -> Result<()> {
    // In-process callers (tests, embedding) carry no peer address
    let Some(ConnectInfo(addr)) = peer else {
        return Ok(());
    };
    if state.rate_limiter.check(addr.ip()).await {
        Ok(())
    } else {
        tracing::warn!(ip = %addr.ip(), "rate limit exceeded");
        Err(ServerError::RateLimited)
    }
}

fn json_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServerError::PayloadTooLarge(rejection.body_text())
        } else {
            ServerError::Validation(rejection.body_text())
        }
    })
}

#[tracing::instrument(skip_all)]
pub async fn generate_password(
    State(state): State<AppState>,
    peer: Option<ConnectInfo<SocketAddr>>,
    payload: std::result::Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResult>> {
    enforce_rate_limit(&state, peer).await?;
    let req = json_body(payload)?;

    let password = generate(&req, state.max_length).map_err(|e| {
        tracing::debug!(length = req.length, error = %e, "generation rejected");
        e
    })?;
    let analysis = analyze(&password);

    tracing::debug!(
        length = analysis.length,
        strength_class = %analysis.strength_class,
        "generated password"
    );

    Ok(Json(GenerationResult { password, analysis }))
}

#[tracing::instrument(skip_all)]
pub async fn analyze_password(
    State(state): State<AppState>,
    peer: Option<ConnectInfo<SocketAddr>>,
    payload: std::result::Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>> {
    enforce_rate_limit(&state, peer).await?;
    let req = json_body(payload)?;

    if req.password.is_empty() {
        return Err(ServerError::Validation("No password provided".to_string()));
    }

    let analysis = analyze(&req.password);

    tracing::debug!(
        score = analysis.score,
        strength_class = %analysis.strength_class,
        "analyzed password"
    );

    Ok(Json(AnalysisResponse {
        password: req.password,
        analysis,
    }))
}
