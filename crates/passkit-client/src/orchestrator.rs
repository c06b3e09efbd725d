//! Request lifecycle for the two password operations.
//!
//! Each submission enters the loading state, issues one request, and then
//! either renders the result or reports a notice. The loading state is
//! cleared on every exit path, including when the future is dropped.
//!
//! Overlapping submissions are neither deduplicated nor cancelled: each runs
//! to completion and whichever response lands last is what the view shows.
//! Callers that need single-flight behavior must serialize submissions
//! themselves.

use passkit_common::{AnalysisResponse, ApiReply, GenerationResult};

use crate::api_client::{PasswordApi, TransportError};
use crate::error::{ClientError, Result};
use crate::input::{collect_analysis, collect_generation, AnalyzerForm, GeneratorForm};
use crate::presenter::present;
use crate::view::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Generate,
    Analyze,
}

impl Operation {
    /// Verb used in transport error notices
    pub fn verb(self) -> &'static str {
        match self {
            Operation::Generate => "generating",
            Operation::Analyze => "analyzing",
        }
    }

    /// Busy indicator caption
    pub fn progress_label(self) -> &'static str {
        match self {
            Operation::Generate => "Generating password...",
            Operation::Analyze => "Analyzing password...",
        }
    }
}

/// Clears the loading state when dropped.
struct LoadingGuard<'a, V: View> {
    view: &'a V,
    operation: Operation,
}

impl<'a, V: View> LoadingGuard<'a, V> {
    fn enter(view: &'a V, operation: Operation) -> Self {
        view.show_loading(operation);
        view.hide_results();
        Self { view, operation }
    }
}

impl<V: View> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.hide_loading(self.operation);
    }
}

/// Fold transport and backend failures into one error type.
fn settle<T>(
    operation: Operation,
    reply: std::result::Result<ApiReply<T>, TransportError>,
) -> Result<T> {
    match reply {
        Ok(ApiReply::Success(value)) => Ok(value),
        Ok(ApiReply::Failure(body)) => Err(ClientError::Backend(body.error)),
        Err(TransportError(message)) => Err(ClientError::Transport {
            verb: operation.verb(),
            message,
        }),
    }
}

/// Drives submissions from the forms through the backend into the view.
pub struct Controller<A, V> {
    api: A,
    view: V,
}

impl<A: PasswordApi, V: View> Controller<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn report(&self, operation: Operation, err: ClientError) -> ClientError {
        tracing::warn!(operation = operation.verb(), error = %err, "submission failed");
        self.view.notify(&err.to_string());
        err
    }

    pub async fn generate(&self, form: &GeneratorForm) -> Result<GenerationResult> {
        let operation = Operation::Generate;
        let req = collect_generation(form);

        let _loading = LoadingGuard::enter(&self.view, operation);
        tracing::debug!(length = req.length, "requesting password generation");
        let reply = self.api.generate(&req).await;

        match settle(operation, reply) {
            Ok(result) => {
                let presentation = present(&result.analysis);
                self.view.render_generated(&result.password, &presentation);
                self.view.show_results();
                Ok(result)
            }
            Err(err) => Err(self.report(operation, err)),
        }
    }

    pub async fn analyze(&self, form: &AnalyzerForm) -> Result<AnalysisResponse> {
        let operation = Operation::Analyze;
        let req = match collect_analysis(form) {
            Ok(req) => req,
            Err(err) => return Err(self.report(operation, err)),
        };

        let _loading = LoadingGuard::enter(&self.view, operation);
        tracing::debug!("requesting password analysis");
        let reply = self.api.analyze(&req).await;

        match settle(operation, reply) {
            Ok(response) => {
                let presentation = present(&response.analysis);
                self.view.render_analysis(&response.password, &presentation);
                self.view.show_results();
                Ok(response)
            }
            Err(err) => Err(self.report(operation, err)),
        }
    }
}
