use std::future::Future;

use ibscreen_core::models::usage::TokenUsage;

use crate::error::ScreeningError;
use crate::request::InferenceRequest;

/// What came back from one inference call.
#[derive(Debug, Clone, Default)]
pub struct InferenceReply {
    /// The structured payload as JSON text, `None` when the reply had no content.
    pub text: Option<String>,
    pub usage: TokenUsage,
}

/// The seam between the screening adapter and the model provider.
///
/// One call is one request; implementations do not retry.
pub trait InferenceTransport: Send + Sync {
    /// Identifier of the model answering requests, recorded on transactions.
    fn model_id(&self) -> &str;

    fn generate(
        &self,
        request: &InferenceRequest,
    ) -> impl Future<Output = Result<InferenceReply, ScreeningError>> + Send;
}
