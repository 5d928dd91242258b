use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use ibscreen_core::models::intake::IntakeRecord;
use ibscreen_core::models::result::InferenceResult;
use ibscreen_core::models::usage::TokenUsage;
use ibscreen_core::normalize::{Normalization, normalize_weights};

use crate::config::ScreeningConfig;
use crate::converse::BedrockTransport;
use crate::error::ScreeningError;
use crate::request::build_request;
use crate::transport::InferenceTransport;

/// One completed evaluation, with the bookkeeping around the result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningTransaction {
    pub id: Uuid,
    pub model_id: String,
    pub usage: TokenUsage,
    pub normalization: Normalization,
    pub completed_at: jiff::Timestamp,
    pub result: InferenceResult,
}

/// Turns intake records into screening results through an
/// [`InferenceTransport`]. Holds no state between evaluations.
pub struct ScreeningAdapter<T> {
    transport: T,
}

impl ScreeningAdapter<BedrockTransport> {
    /// Build a Bedrock-backed adapter from explicit configuration.
    pub async fn from_config(config: &ScreeningConfig) -> Self {
        let sdk_config = config.build_sdk_config().await;
        let transport = BedrockTransport::new(&sdk_config, config.model_id.clone())
            .with_max_tokens(config.max_tokens)
            .with_temperature(config.temperature);
        Self::new(transport)
    }
}

impl<T: InferenceTransport> ScreeningAdapter<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Evaluate one intake record.
    ///
    /// The record is consumed. Failures are returned as-is and never
    /// retried.
    pub async fn evaluate(&self, record: IntakeRecord) -> Result<InferenceResult, ScreeningError> {
        self.evaluate_recorded(record).await.map(|t| t.result)
    }

    /// Evaluate one intake record, keeping the transaction metadata.
    pub async fn evaluate_recorded(
        &self,
        record: IntakeRecord,
    ) -> Result<ScreeningTransaction, ScreeningError> {
        let transaction_id = Uuid::new_v4();
        let model_id = self.transport.model_id().to_string();
        info!(transaction_id = %transaction_id, model = %model_id, "starting screening evaluation");

        let request = build_request(&record)?;

        let reply = self.transport.generate(&request).await.inspect_err(|e| {
            warn!(transaction_id = %transaction_id, error = %e, "screening model call failed");
        })?;

        let (result, normalization) = parse_result(reply.text.as_deref()).inspect_err(|e| {
            if let ScreeningError::MalformedResponse { detail } = e {
                warn!(transaction_id = %transaction_id, detail = %detail, "unreadable screening result");
            }
        })?;

        if let Normalization::Rescaled {
            original_sum,
            factor,
        } = normalization
        {
            warn!(
                transaction_id = %transaction_id,
                likelihood_score = result.likelihood_score,
                original_sum,
                factor,
                "weight breakdown disagreed with total score, rescaled"
            );
        }

        info!(
            transaction_id = %transaction_id,
            likelihood_score = result.likelihood_score,
            confidence_score = result.confidence_score,
            cost_usd = reply.usage.cost_usd,
            "screening evaluation complete"
        );

        Ok(ScreeningTransaction {
            id: transaction_id,
            model_id,
            usage: reply.usage,
            normalization,
            completed_at: jiff::Timestamp::now(),
            result,
        })
    }
}

/// Validate a reply payload and repair its weight breakdown.
///
/// An absent or blank payload is [`ScreeningError::EmptyResponse`] and is
/// never parsed. Anything that does not deserialize into a complete
/// [`InferenceResult`] is [`ScreeningError::MalformedResponse`].
pub fn parse_result(
    text: Option<&str>,
) -> Result<(InferenceResult, Normalization), ScreeningError> {
    let text = text.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(ScreeningError::EmptyResponse);
    }

    let mut result: InferenceResult =
        serde_json::from_str(text).map_err(|e| ScreeningError::MalformedResponse {
            detail: e.to_string(),
        })?;

    let normalization = normalize_weights(&mut result);
    Ok((result, normalization))
}
