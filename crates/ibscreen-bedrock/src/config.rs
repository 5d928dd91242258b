use std::env;

use serde::{Deserialize, Serialize};

use crate::converse::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use crate::error::ScreeningError;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

/// Everything the screening adapter needs to reach the model.
///
/// Passed explicitly to [`crate::screening::ScreeningAdapter::from_config`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningConfig {
    pub region: String,
    pub model_id: String,
    pub credentials: CredentialSource,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: i32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    Inline {
        access_key_id: String,
        secret_access_key: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        session_token: Option<String>,
    },
    Profile {
        profile_name: String,
    },
    DefaultChain,
}

fn default_max_tokens() -> i32 {
    DEFAULT_MAX_TOKENS
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            credentials: CredentialSource::DefaultChain,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl ScreeningConfig {
    /// Read configuration from the process environment.
    ///
    /// | variable | meaning |
    /// |---|---|
    /// | `IBSCREEN_REGION` | Bedrock region, falling back to `AWS_REGION` |
    /// | `IBSCREEN_MODEL_ID` | inference profile id |
    /// | `IBSCREEN_MAX_TOKENS` | response token cap |
    /// | `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` / `AWS_SESSION_TOKEN` | inline credentials |
    /// | `AWS_PROFILE` | named profile, used when no inline keys are set |
    pub fn from_env() -> Result<Self, ScreeningError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ScreeningError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let region = get("IBSCREEN_REGION")
            .or_else(|| get("AWS_REGION"))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let model_id = get("IBSCREEN_MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());

        let max_tokens = match get("IBSCREEN_MAX_TOKENS") {
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ScreeningError::Config(format!(
                        "IBSCREEN_MAX_TOKENS must be a positive integer, got {raw:?}"
                    ))
                })?,
            None => DEFAULT_MAX_TOKENS,
        };

        let credentials = match (get("AWS_ACCESS_KEY_ID"), get("AWS_SECRET_ACCESS_KEY")) {
            (Some(access_key_id), Some(secret_access_key)) => CredentialSource::Inline {
                access_key_id,
                secret_access_key,
                session_token: get("AWS_SESSION_TOKEN"),
            },
            (Some(_), None) | (None, Some(_)) => {
                return Err(ScreeningError::Config(
                    "AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY must be set together".to_string(),
                ));
            }
            (None, None) => match get("AWS_PROFILE") {
                Some(profile_name) => CredentialSource::Profile { profile_name },
                None => CredentialSource::DefaultChain,
            },
        };

        Ok(Self {
            region,
            model_id,
            credentials,
            max_tokens,
            temperature: DEFAULT_TEMPERATURE,
        })
    }

    /// Build an `SdkConfig` for the configured region and credentials.
    pub async fn build_sdk_config(&self) -> aws_config::SdkConfig {
        let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(self.region.clone()));

        match &self.credentials {
            CredentialSource::Inline {
                access_key_id,
                secret_access_key,
                session_token,
            } => {
                builder = builder.credentials_provider(
                    aws_sdk_bedrockruntime::config::Credentials::new(
                        access_key_id,
                        secret_access_key,
                        session_token.clone(),
                        None,
                        "ibscreen-config",
                    ),
                );
            }
            CredentialSource::Profile { profile_name } => {
                builder = builder.profile_name(profile_name);
            }
            CredentialSource::DefaultChain => {}
        }

        builder.load().await
    }
}
