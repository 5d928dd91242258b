//! Screening requests over the Bedrock Converse API.
//!
//! The response schema is delivered as the input schema of a single tool
//! and the model is forced to call it, so the structured result arrives as
//! the tool-use input document rather than free text. The document is
//! converted back to JSON text for the adapter to parse.

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, SdkError};
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, DocumentBlock, DocumentFormat, DocumentSource, ImageBlock,
    ImageFormat, ImageSource, InferenceConfiguration, Message, SpecificToolChoice,
    SystemContentBlock, Tool, ToolChoice, ToolConfiguration, ToolInputSchema, ToolSpecification,
};
use aws_smithy_types::Blob;
use tracing::{debug, info};

use crate::document::{document_to_json, json_to_document};
use crate::error::ScreeningError;
use crate::request::{InferenceRequest, InlineAttachment, MediaFormat};
use crate::schema::{RESULT_TOOL_DESCRIPTION, RESULT_TOOL_NAME};
use crate::tokens;
use crate::transport::{InferenceReply, InferenceTransport};

pub const DEFAULT_MAX_TOKENS: i32 = 4096;
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// [`InferenceTransport`] backed by a Bedrock runtime client.
#[derive(Clone)]
pub struct BedrockTransport {
    client: Client,
    model_id: String,
    max_tokens: i32,
    temperature: f32,
}

impl BedrockTransport {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self::from_client(Client::new(config), model_id)
    }

    pub fn from_client(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: i32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

impl InferenceTransport for BedrockTransport {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn generate(&self, request: &InferenceRequest) -> Result<InferenceReply, ScreeningError> {
        let message = build_message(request)?;
        let tool_config = build_tool_config(request)?;

        info!(
            model_id = %self.model_id,
            attachments = request.attachments.len(),
            "invoking screening model"
        );

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(request.system_prompt.clone()))
            .messages(message)
            .inference_config(
                InferenceConfiguration::builder()
                    .max_tokens(self.max_tokens)
                    .temperature(self.temperature)
                    .build(),
            )
            .tool_config(tool_config)
            .send()
            .await
            .map_err(invocation_error)?;

        let text = response
            .output()
            .and_then(|o| o.as_message().ok())
            .and_then(|m| payload_text(m.content()));

        let usage = response
            .usage()
            .map(|u| tokens::usage_for(&self.model_id, tokens::extract_token_usage(u)))
            .unwrap_or_default();

        debug!(
            stop_reason = ?response.stop_reason(),
            has_payload = text.is_some(),
            input_tokens = usage.tokens.input,
            output_tokens = usage.tokens.output,
            "screening model replied"
        );

        Ok(InferenceReply { text, usage })
    }
}

/// Wrap an SDK failure with its whole source chain, so dispatch and timeout
/// failures keep their cause.
pub fn invocation_error<E, R>(err: SdkError<E, R>) -> ScreeningError
where
    E: Error + 'static,
    R: Debug,
{
    ScreeningError::Invocation(DisplayErrorContext(&err).to_string())
}

/// The user turn: instruction text first, then every attachment in order.
fn build_message(request: &InferenceRequest) -> Result<Message, ScreeningError> {
    let mut builder = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Text(request.instruction.clone()));

    for (index, attachment) in request.attachments.iter().enumerate() {
        builder = builder.content(attachment_block(index, attachment)?);
    }

    builder
        .build()
        .map_err(|e| ScreeningError::Invocation(e.to_string()))
}

fn attachment_block(
    index: usize,
    attachment: &InlineAttachment,
) -> Result<ContentBlock, ScreeningError> {
    let bytes = Blob::new(attachment.bytes.clone());

    let image_format = match attachment.format {
        MediaFormat::Png => ImageFormat::Png,
        MediaFormat::Jpeg => ImageFormat::Jpeg,
        MediaFormat::Gif => ImageFormat::Gif,
        MediaFormat::Webp => ImageFormat::Webp,
        MediaFormat::Pdf => {
            // Document names allow alphanumerics, hyphens and single spaces.
            let name = format!("{} {}", attachment.category.as_str().replace('_', " "), index + 1);
            let block = DocumentBlock::builder()
                .format(DocumentFormat::Pdf)
                .name(name)
                .source(DocumentSource::Bytes(bytes))
                .build()
                .map_err(|e| ScreeningError::Invocation(e.to_string()))?;
            return Ok(ContentBlock::Document(block));
        }
    };

    let block = ImageBlock::builder()
        .format(image_format)
        .source(ImageSource::Bytes(bytes))
        .build()
        .map_err(|e| ScreeningError::Invocation(e.to_string()))?;
    Ok(ContentBlock::Image(block))
}

fn build_tool_config(request: &InferenceRequest) -> Result<ToolConfiguration, ScreeningError> {
    let spec = ToolSpecification::builder()
        .name(RESULT_TOOL_NAME)
        .description(RESULT_TOOL_DESCRIPTION)
        .input_schema(ToolInputSchema::Json(json_to_document(
            &request.response_schema,
        )))
        .build()
        .map_err(|e| ScreeningError::Invocation(e.to_string()))?;

    let choice = SpecificToolChoice::builder()
        .name(RESULT_TOOL_NAME)
        .build()
        .map_err(|e| ScreeningError::Invocation(e.to_string()))?;

    ToolConfiguration::builder()
        .tools(Tool::ToolSpec(spec))
        .tool_choice(ToolChoice::Tool(choice))
        .build()
        .map_err(|e| ScreeningError::Invocation(e.to_string()))
}

/// The structured payload of a reply as JSON text.
///
/// Prefers the result tool's input. Falls back to the concatenated text
/// blocks when the model answered in prose. `None` when neither exists.
fn payload_text(content: &[ContentBlock]) -> Option<String> {
    let tool_input = content.iter().find_map(|block| match block {
        ContentBlock::ToolUse(tool_use) if tool_use.name() == RESULT_TOOL_NAME => {
            Some(tool_use.input())
        }
        _ => None,
    });

    if let Some(input) = tool_input {
        return Some(document_to_json(input).to_string());
    }

    let text = content
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    if text.is_empty() { None } else { Some(text) }
}
