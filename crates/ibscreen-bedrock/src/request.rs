use serde_json::Value;
use tracing::debug;

use ibscreen_core::models::attachment::ImagingCategory;
use ibscreen_core::models::intake::IntakeRecord;

use crate::error::ScreeningError;
use crate::prompt;
use crate::schema;

/// Media formats the inference service accepts inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
    Pdf,
}

impl MediaFormat {
    /// Map a MIME type to a supported format. Parameters after `;` are
    /// ignored and matching is case-insensitive.
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        let essence = mime_type.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "image/png" => Some(MediaFormat::Png),
            "image/jpeg" | "image/jpg" => Some(MediaFormat::Jpeg),
            "image/gif" => Some(MediaFormat::Gif),
            "image/webp" => Some(MediaFormat::Webp),
            "application/pdf" => Some(MediaFormat::Pdf),
            _ => None,
        }
    }

    /// Map a file extension to a supported format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(MediaFormat::Png),
            "jpg" | "jpeg" => Some(MediaFormat::Jpeg),
            "gif" => Some(MediaFormat::Gif),
            "webp" => Some(MediaFormat::Webp),
            "pdf" => Some(MediaFormat::Pdf),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            MediaFormat::Png => "image/png",
            MediaFormat::Jpeg => "image/jpeg",
            MediaFormat::Gif => "image/gif",
            MediaFormat::Webp => "image/webp",
            MediaFormat::Pdf => "application/pdf",
        }
    }
}

/// One decoded binary part of a screening request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineAttachment {
    pub category: ImagingCategory,
    pub format: MediaFormat,
    pub bytes: Vec<u8>,
}

/// A single multimodal request: the instruction text, its attachments in
/// record order, and the output schema the reply must follow.
#[derive(Debug, Clone)]
pub struct InferenceRequest {
    pub system_prompt: String,
    pub instruction: String,
    pub attachments: Vec<InlineAttachment>,
    pub response_schema: Value,
}

/// Build the request for one intake record.
///
/// Every attachment is decoded up front. An attachment with invalid base64
/// or an unsupported media type fails the whole request.
pub fn build_request(record: &IntakeRecord) -> Result<InferenceRequest, ScreeningError> {
    let instruction = prompt::build_instruction(record)?;

    let attachments = record
        .imaging
        .iter()
        .map(|attachment| {
            let format = MediaFormat::from_mime(&attachment.mime_type).ok_or_else(|| {
                ScreeningError::UnsupportedMediaType(attachment.mime_type.clone())
            })?;
            Ok(InlineAttachment {
                category: attachment.category,
                format,
                bytes: attachment.decode()?,
            })
        })
        .collect::<Result<Vec<_>, ScreeningError>>()?;

    debug!(
        instruction_len = instruction.len(),
        attachments = attachments.len(),
        "built screening request"
    );

    Ok(InferenceRequest {
        system_prompt: prompt::SYSTEM_PROMPT.to_string(),
        instruction,
        attachments,
        response_schema: schema::response_schema(),
    })
}
