use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The kind of study an attachment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ImagingCategory {
    Radiology,
    Endoscopy,
    Morphology,
    LabReport,
}

impl ImagingCategory {
    pub const ALL: [ImagingCategory; 4] = [
        ImagingCategory::Radiology,
        ImagingCategory::Endoscopy,
        ImagingCategory::Morphology,
        ImagingCategory::LabReport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImagingCategory::Radiology => "radiology",
            ImagingCategory::Endoscopy => "endoscopy",
            ImagingCategory::Morphology => "morphology",
            ImagingCategory::LabReport => "lab_report",
        }
    }
}

impl fmt::Display for ImagingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImagingCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImagingCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

/// A binary study attached to an intake record, held base64-encoded the
/// way a browser file reader hands it over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ImagingAttachment {
    /// Standard base64, without a `data:` prefix.
    pub data: String,
    pub mime_type: String,
    #[serde(rename = "type")]
    pub category: ImagingCategory,
}

impl ImagingAttachment {
    pub fn from_bytes(bytes: &[u8], mime_type: &str, category: ImagingCategory) -> Self {
        Self {
            data: STANDARD.encode(bytes),
            mime_type: mime_type.to_string(),
            category,
        }
    }

    /// Build an attachment from a `data:<mime>;base64,<payload>` URL.
    pub fn from_data_url(url: &str, category: ImagingCategory) -> Result<Self, CoreError> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| CoreError::InvalidAttachment("not a data URL".to_string()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| CoreError::InvalidAttachment("data URL has no payload".to_string()))?;
        let mime_type = header.strip_suffix(";base64").ok_or_else(|| {
            CoreError::InvalidAttachment("data URL is not base64-encoded".to_string())
        })?;
        if mime_type.is_empty() {
            return Err(CoreError::InvalidAttachment(
                "data URL has no media type".to_string(),
            ));
        }

        Ok(Self {
            data: payload.to_string(),
            mime_type: mime_type.to_string(),
            category,
        })
    }

    pub fn decode(&self) -> Result<Vec<u8>, CoreError> {
        STANDARD.decode(self.data.trim()).map_err(|e| {
            CoreError::InvalidAttachment(format!("{} attachment is not valid base64: {e}", self.category))
        })
    }
}
