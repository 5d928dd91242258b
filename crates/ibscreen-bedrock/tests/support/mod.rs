#![allow(dead_code)]

use std::sync::Mutex;

use ibscreen_bedrock::error::ScreeningError;
use ibscreen_bedrock::request::InferenceRequest;
use ibscreen_bedrock::transport::{InferenceReply, InferenceTransport};
use ibscreen_core::models::intake::{IntakeRecord, Sex};
use ibscreen_core::models::usage::{TokenCount, TokenUsage};

pub const PIXEL_PNG: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

/// Transport that answers every request with a canned reply and keeps the
/// requests it saw.
pub struct FakeTransport {
    reply: Result<Option<String>, String>,
    pub requests: Mutex<Vec<InferenceRequest>>,
}

impl FakeTransport {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(Some(text.to_string())),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn without_payload() -> Self {
        Self {
            reply: Ok(None),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl InferenceTransport for FakeTransport {
    fn model_id(&self) -> &str {
        "us.anthropic.claude-sonnet-4-test"
    }

    async fn generate(&self, request: &InferenceRequest) -> Result<InferenceReply, ScreeningError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(text) => Ok(InferenceReply {
                text: text.clone(),
                usage: TokenUsage {
                    tokens: TokenCount {
                        input: 1200,
                        output: 300,
                    },
                    cost_usd: 0.0081,
                },
            }),
            Err(message) => Err(ScreeningError::Invocation(message.clone())),
        }
    }
}

pub fn intake() -> IntakeRecord {
    IntakeRecord {
        age: "18-24".to_string(),
        sex: Sex::Female,
        pain_frequency: 6.0,
        pain_duration_months: 9.0,
        bloating_severity: 8.0,
        stool_type: 6.0,
        stress_level: 8.0,
        diet_quality: "Low FODMAP".to_string(),
        acoustic_frequency: Some(35.0),
        breath_voc_signature: Some("Hydrogen Dominant (Sweet/Fruity)".to_string()),
        past_diagnoses: "Post-infectious IBS. Clear gastroenteritis onset.".to_string(),
        previous_procedures: vec!["Gastric Emptying".to_string(), "Endoscopy".to_string()],
        medications: "Probiotics".to_string(),
        imaging: Vec::new(),
    }
}

/// A complete result payload with the given total and weights.
pub fn payload(total: f64, weights: [f64; 4]) -> String {
    serde_json::json!({
        "likelihoodScore": total,
        "confidenceScore": 77,
        "neuralWeights": {
            "radiologicalPattern": weights[0],
            "endoscopicFindings": weights[1],
            "historicalContext": weights[2],
            "clinicalMarkers": weights[3]
        },
        "imagingFindings": [
            { "label": "Duodenal biopsy", "description": "Normal villous architecture", "severity": "normal" }
        ],
        "historicalInsight": "Onset after acute gastroenteritis.",
        "logicChain": ["Clean biopsy", "High pain frequency", "Stress-linked flares"],
        "recommendation": "Confirm with a gastroenterologist.",
        "interpretation": "Strong post-infectious functional pattern."
    })
    .to_string()
}
