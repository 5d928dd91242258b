//! The structured output contract sent with every screening request.

use serde_json::{Value, json};

use ibscreen_core::models::result::Severity;

/// Name of the tool the model is forced to call with its result.
pub const RESULT_TOOL_NAME: &str = "record_screening_result";

pub const RESULT_TOOL_DESCRIPTION: &str =
    "Record the IBS pattern-match analysis for this patient. Every field is required.";

/// Top-level fields every result must carry.
pub const REQUIRED_FIELDS: [&str; 8] = [
    "likelihoodScore",
    "confidenceScore",
    "neuralWeights",
    "imagingFindings",
    "historicalInsight",
    "logicChain",
    "recommendation",
    "interpretation",
];

pub const WEIGHT_FIELDS: [&str; 4] = [
    "radiologicalPattern",
    "endoscopicFindings",
    "historicalContext",
    "clinicalMarkers",
];

/// JSON Schema for [`ibscreen_core::models::result::InferenceResult`].
pub fn response_schema() -> Value {
    let severities: Vec<&str> = Severity::ALL.iter().map(|s| s.as_str()).collect();

    json!({
        "type": "object",
        "properties": {
            "likelihoodScore": {
                "type": "number",
                "description": "Total match percentage 0-100"
            },
            "confidenceScore": {
                "type": "number",
                "description": "Confidence in the analysis 0-100"
            },
            "neuralWeights": {
                "type": "object",
                "properties": {
                    "radiologicalPattern": {
                        "type": "number",
                        "description": "Points contributed by radiology"
                    },
                    "endoscopicFindings": {
                        "type": "number",
                        "description": "Points contributed by endoscopy/vision"
                    },
                    "historicalContext": {
                        "type": "number",
                        "description": "Points contributed by history"
                    },
                    "clinicalMarkers": {
                        "type": "number",
                        "description": "Points contributed by symptoms/biomarkers"
                    }
                },
                "required": WEIGHT_FIELDS,
                "additionalProperties": false
            },
            "imagingFindings": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "label": { "type": "string" },
                        "description": { "type": "string" },
                        "severity": { "type": "string", "enum": severities }
                    },
                    "required": ["label", "description", "severity"]
                }
            },
            "historicalInsight": { "type": "string" },
            "logicChain": {
                "type": "array",
                "items": { "type": "string" }
            },
            "recommendation": { "type": "string" },
            "interpretation": { "type": "string" }
        },
        "required": REQUIRED_FIELDS
    })
}
