use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The structured output of one screening evaluation.
///
/// Every field is required. A response missing any of them does not
/// deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InferenceResult {
    /// Total pattern match, 0–100.
    pub likelihood_score: f64,
    pub confidence_score: f64,
    pub neural_weights: WeightBreakdown,
    pub imaging_findings: Vec<ImagingFinding>,
    pub historical_insight: String,
    pub logic_chain: Vec<String>,
    pub recommendation: String,
    pub interpretation: String,
}

/// Points each evidence category contributes to the total score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WeightBreakdown {
    pub radiological_pattern: f64,
    pub endoscopic_findings: f64,
    pub historical_context: f64,
    pub clinical_markers: f64,
}

impl WeightBreakdown {
    pub fn sum(&self) -> f64 {
        self.radiological_pattern
            + self.endoscopic_findings
            + self.historical_context
            + self.clinical_markers
    }

    /// Multiply every weight by `factor`, rounding each to one decimal.
    pub fn rescaled(&self, factor: f64) -> Self {
        Self {
            radiological_pattern: round_tenth(self.radiological_pattern * factor),
            endoscopic_findings: round_tenth(self.endoscopic_findings * factor),
            historical_context: round_tenth(self.historical_context * factor),
            clinical_markers: round_tenth(self.clinical_markers * factor),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImagingFinding {
    pub label: String,
    pub description: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Normal,
    Notable,
    Abnormal,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Normal, Severity::Notable, Severity::Abnormal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Normal => "normal",
            Severity::Notable => "notable",
            Severity::Abnormal => "abnormal",
        }
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
