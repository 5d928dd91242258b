use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::attachment::{ImagingAttachment, ImagingCategory};

/// Everything the screening form collects for one submission.
///
/// Numeric fields carry the values as entered, fractional and negative
/// values included. Nothing here clamps or range-checks them; the inference
/// prompt receives them verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct IntakeRecord {
    // Demographics
    /// Age bracket, e.g. `"25-34"`.
    pub age: String,
    pub sex: Sex,

    // Symptoms
    /// Days per week with abdominal pain (0–7).
    pub pain_frequency: f64,
    pub pain_duration_months: f64,
    pub bloating_severity: f64,
    /// Bristol stool form type (1–7).
    pub stool_type: f64,
    pub stress_level: f64,
    #[serde(default)]
    pub diet_quality: String,

    // Biomarkers
    /// Bowel sound frequency in beats per minute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acoustic_frequency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breath_voc_signature: Option<String>,

    // History
    pub past_diagnoses: String,
    #[serde(default)]
    pub previous_procedures: Vec<String>,
    pub medications: String,

    #[serde(default, rename = "imagingNodes")]
    pub imaging: Vec<ImagingAttachment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
    Other,
}

/// The blank screening form.
impl Default for IntakeRecord {
    fn default() -> Self {
        Self {
            age: "25-34".to_string(),
            sex: Sex::Female,
            pain_frequency: 2.0,
            pain_duration_months: 6.0,
            bloating_severity: 5.0,
            stool_type: 4.0,
            stress_level: 5.0,
            diet_quality: "General/Mixed".to_string(),
            acoustic_frequency: Some(12.0),
            breath_voc_signature: Some("Neutral / Baseline".to_string()),
            past_diagnoses: String::new(),
            previous_procedures: Vec::new(),
            medications: String::new(),
            imaging: Vec::new(),
        }
    }
}

impl IntakeRecord {
    /// Attach a study, replacing any earlier upload of the same category.
    pub fn attach(&mut self, attachment: ImagingAttachment) {
        match self
            .imaging
            .iter_mut()
            .find(|a| a.category == attachment.category)
        {
            Some(existing) => *existing = attachment,
            None => self.imaging.push(attachment),
        }
    }

    /// Remove the attachment of the given category, if any.
    pub fn detach(&mut self, category: ImagingCategory) -> Option<ImagingAttachment> {
        let index = self.imaging.iter().position(|a| a.category == category)?;
        Some(self.imaging.remove(index))
    }

    pub fn attachment(&self, category: ImagingCategory) -> Option<&ImagingAttachment> {
        self.imaging.iter().find(|a| a.category == category)
    }

    /// Select a procedure if it is not yet selected, otherwise deselect it.
    /// Returns `true` when the procedure is selected afterwards.
    pub fn toggle_procedure(&mut self, procedure: &str) -> bool {
        if let Some(index) = self.previous_procedures.iter().position(|p| p == procedure) {
            self.previous_procedures.remove(index);
            false
        } else {
            self.previous_procedures.push(procedure.to_string());
            true
        }
    }
}

/// Description of a Bristol stool form type, `None` unless it is a whole
/// number from 1 to 7.
pub fn bristol_description(stool_type: f64) -> Option<&'static str> {
    if stool_type.fract() != 0.0 || !(1.0..=7.0).contains(&stool_type) {
        return None;
    }
    let description = match stool_type as u8 {
        1 => "Separate hard lumps, like nuts (hard to pass)",
        2 => "Sausage-shaped but lumpy",
        3 => "Like a sausage but with cracks on its surface",
        4 => "Like a sausage or snake, smooth and soft",
        5 => "Soft blobs with clear-cut edges (passed easily)",
        6 => "Fluffy pieces with ragged edges, a mushy stool",
        7 => "Watery, no solid pieces. Entirely liquid",
        _ => return None,
    };
    Some(description)
}
