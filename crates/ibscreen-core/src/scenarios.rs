//! Preset clinical phenotypes for demonstrating the screening pipeline.
//!
//! Each scenario is a complete intake record, with a placeholder 1×1 PNG
//! standing in for every attached study.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::models::attachment::{ImagingAttachment, ImagingCategory};
use crate::models::intake::{IntakeRecord, Sex};

const PLACEHOLDER_PNG: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    InflammatoryMimicry,
    CyclicAdhesionPattern,
    MethanogenicDysbiosis,
    EntericNervousTension,
    NeuroMotilitySignature,
    CellularPostViralShift,
    PrimaryVisceralLoop,
}

impl Scenario {
    pub const ALL: [Scenario; 7] = [
        Scenario::InflammatoryMimicry,
        Scenario::CyclicAdhesionPattern,
        Scenario::MethanogenicDysbiosis,
        Scenario::EntericNervousTension,
        Scenario::NeuroMotilitySignature,
        Scenario::CellularPostViralShift,
        Scenario::PrimaryVisceralLoop,
    ];

    /// Kebab-case identifier, e.g. `primary-visceral-loop`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::InflammatoryMimicry => "inflammatory-mimicry",
            Scenario::CyclicAdhesionPattern => "cyclic-adhesion-pattern",
            Scenario::MethanogenicDysbiosis => "methanogenic-dysbiosis",
            Scenario::EntericNervousTension => "enteric-nervous-tension",
            Scenario::NeuroMotilitySignature => "neuro-motility-signature",
            Scenario::CellularPostViralShift => "cellular-post-viral-shift",
            Scenario::PrimaryVisceralLoop => "primary-visceral-loop",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Scenario::InflammatoryMimicry => "Inflammatory Mimicry",
            Scenario::CyclicAdhesionPattern => "Cyclic Adhesion Pattern",
            Scenario::MethanogenicDysbiosis => "Methanogenic Dysbiosis",
            Scenario::EntericNervousTension => "Enteric Nervous Tension",
            Scenario::NeuroMotilitySignature => "Neuro-Motility Signature",
            Scenario::CellularPostViralShift => "Cellular Post-Viral Shift",
            Scenario::PrimaryVisceralLoop => "Primary Visceral Loop",
        }
    }

    /// The full intake record for this phenotype.
    pub fn record(&self) -> IntakeRecord {
        match self {
            Scenario::InflammatoryMimicry => IntakeRecord {
                age: "35-44".to_string(),
                sex: Sex::Male,
                pain_frequency: 7.0,
                pain_duration_months: 3.0,
                bloating_severity: 8.0,
                stool_type: 7.0,
                stress_level: 2.0,
                diet_quality: "General/Mixed".to_string(),
                acoustic_frequency: Some(45.0),
                breath_voc_signature: Some("Hydrogen Sulfide (Sulfuric)".to_string()),
                past_diagnoses: "High suspicion for Crohn's Disease. Elevated Calprotectin (1200+). \
                    Nocturnal bowel movements. Family history of IBD."
                    .to_string(),
                previous_procedures: tags(&["Colonoscopy", "Calprotectin Lab"]),
                medications: "Iron supplements".to_string(),
                imaging: studies(&[ImagingCategory::LabReport]),
            },
            Scenario::CyclicAdhesionPattern => IntakeRecord {
                age: "25-34".to_string(),
                sex: Sex::Female,
                pain_frequency: 6.0,
                pain_duration_months: 48.0,
                bloating_severity: 9.0,
                stool_type: 4.0,
                stress_level: 4.0,
                diet_quality: "Low FODMAP (Strict)".to_string(),
                acoustic_frequency: Some(12.0),
                breath_voc_signature: Some("Standard".to_string()),
                past_diagnoses: "Stage IV Endometriosis. Pain is strictly catamenial (cyclic). \
                    MRI showed bowel adhesions."
                    .to_string(),
                previous_procedures: tags(&["Laparoscopy", "MRI Pelvis"]),
                medications: "Ibuprofen 800mg".to_string(),
                imaging: studies(&[ImagingCategory::Radiology]),
            },
            Scenario::MethanogenicDysbiosis => IntakeRecord {
                age: "18-24".to_string(),
                sex: Sex::Female,
                pain_frequency: 3.0,
                pain_duration_months: 12.0,
                bloating_severity: 10.0,
                stool_type: 5.0,
                stress_level: 6.0,
                diet_quality: "High fiber".to_string(),
                acoustic_frequency: Some(30.0),
                breath_voc_signature: Some("Methane Dominant (Musty/Earthy)".to_string()),
                past_diagnoses: "Positive Breath Test for IMO (Intestinal Methanogen Overgrowth). \
                    Profound bloating regardless of motility."
                    .to_string(),
                previous_procedures: tags(&["Breath Test"]),
                medications: "Rifaximin".to_string(),
                imaging: studies(&[ImagingCategory::Morphology]),
            },
            Scenario::EntericNervousTension => IntakeRecord {
                age: "45-54".to_string(),
                sex: Sex::Female,
                pain_frequency: 4.0,
                pain_duration_months: 24.0,
                bloating_severity: 6.0,
                stool_type: 2.0,
                stress_level: 7.0,
                diet_quality: "General/Mixed".to_string(),
                acoustic_frequency: Some(8.0),
                breath_voc_signature: Some("Neutral / Baseline".to_string()),
                past_diagnoses: "Moderate IBS suspicion. Symptoms flare during work stress. \
                    Normal blood work. Negative for Celiac."
                    .to_string(),
                previous_procedures: tags(&["Celiac Panel"]),
                medications: "Occasional fiber".to_string(),
                imaging: studies(&[ImagingCategory::Endoscopy]),
            },
            Scenario::NeuroMotilitySignature => IntakeRecord {
                age: "25-34".to_string(),
                sex: Sex::Male,
                pain_frequency: 5.0,
                pain_duration_months: 36.0,
                bloating_severity: 5.0,
                stool_type: 6.0,
                stress_level: 9.0,
                diet_quality: "General/Mixed".to_string(),
                acoustic_frequency: Some(25.0),
                breath_voc_signature: Some("Neutral / Baseline".to_string()),
                past_diagnoses: "Rome IV Diagnostic match. Normal Colonoscopy. \
                    Visceral hypersensitivity. Pain relieved by defecation."
                    .to_string(),
                previous_procedures: tags(&["Colonoscopy"]),
                medications: "Bentyl".to_string(),
                imaging: studies(&[ImagingCategory::Endoscopy]),
            },
            Scenario::CellularPostViralShift => IntakeRecord {
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
                past_diagnoses: "Post-Infectious IBS. Clear Gastroenteritis onset. \
                    All scans and biopsy markers are perfect (Normal Architecture)."
                    .to_string(),
                previous_procedures: tags(&["Gastric Emptying", "Endoscopy"]),
                medications: "Probiotics".to_string(),
                imaging: studies(&[ImagingCategory::LabReport, ImagingCategory::Endoscopy]),
            },
            Scenario::PrimaryVisceralLoop => IntakeRecord {
                age: "35-44".to_string(),
                sex: Sex::Female,
                pain_frequency: 7.0,
                pain_duration_months: 120.0,
                bloating_severity: 9.0,
                stool_type: 1.0,
                stress_level: 10.0,
                diet_quality: "General/Mixed".to_string(),
                acoustic_frequency: Some(2.0),
                breath_voc_signature: Some("Neutral / Baseline".to_string()),
                past_diagnoses: "Severe Chronic IBS Pattern. 10 years of consistent functional \
                    symptoms. 3x Clean Colonoscopies with ZERO inflammation. \
                    Negative for all organic disease."
                    .to_string(),
                previous_procedures: tags(&[
                    "Colonoscopy",
                    "Endoscopy",
                    "CT Scan",
                    "Abdominal Ultrasound",
                ]),
                medications: "Linzess, Prozac".to_string(),
                imaging: studies(&[ImagingCategory::Radiology, ImagingCategory::Endoscopy]),
            },
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = CoreError;

    /// Accepts the identifier or the title, ignoring case. Spaces and
    /// underscores count as hyphens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.as_str() == key)
            .ok_or_else(|| CoreError::UnknownScenario(s.to_string()))
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn studies(categories: &[ImagingCategory]) -> Vec<ImagingAttachment> {
    categories
        .iter()
        .map(|&category| ImagingAttachment {
            data: PLACEHOLDER_PNG.to_string(),
            mime_type: "image/png".to_string(),
            category,
        })
        .collect()
}
