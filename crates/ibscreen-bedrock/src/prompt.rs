//! Screening instruction composed from an intake record.

use tera::{Context, Tera};

use ibscreen_core::models::intake::{IntakeRecord, Sex, bristol_description};

use crate::error::ScreeningError;

pub const SYSTEM_PROMPT: &str = "\
You are a clinical decision-support model for functional gastrointestinal \
disorders. Report your analysis only by calling the provided tool, with every \
field filled in. This is a non-diagnostic screening aid.";

const INSTRUCTION_TEMPLATE_NAME: &str = "screening_instruction";

const INSTRUCTION_TEMPLATE: &str = "\
ACT AS: A Senior Clinical Bio-Informatician and Neurogastroenterology Lead.
TASK: Perform a decisive multi-modal analysis of how closely this patient matches \
the Irritable Bowel Syndrome (IBS) pattern.

CLINICAL PHILOSOPHY:
- You are measuring how closely this patient's data fits the textbook IBS pattern.
- 0% = clear organic pathology (e.g. active IBD, celiac disease) with NO functional characteristics.
- 100% = perfect Rome IV criteria match with an extensive negative workup (clean scans and labs).
- DECISIVE SCORING: if the pattern is strong, use high numbers (70-100%). Do not default \
to middle-ground values or minuscule decimals.

ADDITIVE LOGIC (CRITICAL):
- likelihoodScore is the TOTAL pattern match (e.g. 85).
- The four neuralWeights (radiologicalPattern, endoscopicFindings, historicalContext, \
clinicalMarkers) MUST sum exactly to likelihoodScore.
- Example: if likelihoodScore is 80, the weights might be 20, 20, 25 and 15.
- Do not return minuscule fractions like 0.45 unless the total score is near 0.

PATIENT DATA:
- Age bracket: {{ age }}
- Sex: {{ sex }}
- Pain: {{ pain_frequency }} days/week for {{ pain_duration_months }} months.
- Bloating severity: {{ bloating_severity }}/10.
- Stool: Bristol Type {{ stool_type }}{% if stool_description %} ({{ stool_description }}){% endif %}.
- Stress level: {{ stress_level }}/10.
- Diet: {{ diet_quality }}
- Past diagnoses: {{ past_diagnoses }}
- Previous procedures: {{ previous_procedures }}
- Medications: {{ medications }}
- Acoustics: {{ acoustic_frequency }}
- Breath VOC: {{ breath_voc_signature }}
- Attached studies: {{ attachments }}

NEURAL VISION INSTRUCTIONS:
1. Analyze the attached images for the ABSENCE of inflammation or structural disease.
2. Normal morphology or a negative study combined with high reported pain is STRONG \
evidence FOR the functional IBS pattern, not evidence against a problem.
3. Report one imagingFindings entry per attached study, with severity normal, notable or abnormal.
";

const NOT_RECORDED: &str = "not recorded";

/// Render the instruction text for one intake record.
///
/// Field values are embedded as entered. Nothing is range-checked here.
pub fn build_instruction(record: &IntakeRecord) -> Result<String, ScreeningError> {
    let mut tera = Tera::default();
    tera.add_raw_template(INSTRUCTION_TEMPLATE_NAME, INSTRUCTION_TEMPLATE)?;

    let context = instruction_context(record);
    let rendered = tera.render(INSTRUCTION_TEMPLATE_NAME, &context)?;
    Ok(rendered)
}

fn instruction_context(record: &IntakeRecord) -> Context {
    let mut context = Context::new();

    context.insert("age", &or_not_recorded(&record.age));
    context.insert("sex", sex_label(record.sex));
    context.insert("pain_frequency", &number(record.pain_frequency));
    context.insert("pain_duration_months", &number(record.pain_duration_months));
    context.insert("bloating_severity", &number(record.bloating_severity));
    context.insert("stool_type", &number(record.stool_type));
    context.insert("stool_description", &bristol_description(record.stool_type));
    context.insert("stress_level", &number(record.stress_level));
    context.insert("diet_quality", &or_not_recorded(&record.diet_quality));
    context.insert("past_diagnoses", &or_not_recorded(&record.past_diagnoses));
    context.insert("medications", &or_not_recorded(&record.medications));

    let procedures = if record.previous_procedures.is_empty() {
        "none".to_string()
    } else {
        record.previous_procedures.join(", ")
    };
    context.insert("previous_procedures", &procedures);

    let acoustics = record
        .acoustic_frequency
        .map(|bpm| format!("{} BPM", number(bpm)))
        .unwrap_or_else(|| NOT_RECORDED.to_string());
    context.insert("acoustic_frequency", &acoustics);

    let voc = record
        .breath_voc_signature
        .as_deref()
        .map(or_not_recorded)
        .unwrap_or_else(|| NOT_RECORDED.to_string());
    context.insert("breath_voc_signature", &voc);

    let attachments = if record.imaging.is_empty() {
        "none".to_string()
    } else {
        record
            .imaging
            .iter()
            .map(|a| a.category.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    context.insert("attachments", &attachments);

    context
}

/// `6.0` renders as `6`, `2.5` as `2.5`.
fn number(value: f64) -> String {
    value.to_string()
}

fn sex_label(sex: Sex) -> &'static str {
    match sex {
        Sex::Male => "male",
        Sex::Female => "female",
        Sex::Other => "other",
    }
}

fn or_not_recorded(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        NOT_RECORDED.to_string()
    } else {
        trimmed.to_string()
    }
}
