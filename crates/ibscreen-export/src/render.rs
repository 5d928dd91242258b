use std::collections::HashMap;
use std::str::FromStr;

use serde::Serialize;
use tera::{Context, Tera, Value};

use ibscreen_core::models::result::InferenceResult;

use crate::error::ExportError;

/// Which audience a report is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportView {
    #[default]
    Patient,
    Clinical,
}

impl FromStr for ReportView {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "patient" => Ok(ReportView::Patient),
            "clinical" => Ok(ReportView::Clinical),
            other => Err(ExportError::UnknownView(other.to_string())),
        }
    }
}

const PATIENT_TEMPLATE: &str = "\
YOUR GUT PATTERN REPORT
=======================

Your pattern is {{ likelihoodScore | pct }}% similar to what we see in functional IBS cases.
We combined your scan results, your day-to-day symptoms and your history.

What makes up your {{ likelihoodScore | pct }}%?
{% for item in ingredients -%}
- {{ item.label }}: {{ item.value | pct }}% ({{ item.description }})
{% endfor -%}
Sum of all factors = {{ likelihoodScore | pct }}% match rate.

The trail of evidence
{% for step in logicChain -%}
{{ loop.index }}. {{ step }}
{% endfor %}
\"{{ interpretation }}\"

Your roadmap
{{ recommendation }}

This is a screening aid, not a diagnosis. Talk to your doctor before changing treatment.
";

const CLINICAL_TEMPLATE: &str = "\
CLINICAL SCREENING SUMMARY
==========================
Pattern match: {{ likelihoodScore | pct }}%
Confidence index: {{ confidenceScore | pct }}%

Weight breakdown
- Radiological pattern: {{ neuralWeights.radiologicalPattern | pct }}
- Endoscopic findings: {{ neuralWeights.endoscopicFindings | pct }}
- Historical context: {{ neuralWeights.historicalContext | pct }}
- Clinical markers: {{ neuralWeights.clinicalMarkers | pct }}

Imaging findings
{% if imagingFindings | length == 0 -%}
- none reported
{% endif -%}
{% for finding in imagingFindings -%}
- [{{ finding.severity | upper }}] {{ finding.label }}: {{ finding.description }}
{% endfor %}
Historical insight
{{ historicalInsight }}

Logic chain
{% for step in logicChain -%}
{{ loop.index }}. {{ step }}
{% endfor %}
Interpretation
{{ interpretation }}

Recommendation
{{ recommendation }}
";

/// A weight with the label and wording shown to patients.
#[derive(Debug, Serialize)]
struct Ingredient {
    label: &'static str,
    value: f64,
    description: &'static str,
}

fn ingredients(result: &InferenceResult) -> Vec<Ingredient> {
    let w = &result.neural_weights;
    vec![
        Ingredient {
            label: "Your History",
            value: w.historical_context,
            description: "how long you have felt this way and how deep the symptoms go",
        },
        Ingredient {
            label: "Clear Scans",
            value: w.radiological_pattern,
            description: "normal results in your pictures point towards IBS",
        },
        Ingredient {
            label: "Body Markers",
            value: w.clinical_markers,
            description: "signs found in your breath, blood or bowel sound checks",
        },
        Ingredient {
            label: "Daily Feelings",
            value: w.endoscopic_findings,
            description: "how your stress levels line up with your gut reactions",
        },
    ]
}

/// Render one of the built-in report views.
pub fn render_report(view: ReportView, result: &InferenceResult) -> Result<String, ExportError> {
    let (name, content) = match view {
        ReportView::Patient => ("patient_report", PATIENT_TEMPLATE),
        ReportView::Clinical => ("clinical_report", CLINICAL_TEMPLATE),
    };

    let mut context = result_context(result)?;
    if view == ReportView::Patient {
        context.insert("ingredients", &ingredients(result));
    }

    render(name, content, &context)
}

/// Render a Tera template with an InferenceResult.
///
/// The result fields become the template context under their serialized
/// camelCase names. The `pct` filter formats a number with at most one
/// decimal.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    result: &InferenceResult,
) -> Result<String, ExportError> {
    let context = result_context(result)?;
    render(template_name, template_content, &context)
}

fn result_context(result: &InferenceResult) -> Result<Context, ExportError> {
    let value = serde_json::to_value(result)?;
    Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))
}

fn render(name: &str, content: &str, context: &Context) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.register_filter("pct", pct);
    tera.add_raw_template(name, content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let rendered = tera.render(name, context)?;
    tracing::debug!(template = name, len = rendered.len(), "rendered report");
    Ok(rendered)
}

fn pct(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let number = value
        .as_f64()
        .ok_or_else(|| tera::Error::msg(format!("pct expects a number, got {value}")))?;
    Ok(Value::String(format_score(number)))
}

/// `82.0` renders as `82`, `21.84` as `21.8`.
pub fn format_score(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}
