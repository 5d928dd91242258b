use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use ibscreen_core::models::attachment::ImagingCategory;
use ibscreen_core::scenarios::Scenario;
use ibscreen_export::render::ReportView;

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "ibscreen",
    version,
    about = "Screen an intake record for a functional IBS pattern",
    after_help = "Attachment categories: radiology, endoscopy, morphology, lab_report\n\
        Scenarios: inflammatory-mimicry, cyclic-adhesion-pattern, methanogenic-dysbiosis, \
        enteric-nervous-tension, neuro-motility-signature, cellular-post-viral-shift, \
        primary-visceral-loop",
    group(ArgGroup::new("source").required(true).args(["intake_path", "scenario"]))
)]
pub struct Args {
    /// Intake record as JSON.
    pub intake_path: Option<PathBuf>,

    /// Start from a preset clinical scenario instead of an intake file.
    #[arg(long)]
    pub scenario: Option<Scenario>,

    /// Report audience: patient or clinical.
    #[arg(long, default_value = "patient")]
    pub view: ReportView,

    /// Print the screening transaction as JSON instead of a rendered report.
    #[arg(long)]
    pub json: bool,

    /// Attach an imaging file, as <category>=<path>. Repeatable.
    #[arg(long = "attach", value_name = "CATEGORY=PATH", value_parser = parse_attachment)]
    pub attachments: Vec<(ImagingCategory, PathBuf)>,
}

fn parse_attachment(value: &str) -> Result<(ImagingCategory, PathBuf), String> {
    let (category, path) = value
        .split_once('=')
        .ok_or_else(|| format!("expected <category>=<path>, got {value:?}"))?;
    if path.is_empty() {
        return Err(format!("{category} has no path"));
    }
    let category = category.parse().map_err(|e| format!("{e}"))?;
    Ok((category, PathBuf::from(path)))
}
