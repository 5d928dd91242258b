use std::path::Path;

use eyre::{Result, WrapErr, eyre};

use ibscreen_bedrock::request::MediaFormat;
use ibscreen_core::models::attachment::{ImagingAttachment, ImagingCategory};
use ibscreen_core::models::intake::IntakeRecord;

use crate::args::Args;

/// The record a run starts from: a preset scenario or an intake file, with
/// any `--attach` studies applied on top.
pub fn initial_record(args: &Args) -> Result<IntakeRecord> {
    let mut record = match (&args.scenario, &args.intake_path) {
        (Some(scenario), _) => {
            tracing::info!(scenario = %scenario, "loaded preset scenario");
            scenario.record()
        }
        (None, Some(path)) => load_record(path)?,
        (None, None) => return Err(eyre!("an intake file or --scenario is required")),
    };

    for (category, path) in &args.attachments {
        record.attach(load_attachment(*category, path)?);
    }
    Ok(record)
}

/// Read an intake record from a JSON file.
pub fn load_record(path: &Path) -> Result<IntakeRecord> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read intake at {}", path.display()))?;
    let record = serde_json::from_str(&contents)
        .wrap_err_with(|| format!("{} is not a valid intake record", path.display()))?;
    Ok(record)
}

/// Read a study from disk, taking its media type from the file extension.
pub fn load_attachment(category: ImagingCategory, path: &Path) -> Result<ImagingAttachment> {
    let format = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(MediaFormat::from_extension)
        .ok_or_else(|| {
            eyre!(
                "{} is not a supported study file (png, jpeg, gif, webp or pdf)",
                path.display()
            )
        })?;

    let bytes = std::fs::read(path)
        .wrap_err_with(|| format!("failed to read study at {}", path.display()))?;

    tracing::info!(
        category = %category,
        path = %path.display(),
        bytes = bytes.len(),
        "attached study"
    );

    Ok(ImagingAttachment::from_bytes(&bytes, format.mime_type(), category))
}
