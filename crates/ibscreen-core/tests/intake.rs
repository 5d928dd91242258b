use ibscreen_core::models::attachment::{ImagingAttachment, ImagingCategory};
use ibscreen_core::models::intake::{IntakeRecord, Sex, bristol_description};

const PIXEL_PNG: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

fn sample_record() -> IntakeRecord {
    IntakeRecord {
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
        past_diagnoses: "Normal colonoscopy. Pain relieved by defecation.".to_string(),
        previous_procedures: vec!["Colonoscopy".to_string()],
        medications: "Bentyl".to_string(),
        imaging: Vec::new(),
    }
}

#[test]
fn attaching_same_category_replaces_previous_upload() {
    let mut record = sample_record();
    record.attach(ImagingAttachment::from_bytes(b"first", "image/png", ImagingCategory::Endoscopy));
    record.attach(ImagingAttachment::from_bytes(b"scan", "image/jpeg", ImagingCategory::Radiology));
    record.attach(ImagingAttachment::from_bytes(b"second", "image/webp", ImagingCategory::Endoscopy));

    assert_eq!(record.imaging.len(), 2);
    let endoscopy = record.attachment(ImagingCategory::Endoscopy).unwrap();
    assert_eq!(endoscopy.mime_type, "image/webp");
    assert_eq!(endoscopy.decode().unwrap(), b"second");
    assert_eq!(record.imaging[0].category, ImagingCategory::Endoscopy);
}

#[test]
fn detach_removes_only_the_named_category() {
    let mut record = sample_record();
    record.attach(ImagingAttachment::from_bytes(b"a", "image/png", ImagingCategory::LabReport));
    record.attach(ImagingAttachment::from_bytes(b"b", "image/png", ImagingCategory::Morphology));

    let removed = record.detach(ImagingCategory::LabReport).unwrap();

    assert_eq!(removed.category, ImagingCategory::LabReport);
    assert_eq!(record.imaging.len(), 1);
    assert!(record.detach(ImagingCategory::LabReport).is_none());
}

#[test]
fn toggling_a_procedure_keeps_tags_unique() {
    let mut record = sample_record();

    assert!(record.toggle_procedure("Breath Test"));
    assert!(!record.toggle_procedure("Colonoscopy"));
    assert!(record.toggle_procedure("Colonoscopy"));

    assert_eq!(record.previous_procedures, vec!["Breath Test", "Colonoscopy"]);
}

#[test]
fn data_url_is_split_into_media_type_and_payload() {
    let url = format!("data:image/png;base64,{PIXEL_PNG}");

    let attachment = ImagingAttachment::from_data_url(&url, ImagingCategory::Radiology).unwrap();

    assert_eq!(attachment.mime_type, "image/png");
    assert_eq!(attachment.data, PIXEL_PNG);
    assert_eq!(&attachment.decode().unwrap()[1..4], b"PNG");
}

#[test]
fn malformed_data_urls_are_rejected() {
    for url in [
        "image/png;base64,AAAA",
        "data:image/png;base64",
        "data:image/png,AAAA",
        "data:;base64,AAAA",
    ] {
        assert!(
            ImagingAttachment::from_data_url(url, ImagingCategory::Radiology).is_err(),
            "accepted {url}"
        );
    }
}

#[test]
fn invalid_base64_fails_to_decode() {
    let attachment = ImagingAttachment {
        data: "not base64!".to_string(),
        mime_type: "image/png".to_string(),
        category: ImagingCategory::Morphology,
    };

    let err = attachment.decode().unwrap_err();
    assert!(err.to_string().contains("morphology"));
}

#[test]
fn category_parses_from_its_wire_name() {
    assert_eq!("lab_report".parse::<ImagingCategory>().unwrap(), ImagingCategory::LabReport);
    assert!("xray".parse::<ImagingCategory>().is_err());
}

#[test]
fn record_reads_front_end_json() {
    let json = format!(
        r#"{{
            "age": "35-44",
            "sex": "female",
            "painFrequency": 9,
            "painDurationMonths": 120,
            "bloatingSeverity": 9,
            "stoolType": 1,
            "stressLevel": 10,
            "pastDiagnoses": "Visceral hypersensitivity.",
            "previousProcedures": ["Colonoscopy", "CT Abdomen"],
            "medications": "Amitriptyline",
            "imagingNodes": [{{ "type": "endoscopy", "data": "{PIXEL_PNG}", "mimeType": "image/png" }}]
        }}"#
    );

    let record: IntakeRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(record.sex, Sex::Female);
    // Out-of-range values pass through as entered.
    assert_eq!(record.pain_frequency, 9.0);
    assert_eq!(record.diet_quality, "");
    assert_eq!(record.acoustic_frequency, None);
    assert_eq!(record.imaging[0].category, ImagingCategory::Endoscopy);
}

#[test]
fn bristol_descriptions_cover_one_through_seven() {
    assert!(bristol_description(1.0).unwrap().starts_with("Separate hard lumps"));
    assert!(bristol_description(7.0).unwrap().starts_with("Watery"));
    assert_eq!(bristol_description(0.0), None);
    assert_eq!(bristol_description(8.0), None);
    assert_eq!(bristol_description(4.5), None);
    assert_eq!(bristol_description(-1.0), None);
}

#[test]
fn negative_and_fractional_numbers_are_read_as_entered() {
    let json = r#"{
        "age": "25-34",
        "sex": "other",
        "painFrequency": -1,
        "painDurationMonths": 2.5,
        "bloatingSeverity": 11,
        "stoolType": 3.5,
        "stressLevel": 0,
        "pastDiagnoses": "",
        "medications": ""
    }"#;

    let record: IntakeRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.pain_frequency, -1.0);
    assert_eq!(record.pain_duration_months, 2.5);
    assert_eq!(record.bloating_severity, 11.0);
    assert_eq!(record.stool_type, 3.5);
}

#[test]
fn default_record_matches_the_blank_form() {
    let record = IntakeRecord::default();

    assert_eq!(record.age, "25-34");
    assert_eq!(record.sex, Sex::Female);
    assert_eq!(record.pain_frequency, 2.0);
    assert_eq!(record.pain_duration_months, 6.0);
    assert_eq!(record.bloating_severity, 5.0);
    assert_eq!(record.stool_type, 4.0);
    assert_eq!(record.stress_level, 5.0);
    assert_eq!(record.diet_quality, "General/Mixed");
    assert_eq!(record.acoustic_frequency, Some(12.0));
    assert_eq!(record.breath_voc_signature.as_deref(), Some("Neutral / Baseline"));
    assert!(record.past_diagnoses.is_empty());
    assert!(record.previous_procedures.is_empty());
    assert!(record.medications.is_empty());
    assert!(record.imaging.is_empty());
}
