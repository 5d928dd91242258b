use ibscreen_core::models::attachment::ImagingCategory;
use ibscreen_core::models::intake::Sex;
use ibscreen_core::scenarios::Scenario;

#[test]
fn every_scenario_is_a_complete_record_with_studies() {
    for scenario in Scenario::ALL {
        let record = scenario.record();

        assert!(!record.past_diagnoses.is_empty(), "{scenario}");
        assert!(!record.previous_procedures.is_empty(), "{scenario}");
        assert!(!record.imaging.is_empty(), "{scenario}");
        for study in &record.imaging {
            assert_eq!(study.mime_type, "image/png");
            assert_eq!(&study.decode().unwrap()[1..4], b"PNG");
        }
    }
}

#[test]
fn inflammatory_mimicry_carries_organic_red_flags() {
    let record = Scenario::InflammatoryMimicry.record();

    assert_eq!(record.sex, Sex::Male);
    assert_eq!(record.pain_frequency, 7.0);
    assert_eq!(record.stool_type, 7.0);
    assert!(record.past_diagnoses.contains("Calprotectin (1200+)"));
    assert_eq!(record.previous_procedures, vec!["Colonoscopy", "Calprotectin Lab"]);
    assert_eq!(record.imaging[0].category, ImagingCategory::LabReport);
}

#[test]
fn primary_visceral_loop_has_two_studies_in_order() {
    let record = Scenario::PrimaryVisceralLoop.record();

    assert_eq!(record.pain_duration_months, 120.0);
    assert_eq!(record.stress_level, 10.0);
    assert_eq!(record.medications, "Linzess, Prozac");
    let categories: Vec<_> = record.imaging.iter().map(|a| a.category).collect();
    assert_eq!(categories, [ImagingCategory::Radiology, ImagingCategory::Endoscopy]);
}

#[test]
fn scenario_parses_from_identifier_or_title() {
    assert_eq!(
        "primary-visceral-loop".parse::<Scenario>().unwrap(),
        Scenario::PrimaryVisceralLoop
    );
    assert_eq!(
        "Neuro-Motility Signature".parse::<Scenario>().unwrap(),
        Scenario::NeuroMotilitySignature
    );
    assert_eq!(
        "cellular_post_viral_shift".parse::<Scenario>().unwrap(),
        Scenario::CellularPostViralShift
    );
    assert!("textbook-ibs".parse::<Scenario>().is_err());
}

#[test]
fn identifiers_and_titles_are_unique() {
    for (i, a) in Scenario::ALL.iter().enumerate() {
        for b in &Scenario::ALL[i + 1..] {
            assert_ne!(a.as_str(), b.as_str());
            assert_ne!(a.title(), b.title());
        }
        assert_eq!(a.title().parse::<Scenario>().unwrap(), *a);
    }
}
