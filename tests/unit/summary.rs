//! Header summary and card formatting tests

use pretty_assertions::assert_eq;
use test_log::test;

use body_scan_results::models::{overall_confidence, Calibration, Grade, Measurement};
use body_scan_results::ui::components::{format_percentage, ConfidenceTier, MeasurementCard};
use body_scan_results::ui::{InMemoryScanStore, ResultsSummary, ScanStore};

use crate::common::test_data::create_test_measurement;

#[test]
fn test_overall_confidence_matches_mean() {
    let lists: Vec<Vec<f64>> = vec![
        vec![0.5],
        vec![0.9, 0.8],
        vec![0.61, 0.75, 0.98, 0.42],
    ];

    for confidences in lists {
        let measurements: Vec<Measurement> = confidences
            .iter()
            .map(|c| create_test_measurement("Any", *c))
            .collect();
        let expected = confidences.iter().sum::<f64>() / confidences.len() as f64;

        assert!((overall_confidence(&measurements) - expected).abs() < 1e-12);
    }
}

#[test]
fn test_summary_percentage_rounds_to_integer() {
    let mut store = InMemoryScanStore::new();
    store.set_measurements(vec![
        create_test_measurement("Chest", 0.9),
        create_test_measurement("Waist", 0.8),
        create_test_measurement("Hip", 0.71),
    ]);

    let summary = ResultsSummary::from_store(&store);
    // (0.9 + 0.8 + 0.71) / 3 = 0.8033
    assert_eq!(format_percentage(summary.overall_confidence), "80%");
    assert_eq!(summary.count_text(), "3 measurements captured");
}

#[test]
fn test_summary_scale_text() {
    let mut store = InMemoryScanStore::new();
    assert_eq!(ResultsSummary::from_store(&store).scale_line(), "Scale: N/A");

    store.set_calibration(Some(Calibration::new(1.23456)));
    assert_eq!(ResultsSummary::from_store(&store).scale_line(), "Scale: 1.2346");
}

#[test]
fn test_card_tiers_for_reference_confidences() {
    let cases = [
        (0.92, ConfidenceTier::High),
        (0.85, ConfidenceTier::Medium),
        (0.60, ConfidenceTier::Low),
        (0.90, ConfidenceTier::High),
        (0.75, ConfidenceTier::Medium),
    ];

    for (confidence, tier) in cases {
        let measurement = create_test_measurement("Any", confidence);
        assert_eq!(MeasurementCard::new(&measurement, false).tier(), tier, "confidence {}", confidence);
    }
}

#[test]
fn test_card_renders_value_and_grade() {
    let measurement = Measurement::new("Inseam", 82.44, "cm", 0.864, Grade::P1);
    let card = MeasurementCard::new(&measurement, true);

    assert_eq!(card.value_text(), "82.4 cm");
    assert_eq!(card.detail_text().as_deref(), Some("Confidence: 86% • P1"));
}
