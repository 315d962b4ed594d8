mod common;

use common::{all_at, date};
use resonance::ephemeris::{Body, YearPositions};
use resonance::report::{normalize, Normalization, ReportAssembler};
use resonance::zodiac::ZodiacSign;
use std::collections::BTreeMap;

/// A year whose every body sits at the given longitude on each day
fn uniform_year(year: i32, days: &[(chrono::NaiveDate, Option<f64>)]) -> YearPositions {
    let dates = days.iter().map(|(d, _)| *d).collect();
    let series: BTreeMap<Body, Vec<Option<f64>>> = Body::ALL
        .iter()
        .map(|b| (*b, days.iter().map(|(_, lon)| *lon).collect()))
        .collect();
    YearPositions {
        year,
        dates,
        series,
    }
}

fn full_year_dates(year: i32) -> Vec<chrono::NaiveDate> {
    date(year, 1, 1)
        .iter_days()
        .take_while(|d| *d <= date(year, 12, 31))
        .collect()
}

#[test]
fn test_one_record_per_date() {
    let days: Vec<_> = full_year_dates(1993)
        .into_iter()
        .enumerate()
        .map(|(i, d)| (d, Some(i as f64)))
        .collect();
    let year = uniform_year(1993, &days);

    let report = ReportAssembler::default().assemble(&all_at(0.0), &year);
    assert_eq!(report.records.len(), 365);
    assert_eq!(report.year, 1993);
    assert!(report.records.windows(2).all(|w| w[0].date < w[1].date));
}

#[test]
fn test_normalized_scores_span_full_range() {
    let days = vec![
        (date(1993, 1, 1), Some(0.0)),   // every pair conjunct
        (date(1993, 1, 2), Some(45.0)),  // nothing in orb
        (date(1993, 1, 3), Some(120.0)), // every pair trine
    ];
    let report = ReportAssembler::default().assemble(&all_at(0.0), &uniform_year(1993, &days));

    let raw: Vec<f64> = report.records.iter().map(|r| r.raw_score).collect();
    assert_eq!(raw[0], 475.03);
    assert_eq!(raw[1], 50.0);

    let normalized: Vec<f64> = report.records.iter().map(|r| r.normalized_score).collect();
    let min = normalized.iter().copied().fold(f64::INFINITY, f64::min);
    let max = normalized.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(min, 0.0);
    assert_eq!(max, 100.0);
    assert_eq!(normalized[0], 100.0);
    assert_eq!(normalized[1], 0.0);
    assert!(matches!(report.normalization, Normalization::Scaled { .. }));
}

#[test]
fn test_degenerate_year_is_flagged() {
    let days: Vec<_> = (1..=10).map(|d| (date(1993, 1, d), Some(45.0))).collect();
    let report = ReportAssembler::default().assemble(&all_at(0.0), &uniform_year(1993, &days));

    assert!(report.is_degenerate());
    assert_eq!(report.normalization, Normalization::Degenerate { score: 50.0 });
    for record in &report.records {
        assert_eq!(record.raw_score, 50.0);
        assert_eq!(record.normalized_score, 0.0);
        assert!(record.normalized_score.is_finite());
    }
}

#[test]
fn test_normalize_properties() {
    let cases: Vec<Vec<f64>> = vec![
        vec![1.0, 2.0],
        vec![50.0, 475.03, 93.57, 103.97],
        vec![-3.0, 0.0, 3.0, 1.5],
    ];
    for scores in cases {
        let (scaled, _) = normalize(&scores);
        assert_eq!(scaled.len(), scores.len());
        assert_eq!(scaled.iter().copied().fold(f64::INFINITY, f64::min), 0.0);
        assert_eq!(scaled.iter().copied().fold(f64::NEG_INFINITY, f64::max), 100.0);
    }
}

#[test]
fn test_twelve_transitions_in_full_year() {
    let days: Vec<_> = full_year_dates(2024).into_iter().map(|d| (d, Some(45.0))).collect();
    let report = ReportAssembler::default().assemble(&all_at(0.0), &uniform_year(2024, &days));

    assert_eq!(report.records.len(), 366);
    assert_eq!(report.transitions().count(), 12);

    let aries = report.record_on(date(2024, 3, 21)).unwrap();
    assert_eq!(aries.transition, Some(ZodiacSign::Aries));
    assert_eq!(aries.transition_marker(), 100.0);
    assert_eq!(aries.transition_name(), "Aries");

    let plain = report.record_on(date(2024, 3, 22)).unwrap();
    assert_eq!(plain.transition, None);
    assert_eq!(plain.transition_marker(), 0.0);
    assert_eq!(plain.transition_name(), "");
}

#[test]
fn test_partial_range_marks_only_covered_starts() {
    let days: Vec<_> = date(1993, 1, 1)
        .iter_days()
        .take_while(|d| *d <= date(1993, 3, 1))
        .map(|d| (d, Some(10.0)))
        .collect();
    let report = ReportAssembler::default().assemble(&all_at(0.0), &uniform_year(1993, &days));

    let marked: Vec<_> = report.transitions().map(|r| (r.date, r.transition)).collect();
    assert_eq!(
        marked,
        vec![
            (date(1993, 1, 20), Some(ZodiacSign::Aquarius)),
            (date(1993, 2, 19), Some(ZodiacSign::Pisces)),
        ]
    );
}

#[test]
fn test_sign_labels_follow_mars_and_venus() {
    let mut series = BTreeMap::new();
    for body in Body::ALL {
        series.insert(body, vec![Some(0.0), Some(0.0)]);
    }
    series.insert(Body::Mars, vec![Some(95.0), Some(-10.0)]);
    series.insert(Body::Venus, vec![Some(200.0), None]);
    let year = YearPositions {
        year: 1993,
        dates: vec![date(1993, 5, 1), date(1993, 5, 2)],
        series,
    };

    let report = ReportAssembler::default().assemble(&all_at(0.0), &year);
    assert_eq!(report.records[0].mars_sign, Some(ZodiacSign::Cancer));
    assert_eq!(report.records[0].venus_sign, Some(ZodiacSign::Libra));
    assert_eq!(report.records[1].mars_sign, Some(ZodiacSign::Pisces));
    assert_eq!(report.records[1].venus_sign, None);
    assert_eq!(report.records[1].pairs_compared, 42);
}
