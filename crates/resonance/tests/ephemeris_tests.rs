use chrono::{TimeZone, Utc};
use resonance::ephemeris::{fetch_year_positions, Body, EphemerisProvider, SwissEphemerisAdapter};

#[test]
#[ignore] // Requires the native Swiss Ephemeris library
fn test_sun_longitude_at_j2000() {
    let mut adapter = SwissEphemerisAdapter::new(None).unwrap();
    let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();

    let lon = adapter.longitude_at(Body::Sun, j2000).unwrap();
    assert!((lon - 280.37).abs() < 0.1, "got {}", lon);
}

#[test]
#[ignore] // Requires the native Swiss Ephemeris library
fn test_full_year_without_gaps() {
    let mut adapter = SwissEphemerisAdapter::new(None).unwrap();
    let year = fetch_year_positions(&mut adapter, &Body::ALL, 1993).unwrap();

    assert_eq!(year.day_count(), 365);
    for (body, lons) in &year.series {
        assert!(lons.iter().all(|l| matches!(l, Some(v) if (0.0..360.0).contains(v))), "{}", body);
    }
}

#[test]
fn test_adapter_without_path_uses_builtin_ephemeris() {
    let adapter = SwissEphemerisAdapter::new(None).unwrap();
    assert!(adapter.ephemeris_path().is_none());
}
