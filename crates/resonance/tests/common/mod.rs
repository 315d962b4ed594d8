#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use resonance::ephemeris::{Body, BodyPositions, EphemerisError, EphemerisProvider};

/// Provider backed by a closure; `None` means "no sample".
pub struct FnEphemeris<F> {
    f: F,
    pub calls: usize,
}

impl<F> FnEphemeris<F>
where
    F: FnMut(Body, DateTime<Utc>) -> Option<f64>,
{
    pub fn new(f: F) -> Self {
        Self { f, calls: 0 }
    }
}

impl<F> EphemerisProvider for FnEphemeris<F>
where
    F: FnMut(Body, DateTime<Utc>) -> Option<f64>,
{
    fn longitude_at(&mut self, body: Body, at: DateTime<Utc>) -> Result<f64, EphemerisError> {
        self.calls += 1;
        (self.f)(body, at).ok_or_else(|| EphemerisError::CalculationFailed {
            body,
            datetime: at,
            message: "no sample".to_string(),
        })
    }
}

/// Mean daily motion in degrees, roughly the real bodies'
fn mean_motion(body: Body) -> (f64, f64) {
    match body {
        Body::Sun => (280.46, 0.9856),
        Body::Moon => (218.32, 13.1764),
        Body::Mercury => (252.25, 4.0923),
        Body::Venus => (181.98, 1.6021),
        Body::Mars => (355.43, 0.5240),
        Body::Jupiter => (34.35, 0.0831),
        Body::Saturn => (50.08, 0.0335),
    }
}

/// Uniform circular motion from J2000; good enough to make scores vary.
pub fn linear_motion(body: Body, at: DateTime<Utc>) -> f64 {
    let epoch = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    let days = (at - epoch).num_seconds() as f64 / 86_400.0;
    let (base, speed) = mean_motion(body);
    (base + speed * days).rem_euclid(360.0)
}

pub fn linear_ephemeris() -> FnEphemeris<impl FnMut(Body, DateTime<Utc>) -> Option<f64>> {
    FnEphemeris::new(|body, at| Some(linear_motion(body, at)))
}

pub fn all_at(lon: f64) -> BodyPositions {
    BodyPositions::uniform(&Body::ALL, lon)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn birth_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1979, 6, 4, 12, 0, 0).unwrap()
}
