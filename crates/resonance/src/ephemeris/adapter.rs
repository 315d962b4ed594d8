use crate::ephemeris::provider::{EphemerisError, EphemerisProvider};
use crate::ephemeris::types::{normalize_longitude, Body};
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::env;
use std::path::{Path, PathBuf};
use swisseph::swe::{calc_ut, julday};

// Swiss Ephemeris flag bits
const FLG_SWIEPH: i32 = 2;
const FLG_MOSEPH: i32 = 4;

// Gregorian calendar for julday
const GREG_CAL: i32 = 1;

/// Swiss Ephemeris adapter implementation.
///
/// Without a data directory the library's built-in analytical (Moshier)
/// ephemeris is used, so no files need to be installed.
pub struct SwissEphemerisAdapter {
    ephemeris_path: Option<PathBuf>,
    flags: i32,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with an optional ephemeris data directory
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let Some(path) = ephemeris_path else {
            log::debug!("No ephemeris path configured, using the built-in Moshier ephemeris");
            return Ok(Self {
                ephemeris_path: None,
                flags: FLG_MOSEPH,
            });
        };

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. \
                          Please ensure Swiss Ephemeris data files are installed."
                    .to_string(),
            });
        }

        // The C library picks the directory up from SE_EPHE_PATH on first use.
        env::set_var("SE_EPHE_PATH", &path);
        log::info!("Using Swiss Ephemeris data files from {}", path.display());

        Ok(Self {
            ephemeris_path: Some(path),
            flags: FLG_SWIEPH,
        })
    }

    pub fn ephemeris_path(&self) -> Option<&Path> {
        self.ephemeris_path.as_deref()
    }

    /// Longitude for a single body at an instant
    pub fn calc_longitude(&self, body: Body, at: DateTime<Utc>) -> Result<f64, EphemerisError> {
        let jd = datetime_to_julian_day(at);
        let code = body_code(body);
        let result = calc_ut(jd, code as u32, self.flags as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                body,
                datetime: at,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        let longitude = result.out[0];
        if !longitude.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                body,
                datetime: at,
                message: format!("non-finite longitude at JD {:.5}", jd),
            });
        }
        Ok(normalize_longitude(longitude))
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn longitude_at(&mut self, body: Body, at: DateTime<Utc>) -> Result<f64, EphemerisError> {
        self.calc_longitude(body, at)
    }
}

/// Swiss Ephemeris body code
fn body_code(body: Body) -> i32 {
    match body {
        Body::Sun => 0,
        Body::Moon => 1,
        Body::Mercury => 2,
        Body::Venus => 3,
        Body::Mars => 4,
        Body::Jupiter => 5,
        Body::Saturn => 6,
    }
}

/// Convert UTC datetime to Julian Day
pub fn datetime_to_julian_day(dt: DateTime<Utc>) -> f64 {
    let hour = dt.hour() as f64;
    let minute = dt.minute() as f64;
    let second = dt.second() as f64;
    let hour_decimal = hour + minute / 60.0 + second / 3600.0;

    julday(dt.year(), dt.month() as i32, dt.day() as i32, hour_decimal, GREG_CAL as u32)
}
