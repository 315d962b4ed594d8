//! Birth and transit position lookups on top of an [`EphemerisProvider`].

use crate::ephemeris::provider::{EphemerisError, EphemerisProvider};
use crate::ephemeris::types::{Body, BodyPositions, YearPositions};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

/// Positions of every body at the birth instant.
///
/// All-or-nothing: the first failing body aborts the lookup.
pub fn fetch_birth_positions<P: EphemerisProvider + ?Sized>(
    provider: &mut P,
    bodies: &[Body],
    birth: DateTime<Utc>,
) -> Result<BodyPositions, EphemerisError> {
    let mut positions = BodyPositions::new();
    for &body in bodies {
        let lon = provider.longitude_at(body, birth)?;
        if !lon.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                body,
                datetime: birth,
                message: format!("non-finite birth longitude {}", lon),
            });
        }
        log::debug!("Birth {} at {:.4}°", body, lon);
        positions.insert(body, lon);
    }
    log::info!("Fetched {} birth positions for {}", positions.len(), birth);
    Ok(positions)
}

/// Daily positions of every body for Jan 1 through Dec 31 of `year`.
///
/// The first body's dates become the year's date axis; every other series
/// must match it exactly.
pub fn fetch_year_positions<P: EphemerisProvider + ?Sized>(
    provider: &mut P,
    bodies: &[Body],
    year: i32,
) -> Result<YearPositions, EphemerisError> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(EphemerisError::InvalidYear(year))?;
    let stop = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(EphemerisError::InvalidYear(year))?;

    let mut dates: Option<Vec<NaiveDate>> = None;
    let mut series = BTreeMap::new();

    for &body in bodies {
        let daily = provider.daily_longitudes(body, start, stop)?;
        if daily.dates.len() != daily.longitudes.len() {
            return Err(EphemerisError::SeriesMismatch {
                body,
                message: format!(
                    "{} dates but {} samples",
                    daily.dates.len(),
                    daily.longitudes.len()
                ),
            });
        }

        match &dates {
            None => dates = Some(daily.dates.clone()),
            Some(expected) if *expected != daily.dates => {
                return Err(EphemerisError::SeriesMismatch {
                    body,
                    message: format!(
                        "expected {} days starting {:?}, got {} starting {:?}",
                        expected.len(),
                        expected.first(),
                        daily.dates.len(),
                        daily.dates.first()
                    ),
                });
            }
            Some(_) => {}
        }

        let missing = daily.missing_count();
        if missing > 0 {
            log::warn!("{} has {} missing daily samples in {}", body, missing, year);
        }
        series.insert(body, daily.longitudes);
    }

    let dates = dates.unwrap_or_default();
    log::info!("Fetched {} days of positions for {} bodies in {}", dates.len(), series.len(), year);

    Ok(YearPositions { year, dates, series })
}
