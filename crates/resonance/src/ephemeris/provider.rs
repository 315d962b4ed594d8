use crate::ephemeris::types::{Body, DailySeries};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use thiserror::Error;

/// Errors that can occur while looking up positions
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris path not found: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Failed to calculate position for {body} at {datetime}: {message}")]
    CalculationFailed {
        body: Body,
        datetime: DateTime<Utc>,
        message: String,
    },
    #[error("No samples available for {body} between {start} and {stop}")]
    NoData {
        body: Body,
        start: NaiveDate,
        stop: NaiveDate,
    },
    #[error("Series for {body} is not aligned with the year's dates: {message}")]
    SeriesMismatch { body: Body, message: String },
    #[error("Year {0} is outside the supported calendar range")]
    InvalidYear(i32),
}

/// Source of geocentric ecliptic longitudes.
pub trait EphemerisProvider {
    /// Longitude in degrees of `body` at `at`.
    fn longitude_at(&mut self, body: Body, at: DateTime<Utc>) -> Result<f64, EphemerisError>;

    /// One sample per day at 00:00 UTC from `start` to `stop`, both inclusive.
    ///
    /// A failed day is kept as `None`. Only a series without a single usable
    /// sample is an error.
    fn daily_longitudes(
        &mut self,
        body: Body,
        start: NaiveDate,
        stop: NaiveDate,
    ) -> Result<DailySeries, EphemerisError> {
        let mut dates = Vec::new();
        let mut longitudes = Vec::new();

        for date in start.iter_days().take_while(|d| *d <= stop) {
            let at = date.and_time(NaiveTime::default()).and_utc();
            let sample = match self.longitude_at(body, at) {
                Ok(lon) if lon.is_finite() => Some(lon),
                Ok(lon) => {
                    log::warn!("Discarding non-finite longitude {} for {} on {}", lon, body, date);
                    None
                }
                Err(e) => {
                    log::warn!("Missing sample for {} on {}: {}", body, date, e);
                    None
                }
            };
            dates.push(date);
            longitudes.push(sample);
        }

        if longitudes.iter().all(Option::is_none) {
            return Err(EphemerisError::NoData { body, start, stop });
        }

        Ok(DailySeries { dates, longitudes })
    }
}
