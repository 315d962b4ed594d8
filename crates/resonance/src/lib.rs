pub mod aspects;
pub mod ephemeris;
pub mod export;
pub mod rendering;
pub mod report;
pub mod settings;
pub mod zodiac;

pub use settings::ScoringConfig;

use chrono::{DateTime, Utc};
use ephemeris::{fetch_birth_positions, fetch_year_positions, EphemerisError, EphemerisProvider};
use report::{Report, ReportAssembler};

/// Fetch birth and transit positions from `provider` and assemble the
/// yearly report.
pub fn compute_report<P: EphemerisProvider + ?Sized>(
    provider: &mut P,
    config: &ScoringConfig,
    birth: DateTime<Utc>,
    year: i32,
) -> Result<Report, EphemerisError> {
    let birth_positions = fetch_birth_positions(provider, &config.bodies, birth)?;
    let year_positions = fetch_year_positions(provider, &config.bodies, year)?;

    let assembler = ReportAssembler::new(config.aspects.clone());
    Ok(assembler.assemble(&birth_positions, &year_positions))
}
