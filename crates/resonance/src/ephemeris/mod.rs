pub mod adapter;
pub mod fetcher;
pub mod provider;
pub mod types;

pub use adapter::SwissEphemerisAdapter;
pub use fetcher::{fetch_birth_positions, fetch_year_positions};
pub use provider::{EphemerisError, EphemerisProvider};
pub use types::{normalize_longitude, Body, BodyPositions, DailySeries, YearPositions};
