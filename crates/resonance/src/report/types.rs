use crate::zodiac::ZodiacSign;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Marker height used for a sign transition in the chart's secondary series
pub const TRANSITION_MARKER: f64 = 100.0;

/// One day of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub raw_score: f64,
    /// Raw score rescaled to 0..=100 across the year
    pub normalized_score: f64,
    pub mars_sign: Option<ZodiacSign>,
    pub venus_sign: Option<ZodiacSign>,
    /// Sign whose calendar start falls on this day
    pub transition: Option<ZodiacSign>,
    pub hits: usize,
    pub pairs_compared: usize,
}

impl DailyRecord {
    pub fn is_transition(&self) -> bool {
        self.transition.is_some()
    }

    /// 100 on a sign transition, 0 otherwise
    pub fn transition_marker(&self) -> f64 {
        if self.is_transition() {
            TRANSITION_MARKER
        } else {
            0.0
        }
    }

    pub fn transition_name(&self) -> &'static str {
        self.transition.map(ZodiacSign::name).unwrap_or("")
    }
}

/// How raw scores were mapped onto 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Normalization {
    /// `(raw - min) / (max - min) * 100`
    Scaled { min: f64, max: f64 },
    /// Every raw score was `score`; all normalized values are 0
    Degenerate { score: f64 },
    /// No records
    Empty,
}

/// A full year of daily records in date order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub year: i32,
    pub records: Vec<DailyRecord>,
    pub normalization: Normalization,
}

impl Report {
    pub fn transitions(&self) -> impl Iterator<Item = &DailyRecord> {
        self.records.iter().filter(|r| r.is_transition())
    }

    pub fn record_on(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.records.iter().find(|r| r.date == date)
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self.normalization, Normalization::Degenerate { .. })
    }
}
