use crate::aspects::{AspectCalculator, AspectSettings};
use crate::ephemeris::{Body, BodyPositions, YearPositions};
use crate::report::types::{DailyRecord, Normalization, Report};
use crate::zodiac::{zodiac_sign, SIGNS};

/// Builds the yearly report from birth and transit positions
pub struct ReportAssembler {
    calculator: AspectCalculator,
}

impl ReportAssembler {
    pub fn new(settings: AspectSettings) -> Self {
        Self {
            calculator: AspectCalculator::with_settings(settings),
        }
    }

    /// Score every day in date order, normalize, then mark sign transitions.
    pub fn assemble(&self, birth: &BodyPositions, year: &YearPositions) -> Report {
        let mut records = Vec::with_capacity(year.day_count());

        for (index, date) in year.dates.iter().enumerate() {
            let transit = year.transit_at(index);
            let breakdown = self.calculator.breakdown(birth, &transit);
            log::debug!(
                "{}: score {:.2} from {} hits over {} pairs",
                date,
                breakdown.score,
                breakdown.hits.len(),
                breakdown.pairs_compared
            );

            records.push(DailyRecord {
                date: *date,
                raw_score: breakdown.score,
                normalized_score: 0.0,
                mars_sign: year.longitude(Body::Mars, index).and_then(zodiac_sign),
                venus_sign: year.longitude(Body::Venus, index).and_then(zodiac_sign),
                transition: None,
                hits: breakdown.hits.len(),
                pairs_compared: breakdown.pairs_compared,
            });
        }

        let normalization = normalize_records(&mut records);
        if let Normalization::Degenerate { score } = normalization {
            log::warn!(
                "All {} daily scores in {} equal {:.2}; normalized scores set to 0",
                records.len(),
                year.year,
                score
            );
        }

        let marked = mark_transitions(&mut records, year.year);
        log::info!(
            "Assembled {} daily records for {} with {} sign transitions",
            records.len(),
            year.year,
            marked
        );

        Report {
            year: year.year,
            records,
            normalization,
        }
    }
}

impl Default for ReportAssembler {
    fn default() -> Self {
        Self::new(AspectSettings::default())
    }
}

/// Min/max rescale of `scores` to 0..=100.
///
/// When every score is equal the range is zero and each value maps to 0.
pub fn normalize(scores: &[f64]) -> (Vec<f64>, Normalization) {
    if scores.is_empty() {
        return (Vec::new(), Normalization::Empty);
    }

    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range == 0.0 {
        return (vec![0.0; scores.len()], Normalization::Degenerate { score: min });
    }

    let scaled = scores.iter().map(|s| (s - min) / range * 100.0).collect();
    (scaled, Normalization::Scaled { min, max })
}

/// Fill `normalized_score` on every record from its raw score.
pub fn normalize_records(records: &mut [DailyRecord]) -> Normalization {
    let raw: Vec<f64> = records.iter().map(|r| r.raw_score).collect();
    let (scaled, normalization) = normalize(&raw);
    for (record, value) in records.iter_mut().zip(scaled) {
        record.normalized_score = value;
    }
    normalization
}

/// Flag the record on each sign's calendar start date. Returns how many
/// records were marked.
pub fn mark_transitions(records: &mut [DailyRecord], year: i32) -> usize {
    let mut marked = 0;
    for meta in SIGNS.iter() {
        let Some(start) = meta.sign.start_date(year) else {
            continue;
        };
        if let Some(record) = records.iter_mut().find(|r| r.date == start) {
            record.transition = Some(meta.sign);
            marked += 1;
        }
    }
    marked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_scaled() {
        let (scaled, norm) = normalize(&[10.0, 20.0, 15.0]);
        assert_eq!(scaled, vec![0.0, 100.0, 50.0]);
        assert_eq!(norm, Normalization::Scaled { min: 10.0, max: 20.0 });
    }

    #[test]
    fn test_normalize_degenerate() {
        let (scaled, norm) = normalize(&[50.0, 50.0]);
        assert_eq!(scaled, vec![0.0, 0.0]);
        assert_eq!(norm, Normalization::Degenerate { score: 50.0 });
    }

    #[test]
    fn test_normalize_empty() {
        let (scaled, norm) = normalize(&[]);
        assert!(scaled.is_empty());
        assert_eq!(norm, Normalization::Empty);
    }
}
