use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The seven classical bodies scored by the engine.
///
/// Declaration order is the iteration order of every position set, so pair
/// enumeration in the scorer is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Body {
    pub const ALL: [Body; 7] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalize an unwrapped longitude into [0, 360).
pub fn normalize_longitude(lon: f64) -> f64 {
    let wrapped = lon.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Longitudes keyed by body, iterated in body order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyPositions {
    positions: BTreeMap<Body, f64>,
}

impl BodyPositions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same longitude for every listed body.
    pub fn uniform(bodies: &[Body], lon: f64) -> Self {
        bodies.iter().map(|b| (*b, lon)).collect()
    }

    pub fn insert(&mut self, body: Body, lon: f64) {
        self.positions.insert(body, lon);
    }

    pub fn get(&self, body: Body) -> Option<f64> {
        self.positions.get(&body).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Body, f64)> + '_ {
        self.positions.iter().map(|(b, lon)| (*b, *lon))
    }
}

impl FromIterator<(Body, f64)> for BodyPositions {
    fn from_iter<I: IntoIterator<Item = (Body, f64)>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

/// One body's daily samples. `None` marks a day the provider had no value for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    pub dates: Vec<NaiveDate>,
    pub longitudes: Vec<Option<f64>>,
}

impl DailySeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn missing_count(&self) -> usize {
        self.longitudes.iter().filter(|l| l.is_none()).count()
    }
}

/// A full year of aligned daily samples for every requested body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearPositions {
    pub year: i32,
    pub dates: Vec<NaiveDate>,
    pub series: BTreeMap<Body, Vec<Option<f64>>>,
}

impl YearPositions {
    pub fn day_count(&self) -> usize {
        self.dates.len()
    }

    /// Transit set for day `index`; bodies with a missing sample are left out.
    pub fn transit_at(&self, index: usize) -> BodyPositions {
        self.series
            .iter()
            .filter_map(|(body, lons)| lons.get(index).copied().flatten().map(|lon| (*body, lon)))
            .collect()
    }

    pub fn longitude(&self, body: Body, index: usize) -> Option<f64> {
        self.series.get(&body).and_then(|lons| lons.get(index).copied().flatten())
    }
}
