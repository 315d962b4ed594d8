use crate::ephemeris::Body;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aspect type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the aspect table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectRule {
    pub kind: AspectKind,
    /// Exact angle in degrees (0..=180)
    pub angle: f64,
    /// Allowed deviation from the exact angle, inclusive
    pub orb: f64,
    /// Score contributed by a match before weighting
    pub score: f64,
}

impl AspectRule {
    pub const fn new(kind: AspectKind, angle: f64, orb: f64, score: f64) -> Self {
        Self {
            kind,
            angle,
            orb,
            score,
        }
    }

    pub fn matches(&self, separation: f64) -> bool {
        (separation - self.angle).abs() <= self.orb
    }
}

/// Default aspect table. Order is match precedence.
pub const DEFAULT_ASPECTS: [AspectRule; 5] = [
    AspectRule::new(AspectKind::Conjunction, 0.0, 8.0, 100.0),
    AspectRule::new(AspectKind::Sextile, 60.0, 6.0, 70.0),
    AspectRule::new(AspectKind::Square, 90.0, 8.0, 25.0),
    AspectRule::new(AspectKind::Trine, 120.0, 8.0, 90.0),
    AspectRule::new(AspectKind::Opposition, 180.0, 8.0, 40.0),
];

pub const DEFAULT_PRIORITY_BODIES: [Body; 3] = [Body::Sun, Body::Venus, Body::Mars];

/// Settings for aspect scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectSettings {
    /// Rules in precedence order; the first match wins
    pub rules: Vec<AspectRule>,
    /// Bodies whose involvement raises a pair's weight
    pub priority_bodies: Vec<Body>,
    /// Weight added per priority body in a pair
    pub priority_bonus: f64,
    /// Score of a day without a single aspect hit
    pub neutral_score: f64,
}

impl Default for AspectSettings {
    fn default() -> Self {
        Self {
            rules: DEFAULT_ASPECTS.to_vec(),
            priority_bodies: DEFAULT_PRIORITY_BODIES.to_vec(),
            priority_bonus: 0.25,
            neutral_score: 50.0,
        }
    }
}

/// A matched birth/transit pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectHit {
    pub birth: Body,
    pub transit: Body,
    pub kind: AspectKind,
    /// Minimal angle between the two longitudes (0..=180)
    pub separation: f64,
    pub weight: f64,
    /// `rule.score * weight`
    pub contribution: f64,
}

/// Every hit of one birth/transit comparison plus the resulting score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub hits: Vec<AspectHit>,
    pub pairs_compared: usize,
    pub score: f64,
}
