pub mod calculator;
pub mod types;

pub use calculator::{angular_separation, round2, AspectCalculator};
pub use types::{
    AspectHit, AspectKind, AspectRule, AspectSettings, ScoreBreakdown, DEFAULT_ASPECTS,
    DEFAULT_PRIORITY_BODIES,
};
