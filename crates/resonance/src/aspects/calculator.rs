use crate::aspects::types::{AspectHit, AspectRule, AspectSettings, ScoreBreakdown};
use crate::ephemeris::{Body, BodyPositions};

/// Minimal angle between two longitudes, in [0, 180].
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let diff = (lon1 - lon2).abs() % 360.0;
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Round half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Aspect scorer
pub struct AspectCalculator {
    settings: AspectSettings,
}

impl AspectCalculator {
    /// Create a calculator with the default aspect table
    pub fn new() -> Self {
        Self::with_settings(AspectSettings::default())
    }

    pub fn with_settings(settings: AspectSettings) -> Self {
        Self { settings }
    }

    /// First rule whose orb contains `separation`, in table order
    pub fn match_aspect(&self, separation: f64) -> Option<&AspectRule> {
        self.settings.rules.iter().find(|rule| rule.matches(separation))
    }

    /// Weight of a pair: 1.0 plus the bonus for each priority body involved
    pub fn pair_weight(&self, birth: Body, transit: Body) -> f64 {
        let bonus = |body: Body| {
            if self.settings.priority_bodies.contains(&body) {
                self.settings.priority_bonus
            } else {
                0.0
            }
        };
        1.0 + bonus(birth) + bonus(transit)
    }

    /// Compare every birth body with every transit body (same-named pairs
    /// included) and collect the matches.
    pub fn breakdown(&self, birth: &BodyPositions, transit: &BodyPositions) -> ScoreBreakdown {
        let mut hits = Vec::new();
        let mut pairs_compared = 0;

        for (b_body, b_lon) in birth.iter() {
            for (t_body, t_lon) in transit.iter() {
                pairs_compared += 1;
                let separation = angular_separation(b_lon, t_lon);
                if let Some(rule) = self.match_aspect(separation) {
                    let weight = self.pair_weight(b_body, t_body);
                    hits.push(AspectHit {
                        birth: b_body,
                        transit: t_body,
                        kind: rule.kind,
                        separation,
                        weight,
                        contribution: rule.score * weight,
                    });
                }
            }
        }

        let score = self.combine(&hits);
        ScoreBreakdown {
            hits,
            pairs_compared,
            score,
        }
    }

    /// Daily resonance score of `transit` against `birth`
    pub fn score(&self, birth: &BodyPositions, transit: &BodyPositions) -> f64 {
        self.breakdown(birth, transit).score
    }

    /// Mean contribution damped by `ln(1 + hits)`, or the neutral score
    /// when nothing matched.
    fn combine(&self, hits: &[AspectHit]) -> f64 {
        if hits.is_empty() {
            return self.settings.neutral_score;
        }
        let total: f64 = hits.iter().map(|h| h.contribution).sum();
        let count = hits.len() as f64;
        round2((total / count) * count.ln_1p())
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::types::AspectKind;

    #[test]
    fn test_angular_separation_wraps() {
        assert_eq!(angular_separation(10.0, 350.0), 20.0);
        assert_eq!(angular_separation(0.0, 180.0), 180.0);
        assert_eq!(angular_separation(-90.0, 90.0), 180.0);
        assert_eq!(angular_separation(720.0, 0.0), 0.0);
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(round2(1.005_000_1), 1.01);
        assert_eq!(round2(2.344), 2.34);
        assert_eq!(round2(-2.345_000_1), -2.35);
    }

    #[test]
    fn test_match_aspect_first_rule_wins() {
        let calc = AspectCalculator::new();
        // 7° is inside the conjunction orb only
        assert_eq!(calc.match_aspect(7.0).map(|r| r.kind), Some(AspectKind::Conjunction));
        assert_eq!(calc.match_aspect(54.0).map(|r| r.kind), Some(AspectKind::Sextile));
        assert_eq!(calc.match_aspect(53.9), None);
        assert_eq!(calc.match_aspect(172.0).map(|r| r.kind), Some(AspectKind::Opposition));
    }

    #[test]
    fn test_pair_weight() {
        let calc = AspectCalculator::new();
        assert_eq!(calc.pair_weight(Body::Sun, Body::Mars), 1.5);
        assert_eq!(calc.pair_weight(Body::Moon, Body::Venus), 1.25);
        assert_eq!(calc.pair_weight(Body::Venus, Body::Saturn), 1.25);
        assert_eq!(calc.pair_weight(Body::Jupiter, Body::Saturn), 1.0);
    }
}
