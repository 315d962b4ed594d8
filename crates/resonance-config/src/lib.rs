use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use resonance::aspects::AspectRule;
use resonance::ephemeris::Body;
use resonance::ScoringConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BIRTH: &str = "1979-06-04 12:00";
pub const DEFAULT_YEAR: i32 = 1993;

const BIRTH_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// Everything one run needs
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub birth: DateTime<Utc>,
    pub year: i32,
    pub output_dir: PathBuf,
    pub ephemeris_path: Option<PathBuf>,
    pub scoring: ScoringConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            birth: default_birth(),
            year: DEFAULT_YEAR,
            output_dir: PathBuf::from("."),
            ephemeris_path: None,
            scoring: ScoringConfig::default(),
        }
    }
}

fn default_birth() -> DateTime<Utc> {
    // DEFAULT_BIRTH is a fixed valid literal
    NaiveDate::from_ymd_opt(1979, 6, 4)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScoringToml {
    #[serde(default)]
    priority_bodies: Option<Vec<Body>>,
    #[serde(default)]
    priority_bonus: Option<f64>,
    #[serde(default)]
    neutral_score: Option<f64>,
    #[serde(default)]
    aspects: Option<Vec<AspectRule>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RunConfigToml {
    #[serde(default)]
    birth: Option<String>,
    #[serde(default)]
    year: Option<i32>,
    #[serde(default)]
    output_dir: Option<PathBuf>,
    #[serde(default)]
    ephemeris_path: Option<PathBuf>,
    #[serde(default)]
    scoring: ScoringToml,
}

/// Parse a birth timestamp (UTC) such as `1979-06-04 12:00`.
pub fn parse_birth(text: &str) -> anyhow::Result<DateTime<Utc>> {
    let text = text.trim();
    BIRTH_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.and_utc())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid birth timestamp {:?}; expected YYYY-MM-DD HH:MM[:SS]",
                text
            )
        })
}

/// Try `configs/resonance.toml` relative to the working directory and the
/// workspace root. An explicit path must exist.
pub fn read_config_toml_text(explicit: Option<&Path>) -> anyhow::Result<Option<String>> {
    if let Some(path) = explicit {
        let text = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Could not read config {}: {e}", path.display()))?;
        return Ok(Some(text));
    }

    let paths = ["configs/resonance.toml", "../../configs/resonance.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            log::debug!("Loaded configuration from {}", p);
            return Ok(Some(c));
        }
    }
    log::debug!("No configuration file found in {:?}, using defaults", paths);
    Ok(None)
}

pub fn parse_run_config(text: &str) -> anyhow::Result<RunConfig> {
    let root: RunConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse resonance config: {e}"))?;
    let RunConfigToml {
        birth,
        year,
        output_dir,
        ephemeris_path,
        scoring,
    } = root;

    let defaults = RunConfig::default();
    let mut scoring_config = defaults.scoring.clone();
    if let Some(priority) = scoring.priority_bodies {
        scoring_config.aspects.priority_bodies = priority;
    }
    if let Some(bonus) = scoring.priority_bonus {
        scoring_config.aspects.priority_bonus = bonus;
    }
    if let Some(neutral) = scoring.neutral_score {
        scoring_config.aspects.neutral_score = neutral;
    }
    if let Some(rules) = scoring.aspects {
        scoring_config.aspects.rules = rules;
    }

    let config = RunConfig {
        birth: match birth {
            Some(text) => parse_birth(&text)?,
            None => defaults.birth,
        },
        year: year.unwrap_or(defaults.year),
        output_dir: output_dir.unwrap_or(defaults.output_dir),
        ephemeris_path,
        scoring: scoring_config,
    };
    validate_run_config(&config)?;
    Ok(config)
}

/// Load from an explicit path, the default locations, or built-in defaults.
pub fn load_run_config(explicit: Option<&Path>) -> anyhow::Result<RunConfig> {
    match read_config_toml_text(explicit)? {
        Some(text) => parse_run_config(&text),
        None => Ok(RunConfig::default()),
    }
}

pub fn validate_run_config(config: &RunConfig) -> anyhow::Result<()> {
    if !(1..=9999).contains(&config.year) {
        anyhow::bail!("year must be between 1 and 9999, got {}", config.year);
    }
    let aspects = &config.scoring.aspects;
    if aspects.rules.is_empty() {
        anyhow::bail!("scoring.aspects must contain at least one rule");
    }
    for rule in &aspects.rules {
        if !(0.0..=180.0).contains(&rule.angle) {
            anyhow::bail!("aspect {} has angle {} outside 0..=180", rule.kind, rule.angle);
        }
        if rule.orb.is_nan() || rule.orb < 0.0 {
            anyhow::bail!("aspect {} has negative orb {}", rule.kind, rule.orb);
        }
        if !rule.score.is_finite() {
            anyhow::bail!("aspect {} has a non-finite score", rule.kind);
        }
    }
    if !aspects.priority_bonus.is_finite() || !aspects.neutral_score.is_finite() {
        anyhow::bail!("scoring.priority_bonus and scoring.neutral_score must be finite");
    }
    if config.scoring.bodies.len() != Body::ALL.len() {
        anyhow::bail!("all {} bodies must be scored", Body::ALL.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use resonance::aspects::AspectKind;

    #[test]
    fn test_parse_birth_formats() {
        let expected = default_birth();
        assert_eq!(parse_birth("1979-06-04 12:00").unwrap(), expected);
        assert_eq!(parse_birth("1979-06-04T12:00:00").unwrap(), expected);
        assert_eq!(parse_birth(" 1979-06-04 12:00:00 ").unwrap(), expected);
        assert!(parse_birth("04.06.1979 12:00").is_err());
        assert!(parse_birth("1979-13-04 12:00").is_err());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_run_config("").unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.year, 1993);
        assert_eq!(config.birth, parse_birth(DEFAULT_BIRTH).unwrap());
    }

    #[test]
    fn test_full_config() {
        let text = r#"
            birth = "1990-02-14 08:30"
            year = 2024
            output_dir = "out"
            ephemeris_path = "/opt/ephe"

            [scoring]
            priority_bodies = ["moon"]
            priority_bonus = 0.5

            [[scoring.aspects]]
            kind = "conjunction"
            angle = 0
            orb = 5
            score = 100

            [[scoring.aspects]]
            kind = "opposition"
            angle = 180.0
            orb = 5.0
            score = 20.0
        "#;
        let config = parse_run_config(text).unwrap();
        assert_eq!(config.year, 2024);
        assert_eq!(config.birth, parse_birth("1990-02-14 08:30").unwrap());
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.ephemeris_path, Some(PathBuf::from("/opt/ephe")));
        assert_eq!(config.scoring.aspects.priority_bodies, vec![Body::Moon]);
        assert_eq!(config.scoring.aspects.priority_bonus, 0.5);
        assert_eq!(config.scoring.aspects.neutral_score, 50.0);
        assert_eq!(config.scoring.aspects.rules.len(), 2);
        assert_eq!(config.scoring.aspects.rules[1].kind, AspectKind::Opposition);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse_run_config("year = 0").is_err());
        assert!(parse_run_config("birth = \"yesterday\"").is_err());
        assert!(parse_run_config("unknown_key = 1").is_err());
        assert!(parse_run_config("[scoring]\naspects = []").is_err());
        assert!(parse_run_config(
            "[[scoring.aspects]]\nkind = \"square\"\nangle = 270\norb = 8\nscore = 25"
        )
        .is_err());
        assert!(parse_run_config(
            "[[scoring.aspects]]\nkind = \"square\"\nangle = 90\norb = -1\nscore = 25"
        )
        .is_err());
    }

    #[test]
    fn test_load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resonance.toml");
        fs::write(&path, "year = 2001\n").unwrap();

        let config = load_run_config(Some(&path)).unwrap();
        assert_eq!(config.year, 2001);

        let missing = dir.path().join("missing.toml");
        assert!(load_run_config(Some(&missing)).is_err());
    }
}
