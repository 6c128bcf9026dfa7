use crate::report::DEFAULT_FUEL_RATE;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PlannerConfig {
    pub fuel_rate: f64,
    pub strict_city_names: bool,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "pretty"
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            fuel_rate: DEFAULT_FUEL_RATE,
            strict_city_names: false,
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}

impl PlannerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let fuel_rate = match lookup("FUEL_RATE") {
            Some(raw) => raw.trim().parse::<f64>()?,
            None => defaults.fuel_rate,
        };
        if !fuel_rate.is_finite() || fuel_rate < 0.0 {
            anyhow::bail!("FUEL_RATE must be a non-negative number, got {fuel_rate}");
        }

        let strict_city_names = match lookup("STRICT_CITY_NAMES") {
            Some(raw) => raw.trim().parse::<bool>()?,
            None => defaults.strict_city_names,
        };

        Ok(Self {
            fuel_rate,
            strict_city_names,
            logging: LoggingConfig {
                level: lookup("LOG_LEVEL").unwrap_or(defaults.logging.level),
                format: lookup("LOG_FORMAT").unwrap_or(defaults.logging.format),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(config.fuel_rate, 5.0);
    }

    #[test]
    fn test_overrides() {
        let config = PlannerConfig::from_lookup(lookup_from(&[
            ("FUEL_RATE", "7.5"),
            ("STRICT_CITY_NAMES", "true"),
            ("LOG_LEVEL", "debug"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.fuel_rate, 7.5);
        assert!(config.strict_city_names);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_invalid_fuel_rate() {
        assert!(PlannerConfig::from_lookup(lookup_from(&[("FUEL_RATE", "fast")])).is_err());
        assert!(PlannerConfig::from_lookup(lookup_from(&[("FUEL_RATE", "-1")])).is_err());
    }
}
