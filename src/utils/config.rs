use std::collections::HashMap;
use std::env;
use std::path::Path;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub environment: String,
    pub currency_symbol: String,
    pub pass_threshold: f64,
    pub max_grade: f64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from a `.env`-style file. Variables already set in the process
    /// environment take precedence over the file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let vars = dotenv::from_path_iter(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?
            .collect::<Result<HashMap<String, String>, _>>()
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Self::from_lookup(|key| env::var(key).ok().or_else(|| vars.get(key).cloned()))
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            log_level: lookup("LOG_LEVEL").unwrap_or("warn".to_string()),
            environment: lookup("APP_ENV").unwrap_or("development".to_string()),
            currency_symbol: lookup("INVENTORY_CURRENCY").unwrap_or("$".to_string()),
            pass_threshold: parse_number(&lookup, "GRADES_PASS_THRESHOLD", 5.0)?,
            max_grade: parse_number(&lookup, "GRADES_MAX", 10.0)?,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.currency_symbol.trim().is_empty() {
            return Err(anyhow::anyhow!("INVENTORY_CURRENCY must not be empty"));
        }

        if self.max_grade <= 0.0 {
            return Err(anyhow::anyhow!("GRADES_MAX must be greater than zero"));
        }

        if !(0.0..=self.max_grade).contains(&self.pass_threshold) {
            return Err(anyhow::anyhow!(
                "GRADES_PASS_THRESHOLD must be between 0 and {}",
                self.max_grade
            ));
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_number<F>(lookup: &F, key: &str, default: f64) -> anyhow::Result<f64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| anyhow::anyhow!("{} must be a number, got '{}'", key, raw)),
        None => Ok(default),
    }
}
