//! Input file for the reverser tool.

use anyhow::{Context, Result};
use matlib::{Point, ReversalPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Points and tuning read from a TOML file.
///
/// ```toml
/// points = [{ x = 1.0, y = 7.0 }, { x = 2.0, y = 9.0 }, { x = 8.0, y = 21.0 }, { x = 10.0, y = 25.0 }]
/// fifth = { x = 30.0, y = -40.0 }
///
/// [policy]
/// relative_margin = 0.25
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base points (empty means "use the defaults or the command line")
    #[serde(default)]
    pub points: Vec<Point>,

    /// Fifth point to add instead of the suggested one
    #[serde(default)]
    pub fifth: Option<Point>,

    /// Reversal synthesis constants
    #[serde(default)]
    pub policy: ReversalPolicy,
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        validate_policy(&self.policy)?;

        for p in self.points.iter().chain(self.fifth.iter()) {
            if !p.x.is_finite() || !p.y.is_finite() {
                anyhow::bail!("Point ({}, {}) is not finite", p.x, p.y);
            }
        }

        Ok(())
    }
}

pub fn validate_policy(policy: &ReversalPolicy) -> Result<()> {
    let fields = [
        ("leverage", policy.leverage),
        ("zero_spread", policy.zero_spread),
        ("relative_margin", policy.relative_margin),
        ("absolute_margin", policy.absolute_margin),
        ("degenerate_spread", policy.degenerate_spread),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            anyhow::bail!("{} must be finite, got {}", name, value);
        }
    }

    if policy.leverage <= 0.0 {
        anyhow::bail!("leverage must be greater than 0, got {}", policy.leverage);
    }

    if policy.zero_spread <= 0.0 {
        anyhow::bail!("zero_spread must be greater than 0, got {}", policy.zero_spread);
    }

    if policy.relative_margin < 0.0 {
        anyhow::bail!("relative_margin cannot be negative, got {}", policy.relative_margin);
    }

    // a zero flat margin can leave the point on the boundary
    if policy.absolute_margin <= 0.0 {
        anyhow::bail!("absolute_margin must be greater than 0, got {}", policy.absolute_margin);
    }

    if policy.degenerate_spread <= 0.0 {
        anyhow::bail!("degenerate_spread must be greater than 0, got {}", policy.degenerate_spread);
    }

    Ok(())
}
