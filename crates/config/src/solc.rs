use serde::{Deserialize, Serialize};

use crate::consts::{SOLC_OPTIMIZER_RUNS, SOLC_VERSION};

/// Compiler descriptor consumed by the build pipeline. The version is an
/// exact release, never a range: bytecode must be reproducible for
/// explorer verification to succeed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolcConfig {
    pub version: String,
    pub settings: SolcSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolcSettings {
    pub optimizer: OptimizerSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerSettings {
    pub enabled: bool,
    pub runs: u32,
}

impl Default for SolcConfig {
    fn default() -> Self {
        Self {
            version: SOLC_VERSION.to_string(),
            settings: SolcSettings {
                optimizer: OptimizerSettings {
                    enabled: true,
                    runs: SOLC_OPTIMIZER_RUNS,
                },
            },
        }
    }
}

impl SolcConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        let mut parts = self.version.split('.');
        let exact_triple = parts.clone().count() == 3
            && parts.all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));
        if !exact_triple {
            anyhow::bail!(
                "Compiler version {:?} is not an exact semver release",
                self.version
            );
        }
        if self.settings.optimizer.runs == 0 {
            anyhow::bail!("Optimizer runs must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_compiler_descriptor() {
        let config = SolcConfig::default();
        assert_eq!(config.version, "0.8.7");
        assert!(config.settings.optimizer.enabled);
        assert_eq!(config.settings.optimizer.runs, 2000);
        config.validate().unwrap();
    }

    #[test]
    fn test_version_ranges_are_rejected() {
        let mut config = SolcConfig::default();
        config.version = "^0.8.7".to_string();
        assert!(config.validate().is_err());

        config.version = "0.8".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_optimizer_runs_are_rejected() {
        let mut config = SolcConfig::default();
        config.settings.optimizer.runs = 0;
        assert!(config.validate().is_err());
    }
}
