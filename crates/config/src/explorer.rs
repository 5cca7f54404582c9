use serde::{Deserialize, Serialize};

/// Credential for automated contract verification against the block
/// explorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    pub api_key: String,
}

impl ExplorerConfig {
    pub fn new(api_key: &str) -> anyhow::Result<Self> {
        let config = Self {
            api_key: api_key.to_owned(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("Explorer API key is empty");
        }
        Ok(())
    }
}
