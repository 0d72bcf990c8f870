use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{
    domain::ordering::TailPlacement,
    error::{BoardError, Result},
};

/// Board-wide settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Where a card appended to a list lands
    #[serde(default)]
    pub tail_placement: TailPlacement,
    /// Creator name recorded when no actor is signed in
    #[serde(default = "default_unknown_actor")]
    pub unknown_actor: String,
}

fn default_unknown_actor() -> String {
    "unknown".to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            tail_placement: TailPlacement::default(),
            unknown_actor: default_unknown_actor(),
        }
    }
}

impl BoardConfig {
    pub fn with_tail_placement(mut self, placement: TailPlacement) -> Self {
        self.tail_placement = placement;
        self
    }

    /// Parses a JSON document. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            tail_placement = ?config.tail_placement,
            "loaded board config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.unknown_actor.trim().is_empty() {
            return Err(BoardError::ConfigError(
                "unknown_actor must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
