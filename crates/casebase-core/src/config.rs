//! Engine configuration for casebase
//!
//! Configuration lives in a TOML file. Every key is optional; missing keys
//! fall back to the defaults in [`types`].

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bail_invalid;
use crate::error::{CasebaseError, Result};

pub use types::{
    CorpusConfig, EngineConfig, NormalizationConfig, RecommendConfig, WeightConfig,
    DEFAULT_LIMIT, DEFAULT_POPULARITY_MAX, DEFAULT_QUALITY_MAX,
};

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "casebase.toml";

const CONFIG_DIR: &str = "casebase";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "CASEBASE_CONFIG_DIR";

impl WeightConfig {
    /// Reject negative or non-finite weights
    pub fn validate(&self) -> Result<()> {
        for (attribute, value) in self.entries() {
            if !value.is_finite() || value < 0.0 {
                return Err(CasebaseError::InvalidWeight {
                    attribute: attribute.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

impl NormalizationConfig {
    /// Both constants divide a difference, so they must be finite and positive
    pub fn validate(&self) -> Result<()> {
        if !self.popularity_max.is_finite() || self.popularity_max <= 0.0 {
            bail_invalid!("normalization.popularity_max", self.popularity_max);
        }
        if !self.quality_max.is_finite() || self.quality_max <= 0.0 {
            bail_invalid!("normalization.quality_max", self.quality_max);
        }
        Ok(())
    }
}

impl EngineConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        self.normalization.validate()?;
        if self.recommend.default_limit == 0 {
            bail_invalid!("recommend.default_limit", 0);
        }
        Ok(())
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CasebaseError::io_operation("read config", path.display(), e))?;
        let config: EngineConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve and load the configuration.
    ///
    /// Lookup order: the explicit path, `casebase.toml` in `cwd`, the user
    /// config directory, built-in defaults. An explicit path that does not
    /// exist is an error; the other locations are optional.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(CasebaseError::not_found(
                    "config file",
                    path.display().to_string(),
                ));
            }
            debug!(path = %path.display(), "load_config");
            return Self::load(path);
        }

        let local = cwd.join(LOCAL_CONFIG_FILE);
        if local.exists() {
            debug!(path = %local.display(), "load_config");
            return Self::load(&local);
        }

        if let Some(user) = user_config_path().filter(|p| p.exists()) {
            debug!(path = %user.display(), "load_config");
            return Self::load(&user);
        }

        debug!("load_config_defaults");
        Ok(Self::default())
    }
}

/// `<config_dir>/casebase/config.toml`, or the `CASEBASE_CONFIG_DIR` override
fn user_config_path() -> Option<PathBuf> {
    let dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
        Ok(env_dir) => PathBuf::from(env_dir),
        Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
    };
    Some(dir.join(CONFIG_FILE))
}
