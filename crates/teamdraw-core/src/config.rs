//! Draw configuration for teamdraw
//!
//! Lookup order: an explicit `--config` path, then `teamdraw.toml` in the
//! root directory, then `config.toml` in the user config directory
//! (`$TEAMDRAW_CONFIG_DIR` overrides it). Without any file the built-in
//! defaults apply.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bail_config;
use crate::error::{Result, TeamdrawError};
use crate::participant::Grade;

pub use types::{DrawConfig, FileConfig, GradeConfig, RegistrationColumns};

/// Config file looked up in the root directory
pub const CONFIG_FILE: &str = "teamdraw.toml";

const GLOBAL_CONFIG_DIR: &str = "teamdraw";
const GLOBAL_CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "TEAMDRAW_CONFIG_DIR";

impl DrawConfig {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TeamdrawError::Other(format!("failed to read config {}: {}", path.display(), e))
        })?;
        let config: DrawConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration for a run
    ///
    /// Returns the config together with the file it came from, if any.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            let resolved = resolve_path(root, path);
            return Ok((Self::load(&resolved)?, Some(resolved)));
        }

        let local = root.join(CONFIG_FILE);
        if local.is_file() {
            return Ok((Self::load(&local)?, Some(local)));
        }

        if let Some(global) = global_config_path().filter(|p| p.is_file()) {
            return Ok((Self::load(&global)?, Some(global)));
        }

        debug!("no config file found, using defaults");
        Ok((Self::default(), None))
    }

    pub fn validate(&self) -> Result<()> {
        if self.sizing.members_per_team == 0 {
            bail_config!("sizing.members_per_team must be at least 1");
        }
        if self.sizing.large_roster_teams == 0 || self.sizing.medium_roster_teams == 0 {
            bail_config!("team counts must be at least 1");
        }
        if self.grades.order.is_empty() {
            bail_config!("grades.order must name at least one grade");
        }
        if let Some(blank) = self.grades.order.iter().position(|g| g.trim().is_empty()) {
            bail_config!("grades.order[{}] is blank", blank);
        }
        if self.grades.default.trim().is_empty() {
            bail_config!("grades.default must not be blank");
        }
        Ok(())
    }

    /// Grade fill order, normalized
    pub fn grade_order(&self) -> Vec<Grade> {
        self.grades.order.iter().map(|g| Grade::from(g.as_str())).collect()
    }

    pub fn default_grade(&self) -> Grade {
        Grade::from(self.grades.default.as_str())
    }

    /// Where the updated grading sheet goes; the grading input unless overridden
    pub fn grading_output(&self) -> &Path {
        self.files
            .grading_output
            .as_deref()
            .unwrap_or(&self.files.grading)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Join relative paths onto `root`
pub fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn global_config_path() -> Option<PathBuf> {
    let config_dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => dirs::config_dir()?.join(GLOBAL_CONFIG_DIR),
    };
    Some(config_dir.join(GLOBAL_CONFIG_FILE))
}
