//! Loading of validation rules.

use std::fs;
use std::path::{Path, PathBuf};

use formlet::pipeline::Rules;
use thiserror::Error;

use crate::paths;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid rules in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Rules from `rules.json` in the config directory, or the defaults when
/// there is no such file.
pub fn load_rules() -> Result<Rules, ConfigError> {
    match paths::rules_file() {
        Some(path) => load_rules_from(&path),
        None => Ok(Rules::default()),
    }
}

pub fn load_rules_from(path: &Path) -> Result<Rules, ConfigError> {
    if !path.exists() {
        log::debug!("no rules file at {}, using defaults", path.display());
        return Ok(Rules::default());
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rules = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("loaded rules from {}", path.display());
    Ok(rules)
}
