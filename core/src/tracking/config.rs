//! Loading ward definitions from TOML
//!
//! A definitions file replaces the builtin table entirely:
//!
//! ```toml
//! [[ward]]
//! name = "SightWard"
//!
//! [[ability]]
//! name = "ItemGhostWard"
//! lifetime = { type = "fixed", secs = 150.0 }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use super::definitions::{DefinitionConfig, WardDefinitions};

/// Errors that can occur while reading or writing a definitions file
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Serialize error for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        source: toml::ser::Error,
    },
}

/// Load the definitions to track with.
///
/// Falls back to [`WardDefinitions::builtin`] when no path is given or the
/// file does not exist. An existing file that fails to parse is an error.
pub fn load_definitions(path: Option<&Path>) -> Result<WardDefinitions, DefinitionError> {
    let Some(path) = path.filter(|p| p.exists()) else {
        tracing::debug!("Using builtin ward definitions");
        return Ok(WardDefinitions::builtin());
    };

    let config = load_file(path)?;
    let defs = from_config(config, path);
    tracing::info!(path = %path.display(), "Loaded ward definitions");
    Ok(defs)
}

/// Parse definitions from TOML text (no builtin fallback)
pub fn parse_definitions(contents: &str) -> Result<WardDefinitions, toml::de::Error> {
    let config: DefinitionConfig = toml::from_str(contents)?;
    Ok(from_config(config, Path::new("<inline>")))
}

fn from_config(config: DefinitionConfig, origin: &Path) -> WardDefinitions {
    let mut defs = WardDefinitions::new();
    let duplicates = defs.add_config(config);
    if !duplicates.is_empty() {
        tracing::warn!(
            file = %origin.display(),
            ?duplicates,
            "Duplicate ward definitions, keeping the last of each"
        );
    }
    defs
}

/// Load a single TOML definitions file
pub fn load_file(path: &Path) -> Result<DefinitionConfig, DefinitionError> {
    let contents = fs::read_to_string(path).map_err(|e| DefinitionError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| DefinitionError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save definitions to a TOML file
pub fn save_file(path: &Path, config: &DefinitionConfig) -> Result<(), DefinitionError> {
    let contents = toml::to_string_pretty(config).map_err(|e| DefinitionError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    fs::write(path, contents).map_err(|e| DefinitionError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
