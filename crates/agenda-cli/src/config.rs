use anyhow::{Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE: &str = "interview_test.db";
pub const DEFAULT_CONFIG_FILE: &str = "agenda.toml";

const CONFIG_ENV: &str = "AGENDA_CONFIG";
const DATABASE_ENV: &str = "AGENDA_DB";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgendaConfig {
    pub database: PathBuf,
    pub import: ImportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub header_rows: usize,
    pub atomic: bool,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            import: ImportConfig::default(),
        }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            header_rows: agenda_sheet::DEFAULT_HEADER_ROWS,
            atomic: false,
        }
    }
}

impl AgendaConfig {
    /// Load the config named on the command line, or fall back to the
    /// environment and then `./agenda.toml`.
    ///
    /// A file named explicitly (flag or env) must exist. The implicit
    /// `./agenda.toml` is optional and built-in defaults apply without it.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // Priority 1: --config
        if let Some(path) = explicit_path {
            return Self::load_required(path);
        }

        // Priority 2: AGENDA_CONFIG environment variable
        if let Some(env_path) = std::env::var_os(CONFIG_ENV) {
            return Self::load_required(&expand_tilde(Path::new(&env_path)));
        }

        // Priority 3: ./agenda.toml, if any
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Read a config file, returning defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let config: AgendaConfig = toml::from_str(&content)
            .map_err(|e| anyhow!("Invalid config file {}: {}", path.display(), e))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn load_required(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
        Self::load_from(path)
    }

    /// Database path by priority: explicit flag, `AGENDA_DB`, then the
    /// config file's `database`.
    pub fn resolve_database(&self, explicit_path: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit_path {
            return expand_tilde(path);
        }

        if let Some(env_path) = std::env::var_os(DATABASE_ENV) {
            return expand_tilde(Path::new(&env_path));
        }

        expand_tilde(&self.database)
    }
}

/// Expand a leading `~/` to the user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    path.to_path_buf()
}
