//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::env;
use std::path::{Path, PathBuf};

/// Candidate file names searched in the working directory
const CANDIDATES: [&str; 3] = [".itemlist.toml", "itemlist.toml", ".config/itemlist.toml"];

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Effective settings after overrides
    pub schema: ConfigSchema,
    /// File the settings were read from, if any
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit `path` must exist. Without one, the standard locations are
    /// searched and defaults are used when none is present. Environment
    /// overrides are applied afterwards and the result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(Path::new(".")),
        };

        let mut schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        apply_overrides(&mut schema, |key| env::var(key).ok())?;
        validate(&schema)?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations under `dir`
fn find_config_file(dir: &Path) -> Option<PathBuf> {
    CANDIDATES
        .iter()
        .map(|candidate| dir.join(candidate))
        .find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .map_err(Error::from)
        .context(format!("Failed to parse config file {}", path.display()))
}

/// Apply environment overrides
///
/// Recognized variables:
/// - `ITEMLIST_URL`: payload URL
/// - `ITEMLIST_TIMEOUT_SECS`: request timeout in seconds
/// - `ITEMLIST_POLICY`: fetch failure policy
/// - `ITEMLIST_ASSET_DIR`: fallback asset directory
pub fn apply_overrides<F>(schema: &mut ConfigSchema, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("ITEMLIST_URL") {
        schema.source.url = url;
    }

    if let Some(raw) = lookup("ITEMLIST_TIMEOUT_SECS") {
        schema.source.timeout_secs = raw
            .parse()
            .map_err(|_| Error::invalid_config_value("ITEMLIST_TIMEOUT_SECS", &raw))?;
    }

    if let Some(raw) = lookup("ITEMLIST_POLICY") {
        schema.fallback.policy = raw.parse()?;
    }

    if let Some(dir) = lookup("ITEMLIST_ASSET_DIR") {
        schema.fallback.asset_dir = dir;
    }

    Ok(())
}

/// Validate the configuration
pub fn validate(schema: &ConfigSchema) -> Result<()> {
    let url = &schema.source.url;
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(Error::validation(format!(
            "source.url must start with http:// or https://, got {url:?}"
        )));
    }

    if schema.source.timeout_secs == 0 {
        return Err(Error::validation("source.timeout_secs cannot be zero"));
    }

    if schema.fallback.asset_name.trim().is_empty() {
        return Err(Error::validation("fallback.asset_name cannot be empty"));
    }

    Ok(())
}
