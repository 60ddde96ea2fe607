use std::path::{Path, PathBuf};

use scribewise_completion::client::EndpointConfig;
use scribewise_completion::revision::MODEL;
use scribewise_core::models::style::WritingStyle;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScribeConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    /// Request JSON-schema responses. Added in v1.
    #[serde(default)]
    pub structured_output: bool,
    #[serde(default)]
    pub writing_style: WritingStyle,
    /// Session index location. Defaults to `sessions.json` next to the
    /// config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sessions_path: Option<PathBuf>,
    pub created_at: jiff::Timestamp,
}

fn default_model() -> String {
    MODEL.to_string()
}

impl Default for ScribeConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            api_url: None,
            api_key: None,
            model: default_model(),
            structured_output: false,
            writing_style: WritingStyle::default(),
            sessions_path: None,
            created_at: jiff::Timestamp::now(),
        }
    }
}

impl ScribeConfig {
    /// Endpoint credentials with the process environment taking precedence
    /// over file values.
    pub fn endpoint(&self) -> EndpointConfig {
        self.endpoint_with(EndpointConfig::from_env())
    }

    pub fn endpoint_with(&self, env: EndpointConfig) -> EndpointConfig {
        EndpointConfig {
            api_url: env.api_url.or_else(|| self.api_url.clone()),
            api_key: env.api_key.or_else(|| self.api_key.clone()),
        }
    }

    pub fn sessions_path(&self) -> eyre::Result<PathBuf> {
        match &self.sessions_path {
            Some(path) => Ok(path.clone()),
            None => Ok(config_dir()?.join("sessions.json")),
        }
    }
}

/// Redacted config info, safe to print.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigInfo {
    pub api_url: Option<String>,
    pub api_key_hint: Option<String>,
    pub model: String,
    pub structured_output: bool,
    pub writing_style: WritingStyle,
    pub created_at: String,
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.scribewise.desktop"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

/// The on-disk config, or defaults when none has been saved yet.
pub fn load_or_default() -> eyre::Result<ScribeConfig> {
    if has_config() {
        load_config()
    } else {
        tracing::debug!("no config file, using defaults");
        Ok(ScribeConfig::default())
    }
}

pub fn load_config() -> eyre::Result<ScribeConfig> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> eyre::Result<ScribeConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: ScribeConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Scribewise."
        ));
    }

    // v0 → v1: add structured_output (off, matching the text-template protocol)
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("structured_output")
            .or_insert(serde_json::Value::Bool(false));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added structured_output)");
    }

    Ok(json)
}

pub fn save_config(config: &ScribeConfig) -> eyre::Result<()> {
    save_config_to(&config_path()?, config)
}

pub fn save_config_to(path: &Path, config: &ScribeConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // The file may hold an API key.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn delete_config() -> eyre::Result<()> {
    let path = config_path()?;
    if path.exists() {
        std::fs::remove_file(&path)?;
        tracing::info!(path = %path.display(), "config deleted");
    }
    Ok(())
}

pub fn config_info(config: &ScribeConfig) -> ConfigInfo {
    ConfigInfo {
        api_url: config.api_url.clone(),
        api_key_hint: config.api_key.as_deref().map(redact_api_key),
        model: config.model.clone(),
        structured_output: config.structured_output,
        writing_style: config.writing_style,
        created_at: config.created_at.to_string(),
    }
}

pub fn redact_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}...{suffix}")
}
