use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use phonebook_core::rules::{
    validate_name, validate_phone, DEFAULT_COPY_FEEDBACK_MS, MAX_COPY_FEEDBACK_MS,
};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "phonebook";
const CONFIG_FILENAME: &str = "config.toml";
const LOG_FILENAME: &str = "phonebook-tui.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub copy_feedback_ms: u64,
    pub seed_defaults: bool,
    pub log_file: Option<PathBuf>,
    pub contacts: Vec<SeedContact>,
}

/// Extra contact loaded into the book at startup. Values are raw and go
/// through the same validation as form input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedContact {
    pub name: String,
    pub phone: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            copy_feedback_ms: DEFAULT_COPY_FEEDBACK_MS,
            seed_defaults: true,
            log_file: None,
            contacts: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid copy_feedback_ms value: {0}")]
    InvalidCopyFeedback(u64),
    #[error("invalid contacts[{index}]: {message}")]
    InvalidContact { index: usize, message: String },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    copy_feedback_ms: Option<u64>,
    seed_defaults: Option<bool>,
    log_file: Option<PathBuf>,
    contacts: Option<Vec<SeedContact>>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

/// Default location of the TUI log file.
pub fn default_log_path() -> Result<PathBuf> {
    let base = if let Some(dir) = env::var_os("XDG_STATE_HOME") {
        let path = PathBuf::from(dir);
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfigPath(path));
        }
        path
    } else {
        let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
        home.join(".local").join("state")
    };
    Ok(base.join(APP_DIR).join(LOG_FILENAME))
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(ms) = parsed.copy_feedback_ms {
        config.copy_feedback_ms = validate_copy_feedback_ms(ms)?;
    }

    if let Some(seed) = parsed.seed_defaults {
        config.seed_defaults = seed;
    }

    if let Some(path) = parsed.log_file {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfigPath(path));
        }
        config.log_file = Some(path);
    }

    if let Some(contacts) = parsed.contacts {
        for (index, contact) in contacts.iter().enumerate() {
            validate_name(&contact.name).map_err(|err| ConfigError::InvalidContact {
                index,
                message: err.to_string(),
            })?;
            validate_phone(&contact.phone).map_err(|err| ConfigError::InvalidContact {
                index,
                message: err.to_string(),
            })?;
        }
        config.contacts = contacts;
    }

    Ok(config)
}

pub fn validate_copy_feedback_ms(value: u64) -> Result<u64> {
    if value == 0 || value > MAX_COPY_FEEDBACK_MS {
        return Err(ConfigError::InvalidCopyFeedback(value));
    }
    Ok(value)
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, ConfigError, ConfigFile, SeedContact};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn restrict_permissions(path: &Path) {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path).expect("metadata").permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms).expect("chmod");
        }
    }

    fn empty_file() -> ConfigFile {
        ConfigFile {
            copy_feedback_ms: None,
            seed_defaults: None,
            log_file: None,
            contacts: None,
        }
    }

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            copy_feedback_ms: Some(1_500),
            seed_defaults: Some(false),
            log_file: Some(PathBuf::from("/tmp/phonebook.log")),
            contacts: Some(vec![SeedContact {
                name: "Ольга Кузнецова".to_string(),
                phone: "89001234567".to_string(),
            }]),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.copy_feedback_ms, 1_500);
        assert!(!merged.seed_defaults);
        assert_eq!(merged.log_file, Some(PathBuf::from("/tmp/phonebook.log")));
        assert_eq!(merged.contacts.len(), 1);
    }

    #[test]
    fn merge_config_defaults() {
        let merged = merge_config(empty_file()).expect("merge");
        assert_eq!(merged.copy_feedback_ms, 2_000);
        assert!(merged.seed_defaults);
        assert!(merged.contacts.is_empty());
    }

    #[test]
    fn merge_config_rejects_zero_feedback_window() {
        let mut parsed = empty_file();
        parsed.copy_feedback_ms = Some(0);
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCopyFeedback(0)));
    }

    #[test]
    fn merge_config_rejects_invalid_seed_contact() {
        let mut parsed = empty_file();
        parsed.contacts = Some(vec![
            SeedContact {
                name: "Anna".to_string(),
                phone: "89001234567".to_string(),
            },
            SeedContact {
                name: "Boris".to_string(),
                phone: "123".to_string(),
            },
        ]);
        let err = merge_config(parsed).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("contacts[1]"), "{message}");
        assert!(message.contains("от 10 до 15 цифр"), "{message}");
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
    }

    #[test]
    fn load_at_path_skips_missing_optional_file() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        assert!(load_at_path(&missing, false).expect("load").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "copy_feedback_ms = 500\nseed_defaults = false\n\n[[contacts]]\nname = \"Anna Smith\"\nphone = \"+1 415 555 1212\"\n",
        )
        .expect("write config");
        restrict_permissions(&path);

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.copy_feedback_ms, 500);
        assert!(!config.seed_defaults);
        assert_eq!(config.contacts[0].name, "Anna Smith");
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "due_soon_days = 5\n").expect("write config");
        restrict_permissions(&path);

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
