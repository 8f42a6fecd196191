use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::model::config::BoardConfig;

/// Error type for config I/O operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no config directory available on this platform")]
    NoConfigDir,
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not edit config: {0}")]
    Edit(#[from] toml_edit::TomlError),
    #[error("unknown config key: {0} (expected one of: {keys})", keys = CONFIG_KEYS.join(", "))]
    UnknownKey(String),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Keys accepted by `set_config_value`, mirroring `BoardConfig`'s fields.
pub const CONFIG_KEYS: [&str; 6] = [
    "card_width",
    "card_gap",
    "days",
    "week_start",
    "grammar",
    "sequence",
];

/// The per-user config file location.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from("", "", "cardboard")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Load the config. A missing file means defaults; a file that exists but
/// does not parse is an error rather than silently ignored settings.
pub fn load_config(path: &Path) -> Result<BoardConfig, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(BoardConfig::default());
        }
        Err(e) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    Ok(toml::from_str(&text)?)
}

/// Update one key in the config file, preserving any formatting and
/// comments already there. Returns the resulting config.
pub fn set_config_value(path: &Path, key: &str, value: &str) -> Result<BoardConfig, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    let mut doc: toml_edit::DocumentMut = text.parse()?;

    match key {
        "card_width" | "card_gap" | "days" | "week_start" => {
            let n: i64 = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            })?;
            doc[key] = toml_edit::value(n);
        }
        "grammar" | "sequence" => {
            doc[key] = toml_edit::value(value);
        }
        _ => return Err(ConfigError::UnknownKey(key.to_string())),
    }

    // Reject values serde would choke on later (negative widths, unknown
    // grammar names) before anything lands on disk.
    let config: BoardConfig = toml::from_str(&doc.to_string())?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(path, doc.to_string()).map_err(|e| ConfigError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::{Grammar, SequenceMode};
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("config.toml")).unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_load_malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "not toml {{{").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_set_then_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");

        set_config_value(&path, "card_width", "320").unwrap();
        set_config_value(&path, "grammar", "label").unwrap();
        set_config_value(&path, "sequence", "all").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.card_width, 320);
        assert_eq!(config.grammar, Grammar::Label);
        assert_eq!(config.sequence, SequenceMode::All);
        assert_eq!(config.card_gap, 16);
    }

    #[test]
    fn test_set_preserves_comments() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "# my settings\ncard_gap = 20\n").unwrap();

        set_config_value(&path, "card_width", "300").unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# my settings"));
        assert!(written.contains("card_gap = 20"));
        assert!(written.contains("card_width = 300"));
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        assert!(matches!(
            set_config_value(&path, "colour", "red"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        assert!(set_config_value(&path, "card_width", "wide").is_err());
        assert!(set_config_value(&path, "grammar", "freeform").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_week_start_may_be_negative() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        set_config_value(&path, "week_start", "-1").unwrap();
        assert_eq!(load_config(&path).unwrap().week_start, -1);
    }
}
