use crate::error::{MovieDbError, Result};
use crate::store::StorageKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_NAME: &str = "movie_db";
const DEFAULT_WEBSITE_OUTPUT: &str = "index.html";

/// Keys accepted by `moviedb config <key> [value]`.
pub const CONFIG_KEYS: [&str; 5] = [
    "storage",
    "name",
    "api-key",
    "website-output",
    "template-dir",
];

/// Configuration for moviedb, stored as `config.json` in the app directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieDbConfig {
    /// Backend used when no `--json`/`--csv` flag is given
    #[serde(default)]
    pub storage: StorageKind,

    /// Data file stem; the extension comes from the backend
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_website_output")]
    pub website_output: PathBuf,

    /// Directory with `index.html`/`movie.html` overriding the built-in templates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_website_output() -> PathBuf {
    PathBuf::from(DEFAULT_WEBSITE_OUTPUT)
}

impl Default for MovieDbConfig {
    fn default() -> Self {
        Self {
            storage: StorageKind::default(),
            name: default_name(),
            api_key: None,
            website_output: default_website_output(),
            template_dir: None,
        }
    }
}

impl MovieDbConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(MovieDbError::Io(e)),
        };

        serde_json::from_str(&content).map_err(|e| {
            MovieDbError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Display value of a config key, `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage" => Some(self.storage.to_string()),
            "name" => Some(self.name.clone()),
            "api-key" => Some(self.api_key.clone().unwrap_or_default()),
            "website-output" => Some(self.website_output.display().to_string()),
            "template-dir" => Some(
                self.template_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    /// Set a key from its string form. An empty value clears optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match key {
            "storage" => {
                self.storage = value.parse().map_err(|e: MovieDbError| e.to_string())?;
            }
            "name" => {
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(format!("Invalid data file name: '{}'", value));
                }
                self.name = value.to_string();
            }
            "api-key" => {
                self.api_key = Some(value.to_string()).filter(|v| !v.is_empty());
            }
            "website-output" => {
                if value.is_empty() {
                    return Err("Website output path cannot be empty".to_string());
                }
                self.website_output = PathBuf::from(value);
            }
            "template-dir" => {
                self.template_dir = Some(PathBuf::from(value)).filter(|_| !value.is_empty());
            }
            _ => {
                return Err(format!(
                    "Unknown config key: {} (expected one of {})",
                    key,
                    CONFIG_KEYS.join(", ")
                ))
            }
        }
        Ok(())
    }
}
