use crate::commands::{CmdMessage, CmdResult};
use crate::config::MovieDbConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = MovieDbConfig::load(config_dir)?;
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let message = match config.get(&key) {
                Some(val) => CmdMessage::info(val),
                None => CmdMessage::error(format!("Unknown config key: {}", key)),
            };
            Ok(CmdResult::default().with_message(message))
        }
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                return Ok(CmdResult::default().with_message(CmdMessage::error(e)));
            }
            config.save(config_dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            Ok(CmdResult::default()
                .with_message(CmdMessage::success(format!("{} set to {}", key, display_val)))
                .with_config(config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::StorageKind;
    use tempfile::TempDir;

    #[test]
    fn set_persists() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::Set("storage".into(), "csv".into())).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(MovieDbConfig::load(dir.path()).unwrap().storage, StorageKind::Csv);
    }

    #[test]
    fn show_key() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("name".into())).unwrap();
        assert_eq!(result.messages[0].content, "movie_db");
    }

    #[test]
    fn unknown_key_is_error_message() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::Set("colour".into(), "red".into())).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn show_all_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(MovieDbConfig::default()));
    }
}
