use crate::commands::{CmdMessage, CmdResult};
use crate::config::JournalSettings;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let settings = JournalSettings::load(config_dir)?;
            Ok(CmdResult::default().with_settings(settings))
        }
        ConfigAction::ShowKey(key) => {
            let settings = JournalSettings::load(config_dir)?;
            let mut result = CmdResult::default();
            match settings.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => result.add_message(CmdMessage::error(format!("Unknown config key: {}", key))),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let settings = JournalSettings::load(config_dir)?;
            let patch = match JournalSettings::patch_for(&key, &value) {
                Ok(patch) => patch,
                Err(e) => {
                    let mut result = CmdResult::default();
                    result.add_message(CmdMessage::error(e));
                    return Ok(result);
                }
            };

            let updated = settings.merged(patch);
            updated.save(config_dir)?;

            let mut result = CmdResult::default().with_settings(updated.clone());
            let display_val = updated.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}
