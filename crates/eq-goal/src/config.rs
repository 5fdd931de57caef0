// config.rs — Quest configuration.
//
// QuestConfig determines where a project keeps its quest state (the event
// log) and which optional settings apply. The `for_project()` constructor
// generates defaults under a `.quest/` directory in the project root;
// `load()` layers `.quest/config.toml` on top when it exists.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GoalError;

/// Resolved configuration for one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestConfig {
    /// Root directory of the project.
    pub project_root: PathBuf,

    /// Directory holding all quest state (`<root>/.quest`).
    pub quest_dir: PathBuf,

    /// Path to the JSONL event log.
    pub events_log: PathBuf,

    /// Path to the optional settings file.
    pub settings_file: PathBuf,

    /// Settings read from `settings_file` (defaults when absent).
    #[serde(default)]
    pub settings: QuestSettings,
}

/// Contents of `.quest/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestSettings {
    #[serde(default)]
    pub events: EventSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

/// Event log settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventSettings {
    /// Append every engine event to the JSONL event log.
    #[serde(default = "default_log_to_file")]
    pub log_to_file: bool,
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            log_to_file: default_log_to_file(),
        }
    }
}

fn default_log_to_file() -> bool {
    true
}

/// Console display settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Print the total score after every recorded event.
    #[serde(default)]
    pub show_score_after_record: bool,
}

impl QuestConfig {
    /// Create a config with the standard `.quest/` layout and default settings.
    pub fn for_project(project_root: impl AsRef<Path>) -> Self {
        let root = project_root.as_ref().to_path_buf();
        let quest_dir = root.join(".quest");
        Self {
            project_root: root,
            events_log: quest_dir.join("events.jsonl"),
            settings_file: quest_dir.join("config.toml"),
            quest_dir,
            settings: QuestSettings::default(),
        }
    }

    /// Like [`QuestConfig::for_project`], then read `.quest/config.toml` if present.
    pub fn load(project_root: impl AsRef<Path>) -> Result<Self, GoalError> {
        let mut config = Self::for_project(project_root);
        if !config.settings_file.exists() {
            return Ok(config);
        }

        let path = config.settings_file.display().to_string();
        let content =
            fs::read_to_string(&config.settings_file).map_err(|source| GoalError::IoError {
                path: path.clone(),
                source,
            })?;
        config.settings =
            toml::from_str(&content).map_err(|source| GoalError::ConfigError { path, source })?;
        tracing::debug!(settings = ?config.settings, "loaded quest settings");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn for_project_uses_quest_dir_layout() {
        let config = QuestConfig::for_project("/tmp/project");
        assert_eq!(config.quest_dir, PathBuf::from("/tmp/project/.quest"));
        assert_eq!(
            config.events_log,
            PathBuf::from("/tmp/project/.quest/events.jsonl")
        );
        assert_eq!(
            config.settings_file,
            PathBuf::from("/tmp/project/.quest/config.toml")
        );
        assert!(config.settings.events.log_to_file);
        assert!(!config.settings.display.show_score_after_record);
    }

    #[test]
    fn load_without_settings_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = QuestConfig::load(dir.path()).unwrap();
        assert_eq!(config.settings, QuestSettings::default());
    }

    #[test]
    fn load_reads_partial_settings() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".quest")).unwrap();
        fs::write(
            dir.path().join(".quest/config.toml"),
            "[display]\nshow_score_after_record = true\n",
        )
        .unwrap();

        let config = QuestConfig::load(dir.path()).unwrap();
        assert!(config.settings.display.show_score_after_record);
        // Missing section keeps its default.
        assert!(config.settings.events.log_to_file);
    }

    #[test]
    fn load_rejects_malformed_settings() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".quest")).unwrap();
        fs::write(dir.path().join(".quest/config.toml"), "[events\nlog_to_file = ").unwrap();

        let result = QuestConfig::load(dir.path());
        assert!(matches!(result, Err(GoalError::ConfigError { .. })));
    }
}
