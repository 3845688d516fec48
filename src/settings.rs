use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

use crate::state::DEFAULT_PAGE_SIZE;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("error reading settings from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("could not locate the settings directory: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Words,
    Logs,
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "words" | "dictionary" => Ok(Tool::Words),
            "logs" | "log" => Ok(Tool::Logs),
            _ => Err(format!("unknown tool {:?}, expected words or logs", s)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub default_tool: Tool,
    #[serde(default)]
    pub dictionary: DictionarySettings,
    #[serde(default)]
    pub logs: LogSettings,
    #[serde(default)]
    pub rules: Vec<RulesSettings>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SettingsFromYaml {
    #[serde(default)]
    pub default_tool: Option<Tool>,
    #[serde(default)]
    pub dictionary: Option<DictionarySettings>,
    #[serde(default)]
    pub logs: Option<LogSettings>,
    #[serde(default)]
    pub rules: Vec<RulesSettings>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DictionarySettings {
    #[serde(default)]
    pub candidate_paths: Vec<PathBuf>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for DictionarySettings {
    fn default() -> Self {
        DictionarySettings {
            candidate_paths: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct LogSettings {
    #[serde(default)]
    pub path: PathBuf,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RulesSettings {
    pub name: String,
    pub tool: Tool,
    #[serde(default)]
    pub file_patterns: Vec<String>,
    /// `file_patterns` compiled once when the rule is loaded. Invalid
    /// patterns are left out.
    #[serde(skip)]
    compiled: Vec<Regex>,
}

impl RulesSettings {
    pub fn new(name: &str, tool: Tool, file_patterns: Vec<String>) -> RulesSettings {
        let mut rule = RulesSettings {
            name: name.to_string(),
            tool,
            file_patterns,
            compiled: Vec::new(),
        };
        rule.compile();
        rule
    }

    fn compile(&mut self) {
        self.compiled = self
            .file_patterns
            .iter()
            .filter_map(|pattern| match Regex::new(pattern) {
                Ok(re) => Some(re),
                Err(err) => {
                    warn!("ignoring invalid pattern {:?} in rule {}: {}", pattern, self.name, err);
                    None
                }
            })
            .collect();
    }

    pub fn matches(&self, filename: &str) -> bool {
        self.compiled.iter().any(|re| re.is_match(filename))
    }
}

impl Settings {
    /// Embedded defaults, overridden by `~/.config/wordlog/settings.yaml`
    /// when it exists.
    pub fn new() -> Result<Settings, SettingsError> {
        let mut settings = Settings::default();

        settings.read_from_string(Self::default_settings_yaml_data())?;

        if let Some(filename) = Self::local_settings_filename() {
            if filename.exists() {
                settings.read_from_yaml(&filename)?;
            }
        }

        Ok(settings)
    }

    /// Embedded defaults, overridden by the given file.
    pub fn from_file(path: &Path) -> Result<Settings, SettingsError> {
        let mut settings = Settings::default();
        settings.read_from_string(Self::default_settings_yaml_data())?;
        settings.read_from_yaml(path)?;
        Ok(settings)
    }

    pub fn default_settings_yaml_data() -> &'static str {
        include_str!("../settings.yaml")
    }

    pub fn local_settings_filename() -> Option<PathBuf> {
        let xdg = xdg::BaseDirectories::with_prefix("wordlog").ok()?;
        xdg.find_config_file("settings.yaml")
    }

    pub fn save_default_settings(&self) -> Result<PathBuf, SettingsError> {
        let xdg = xdg::BaseDirectories::with_prefix("wordlog")?;
        let path = xdg
            .place_config_file("settings.yaml")
            .map_err(|source| SettingsError::Io {
                path: PathBuf::from("settings.yaml"),
                source,
            })?;
        std::fs::write(&path, Self::default_settings_yaml_data()).map_err(|source| {
            SettingsError::Io {
                path: path.clone(),
                source,
            }
        })?;

        Ok(path)
    }

    pub fn read_from_yaml(&mut self, filename: &Path) -> Result<(), SettingsError> {
        let file = std::fs::File::open(filename).map_err(|source| SettingsError::Io {
            path: filename.to_path_buf(),
            source,
        })?;
        let reader = std::io::BufReader::new(file);
        let settings: SettingsFromYaml = serde_yaml::from_reader(reader)?;

        self.merge_with(settings);

        Ok(())
    }

    pub fn read_from_string(&mut self, s: &str) -> Result<(), SettingsError> {
        let settings: SettingsFromYaml = serde_yaml::from_str(s)?;
        self.merge_with(settings);

        Ok(())
    }

    pub fn merge_with(&mut self, other: SettingsFromYaml) {
        if let Some(tool) = other.default_tool {
            self.default_tool = tool;
        }

        if let Some(dictionary) = other.dictionary {
            self.dictionary = dictionary;
        }

        if let Some(logs) = other.logs {
            self.logs = logs;
        }

        let mut rules = other.rules;
        for rule in rules.iter_mut() {
            rule.compile();
        }
        rules.extend(std::mem::take(&mut self.rules));
        self.rules = rules;
    }

    pub fn rule_for_filename(&self, filename: &str) -> Option<&RulesSettings> {
        self.rules.iter().find(|rule| rule.matches(filename))
    }
}
