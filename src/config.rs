use crate::{Convention, KeywordSet};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".wordcase.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_case")]
    pub case: Convention,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default = "default_keywords")]
    pub default_keywords: bool,
}

fn default_case() -> Convention {
    Convention::Snake
}

fn default_keywords() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case: default_case(),
            keywords: Vec::new(),
            default_keywords: default_keywords(),
        }
    }
}

/// One config file's settings; fields the file leaves out stay `None`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigLayer {
    pub case: Option<Convention>,
    pub keywords: Option<Vec<String>>,
    pub default_keywords: Option<bool>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        case: Option<Convention>,
        cli_keywords: Vec<String>,
        no_default_keywords: bool,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                log::debug!("loading global config from {}", global_path.display());
                config = config.merge(ConfigLayer::from_file(&global_path)?);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            log::debug!("loading local config from {}", local_path.display());
            config = config.merge(ConfigLayer::from_file(&local_path)?);
        }

        // Apply CLI overrides
        if let Some(case) = case {
            config.case = case;
        }
        if !cli_keywords.is_empty() {
            config.keywords.extend(cli_keywords);
        }
        if no_default_keywords {
            config.default_keywords = false;
        }

        Ok(config)
    }

    /// Read a single file on top of the defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::default().merge(ConfigLayer::from_file(path)?))
    }

    /// Settings the layer sets override ours; the rest are kept
    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(case) = layer.case {
            self.case = case;
        }
        if let Some(keywords) = layer.keywords {
            self.keywords = keywords;
        }
        if let Some(default_keywords) = layer.default_keywords {
            self.default_keywords = default_keywords;
        }
        self
    }

    /// The keyword set these settings describe
    pub fn keyword_set(&self) -> KeywordSet {
        if self.default_keywords {
            KeywordSet::default().extended(&self.keywords)
        } else {
            KeywordSet::new(&self.keywords)
        }
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "wordcase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
