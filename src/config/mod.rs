// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for scaleflow.
//!
//! This module provides the application configuration (YAML or TOML),
//! draft files for the command line, and the flow library format used
//! to seed the flow repository.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::flow::{validate_flow_draft, Flow, FlowDraft, FlowDraftError};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Maximum log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Flow library loaded into the flow repository at start-up
    #[serde(default)]
    pub seed_library: Option<PathBuf>,
    /// Practice screen settings
    #[serde(default)]
    pub practice: PracticeConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            seed_library: None,
            practice: PracticeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file; `.toml` files are read as TOML,
    /// everything else as YAML
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let is_toml = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        let mut config = if is_toml {
            Self::from_toml(&contents)?
        } else {
            Self::from_yaml(&contents)?
        };

        // Relative library paths are resolved against the config file
        if let (Some(library), Some(dir)) = (config.seed_library.as_mut(), path.parent()) {
            if library.is_relative() {
                *library = dir.join(&*library);
            }
        }

        Ok(config)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }
}

/// Practice screen settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PracticeConfig {
    /// Score width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    /// Score height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    720
}
fn default_height() -> u32 {
    214
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Load a flow draft from a YAML file; missing fields take their empty values
pub fn load_draft<P: AsRef<Path>>(path: P) -> Result<FlowDraft> {
    let contents = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read draft file: {:?}", path.as_ref()))?;
    serde_yaml::from_str(&contents).context("Failed to parse YAML draft")
}

/// A file of premade flows
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FlowLibraryFile {
    #[serde(default)]
    pub flows: Vec<Flow>,
}

impl FlowLibraryFile {
    /// Load a flow library from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read flow library: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a flow library from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML flow library")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize flow library to YAML")
    }

    /// Save the library to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write flow library: {:?}", path.as_ref()))
    }

    /// Ids of library flows whose configuration would not pass validation
    ///
    /// Library flows are not committed through the store, so nothing
    /// else checks them.
    pub fn invalid_flows(&self) -> Vec<(String, Vec<FlowDraftError>)> {
        self.flows
            .iter()
            .filter_map(|flow| {
                let errors = validate_flow_draft(&flow.config);
                (!errors.is_empty()).then(|| (flow.id.clone(), errors))
            })
            .collect()
    }
}
