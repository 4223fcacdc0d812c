//! Project configuration (msgc.yaml) parsing.
//!
//! The config controls how generated text looks: outer namespace, file
//! extensions of the two text outputs, the prelude of the definitions file
//! and line endings. Every field is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MsgError, Result};

/// Name of the config file picked up from the current directory.
pub const CONFIG_FILENAME: &str = "msgc.yaml";

/// Line terminator used in generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// Compiler configuration loaded from msgc.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Namespace wrapping every generated constant.
    pub namespace: String,

    /// Extension of the declarations file.
    pub declaration_extension: String,

    /// Extension of the definitions file.
    pub definition_extension: String,

    /// Lines emitted at the top of the definitions file.
    pub prelude: Vec<String>,

    /// Line terminator for both text outputs.
    pub line_ending: LineEnding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: "Msg".to_string(),
            declaration_extension: "h".to_string(),
            definition_extension: "cpp".to_string(),
            prelude: vec![
                "#include <common.h>".to_string(),
                "#pragma hdrstop".to_string(),
            ],
            line_ending: LineEnding::Crlf,
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MsgError::io(path, "Failed to read config", e))?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content).map_err(|e| MsgError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config for a run: an explicit path wins, then msgc.yaml
    /// in `dir`, then defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using config");
            return Self::load(&candidate);
        }

        Ok(Self::default())
    }

    fn validate(&self) -> Result<()> {
        if self.namespace.trim().is_empty() {
            return Err(MsgError::Config {
                message: "namespace must not be empty".to_string(),
                help: None,
            });
        }
        for (field, ext) in [
            ("declaration_extension", &self.declaration_extension),
            ("definition_extension", &self.definition_extension),
        ] {
            if ext.is_empty() || ext.contains(|c: char| matches!(c, '.' | '/' | '\\')) {
                return Err(MsgError::Config {
                    message: format!("{} must be a bare extension, got {:?}", field, ext),
                    help: Some("Use e.g. \"h\" or \"cpp\" without a leading dot".to_string()),
                });
            }
        }
        Ok(())
    }

    /// Path of the declarations file for an output base path.
    pub fn declaration_path(&self, base: &Path) -> PathBuf {
        base.with_extension(&self.declaration_extension)
    }

    /// Path of the definitions file for an output base path.
    pub fn definition_path(&self, base: &Path) -> PathBuf {
        base.with_extension(&self.definition_extension)
    }

    /// Render the config as YAML, as written by `msgc init`.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| MsgError::Config {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }
}
