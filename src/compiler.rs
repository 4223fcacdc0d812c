//! Compilation of one `.msg` file into its three artifacts.

use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::emit::{emit, Artifacts, WrittenPaths};
use crate::error::{MsgError, Result};
use crate::parser::parse_catalog;
use crate::types::Catalog;

/// Owns the parsed catalog of one input file.
#[derive(Debug, Clone)]
pub struct Compiler {
    catalog: Catalog,
}

impl Compiler {
    /// Read and parse a message file.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MsgError::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        let source = fs::read_to_string(path)
            .map_err(|e| MsgError::io(path, "Failed to read message file", e))?;

        Self::from_source(path, &source)
    }

    /// Parse message file text; `file` labels diagnostics.
    pub fn from_source(file: &Path, source: &str) -> Result<Self> {
        Ok(Self {
            catalog: parse_catalog(file, source)?,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Render all artifacts in memory.
    pub fn emit(&self, source_base: &Path, config: &Config) -> Result<Artifacts> {
        emit(&self.catalog, source_base, config)
    }

    /// Render and write the declarations, definitions and binary table.
    pub fn compile(&self, source_base: &Path, binary_path: &Path, config: &Config) -> Result<WrittenPaths> {
        let artifacts = self.emit(source_base, config)?;
        let paths = artifacts.write(source_base, binary_path, config)?;
        tracing::info!(
            input = %self.catalog.file_name().display(),
            messages = self.catalog.message_count(),
            "compiled message file"
        );
        Ok(paths)
    }
}
