//! Output generation for parsed catalogs.
//!
//! The emitter borrows a finished [`Catalog`], assigns IDs once and renders
//! all three artifacts in memory. Nothing is written to disk until
//! [`Artifacts::write`].

mod archive;
mod binary;
mod ids;
mod report;
mod source;

pub use archive::ArchiveWriter;
pub use binary::render_binary;
pub use ids::{IdTable, SectionIds};
pub use report::{CatalogReport, MessageReport, SectionReport};
pub use source::{render_declarations, render_definitions};

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{MsgError, Result};
use crate::types::Catalog;

/// The three rendered outputs of one compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub declarations: String,
    pub definitions: String,
    pub binary: Vec<u8>,
}

/// Where [`Artifacts::write`] put each file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPaths {
    pub declarations: PathBuf,
    pub definitions: PathBuf,
    pub binary: PathBuf,
}

/// Render all outputs for a catalog.
///
/// `source_base` is the base path of the text outputs; only its file stem
/// matters here, for the include line in the definitions.
pub fn emit(catalog: &Catalog, source_base: &Path, config: &Config) -> Result<Artifacts> {
    let ids = IdTable::assign(catalog)?;

    let declaration_path = config.declaration_path(source_base);
    let declaration_file = declaration_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| MsgError::Build {
            message: format!("Output base path has no file name: {}", source_base.display()),
            help: Some("Pass a path like gen/Messages".to_string()),
        })?;

    Ok(Artifacts {
        declarations: render_declarations(&ids, config),
        definitions: render_definitions(&ids, config, &declaration_file),
        binary: render_binary(&ids, catalog.total_value_size())?,
    })
}

impl Artifacts {
    /// Write every artifact with a single whole-buffer write each.
    pub fn write(&self, source_base: &Path, binary_path: &Path, config: &Config) -> Result<WrittenPaths> {
        let paths = WrittenPaths {
            declarations: config.declaration_path(source_base),
            definitions: config.definition_path(source_base),
            binary: binary_path.to_path_buf(),
        };

        write_file(&paths.declarations, self.declarations.as_bytes())?;
        write_file(&paths.definitions, self.definitions.as_bytes())?;
        write_file(&paths.binary, &self.binary)?;

        Ok(paths)
    }
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|e| MsgError::io(path, "Failed to write output", e))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}
