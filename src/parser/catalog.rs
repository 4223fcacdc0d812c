//! Catalog builder.
//!
//! Drives the scanner over a whole `.msg` buffer and assembles a
//! [`Catalog`]. Parsing is fail-fast: the first problem aborts the build.

use std::path::{Path, PathBuf};

use crate::error::{MsgError, Result};
use crate::types::{Catalog, MessageSection, SectionKind};

use super::location::Location;
use super::scanner::{
    skip_whitespace_and_comments, try_parse_brace_section, try_parse_bracket_section,
    try_parse_key_value, KeyValue, ScanError,
};

/// Parse the full text of a `.msg` file.
///
/// `file` is only used to label diagnostics. A leading UTF-8 byte order
/// mark is skipped; locations are relative to the text after it.
pub fn parse_catalog(file: impl AsRef<Path>, source: &str) -> Result<Catalog> {
    let source = source.strip_prefix('\u{FEFF}').unwrap_or(source);
    CatalogBuilder::new(file.as_ref(), source).build()
}

struct CatalogBuilder<'a> {
    file: PathBuf,
    source: &'a str,
    catalog: Catalog,
    /// Kind of the section keys are currently added to
    current: Option<SectionKind>,
}

impl<'a> CatalogBuilder<'a> {
    fn new(file: &Path, source: &'a str) -> Self {
        Self {
            file: file.to_path_buf(),
            source,
            catalog: Catalog::new(file),
            current: None,
        }
    }

    fn build(mut self) -> Result<Catalog> {
        let mut pos = 0;
        loop {
            pos = skip_whitespace_and_comments(self.source, pos);
            if pos >= self.source.len() {
                break;
            }

            if let Some((name, next)) = try_parse_bracket_section(self.source, pos) {
                self.open_section(name, SectionKind::Positional, pos)?;
                pos = next;
                continue;
            }

            if let Some((name, next)) = try_parse_brace_section(self.source, pos) {
                self.open_section(name, SectionKind::Named, pos)?;
                pos = next;
                continue;
            }

            let key_value = try_parse_key_value(self.source, pos)
                .map_err(|err| self.scan_error(err))?
                .ok_or_else(|| MsgError::MalformedSyntax {
                    file: self.file.clone(),
                    location: self.location(pos),
                    expected: "a section header or a key/value pair",
                })?;
            pos = self.add_message(key_value, pos)?;
        }

        tracing::debug!(
            file = %self.file.display(),
            positional = self.catalog.positional_sections().len(),
            named = self.catalog.named_sections().len(),
            messages = self.catalog.message_count(),
            "parsed catalog"
        );
        Ok(self.catalog)
    }

    fn open_section(&mut self, name: &str, kind: SectionKind, pos: usize) -> Result<()> {
        let section = MessageSection::new(name, kind, self.location(pos));
        if !self.catalog.open_section(section) {
            return Err(MsgError::DuplicateSection {
                file: self.file.clone(),
                location: self.location(pos),
                name: name.to_string(),
            });
        }
        tracing::trace!(section = name, %kind, "opened section");
        self.current = Some(kind);
        Ok(())
    }

    /// Record a message and return the offset after it.
    fn add_message(&mut self, key_value: KeyValue<'_>, pos: usize) -> Result<usize> {
        let KeyValue { key, value, end, .. } = key_value;

        let Some(kind) = self.current else {
            return Err(MsgError::UnassignedKey {
                file: self.file.clone(),
                location: self.location(pos),
                key: key.to_string(),
            });
        };

        if !self.catalog.insert_message(kind, key, value) {
            let section = match kind {
                SectionKind::Positional => self.catalog.positional_sections().last(),
                SectionKind::Named => self.catalog.named_sections().last(),
            }
            .map(|s| s.name().to_string())
            .unwrap_or_default();
            return Err(MsgError::DuplicateKey {
                file: self.file.clone(),
                location: self.location(pos),
                section,
                key: key.to_string(),
            });
        }
        Ok(end)
    }

    fn scan_error(&self, err: ScanError) -> MsgError {
        let file = self.file.clone();
        let location = self.location(err.offset());
        match err {
            ScanError::MissingOpenQuote { .. } => MsgError::MalformedSyntax {
                file,
                location,
                expected: "an opening quote",
            },
            ScanError::UnterminatedQuote { .. } => MsgError::UnterminatedQuote { file, location },
            ScanError::InvalidEscape { symbol, .. } => MsgError::InvalidEscape {
                file,
                location,
                symbol,
            },
        }
    }

    fn location(&self, offset: usize) -> Location {
        Location::resolve(self.source, offset)
    }
}
