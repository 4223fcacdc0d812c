//! Parsed message catalog types.
//!
//! A catalog holds two disjoint, ordered lists of sections: positional ones
//! (`[Name]`) and named ones (`{Name}`). Order matters everywhere because
//! IDs are assigned by position.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use crate::parser::Location;

/// How a section was introduced in the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// `[Name]`; the name may be empty.
    Positional,
    /// `{Name}`; addressable by name at runtime.
    Named,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionKind::Positional => write!(f, "positional"),
            SectionKind::Named => write!(f, "named"),
        }
    }
}

/// A group of key/value messages under one header.
#[derive(Debug, Clone)]
pub struct MessageSection {
    name: String,
    kind: SectionKind,
    location: Location,
    /// Keys in insertion order, which is also message ID order
    messages: IndexMap<String, String>,
}

impl MessageSection {
    pub fn new(name: impl Into<String>, kind: SectionKind, location: Location) -> Self {
        Self {
            name: name.into(),
            kind,
            location,
            messages: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    /// Where the section header starts.
    pub fn location(&self) -> Location {
        self.location
    }

    /// An empty-named section gets no section ID and no namespace wrapper.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// Add a message. Returns `false` and leaves the section untouched if the key exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        match self.messages.entry(key.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(value.into());
                true
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.messages.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// The complete parse result for one `.msg` file.
///
/// Built once by the parser and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    file_name: PathBuf,
    positional: Vec<MessageSection>,
    named: Vec<MessageSection>,
    positional_names: HashSet<String>,
    named_names: HashSet<String>,
    message_count: usize,
    total_value_size: usize,
}

impl Catalog {
    pub(crate) fn new(file_name: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            positional: Vec::new(),
            named: Vec::new(),
            positional_names: HashSet::new(),
            named_names: HashSet::new(),
            message_count: 0,
            total_value_size: 0,
        }
    }

    /// Source file the catalog was parsed from.
    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    /// Sections introduced with `[Name]`, in file order.
    pub fn positional_sections(&self) -> &[MessageSection] {
        &self.positional
    }

    /// Sections introduced with `{Name}`, in file order.
    pub fn named_sections(&self) -> &[MessageSection] {
        &self.named
    }

    /// All sections in ID order: positional first, then named.
    pub fn sections(&self) -> impl Iterator<Item = &MessageSection> {
        self.positional.iter().chain(&self.named)
    }

    /// Total number of messages across all sections.
    pub fn message_count(&self) -> usize {
        self.message_count
    }

    /// Sum of decoded value lengths in bytes.
    pub fn total_value_size(&self) -> usize {
        self.total_value_size
    }

    /// Open a new section. Returns `false` if the name is already taken
    /// by a section of the same kind. Empty positional names are never tracked.
    pub(crate) fn open_section(&mut self, section: MessageSection) -> bool {
        let fresh = match section.kind() {
            SectionKind::Positional if !section.has_name() => true,
            SectionKind::Positional => self.positional_names.insert(section.name().to_string()),
            SectionKind::Named => self.named_names.insert(section.name().to_string()),
        };
        if !fresh {
            return false;
        }
        match section.kind() {
            SectionKind::Positional => self.positional.push(section),
            SectionKind::Named => self.named.push(section),
        }
        true
    }

    /// Add a message to the most recently opened section of `kind`.
    /// Returns `false` if the key already exists there.
    pub(crate) fn insert_message(&mut self, kind: SectionKind, key: &str, value: String) -> bool {
        let sections = match kind {
            SectionKind::Positional => &mut self.positional,
            SectionKind::Named => &mut self.named,
        };
        let Some(section) = sections.last_mut() else {
            return false;
        };
        let size = value.len();
        if !section.insert(key, value) {
            return false;
        }
        self.message_count += 1;
        self.total_value_size += size;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(name: &str, kind: SectionKind) -> MessageSection {
        MessageSection::new(name, kind, Location::default())
    }

    #[test]
    fn test_section_insert_keeps_order() {
        let mut s = section("Common", SectionKind::Positional);
        assert!(s.insert("Ok", "OK"));
        assert!(s.insert("Cancel", "Cancel"));
        assert!(s.insert("Apply", "Apply"));

        assert_eq!(s.keys().collect::<Vec<_>>(), vec!["Ok", "Cancel", "Apply"]);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_section_rejects_duplicate_key() {
        let mut s = section("Common", SectionKind::Positional);
        assert!(s.insert("Ok", "first"));
        assert!(!s.insert("Ok", "second"));

        assert_eq!(s.get("Ok"), Some("first"));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut s = section("Common", SectionKind::Named);
        assert!(s.insert("ok", "a"));
        assert!(s.insert("Ok", "b"));
    }

    #[test]
    fn test_duplicate_positional_name_rejected() {
        let mut catalog = Catalog::new("test.msg");
        assert!(catalog.open_section(section("A", SectionKind::Positional)));
        assert!(!catalog.open_section(section("A", SectionKind::Positional)));

        assert_eq!(catalog.positional_sections().len(), 1);
    }

    #[test]
    fn test_empty_positional_names_not_tracked() {
        let mut catalog = Catalog::new("test.msg");
        assert!(catalog.open_section(section("", SectionKind::Positional)));
        assert!(catalog.open_section(section("", SectionKind::Positional)));

        assert_eq!(catalog.positional_sections().len(), 2);
    }

    #[test]
    fn test_named_may_share_positional_name() {
        let mut catalog = Catalog::new("test.msg");
        assert!(catalog.open_section(section("A", SectionKind::Positional)));
        assert!(catalog.open_section(section("A", SectionKind::Named)));
        assert!(!catalog.open_section(section("A", SectionKind::Named)));
    }

    #[test]
    fn test_counts_track_inserted_messages() {
        let mut catalog = Catalog::new("test.msg");
        catalog.open_section(section("A", SectionKind::Positional));
        assert!(catalog.insert_message(SectionKind::Positional, "One", "1".to_string()));
        assert!(catalog.insert_message(SectionKind::Positional, "Two", "22".to_string()));
        assert!(!catalog.insert_message(SectionKind::Positional, "One", "333".to_string()));

        assert_eq!(catalog.message_count(), 2);
        assert_eq!(catalog.total_value_size(), 3);
    }

    #[test]
    fn test_insert_without_section_fails() {
        let mut catalog = Catalog::new("test.msg");

        assert!(!catalog.insert_message(SectionKind::Named, "One", "1".to_string()));
        assert_eq!(catalog.message_count(), 0);
    }
}
