//! Deterministic ID assignment.
//!
//! Section IDs and message IDs are two independent contiguous sequences
//! starting at 0. Both walk positional sections first, then named sections,
//! in file order. Positional sections with an empty name take no section ID
//! but their messages still take message IDs. Named sections are always
//! numbered.

use crate::error::{MsgError, Result};
use crate::types::{Catalog, MessageSection, SectionKind};

/// IDs assigned to one section and its messages.
#[derive(Debug, Clone, Copy)]
pub struct SectionIds<'a> {
    pub section: &'a MessageSection,
    /// `None` only for empty-named positional sections
    pub section_id: Option<u32>,
    /// ID of the first message; the rest follow in key order
    pub first_message_id: u32,
}

impl<'a> SectionIds<'a> {
    /// `(message_id, key, value)` for every message of the section.
    pub fn messages(&self) -> impl Iterator<Item = (u32, &'a str, &'a str)> + 'a {
        let first = self.first_message_id;
        self.section
            .iter()
            .zip(first..)
            .map(|((key, value), id)| (id, key, value))
    }
}

/// All IDs for a catalog, borrowed from it.
#[derive(Debug, Clone)]
pub struct IdTable<'a> {
    positional: Vec<SectionIds<'a>>,
    named: Vec<SectionIds<'a>>,
    message_count: u32,
}

fn to_id(n: usize, what: &str) -> Result<u32> {
    u32::try_from(n).map_err(|_| MsgError::Build {
        message: format!("too many {} to number: {}", what, n),
        help: Some("Split the message file".to_string()),
    })
}

impl<'a> IdTable<'a> {
    /// Assign IDs for a finished catalog.
    pub fn assign(catalog: &'a Catalog) -> Result<Self> {
        // Section IDs
        let mut next_section = 0usize;
        let mut section_ids = Vec::new();
        for section in catalog.sections() {
            if section.kind() == SectionKind::Named || section.has_name() {
                section_ids.push(Some(to_id(next_section, "sections")?));
                next_section += 1;
            } else {
                section_ids.push(None);
            }
        }

        // Message IDs
        let mut next_message = 0usize;
        let mut assigned = Vec::with_capacity(section_ids.len());
        for (section, section_id) in catalog.sections().zip(section_ids) {
            assigned.push(SectionIds {
                section,
                section_id,
                first_message_id: to_id(next_message, "messages")?,
            });
            next_message += section.len();
        }

        let named = assigned.split_off(catalog.positional_sections().len());
        Ok(Self {
            positional: assigned,
            named,
            message_count: to_id(next_message, "messages")?,
        })
    }

    pub fn positional(&self) -> &[SectionIds<'a>] {
        &self.positional
    }

    pub fn named(&self) -> &[SectionIds<'a>] {
        &self.named
    }

    /// Every section in ID order.
    pub fn sections(&self) -> impl Iterator<Item = &SectionIds<'a>> {
        self.positional.iter().chain(&self.named)
    }

    /// Number of message IDs handed out.
    pub fn message_count(&self) -> u32 {
        self.message_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_catalog;
    use pretty_assertions::assert_eq;

    fn section_ids(table: &IdTable<'_>) -> Vec<(String, Option<u32>)> {
        table
            .sections()
            .map(|s| (s.section.name().to_string(), s.section_id))
            .collect()
    }

    fn message_ids(table: &IdTable<'_>) -> Vec<(u32, String)> {
        table
            .sections()
            .flat_map(|s| s.messages())
            .map(|(id, key, _)| (id, key.to_string()))
            .collect()
    }

    #[test]
    fn test_reference_example() {
        let catalog = parse_catalog(
            "test.msg",
            "[Common]\nOk: \"OK\"\nCancel: \"Cancel\"\n\n{Errors}\nNotFound: \"Not found\"\n",
        )
        .unwrap();
        let table = IdTable::assign(&catalog).unwrap();

        assert_eq!(
            section_ids(&table),
            vec![("Common".to_string(), Some(0)), ("Errors".to_string(), Some(1))]
        );
        assert_eq!(
            message_ids(&table),
            vec![
                (0, "Ok".to_string()),
                (1, "Cancel".to_string()),
                (2, "NotFound".to_string())
            ]
        );
        assert_eq!(table.named()[0].section_id, Some(1));
        assert_eq!(table.message_count(), 3);
    }

    #[test]
    fn test_empty_positional_name_takes_no_section_id() {
        let catalog = parse_catalog(
            "test.msg",
            "[]\nLoose: \"l\"\n[A]\nOne: \"1\"\n{B}\nTwo: \"2\"",
        )
        .unwrap();
        let table = IdTable::assign(&catalog).unwrap();

        assert_eq!(
            section_ids(&table),
            vec![
                (String::new(), None),
                ("A".to_string(), Some(0)),
                ("B".to_string(), Some(1))
            ]
        );
        assert_eq!(message_ids(&table)[0], (0, "Loose".to_string()));
        assert_eq!(table.named()[0].section_id, Some(1));
        assert_eq!(table.sections().filter(|s| s.section_id.is_some()).count(), 2);
    }

    #[test]
    fn test_named_messages_follow_all_positional_messages() {
        // Named section appears first in the file but is numbered last.
        let catalog = parse_catalog(
            "test.msg",
            "{Named}\nN1: \"n\"\n[Pos]\nP1: \"p\"\nP2: \"p\"",
        )
        .unwrap();
        let table = IdTable::assign(&catalog).unwrap();

        assert_eq!(
            message_ids(&table),
            vec![
                (0, "P1".to_string()),
                (1, "P2".to_string()),
                (2, "N1".to_string())
            ]
        );
        assert_eq!(
            section_ids(&table),
            vec![("Pos".to_string(), Some(0)), ("Named".to_string(), Some(1))]
        );
    }

    #[test]
    fn test_empty_named_brace_section_is_numbered() {
        let catalog = parse_catalog("test.msg", "[]\nA: \"a\"\n{}\nB: \"b\"").unwrap();
        let table = IdTable::assign(&catalog).unwrap();

        assert_eq!(table.positional()[0].section_id, None);
        assert_eq!(table.named()[0].section_id, Some(0));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = parse_catalog("test.msg", "").unwrap();
        let table = IdTable::assign(&catalog).unwrap();

        assert_eq!(table.sections().count(), 0);
        assert_eq!(table.message_count(), 0);
        assert!(table.named().is_empty());
    }

    #[test]
    fn test_sections_without_messages_keep_ids() {
        let catalog = parse_catalog("test.msg", "[A]\n[B]\nOne: \"1\"").unwrap();
        let table = IdTable::assign(&catalog).unwrap();

        assert_eq!(table.positional()[1].section_id, Some(1));
        assert_eq!(table.positional()[1].first_message_id, 0);
    }
}
