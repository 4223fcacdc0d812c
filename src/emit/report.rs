//! JSON view of a catalog with its assigned IDs, used by `msgc dump`.

use serde::Serialize;

use crate::error::{MsgError, Result};
use crate::parser::Location;
use crate::types::{Catalog, SectionKind};

use super::ids::IdTable;

#[derive(Debug, Serialize)]
pub struct CatalogReport {
    pub file: String,
    pub message_count: usize,
    pub total_value_size: usize,
    pub sections: Vec<SectionReport>,
}

#[derive(Debug, Serialize)]
pub struct SectionReport {
    pub name: String,
    pub kind: SectionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<u32>,
    pub location: Location,
    pub messages: Vec<MessageReport>,
}

#[derive(Debug, Serialize)]
pub struct MessageReport {
    pub id: u32,
    pub key: String,
    pub value: String,
}

impl CatalogReport {
    pub fn new(catalog: &Catalog) -> Result<Self> {
        let ids = IdTable::assign(catalog)?;
        let sections = ids
            .sections()
            .map(|s| SectionReport {
                name: s.section.name().to_string(),
                kind: s.section.kind(),
                section_id: s.section_id,
                location: s.section.location(),
                messages: s
                    .messages()
                    .map(|(id, key, value)| MessageReport {
                        id,
                        key: key.to_string(),
                        value: value.to_string(),
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            file: catalog.file_name().display().to_string(),
            message_count: catalog.message_count(),
            total_value_size: catalog.total_value_size(),
            sections,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| MsgError::Build {
            message: format!("Failed to serialize catalog: {}", e),
            help: None,
        })
    }
}
