//! Binary string table.
//!
//! Layout, in order:
//! 1. map of named-section name to section ID
//! 2. total message count
//! 3. every message value in message ID order
//! 4. for each named-section message: key, section ID, message ID
//!
//! A value's index in (3) is its message ID, so only named messages need
//! explicit descriptors for lookup by name.

use indexmap::IndexMap;

use crate::error::{MsgError, Result};

use super::archive::ArchiveWriter;
use super::ids::IdTable;

/// Render the binary table into memory.
///
/// `size_hint` pre-sizes the buffer, normally the catalog's total value size.
pub fn render_binary(ids: &IdTable<'_>, size_hint: usize) -> Result<Vec<u8>> {
    let mut archive = ArchiveWriter::new(Vec::with_capacity(size_hint));
    write_table(&mut archive, ids).map_err(|e| MsgError::Build {
        message: format!("Failed to encode binary table: {}", e),
        help: None,
    })?;
    Ok(archive.into_inner())
}

fn write_table(archive: &mut ArchiveWriter<Vec<u8>>, ids: &IdTable<'_>) -> std::io::Result<()> {
    let section_ids: IndexMap<String, u32> = ids
        .named()
        .iter()
        .filter_map(|s| Some((s.section.name().to_string(), s.section_id?)))
        .collect();
    archive.write_map(&section_ids)?;

    archive.write_int(ids.message_count())?;
    for section in ids.sections() {
        for (_, _, value) in section.messages() {
            archive.write_str(value)?;
        }
    }

    for section in ids.named() {
        let Some(section_id) = section.section_id else {
            continue;
        };
        for (message_id, key, _) in section.messages() {
            archive.write_str(key)?;
            archive.write_int(section_id)?;
            archive.write_int(message_id)?;
        }
    }
    Ok(())
}
