//! Append-only archive writer for the binary string table.
//!
//! Fields are written back to back with no tags; a reader has to consume
//! them in the same order. All integers are little-endian `u32`.
//!
//! | Field   | Encoding                                  |
//! |---------|-------------------------------------------|
//! | int     | `u32`                                     |
//! | string  | `u32` byte length, then UTF-8 bytes       |
//! | map     | `u32` entry count, then (string, int) pairs |

use std::io::{self, Write};

use byteorder::{LittleEndian, WriteBytesExt};
use indexmap::IndexMap;

/// Sequential field writer over any `Write` sink.
pub struct ArchiveWriter<W: Write> {
    inner: W,
}

impl<W: Write> ArchiveWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_int(&mut self, value: u32) -> io::Result<()> {
        self.inner.write_u32::<LittleEndian>(value)
    }

    pub fn write_str(&mut self, value: &str) -> io::Result<()> {
        self.write_len(value.len())?;
        self.inner.write_all(value.as_bytes())
    }

    /// Entries are written in insertion order.
    pub fn write_map(&mut self, map: &IndexMap<String, u32>) -> io::Result<()> {
        self.write_len(map.len())?;
        for (key, &value) in map {
            self.write_str(key)?;
            self.write_int(value)?;
        }
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> io::Result<()> {
        let len = u32::try_from(len)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "field longer than u32::MAX"))?;
        self.write_int(len)
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
