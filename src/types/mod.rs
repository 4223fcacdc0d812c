//! Core catalog types.

mod catalog;

pub use catalog::{Catalog, MessageSection, SectionKind};
