//! msgc - Message catalog compiler
//!
//! Parses `.msg` message files and compiles them into a declarations
//! listing, a definitions listing with stable integer IDs, and a compact
//! binary string table loadable at runtime.

pub mod cli;
pub mod compiler;
pub mod config;
pub mod discovery;
pub mod emit;
pub mod error;
pub mod output;
pub mod parser;
pub mod types;

pub use compiler::Compiler;
pub use config::{Config, LineEnding};
pub use emit::{emit, Artifacts, CatalogReport, IdTable, WrittenPaths};
pub use error::{MsgError, Result};
pub use parser::{parse_catalog, Location};
pub use types::{Catalog, MessageSection, SectionKind};
