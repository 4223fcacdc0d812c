//! Parser for `.msg` message files.
//!
//! # Format
//!
//! ```text
//! ; comment            // also a comment
//! [Common]             positional section (name may be empty: [])
//! Ok: "OK"
//! Greeting: "Hello, " "World!\n"
//!
//! {Errors}             named section
//! NotFound: "Not found"
//! ```
//!
//! Keys are identifiers. Values are one or more adjacent quoted fragments,
//! concatenated, with `\\`, `\n`, `\r` and `\"` decoded.
//!
//! # Usage
//!
//! ```ignore
//! use msgc::parser::parse_catalog;
//!
//! let source = std::fs::read_to_string("strings/ui.msg")?;
//! let catalog = parse_catalog("strings/ui.msg", &source)?;
//!
//! for section in catalog.sections() {
//!     println!("{}: {} messages", section.name(), section.len());
//! }
//! ```

mod catalog;
mod location;
pub mod scanner;

pub use catalog::parse_catalog;
pub use location::Location;
