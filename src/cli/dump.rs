//! Dump command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::compiler::Compiler;
use crate::emit::CatalogReport;
use crate::error::Result;

/// Print a parsed message file with its IDs as JSON
#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Message file to dump
    pub input: PathBuf,
}

pub fn run(args: DumpArgs) -> Result<()> {
    println!("{}", render(&args)?);
    Ok(())
}

fn render(args: &DumpArgs) -> Result<String> {
    let compiler = Compiler::open(&args.input)?;
    CatalogReport::new(compiler.catalog())?.to_json()
}
