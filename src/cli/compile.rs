//! Default command: compile one message file.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::compiler::Compiler;
use crate::config::Config;
use crate::error::{MsgError, Result};
use crate::output::{display_path, plural, Printer};

#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Message file to compile
    #[arg(value_name = "INPUT", required = true)]
    pub input: Option<PathBuf>,

    /// Base path for the declarations and definitions (extension is replaced)
    #[arg(value_name = "SOURCE_BASE", required = true)]
    pub source_base: Option<PathBuf>,

    /// Path of the binary string table
    #[arg(value_name = "BINARY", required = true)]
    pub binary: Option<PathBuf>,

    /// Config file (default: ./msgc.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

pub fn run(args: CompileArgs, printer: &Printer) -> Result<()> {
    let (Some(input), Some(source_base), Some(binary)) = (args.input, args.source_base, args.binary)
    else {
        return Err(MsgError::Build {
            message: "expected three paths".to_string(),
            help: Some("Usage: msgc <INPUT> <SOURCE_BASE> <BINARY>".to_string()),
        });
    };

    let config = Config::discover(args.config.as_deref(), Path::new("."))?;

    printer.status("Compiling", &display_path(&input));
    let compiler = Compiler::open(&input)?;
    let paths = compiler.compile(&source_base, &binary, &config)?;

    for path in [&paths.declarations, &paths.definitions, &paths.binary] {
        printer.info("Writing", &display_path(path));
    }

    let catalog = compiler.catalog();
    let sections = catalog.positional_sections().len() + catalog.named_sections().len();
    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(catalog.message_count(), "message", "messages"),
            plural(sections, "section", "sections")
        ),
    );

    Ok(())
}
