//! Check command implementation.
//!
//! Parses message files without writing any output.

use std::path::PathBuf;

use clap::Args;

use crate::compiler::Compiler;
use crate::discovery::collect_message_files;
use crate::error::{MsgError, Result};
use crate::output::{display_path, plural, Printer};

/// Parse message files and report errors without writing output
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files or directories to check
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let files = collect_message_files(&args.paths);
    if files.is_empty() {
        return Err(MsgError::Build {
            message: "No message files found".to_string(),
            help: Some("Pass .msg files or directories containing them".to_string()),
        });
    }

    let mut failed = 0;
    for file in &files {
        match Compiler::open(file) {
            Ok(compiler) => {
                let count = compiler.catalog().message_count();
                printer.status(
                    "Checked",
                    &format!(
                        "{} {}",
                        display_path(file),
                        printer.dim(&format!("({})", plural(count, "message", "messages")))
                    ),
                );
            }
            Err(err) => {
                failed += 1;
                printer.error("Failed", &err.to_string());
            }
        }
    }

    if failed > 0 {
        return Err(MsgError::Build {
            message: format!("{} of {} failed to parse", failed, plural(files.len(), "file", "files")),
            help: None,
        });
    }

    printer.success("Finished", &format!("{} ok", plural(files.len(), "file", "files")));
    Ok(())
}
