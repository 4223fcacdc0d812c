pub mod check;
pub mod compile;
pub mod completions;
pub mod dump;
pub mod init;

use clap::{Parser, Subcommand};

/// msgc - Message catalog compiler
///
/// Without a subcommand, compiles INPUT into declarations and definitions
/// next to SOURCE_BASE and a binary string table at BINARY.
#[derive(Parser, Debug)]
#[command(name = "msgc")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub compile: compile::CompileArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse message files and report errors without writing output
    Check(check::CheckArgs),

    /// Print a parsed message file with its IDs as JSON
    Dump(dump::DumpArgs),

    /// Write a default msgc.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
