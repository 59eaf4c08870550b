use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "evm")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse filenames and print their decoded fields as JSON lines
    Parse(ParseArgs),
    /// Rename unformatted files in an event directory into the convention
    Rename(RenameArgs),
    /// Add or remove tags on a formatted file, renaming it in place
    Tag(TagArgs),
}

#[derive(clap::Args, Debug)]
pub struct ParseArgs {
    /// Filenames to parse
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Event name (defaults to the working directory's name)
    #[arg(short, long)]
    pub event: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct RenameArgs {
    /// Event directory (defaults to the working directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Event name (defaults to the directory's name)
    #[arg(short, long)]
    pub event: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct TagArgs {
    #[command(subcommand)]
    pub op: TagOp,
}

#[derive(Subcommand, Debug)]
pub enum TagOp {
    /// Add tags to a file
    Add(TagOpArgs),
    /// Remove tags from a file
    Rm(TagOpArgs),
}

#[derive(clap::Args, Debug)]
pub struct TagOpArgs {
    /// Tags to apply or remove
    #[arg(required = true)]
    pub tags: Vec<String>,

    /// File to edit
    #[arg(short, long)]
    pub file: PathBuf,
}
