//! CLI module for VisiText model metadata.
//!
//! Subcommands:
//! - `new`: Build model metadata and print it or write a descriptor
//! - `inspect`: Load a descriptor file and print it
//! - `types`: List the available model types

mod inspect;
mod new;
mod types;

use clap::{Parser, Subcommand};

pub use inspect::InspectCommand;
pub use new::NewCommand;

/// VisiText - generated model metadata
#[derive(Parser)]
#[command(name = "visitext")]
#[command(about = "Describe generated models by type, namespace and root")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build model metadata from flags and config defaults
    New(NewCommand),

    /// Print the metadata stored in a descriptor file
    Inspect(InspectCommand),

    /// List the available model types
    Types,
}

impl App {
    /// Run the CLI application.
    pub fn run(self) -> color_eyre::Result<()> {
        match self.command {
            Command::New(cmd) => cmd.run(),
            Command::Inspect(cmd) => cmd.run(),
            Command::Types => types::run_types(),
        }
    }
}
