//! Inspect subcommand - print a descriptor file.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;

use crate::config::Config;
use crate::descriptor::load_descriptor;
use crate::output::{render, OutputFormat};

/// Print the metadata stored in a `.json` or `.toml` descriptor.
#[derive(Parser)]
pub struct InspectCommand {
    /// Path to the descriptor file.
    pub input: PathBuf,

    /// Output format (defaults to `output.format` from config).
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl InspectCommand {
    /// Run the inspect command.
    pub fn run(self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    /// Load the descriptor and render it in the resolved format.
    pub fn render(&self) -> Result<String> {
        let info = load_descriptor(&self.input)?;

        tracing::info!(
            "Loaded {} model '{}' from {}",
            info.mutant_type(),
            info.root_type(),
            self.input.display()
        );

        Ok(render(&info, self.resolve_format()?)?)
    }

    /// The `--format` flag, or `output.format` from config when absent.
    fn resolve_format(&self) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => Ok(Config::load()?.output.format),
        }
    }
}
