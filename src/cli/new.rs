//! New subcommand - build model metadata from flags and config defaults.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::{eyre::eyre, Result};

use crate::config::Config;
use crate::descriptor::save_descriptor;
use crate::models::{ModelInfo, MutantType};
use crate::output::{render, OutputFormat};

/// Build model metadata and print it or write it to a descriptor.
#[derive(Parser)]
pub struct NewCommand {
    /// Model type: CLASS, ABSTRACT or UML (defaults to `defaults.mutant_type`).
    #[arg(short = 't', long = "type")]
    pub mutant_type: Option<MutantType>,

    /// Namespace URI (defaults to `defaults.namespace_uri`).
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Name of the root type.
    #[arg(long)]
    pub root_type: String,

    /// Name of the root element.
    #[arg(long)]
    pub root_name: String,

    /// Write a JSON descriptor here instead of printing.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format when printing (defaults to `output.format` from config).
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl NewCommand {
    /// Run the new command.
    pub fn run(self) -> Result<()> {
        let config = Config::load()?;
        let info = self.build(&config)?;

        match &self.output {
            Some(path) => {
                save_descriptor(path, &info)?;
                tracing::info!(
                    "Wrote {} descriptor to {}",
                    info.mutant_type(),
                    path.display()
                );
            }
            None => {
                let format = self.format.unwrap_or(config.output.format);
                println!("{}", render(&info, format)?);
            }
        }

        Ok(())
    }

    /// Resolve flags against config defaults into a [`ModelInfo`].
    pub fn build(&self, config: &Config) -> Result<ModelInfo> {
        let mutant_type = self
            .mutant_type
            .or(config.defaults.mutant_type)
            .ok_or_else(|| {
                eyre!("No model type given. Pass --type or set defaults.mutant_type")
            })?;

        let namespace = self
            .namespace
            .clone()
            .unwrap_or_else(|| config.defaults.namespace_uri.clone());

        tracing::debug!("Building {} model in namespace '{}'", mutant_type, namespace);

        Ok(ModelInfo::new(
            mutant_type,
            namespace,
            self.root_type.as_str(),
            self.root_name.as_str(),
        ))
    }
}
