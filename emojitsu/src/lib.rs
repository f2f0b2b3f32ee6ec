pub mod emojitsu;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

pub use crate::emojitsu::generator::suggest::ReportStyle;
pub use crate::emojitsu::{
    Artifact, DataIntegrityError, EmojiRecord, EmojiStore, Emojitsu, GeneratorConfig, LoadError,
    RenderOptions, Token,
};

use crate::emojitsu::config::DEFAULT_CONFIG_FILE;
use crate::emojitsu::generator::{Generator, suggest};

#[derive(Parser, Debug, PartialEq)]
#[command(name = "emojitsu", about, version, long_about = None)]
pub struct Cli {
    /// Load configuration from a specific file
    #[arg(short = 'c', long = "config", value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Rebuild the emoji data artifact (the default)
    Generate,
    /// Print the autocomplete candidates of the current artifact
    Suggestable {
        /// Shortnames on one line, glyphs on the next
        #[arg(long)]
        inline: bool,
    },
}

impl Command {
    fn report_style(inline: bool) -> ReportStyle {
        if inline {
            ReportStyle::Inline
        } else {
            ReportStyle::List
        }
    }
}

/// Entry point of the `emojitsu` binary.
pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<()> {
    let config = GeneratorConfig::load_from(&cli.config_file);

    match cli.command.unwrap_or(Command::Generate) {
        Command::Generate => {
            let artifact = Generator::run(&config)?;
            info!(
                "Unicode {} / assets {}: {} entries",
                artifact.spec_version, artifact.assets_version, artifact.total_count
            );
        }
        Command::Suggestable { inline } => {
            let artifact = Artifact::load(&config.output_path())?;
            println!(
                "{}",
                suggest::report(&artifact.collection, Command::report_style(inline))
            );
        }
    }

    Ok(())
}
