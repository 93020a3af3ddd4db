mod manifest;
mod strings_builder;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "icons2xml")]
#[command(about = "Convert a Font Awesome icon manifest to Android string resources")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate strings.xml from an icon manifest
    Generate {
        /// Input icon manifest
        #[arg(short, long, default_value = "icons.yml")]
        input: PathBuf,

        /// Output resource file
        #[arg(short, long, default_value = "strings.xml")]
        output: PathBuf,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            verbose,
        } => {
            generate_strings(&input, &output, verbose)?;
        }
    }

    Ok(())
}

fn generate_strings(input: &Path, output: &Path, verbose: bool) -> Result<()> {
    if verbose {
        println!("Loading manifest: {}", input.display());
    }

    let manifest = manifest::load_manifest(input)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    println!("Found {} icons", manifest.len());

    let xml = strings_builder::build_strings_xml(&manifest);

    if verbose {
        println!("Rendered {} string entries", xml.matches("<string ").count());
    }

    strings_builder::write_strings(&xml, output)?;

    println!("Generated: {}", output.display());

    Ok(())
}
