use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::models::Status;
use crate::parser::parse_import_file;

#[derive(Parser)]
#[command(name = "mt-import")]
#[command(version = "0.1.0")]
#[command(about = "Parse Movable Type blog export files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an export file to JSON on stdout
    Convert {
        /// Path to the Movable Type export file
        file: PathBuf,
    },
    /// Show statistics about an export file
    Stats {
        /// Path to the Movable Type export file
        file: PathBuf,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Convert { file }) => {
            convert(file)?;
        }
        Some(Commands::Stats { file }) => {
            show_stats(file)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn convert(file: &PathBuf) -> Result<()> {
    let entries = parse_import_file(file)?;
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

fn show_stats(file: &PathBuf) -> Result<()> {
    let entries = parse_import_file(file)?;

    let drafts = entries.iter().filter(|e| e.status == Some(Status::Draft)).count();
    let published = entries.iter().filter(|e| e.status == Some(Status::Publish)).count();
    let future = entries.iter().filter(|e| e.status == Some(Status::Future)).count();

    let categories: BTreeSet<&str> =
        entries.iter().flat_map(|e| e.category.iter().map(String::as_str)).collect();

    println!("Movable Type Export Statistics");
    println!("================================");
    println!("Total entries: {}", entries.len());
    println!("  Draft: {}", drafts);
    println!("  Publish: {}", published);
    println!("  Future: {}", future);
    println!("Distinct categories: {}", categories.len());

    let dates = entries.iter().filter_map(|e| e.date);
    if let Some(oldest) = dates.clone().min() {
        println!("Oldest entry: {}", oldest.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(newest) = dates.max() {
        println!("Newest entry: {}", newest.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}
