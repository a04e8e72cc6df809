//! Command-line interface for the diff engine.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::analyzer::compare_documents;
use crate::error::Result;
use crate::types::{ChangeRecord, ChangeType, ComparisonSummary};

/// Redline - Detect and classify changes between legal document revisions.
#[derive(Parser)]
#[command(name = "redline-diff")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two extracted document texts and list the changes.
    Compare {
        /// Path to the reference revision (plain text)
        reference: PathBuf,

        /// Path to the client revision (plain text)
        client: PathBuf,

        /// Emit the change records as JSON instead of styled text
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            reference,
            client,
            json,
        } => compare_command(&reference, &client, json),
    }
}

/// Execute the compare command.
fn compare_command(reference_path: &Path, client_path: &Path, json: bool) -> Result<()> {
    let reference_text = std::fs::read_to_string(reference_path)?;
    let client_text = std::fs::read_to_string(client_path)?;

    let changes = compare_documents(&reference_text, &client_text)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&changes)?);
        return Ok(());
    }

    let summary = ComparisonSummary::from_changes(&changes);

    if changes.is_empty() {
        println!("{}", style("No changes detected").green().bold());
        return Ok(());
    }

    for change in &changes {
        print_change(change);
    }

    println!();
    println!(
        "{} {} additions, {} deletions, {} modifications",
        style("Summary:").bold(),
        style(summary.additions).green(),
        style(summary.deletions).red(),
        style(summary.modifications).yellow(),
    );

    Ok(())
}

/// Print one change record in the styled listing.
fn print_change(change: &ChangeRecord) {
    let tag = match change.change_type {
        ChangeType::Addition => style("added   ").green().bold(),
        ChangeType::Deletion => style("removed ").red().bold(),
        ChangeType::Modification => style("modified").yellow().bold(),
    };

    println!("{tag} {}", style(&change.context_label).cyan());
    if !change.highlighted_original.is_empty() {
        println!("  - {}", change.highlighted_original);
    }
    if !change.highlighted_modified.is_empty() {
        println!("  + {}", change.highlighted_modified);
    }
}
