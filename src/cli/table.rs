use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::catalog::store::ReferenceTable;
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct TableArgs {
    /// Write the table as JSON to this file instead of printing it
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Execute table subcommand
///
/// # Errors
///
/// Returns an error if the table cannot be loaded, serialized or written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: TableArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let table = ReferenceTable::load_embedded()?;

    if let Some(path) = &args.export {
        let json = table.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write table to {}", path.display()))?;
        eprintln!("Exported {} letters to {}", table.len(), path.display());
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text(&table, verbose),
        OutputFormat::Json => println!("{}", table.to_json()?),
        OutputFormat::Tsv => print_tsv(&table),
    }

    Ok(())
}

fn print_text(table: &ReferenceTable, verbose: bool) {
    println!("{} letter frequencies ({})", table.display_name, table.language);
    println!("{}", "=".repeat(30));
    println!("{:<8} {:>12}", "Letter", "Freq. (%)");
    println!("{}", "-".repeat(30));

    for entry in table.entries() {
        println!("{:<8} {:>12.3}", entry.letter, entry.frequency);
    }

    if verbose {
        println!("{}", "-".repeat(30));
        println!("{:<8} {:>12.3}", "Total", table.total());
    }
}

fn print_tsv(table: &ReferenceTable) {
    println!("letter\tfrequency");
    for entry in table.entries() {
        println!("{}\t{}", entry.letter, entry.frequency);
    }
}
