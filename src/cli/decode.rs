use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::ReferenceTable;
use crate::cli::OutputFormat;
use crate::core::frequencies::AnalysisError;
use crate::matching::engine::{Decoding, FrequencySolver};
use crate::parsing::input::{read_input, InputSource};

/// Width of the rule lines around the substitution table
const TABLE_RULE_WIDTH: usize = 65;

/// Width of the rule lines around the decoded text
const TEXT_RULE_WIDTH: usize = 51;

/// Width of the rule under the interactive banner
const BANNER_RULE_WIDTH: usize = 57;

#[derive(Args)]
pub struct DecodeArgs {
    /// Input file with the ciphertext; use '-' for stdin.
    /// Prompts for one line when omitted
    pub input: Option<PathBuf>,

    /// Ciphertext given directly on the command line
    #[arg(short, long, conflicts_with = "input")]
    pub text: Option<String>,

    /// Print only the decoded text
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute decode subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be
/// serialized. A ciphertext without letters is reported, not treated as an
/// error.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DecodeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let source = InputSource::from_args(args.input.as_deref(), args.text.as_deref());

    if source == InputSource::Prompt && matches!(format, OutputFormat::Text) && !args.quiet {
        println!("FREQUENCY ANALYZER (percentage based)");
        println!("{}", "-".repeat(BANNER_RULE_WIDTH));
    }

    let ciphertext = read_input(&source)?;
    let table = ReferenceTable::load_embedded()?;

    if verbose {
        eprintln!(
            "Loaded {} reference table with {} letters",
            table.display_name,
            table.len()
        );
    }

    let solver = FrequencySolver::new(&table);
    let decoding = match solver.solve(&ciphertext) {
        Ok(decoding) => decoding,
        Err(e) => {
            report_no_letters(&e, format)?;
            return Ok(());
        }
    };

    if verbose {
        eprintln!(
            "Counted {} letters ({} distinct), mean difference {:.4}%",
            decoding.observed.total_letters(),
            decoding.observed.distinct_letters(),
            decoding.fit.mean_abs_difference
        );
    }

    match format {
        OutputFormat::Text if args.quiet => println!("{}", decoding.text),
        OutputFormat::Text => print!("{}", render_text(&decoding)),
        OutputFormat::Json => println!("{}", render_json(&decoding)?),
        OutputFormat::Tsv => print!("{}", render_tsv(&decoding)),
    }

    Ok(())
}

fn report_no_letters(error: &AnalysisError, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "error": error.to_string() });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text | OutputFormat::Tsv => eprintln!("{error}"),
    }
    Ok(())
}

/// Diagnostic table followed by the decoded text
#[must_use]
pub fn render_text(decoding: &Decoding) -> String {
    let mut out = String::new();
    let rule = "-".repeat(TABLE_RULE_WIDTH);

    // Writing into a String cannot fail
    let _ = writeln!(out, "\n--- Substitution Map (Frequency Proximity) ---");
    let _ = writeln!(
        out,
        "{:<8} | {:<15} | {:<12} | {:<15}",
        "Cipher", "Calc. freq (%)", "Plain", "Ref. freq (%)"
    );
    let _ = writeln!(out, "{rule}");
    for a in decoding.substitution.assignments() {
        let _ = writeln!(
            out,
            "{:<8} | {:<15.4} | {:<12} | {:<15.4}",
            a.cipher, a.observed, a.plain, a.reference
        );
    }
    let _ = writeln!(out, "{rule}");

    let _ = writeln!(out, "\n\n--- Decoded Text (Proximity Proposal) ---");
    let _ = writeln!(out, "{}", decoding.text);
    let _ = writeln!(out, "{}", "-".repeat(TEXT_RULE_WIDTH));
    let _ = writeln!(
        out,
        "\nFrequency proximity is only a first guess; short texts usually need manual adjustment."
    );
    out
}

/// JSON document with the decoded text and every assignment
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(decoding: &Decoding) -> anyhow::Result<String> {
    let assignments: Vec<serde_json::Value> = decoding
        .substitution
        .assignments()
        .iter()
        .map(|a| {
            serde_json::json!({
                "cipher": a.cipher,
                "observed": a.observed,
                "plain": a.plain,
                "reference": a.reference,
                "difference": a.difference(),
            })
        })
        .collect();

    let output = serde_json::json!({
        "decoded": decoding.text,
        "total_letters": decoding.observed.total_letters(),
        "distinct_letters": decoding.observed.distinct_letters(),
        "mean_abs_difference": decoding.fit.mean_abs_difference,
        "max_abs_difference": decoding.fit.max_abs_difference,
        "unmapped_letters": decoding.fit.unmapped_letters,
        "assignments": assignments,
    });

    Ok(serde_json::to_string_pretty(&output)?)
}

/// One tab-separated row per assignment
#[must_use]
pub fn render_tsv(decoding: &Decoding) -> String {
    let mut out = String::from("cipher\tobserved\tplain\treference\tdifference\n");
    for a in decoding.substitution.assignments() {
        let _ = writeln!(
            out,
            "{}\t{:.4}\t{}\t{:.4}\t{:.4}",
            a.cipher,
            a.observed,
            a.plain,
            a.reference,
            a.difference()
        );
    }
    out
}
