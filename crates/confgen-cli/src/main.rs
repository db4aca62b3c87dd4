//! confgen CLI — materialize files from `.in` templates.
//!
//! For every destination path given with `--files`, reads the template
//! `<dest>.in`, substitutes each `@KEY@` span with the matching property
//! value, and writes the result to `<dest>` atomically. Properties come
//! from inline `--properties key=value` entries, a `--properties-json`
//! file, or both (inline entries override the file).
//!
//! The batch is fail-fast: the first malformed entry, missing template,
//! undefined key, or unterminated placeholder aborts the run with a
//! nonzero exit and a message naming the offending key or file. Files
//! already generated before the failure keep their new contents; the
//! failing file is never partially written.

mod output;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use confgen_core::generate;
use confgen_core::properties::PropertyTable;

#[derive(Parser)]
#[command(
    name = "confgen",
    about = "Generate files from .in templates by @KEY@ substitution",
    version,
    propagate_version = true
)]
struct Cli {
    /// key=value property assignments (later entries override earlier ones)
    #[arg(long = "properties", short = 'p', value_name = "KEY=VALUE", num_args = 1..)]
    properties: Vec<String>,

    /// JSON file with a flat object of string properties; inline entries
    /// override values from this file
    #[arg(long, value_name = "FILE")]
    properties_json: Option<PathBuf>,

    /// Destination files to generate; each DEST is rendered from DEST.in
    #[arg(long = "files", short = 'f', value_name = "DEST", num_args = 1.., required = true)]
    files: Vec<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let properties = build_table(&cli)?;

    output::print_header(&format!("confgen: {} file(s)", cli.files.len()));
    output::print_key_value("properties", &properties.len().to_string());

    let total = cli.files.len() as u32;
    for (i, dest) in cli.files.iter().enumerate() {
        output::print_step(i as u32 + 1, total, &format!("Generating {}", dest.display()));
        generate::generate_file(dest, &properties)
            .with_context(|| format!("failed to generate {}", dest.display()))?;
    }

    output::print_success(&format!("Generated {} file(s)", cli.files.len()));
    Ok(())
}

/// Build the property table: JSON file first, inline entries layered on top.
fn build_table(cli: &Cli) -> anyhow::Result<PropertyTable> {
    let mut table = match &cli.properties_json {
        Some(path) => PropertyTable::from_json_file(path)
            .with_context(|| format!("failed to load properties from {}", path.display()))?,
        None => PropertyTable::new(),
    };
    table
        .apply_entries(&cli.properties)
        .context("failed to parse --properties entries")?;
    Ok(table)
}
