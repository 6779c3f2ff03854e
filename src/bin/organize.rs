use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lvc_reporter::application::services::organize_loose_documents;

/// Moves loose inspection PDFs into one folder per report so photos can be
/// stored next to each of them.
#[derive(Parser)]
#[command(name = "organize", version)]
struct Cli {
    /// Folder holding the loose PDFs.
    directory: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let moved = organize_loose_documents(&cli.directory)?;

    let created = moved.iter().filter(|m| m.created_directory).count();
    println!(
        "Organized {} PDF(s) into {} new folder(s) under {}",
        moved.len(),
        created,
        cli.directory.display()
    );

    Ok(())
}
