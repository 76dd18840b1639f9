use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};

use drive_patch::{ConfigLoader, Patcher};

/// Add error logging to the drive skill's EXDEV move fallback.
///
/// With no arguments this patches src/skills/drive/index.ts in the current
/// directory and prints "Updated error handling.".
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file overriding target, search, replace, message or expected_count
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File to patch instead of the configured target
    #[arg(short, long)]
    target: Option<PathBuf>,

    /// Fail without writing unless exactly this many matches are found
    #[arg(short, long)]
    expect: Option<usize>,

    /// Print the diff instead of writing the file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    drive_patch::init_with_logger(cli.verbose)?;

    let loader = match &cli.config {
        Some(path) => ConfigLoader::with_path(path),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load().context("Failed to load patch configuration")?;

    if let Some(target) = cli.target {
        config = config.with_target(target);
    }
    if let Some(expected) = cli.expect {
        config = config.with_expected_count(expected);
    }

    let resolved = config
        .to_toml()
        .context("Failed to render patch configuration")?;
    debug!("Resolved configuration:\n{}", resolved);

    let patcher = Patcher::new(config);

    if cli.dry_run {
        let preview = patcher
            .preview()
            .with_context(|| format!("Failed to preview {}", patcher.target().display()))?;
        print!("{}", preview.diff);
        println!("{}", preview);
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    let outcome = patcher.run_and_report(&mut stdout).map_err(|e| {
        let context = if e.is_file_access() {
            format!(
                "Failed to patch {} (run from the project root or pass --target)",
                patcher.target().display()
            )
        } else {
            format!("Failed to patch {}", patcher.target().display())
        };
        anyhow::Error::new(e).context(context)
    })?;
    info!("{}", outcome);

    Ok(())
}
