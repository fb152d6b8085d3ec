use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use breakeven_app::{ReportFormat, Session, Settings, logging, write_report};
use breakeven_core::{BreakEvenCalculator, EditCommand, Publisher, RecordingSink};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Break-even calculator for a seasonal café.
///
/// Starts from the built-in model, merges an optional CSV import, applies
/// `--set` edits in order, prints the resulting figures and can export the
/// final model.
#[derive(Debug, Parser)]
struct Cli {
    /// Settings file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV file of `key,value` rows to merge into the model.
    #[arg(long)]
    import: Option<PathBuf>,

    /// Field edit such as `costs.goods.cogs.monthly=2500`. Repeatable.
    #[arg(long = "set", value_name = "PATH=VALUE")]
    edits: Vec<EditCommand>,

    /// Write the final model as CSV to this file.
    #[arg(long)]
    export: Option<PathBuf>,

    /// Report format printed on stdout.
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    format: ReportFormat,

    /// Log filter directive; `RUST_LOG` takes precedence.
    #[arg(long)]
    log_level: Option<String>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .await
            .with_context(|| format!("loading settings from '{}'", path.display()))?,
        None => Settings::default(),
    };
    logging::init_logging(&settings.logging, cli.log_level.as_deref())?;

    let calendar = settings.seasons.calendar()?;
    let mut session = Session::new(
        BreakEvenCalculator::new(calendar),
        Publisher::new(settings.locale),
        RecordingSink::new(),
    );

    if let Some(path) = &cli.import {
        session
            .import_file(path)
            .await
            .with_context(|| format!("importing '{}'", path.display()))?;
    }

    for edit in &cli.edits {
        session.apply_edit(edit);
    }

    write_report(session.sink(), cli.format, io::stdout().lock())?;

    if let Some(path) = &cli.export {
        session
            .write_export(path)
            .await
            .with_context(|| format!("exporting to '{}'", path.display()))?;
    }

    info!(
        profit_annual = %session.figures().totals.profit.annual,
        "done"
    );
    Ok(())
}
