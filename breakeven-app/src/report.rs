//! Prints the published figures of a session.

use std::io::Write;

use breakeven_core::{RecordingSink, StyleState};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot write report: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Aligned columns, alert figures marked with `!`.
    #[default]
    Table,
    /// `target,text,style` rows.
    Csv,
}

fn style_name(style: Option<StyleState>) -> &'static str {
    match style {
        Some(StyleState::Alert) => "alert",
        Some(StyleState::Normal) => "normal",
        None => "",
    }
}

/// Writes every text slot of `sink` in publish order.
pub fn write_report<W: Write>(
    sink: &RecordingSink,
    format: ReportFormat,
    writer: W,
) -> Result<(), ReportError> {
    match format {
        ReportFormat::Table => write_table(sink, writer),
        ReportFormat::Csv => write_csv(sink, writer),
    }
}

fn write_table<W: Write>(
    sink: &RecordingSink,
    mut writer: W,
) -> Result<(), ReportError> {
    let name_width = sink.texts().map(|(target, _)| target.len()).max().unwrap_or(0);
    let text_width = sink
        .texts()
        .map(|(_, text)| text.chars().count())
        .max()
        .unwrap_or(0);

    for (target, text) in sink.texts() {
        let marker = match sink.style(target) {
            Some(StyleState::Alert) => " !",
            _ => "",
        };
        writeln!(
            writer,
            "{target:<name_width$}  {text:>text_width$}{marker}"
        )?;
    }
    writer.flush()?;
    Ok(())
}

fn write_csv<W: Write>(
    sink: &RecordingSink,
    writer: W,
) -> Result<(), ReportError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["target", "text", "style"])?;
    for (target, text) in sink.texts() {
        out.write_record([target, text, style_name(sink.style(target))])?;
    }
    out.flush()?;
    Ok(())
}
