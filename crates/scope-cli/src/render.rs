use crate::cli::OutputFormat;
use crate::error::{CliError, Result};
use aminoscope::core::models::residue::ResidueClass;
use aminoscope::core::motifs::registry::MotifRegistry;
use aminoscope::workflows::batch::{self, ProteinAnalysis};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Serialize)]
struct ProteinTable<'a> {
    protein: &'a [ProteinAnalysis],
}

#[derive(Serialize)]
struct MotifRow<'a> {
    label: &'a str,
    pattern: &'a str,
}

#[derive(Serialize)]
struct MotifTable<'a> {
    motif: Vec<MotifRow<'a>>,
}

fn render_error(format: &'static str, e: impl std::fmt::Display) -> CliError {
    CliError::Render {
        format,
        message: e.to_string(),
    }
}

fn to_json(value: &impl Serialize) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value).map_err(|e| render_error("JSON", e))?;
    out.push('\n');
    Ok(out)
}

fn to_toml(value: &impl Serialize) -> Result<String> {
    toml::to_string(value).map_err(|e| render_error("TOML", e))
}

/// `13336` becomes `13,336`.
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn class_label(class: ResidueClass) -> &'static str {
    match class {
        ResidueClass::Hydrophobic => "Hydrophobic",
        ResidueClass::Polar => "Polar",
        ResidueClass::Positive => "Positive",
        ResidueClass::Negative => "Negative",
        ResidueClass::Special => "Special",
    }
}

fn text_panel(out: &mut String, analysis: &ProteinAnalysis, top: usize) -> std::fmt::Result {
    let report = &analysis.report;

    write!(out, "{} [{}]", analysis.name, analysis.id)?;
    if let Some(organism) = &analysis.organism {
        write!(out, " - {}", organism)?;
    }
    writeln!(out)?;
    if analysis.removed_characters > 0 {
        writeln!(
            out,
            "  ({} non-canonical characters removed before analysis)",
            analysis.removed_characters
        )?;
    }

    let rows = [
        ("Length", format!("{} aa", report.length())),
        (
            "Mol. weight",
            format!("{} Da", group_thousands(report.molecular_weight_da())),
        ),
        ("Net charge (pH~7)", report.net_charge().to_string()),
        ("GRAVY", report.gravy().to_string()),
        ("Aliphatic index", report.aliphatic_index().to_string()),
        ("Aromaticity", format!("{}%", report.aromaticity_pct())),
        (
            "Longest hydrophobic run",
            report.longest_hydrophobic_run().to_string(),
        ),
    ];
    for (label, value) in rows {
        writeln!(out, "  {:<25}{}", label, value)?;
    }

    let motifs = report.motifs();
    let motifs = if motifs.is_empty() {
        "None detected".to_string()
    } else {
        motifs.join(" • ")
    };
    writeln!(out, "  {:<25}{}", "Motifs (quick scan)", motifs)?;

    let composition = report.composition();
    let classes: Vec<String> = ResidueClass::ALL
        .iter()
        .map(|&class| format!("{} {}%", class_label(class), composition.get(class)))
        .collect();
    writeln!(out, "  {:<25}{}", "Composition", classes.join("  "))?;

    let frequent = report.most_frequent(top);
    if !frequent.is_empty() {
        let frequent: Vec<String> = frequent
            .iter()
            .map(|f| format!("{} {} ({})", f.code, f.count, f.name))
            .collect();
        writeln!(out, "  {:<25}{}", "Most frequent", frequent.join(", "))?;
    }
    Ok(())
}

pub fn render_analyses(
    analyses: &[ProteinAnalysis],
    format: OutputFormat,
    top: usize,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for (i, analysis) in analyses.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                text_panel(&mut out, analysis, top).map_err(|e| render_error("text", e))?;
            }
            Ok(out)
        }
        OutputFormat::Json => to_json(&analyses),
        OutputFormat::Toml => to_toml(&ProteinTable { protein: analyses }),
        OutputFormat::Csv => {
            let mut buffer = Vec::new();
            batch::write_csv(analyses, &mut buffer)?;
            String::from_utf8(buffer).map_err(|e| render_error("CSV", e))
        }
    }
}

pub fn render_motifs(registry: &MotifRegistry, format: OutputFormat) -> Result<String> {
    let rows: Vec<MotifRow> = registry
        .iter()
        .map(|motif| MotifRow {
            label: &motif.label,
            pattern: motif.pattern.source(),
        })
        .collect();

    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            if rows.is_empty() {
                out.push_str("No motifs registered.\n");
            }
            for motif in registry.iter() {
                writeln!(
                    out,
                    "{:<30} {:<16} width {}",
                    motif.label,
                    motif.pattern,
                    motif.pattern.width()
                )
                .map_err(|e| render_error("text", e))?;
            }
            Ok(out)
        }
        OutputFormat::Json => to_json(&rows),
        OutputFormat::Toml => to_toml(&MotifTable { motif: rows }),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for row in &rows {
                writer.serialize(row).map_err(|e| render_error("CSV", e))?;
            }
            let buffer = writer.into_inner().map_err(|e| render_error("CSV", e))?;
            String::from_utf8(buffer).map_err(|e| render_error("CSV", e))
        }
    }
}
