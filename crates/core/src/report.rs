use std::fmt::Write as _;

use arbora_skeleton::{ArborKind, Morphology};
use serde::Serialize;

use crate::globals::global_items;
use crate::items::{per_arbor_items, DataFormat, Unit};
use crate::result::{ItemResult, MorphologyAnalysisResult};

/// One per-arbor metric with its per-arbor and whole-cell values.
#[derive(Debug, Clone, Serialize)]
pub struct ItemReport {
    pub name: &'static str,
    pub label: &'static str,
    pub format: DataFormat,
    pub unit: Unit,
    pub result: MorphologyAnalysisResult,
}

/// One whole-cell metric; `None` when the morphology lacks the data.
#[derive(Debug, Clone, Serialize)]
pub struct GlobalReport {
    pub name: &'static str,
    pub label: &'static str,
    pub format: DataFormat,
    pub unit: Unit,
    pub value: Option<ItemResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MorphologyReport {
    pub label: String,
    pub globals: Vec<GlobalReport>,
    pub items: Vec<ItemReport>,
}

/// Runs every registered analysis item against the morphology and collects
/// the results into an export-ready report.
pub fn build_report(morphology: &Morphology) -> MorphologyReport {
    let globals = global_items()
        .into_iter()
        .map(|item| GlobalReport {
            name: item.name,
            label: item.label,
            format: item.format,
            unit: item.unit,
            value: item.evaluate(morphology),
        })
        .collect();
    let items = per_arbor_items()
        .into_iter()
        .map(|item| ItemReport {
            name: item.name,
            label: item.label,
            format: item.format,
            unit: item.unit,
            result: item.evaluate(morphology),
        })
        .collect();
    MorphologyReport {
        label: morphology.label.clone(),
        globals,
        items,
    }
}

pub fn report_to_json(report: &MorphologyReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

fn format_value(value: f32, format: DataFormat, unit: Unit) -> String {
    match format {
        DataFormat::Int => format!("{:.0}", value),
        DataFormat::Float => format!("{:.3}{}", value, unit.suffix()),
    }
}

/// Plain-text table of the report, one block per metric with a line per
/// arbor class.
pub fn render_text(report: &MorphologyReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Morphology: {}", report.label);
    for global in &report.globals {
        if let Some(result) = &global.value {
            let _ = writeln!(
                out,
                "- {} : {}",
                global.label,
                format_value(result.value, global.format, global.unit)
            );
        }
    }
    for item in &report.items {
        let _ = writeln!(out, "- {}", item.name);
        if let Some(result) = &item.result.morphology {
            let _ = writeln!(
                out,
                "\t* Morphology : {}",
                format_value(result.value, item.format, item.unit)
            );
        }
        if let Some(result) = &item.result.apical_dendrite {
            let _ = writeln!(
                out,
                "\t* {} : {}",
                ArborKind::ApicalDendrite.label(),
                format_value(result.value, item.format, item.unit)
            );
        }
        for (i, result) in item.result.basal_dendrites.iter().enumerate() {
            let _ = writeln!(
                out,
                "\t* {} {} : {}",
                ArborKind::BasalDendrite.label(),
                i,
                format_value(result.value, item.format, item.unit)
            );
        }
        if let Some(result) = &item.result.axon {
            let _ = writeln!(
                out,
                "\t* {} : {}",
                ArborKind::Axon.label(),
                format_value(result.value, item.format, item.unit)
            );
        }
    }
    out
}
