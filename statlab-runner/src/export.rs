//! Artifact export: `report.json` and one CSV per plotted series.
//!
//! The JSON manifest carries a `schema_version`; manifests from a newer
//! version are rejected on load.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::figure::Series;
use crate::lessons::{Lesson, LessonOutput};
use crate::report::LessonReport;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportManifest {
    pub schema_version: u32,
    pub lesson: Lesson,
    pub seed: u64,
    pub timestamp: DateTime<Utc>,
    pub report: LessonReport,
}

impl ReportManifest {
    pub fn from_output(output: &LessonOutput) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            lesson: output.lesson,
            seed: output.seed,
            timestamp: Utc::now(),
            report: output.report.clone(),
        }
    }
}

// ─── JSON ───────────────────────────────────────────────────────────

pub fn export_json(output: &LessonOutput) -> Result<String> {
    serde_json::to_string_pretty(&ReportManifest::from_output(output))
        .context("failed to serialize lesson report to JSON")
}

pub fn import_json(json: &str) -> Result<ReportManifest> {
    let manifest: ReportManifest =
        serde_json::from_str(json).context("failed to deserialize lesson report from JSON")?;
    if manifest.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            manifest.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(manifest)
}

// ─── CSV ────────────────────────────────────────────────────────────

/// One row per point, columns `x` and `y`.
pub fn export_series_csv(series: &Series) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["x", "y"])?;
    for (x, y) in &series.points {
        wtr.write_record([x.to_string(), y.to_string()])?;
    }
    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Lowercase ASCII with runs of anything else collapsed to `_`.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches('_').to_string()
}

// ─── Artifact bundle ────────────────────────────────────────────────

/// Write `report.json` and the series CSVs under `output_dir/<lesson>/`.
///
/// CSV files are named `fig{F}_panel{P}_s{S}_{series}.csv`, numbered from 1;
/// the series number keeps same-named series apart.
/// Returns the lesson directory.
pub fn save_artifacts(output: &LessonOutput, output_dir: &Path) -> Result<PathBuf> {
    let lesson_dir = output_dir.join(output.lesson.name());
    std::fs::create_dir_all(&lesson_dir)
        .with_context(|| format!("failed to create artifact dir: {}", lesson_dir.display()))?;

    let json = export_json(output)?;
    let report_path = lesson_dir.join("report.json");
    std::fs::write(&report_path, json)
        .with_context(|| format!("failed to write {}", report_path.display()))?;

    for (f, figure) in output.figures.iter().enumerate() {
        for (p, panel) in figure.panels.iter().enumerate() {
            for (i, series) in panel.series.iter().enumerate() {
                let name = format!(
                    "fig{}_panel{}_s{}_{}.csv",
                    f + 1,
                    p + 1,
                    i + 1,
                    slug(&series.name)
                );
                let path = lesson_dir.join(name);
                std::fs::write(&path, export_series_csv(series)?)
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }
        }
    }

    Ok(lesson_dir)
}
