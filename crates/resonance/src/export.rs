//! Writes a report bundle: CSV table, SVG chart and the chart spec as JSON.

use crate::rendering::{render_svg, ChartSpec};
use crate::report::Report;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Row layout of the exported table
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    date: String,
    zodiac_name: &'a str,
    score: f64,
    mars: &'a str,
    venus: &'a str,
    score_percent: f64,
    zodiac_start: u8,
}

/// Files produced by one export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub table: PathBuf,
    pub chart: PathBuf,
    pub chart_spec: PathBuf,
}

impl ExportPaths {
    pub fn for_year(dir: &Path, year: i32) -> Self {
        let stem = format!("astrology_analysis_{}", year);
        Self {
            table: dir.join(format!("{}.csv", stem)),
            chart: dir.join(format!("{}.svg", stem)),
            chart_spec: dir.join(format!("{}.chart.json", stem)),
        }
    }
}

pub struct ReportExporter {
    output_dir: PathBuf,
}

impl ReportExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write table, chart and chart spec. Creates the output directory.
    pub fn export(&self, report: &Report, chart: &ChartSpec) -> Result<ExportPaths, ExportError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ExportError::Io {
            path: self.output_dir.clone(),
            source,
        })?;

        let paths = ExportPaths::for_year(&self.output_dir, report.year);
        write_table(&paths.table, report)?;
        write_chart_svg(&paths.chart, chart)?;
        write_chart_spec(&paths.chart_spec, chart)?;

        log::info!(
            "Exported {} rows to {}",
            report.records.len(),
            self.output_dir.display()
        );
        Ok(paths)
    }
}

/// Write the report as CSV, one row per day in date order.
pub fn write_table(path: &Path, report: &Report) -> Result<(), ExportError> {
    let file = create(path)?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));

    for record in &report.records {
        writer.serialize(ReportRow {
            date: record.date.to_string(),
            zodiac_name: record.transition_name(),
            score: record.raw_score,
            mars: record.mars_sign.map(|s| s.name()).unwrap_or(""),
            venus: record.venus_sign.map(|s| s.name()).unwrap_or(""),
            score_percent: record.normalized_score,
            zodiac_start: record.transition_marker() as u8,
        })?;
    }

    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

pub fn write_chart_svg(path: &Path, chart: &ChartSpec) -> Result<(), ExportError> {
    fs::write(path, render_svg(chart)).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_chart_spec(path: &Path, chart: &ChartSpec) -> Result<(), ExportError> {
    let file = create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, chart)?;
    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn create(path: &Path) -> Result<File, ExportError> {
    File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
