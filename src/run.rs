// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BitpartPlots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of bitpart-plots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! One batch run: load → parse → group → render.

use std::fmt;
use std::path::PathBuf;

use crate::charts::{build_chart, ChartError, ChartId};
use crate::format::{parse_report, ReportParseError};
use crate::model::Chart;
use crate::render::render_png;
use crate::store::{load_report_text, write_json, OutputFolder, StoreError};

pub const DEFAULT_INPUT: &str = "results.txt";
pub const DEFAULT_OUT_DIR: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    /// Charts to produce, in catalog order when empty.
    pub charts: Vec<ChartId>,
    pub dump_json: Option<PathBuf>,
    /// Parse and group only; no images are written.
    pub check_only: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            charts: Vec::new(),
            dump_json: None,
            check_only: false,
        }
    }
}

impl RunOptions {
    pub fn selected_charts(&self) -> Vec<ChartId> {
        if self.charts.is_empty() {
            ChartId::ALL.to_vec()
        } else {
            self.charts.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub records: usize,
    pub charts: Vec<Chart>,
    pub written: Vec<PathBuf>,
}

#[derive(Debug)]
pub enum RunError {
    Store(StoreError),
    Parse {
        input: PathBuf,
        source: ReportParseError,
    },
    Chart(ChartError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(err) => fmt::Display::fmt(err, f),
            Self::Parse { input, source } => write!(f, "cannot parse {input:?}: {source}"),
            Self::Chart(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(err) => std::error::Error::source(err),
            Self::Parse { source, .. } => Some(source),
            Self::Chart(err) => std::error::Error::source(err),
        }
    }
}

impl From<StoreError> for RunError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<ChartError> for RunError {
    fn from(err: ChartError) -> Self {
        Self::Chart(err)
    }
}

pub fn run(options: &RunOptions) -> Result<RunSummary, RunError> {
    let text = load_report_text(&options.input)?;
    let report = parse_report(&text).map_err(|source| RunError::Parse {
        input: options.input.clone(),
        source,
    })?;
    tracing::info!(input = %options.input.display(), records = report.len(), "parsed report");

    if let Some(path) = &options.dump_json {
        write_json(path, &report)?;
        tracing::info!(path = %path.display(), "wrote records");
    }

    // Group everything first so a grouping failure writes no images.
    let charts = options
        .selected_charts()
        .into_iter()
        .map(|id| build_chart(id, &report))
        .collect::<Result<Vec<_>, _>>()?;

    let mut written = Vec::new();
    if options.check_only {
        tracing::info!(charts = charts.len(), "check only; skipping render");
    } else {
        let folder = OutputFolder::new(&options.out_dir);
        for chart in &charts {
            let path = folder.write_image(chart.file_name, |tmp| render_png(chart, tmp))?;
            tracing::info!(path = %path.display(), "wrote chart");
            written.push(path);
        }
    }

    Ok(RunSummary {
        records: report.len(),
        charts,
        written,
    })
}
