// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BitpartPlots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of bitpart-plots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The fixed chart catalog.
//!
//! Each chart names its output file, its hand-picked x-axis, and the label families that feed its
//! series. Axis values and legend names are tied to the label scheme of the bitpart benchmark run.

use std::fmt;

use crate::model::{AxisScale, Chart, Measurement, Report, Series};
use crate::query::{
    flat_line, parse_block_size_label, parse_cull_label, parse_flat_label, parse_setup_label,
    select, series_on_axis, BlockSizeLabel, CullStrategy, Execution, FlatVariant, SeriesError,
};

const TIME_DESC: &str = "Time taken (ms)";
const DIMS_DESC: &str = "Dimensions";
const CAP_SIZE: u32 = 5;
const BLOCK_SIZE_CAP_SIZE: u32 = 10;
const CONTROL_LABEL: &str = "block_size/None";

fn setup_axis() -> Vec<f64> {
    (1..=10).map(f64::from).collect()
}

fn block_size_axis() -> Vec<f64> {
    (9..=15).map(|exp| f64::from(1u32 << exp)).collect()
}

fn dims_axis() -> Vec<f64> {
    (10..=30).step_by(2).map(f64::from).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartId {
    SetupTime,
    BlockSize,
    Cull95,
    Cull80,
    LinPar,
    SeqPar,
    Pars,
    Seqs,
}

impl ChartId {
    pub const ALL: [ChartId; 8] = [
        Self::SetupTime,
        Self::BlockSize,
        Self::Cull95,
        Self::Cull80,
        Self::LinPar,
        Self::SeqPar,
        Self::Pars,
        Self::Seqs,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::SetupTime => "setup_time.png",
            Self::BlockSize => "block_size.png",
            Self::Cull95 => "cull_95.png",
            Self::Cull80 => "cull_80.png",
            Self::LinPar => "lin_par.png",
            Self::SeqPar => "seq_par.png",
            Self::Pars => "pars.png",
            Self::Seqs => "seqs.png",
        }
    }

    pub fn stem(self) -> &'static str {
        let name = self.file_name();
        name.strip_suffix(".png").unwrap_or(name)
    }

    /// Accepts either the output file name or its stem (`cull_95.png` / `cull_95`).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.file_name() == name || id.stem() == name)
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartError {
    pub chart: ChartId,
    pub source: SeriesError,
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot build chart {}: {}", self.chart, self.source)
    }
}

impl std::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Groups the report into the series of one chart.
pub fn build_chart(id: ChartId, report: &Report) -> Result<Chart, ChartError> {
    let series = chart_series(id, report).map_err(|source| ChartError { chart: id, source })?;
    let (x_desc, x_axis, x_scale, cap_size) = match id {
        ChartId::SetupTime => ("Number of points (10k)", setup_axis(), AxisScale::Linear, CAP_SIZE),
        ChartId::BlockSize => ("Block size", block_size_axis(), AxisScale::Log2, BLOCK_SIZE_CAP_SIZE),
        _ => (DIMS_DESC, dims_axis(), AxisScale::Linear, CAP_SIZE),
    };

    tracing::debug!(chart = %id, series = series.len(), "built chart");
    Ok(Chart {
        file_name: id.file_name(),
        x_desc,
        y_desc: TIME_DESC,
        x_axis,
        x_scale,
        cap_size,
        series,
    })
}

fn chart_series(id: ChartId, report: &Report) -> Result<Vec<Series>, SeriesError> {
    let dims = dims_axis();
    match id {
        ChartId::SetupTime => {
            let axis = setup_axis();
            Ok(vec![
                setup_series(report, &axis, Execution::Sequential, "Sequential")?,
                setup_series(report, &axis, Execution::Parallel, "Parallel (8192)")?,
                setup_series(report, &axis, Execution::Disk, "Disk")?,
            ])
        }
        ChartId::BlockSize => {
            let axis = block_size_axis();
            let sized = select(report, parse_block_size_label)
                .into_iter()
                .filter_map(|(label, record)| match label {
                    BlockSizeLabel::Sized(size) => Some((size, record)),
                    BlockSizeLabel::Unbounded => None,
                })
                .collect();
            // The first unbounded run is the control; later repeats are ignored.
            let control = select(report, parse_block_size_label)
                .into_iter()
                .find(|(label, _)| *label == BlockSizeLabel::Unbounded)
                .map(|(_, record)| record.time_ms())
                .ok_or_else(|| SeriesError::MissingControl {
                    label: CONTROL_LABEL.to_owned(),
                })?;
            Ok(vec![
                series_on_axis("Parallel", &axis, sized)?,
                flat_line("Control", &axis, control),
            ])
        }
        ChartId::Cull95 => cull_chart_series(report, &dims, "0.95", "95%"),
        ChartId::Cull80 => cull_chart_series(report, &dims, "0.8", "80%"),
        ChartId::LinPar => Ok(vec![
            flat_series(report, &dims, FlatVariant::Linear, "Linear")?,
            flat_series(report, &dims, FlatVariant::LinearParallel, "Linear (Parallel)")?,
        ]),
        ChartId::SeqPar => Ok(vec![
            flat_series(report, &dims, FlatVariant::Sequential, "Sequential")?,
            flat_series(report, &dims, FlatVariant::Parallel, "Parallel (8192)")?,
        ]),
        ChartId::Pars => Ok(vec![
            cull_series(
                report,
                &dims,
                CullStrategy::Population,
                "0.95",
                "Cull (95%, Population)",
            )?,
            flat_series(report, &dims, FlatVariant::LinearParallel, "Linear (Parallel)")?,
            flat_series(report, &dims, FlatVariant::Parallel, "Parallel (8192)")?,
            flat_series(report, &dims, FlatVariant::Disk, "Disk")?,
        ]),
        ChartId::Seqs => Ok(vec![
            flat_series(report, &dims, FlatVariant::Linear, "Linear")?,
            flat_series(report, &dims, FlatVariant::Sequential, "Sequential")?,
        ]),
    }
}

fn setup_series(
    report: &Report,
    axis: &[f64],
    execution: Execution,
    name: &str,
) -> Result<Series, SeriesError> {
    let keyed = select(report, parse_setup_label)
        .into_iter()
        .filter(|(label, _)| label.execution == execution)
        .map(|(label, record)| (label.points, record))
        .collect();
    series_on_axis(name, axis, keyed)
}

fn flat_series(
    report: &Report,
    axis: &[f64],
    variant: FlatVariant,
    name: &str,
) -> Result<Series, SeriesError> {
    let keyed = select(report, parse_flat_label)
        .into_iter()
        .filter(|(label, _)| label.variant == variant)
        .map(|(label, record)| (label.dims, record))
        .collect();
    series_on_axis(name, axis, keyed)
}

fn cull_series(
    report: &Report,
    axis: &[f64],
    strategy: CullStrategy,
    fraction: &str,
    name: &str,
) -> Result<Series, SeriesError> {
    let keyed: Vec<(u64, &Measurement)> = select(report, parse_cull_label)
        .into_iter()
        .filter(|(label, _)| label.strategy == strategy && label.fraction == fraction)
        .map(|(label, record)| (label.dims, record))
        .collect();
    series_on_axis(name, axis, keyed)
}

fn cull_chart_series(
    report: &Report,
    axis: &[f64],
    fraction: &str,
    percent: &str,
) -> Result<Vec<Series>, SeriesError> {
    Ok(vec![
        flat_series(report, axis, FlatVariant::Parallel, "Control (no culling)")?,
        cull_series(
            report,
            axis,
            CullStrategy::Population,
            fraction,
            &format!("Population ({percent})"),
        )?,
        cull_series(
            report,
            axis,
            CullStrategy::Similarity,
            fraction,
            &format!("Similarity ({percent})"),
        )?,
        cull_series(
            report,
            axis,
            CullStrategy::Both,
            fraction,
            &format!("Population + Similarity ({percent})"),
        )?,
    ])
}
