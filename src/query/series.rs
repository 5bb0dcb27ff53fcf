// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BitpartPlots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of bitpart-plots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::{Measurement, Report, Series, SeriesPoint};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    PointCountMismatch {
        series: String,
        expected: usize,
        found: usize,
    },
    MissingControl {
        label: String,
    },
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointCountMismatch {
                series,
                expected,
                found,
            } => write!(
                f,
                "series {series:?} has {found} measurements but the x-axis has {expected} values"
            ),
            Self::MissingControl { label } => {
                write!(f, "missing control measurement {label:?}")
            }
        }
    }
}

impl std::error::Error for SeriesError {}

/// Records whose label decomposes, paired with the decomposition, in input order.
pub fn select<'a, T>(
    report: &'a Report,
    mut decompose: impl FnMut(&str) -> Option<T>,
) -> Vec<(T, &'a Measurement)> {
    report
        .iter()
        .filter_map(|record| decompose(record.label()).map(|parts| (parts, record)))
        .collect()
}

/// Lays keyed records out along a fixed x-axis.
///
/// Records are ordered by `key` (ties keep input order) and then paired positionally with `axis`;
/// the record count must equal the axis length.
pub fn series_on_axis(
    name: &str,
    axis: &[f64],
    mut keyed: Vec<(u64, &Measurement)>,
) -> Result<Series, SeriesError> {
    if keyed.len() != axis.len() {
        return Err(SeriesError::PointCountMismatch {
            series: name.to_owned(),
            expected: axis.len(),
            found: keyed.len(),
        });
    }

    keyed.sort_by_key(|(key, _)| *key);
    let points = axis
        .iter()
        .zip(keyed)
        .map(|(&x, (_, record))| SeriesPoint {
            x,
            y: record.time_ms(),
            err_low: record.err_low_ms(),
            err_high: record.err_high_ms(),
        })
        .collect();

    Ok(Series::new(name, points))
}

/// A constant reference line without error bars.
pub fn flat_line(name: &str, axis: &[f64], value: f64) -> Series {
    let points = axis
        .iter()
        .map(|&x| SeriesPoint {
            x,
            y: value,
            err_low: 0.0,
            err_high: 0.0,
        })
        .collect();
    Series::new(name, points).without_error_bars()
}
