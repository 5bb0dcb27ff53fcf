// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BitpartPlots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of bitpart-plots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::duration::{parse_duration_ms, DurationParseError};
use crate::model::{Measurement, Report};

/// Which captured value of a record failed to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Time,
    ErrorLow,
    ErrorHigh,
}

impl RecordField {
    fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::ErrorLow => "std. dev. lower bound",
            Self::ErrorHigh => "std. dev. upper bound",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportParseError {
    NoRecords,
    InvalidDuration {
        label: String,
        field: RecordField,
        source: DurationParseError,
    },
}

impl fmt::Display for ReportParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRecords => f.write_str(
                "no benchmark records found (expected Criterion verbose output with mean/std. dev. lines)",
            ),
            Self::InvalidDuration {
                label,
                field,
                source,
            } => write!(f, "invalid {} for {label}: {source}", field.as_str()),
        }
    }
}

impl std::error::Error for ReportParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoRecords => None,
            Self::InvalidDuration { source, .. } => Some(source),
        }
    }
}

// One Criterion verbose block:
//
//   Benchmarking <label>
//   Benchmarking <label>: Warming up for 3.0000 s
//   [blank line + Warning: ...]
//   Benchmarking <label>: Collecting 100 samples in estimated ...
//   Benchmarking <label>: Analyzing
//   <label>  time:   [<lo> <estimate> <hi>]
//   up to five lines (change/outliers), optional slope line
//   mean   [..] std. dev.   [<err_low> <err_high>]
//   median ...
const RECORD_PATTERN: &str = concat!(
    r"Benchmarking (\S+)\nBenchmarking (?:\S+).+(?:\n\nWarning:.+)?\nBenchmarking.+\nBenchmarking.+\n",
    r"(?:\S+)\s+time:\s+\[\S+ \S+ (\S+ \S+) \S+ \S+\]\n(?:.+\n){0,5}(?:slope.+\n)?",
    r"mean.+ std\. dev\.\s+\[(\S+ \S+) (\S+ \S+)\]\nmedian.+",
);

fn record_regex() -> &'static Regex {
    static RECORD: OnceLock<Regex> = OnceLock::new();
    RECORD.get_or_init(|| Regex::new(RECORD_PATTERN).expect("valid record regex"))
}

/// Parses every benchmark block of a Criterion verbose report.
///
/// Text between blocks, and blocks of any other shape, is skipped. A captured duration that cannot
/// be converted aborts the whole parse.
pub fn parse_report(text: &str) -> Result<Report, ReportParseError> {
    let mut records = Vec::new();

    for caps in record_regex().captures_iter(text) {
        let label = &caps[1];
        let value = |group: usize, field: RecordField| {
            parse_duration_ms(&caps[group]).map_err(|source| ReportParseError::InvalidDuration {
                label: label.to_owned(),
                field,
                source,
            })
        };

        let time_ms = value(2, RecordField::Time)?;
        let err_low_ms = value(3, RecordField::ErrorLow)?;
        let err_high_ms = value(4, RecordField::ErrorHigh)?;
        records.push(Measurement::new(label, time_ms, err_low_ms, err_high_ms));
    }

    if records.is_empty() {
        return Err(ReportParseError::NoRecords);
    }

    tracing::debug!(records = records.len(), "parsed criterion report");
    Ok(Report::new(records))
}
