// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BitpartPlots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of bitpart-plots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

/// One benchmark measurement, all times in milliseconds.
///
/// `err_low_ms`/`err_high_ms` are the bounds of the standard-deviation interval as printed by
/// Criterion; they are used verbatim as the downward/upward error-bar offsets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    label: String,
    time_ms: f64,
    err_low_ms: f64,
    err_high_ms: f64,
}

impl Measurement {
    pub fn new(label: impl Into<String>, time_ms: f64, err_low_ms: f64, err_high_ms: f64) -> Self {
        Self {
            label: label.into(),
            time_ms,
            err_low_ms,
            err_high_ms,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn time_ms(&self) -> f64 {
        self.time_ms
    }

    pub fn err_low_ms(&self) -> f64 {
        self.err_low_ms
    }

    pub fn err_high_ms(&self) -> f64 {
        self.err_high_ms
    }
}

/// All measurements of one report, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Report {
    records: Vec<Measurement>,
}

impl Report {
    pub fn new(records: Vec<Measurement>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Measurement] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Measurement> {
        self.records.iter()
    }

    /// First record with exactly this label.
    pub fn find(&self, label: &str) -> Option<&Measurement> {
        self.records.iter().find(|record| record.label() == label)
    }
}
