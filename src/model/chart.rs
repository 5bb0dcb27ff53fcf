// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BitpartPlots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of bitpart-plots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisScale {
    Linear,
    Log2,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
    pub err_low: f64,
    pub err_high: f64,
}

impl SeriesPoint {
    pub fn bottom(&self) -> f64 {
        self.y - self.err_low
    }

    pub fn top(&self) -> f64 {
        self.y + self.err_high
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    name: String,
    points: Vec<SeriesPoint>,
    error_bars: bool,
}

impl Series {
    pub fn new(name: impl Into<String>, points: Vec<SeriesPoint>) -> Self {
        Self {
            name: name.into(),
            points,
            error_bars: true,
        }
    }

    /// A series drawn as a bare line.
    pub fn without_error_bars(mut self) -> Self {
        self.error_bars = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn has_error_bars(&self) -> bool {
        self.error_bars
    }
}

/// A fully grouped chart, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub file_name: &'static str,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
    pub x_axis: Vec<f64>,
    pub x_scale: AxisScale,
    /// Error-bar cap size in points at the reference figure size.
    pub cap_size: u32,
    pub series: Vec<Series>,
}

impl Chart {
    pub fn points(&self) -> impl Iterator<Item = &SeriesPoint> + '_ {
        self.series.iter().flat_map(|series| series.points().iter())
    }
}
