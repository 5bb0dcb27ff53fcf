// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BitpartPlots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of bitpart-plots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A report is a flat list of measurements; charts hold the series grouped out of it.

pub mod chart;
pub mod record;

pub use chart::{AxisScale, Chart, Series, SeriesPoint};
pub use record::{Measurement, Report};
