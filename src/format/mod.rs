// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BitpartPlots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of bitpart-plots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Parsing of Criterion's verbose console output.

pub mod criterion;
pub mod duration;

pub use criterion::{parse_report, RecordField, ReportParseError};
pub use duration::{parse_duration_ms, DurationParseError};
