// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BitpartPlots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of bitpart-plots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Charts for bitpart benchmark runs.
//!
//! Parses Criterion's verbose console output, groups the measurements by experiment label, and
//! renders the fixed chart set (setup time, block size, culling, sequential/parallel/disk).

pub mod charts;
pub mod format;
pub mod model;
pub mod query;
pub mod render;
pub mod run;
pub mod store;

pub use run::{run, RunError, RunOptions, RunSummary};
