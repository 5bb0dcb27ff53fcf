// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BitpartPlots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of bitpart-plots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

pub mod labels;
pub mod series;

pub use labels::{
    parse_block_size_label, parse_cull_label, parse_flat_label, parse_setup_label,
    BlockSizeLabel, CullLabel, CullStrategy, Execution, FlatLabel, FlatVariant, SetupLabel,
};
pub use series::{flat_line, select, series_on_axis, SeriesError};
