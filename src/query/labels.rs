// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BitpartPlots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of bitpart-plots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Decomposition of benchmark labels into experiment parameters.
//!
//! Every pattern is anchored at the start of the label only, so trailing segments (for example a
//! Criterion parameter suffix) do not prevent a match.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// How the index was built or queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Execution {
    Sequential,
    Parallel,
    Disk,
}

impl Execution {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "seq" => Some(Self::Sequential),
            "par" => Some(Self::Parallel),
            "disk" => Some(Self::Disk),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CullStrategy {
    Population,
    Similarity,
    Both,
}

impl CullStrategy {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "pop" => Some(Self::Population),
            "sim" => Some(Self::Similarity),
            "all" => Some(Self::Both),
            _ => None,
        }
    }
}

/// Variants benchmarked on the flat 100k-point datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlatVariant {
    Linear,
    LinearParallel,
    Sequential,
    Parallel,
    Disk,
}

impl FlatVariant {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "lin" => Some(Self::Linear),
            "lin_par" => Some(Self::LinearParallel),
            "seq" => Some(Self::Sequential),
            "par" => Some(Self::Parallel),
            "disk" => Some(Self::Disk),
            _ => None,
        }
    }
}

/// `setup/<strategy>/<points>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupLabel {
    pub execution: Execution,
    pub points: u64,
}

/// `block_size/<n>` or `block_size/None`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSizeLabel {
    Sized(u64),
    Unbounded,
}

/// `100k_d<dims>_flat/cull_<strategy>/<fraction>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CullLabel {
    pub dims: u64,
    pub strategy: CullStrategy,
    /// Kept verbatim (`0.95`, `0.8`); compared textually.
    pub fraction: String,
}

/// `100k_d<dims>_flat/<variant>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatLabel {
    pub dims: u64,
    pub variant: FlatVariant,
}

fn cached(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("valid label regex"))
}

fn setup_regex() -> &'static Regex {
    static SETUP: OnceLock<Regex> = OnceLock::new();
    cached(&SETUP, r"^setup/(\w+)/(\d+)")
}

fn block_size_regex() -> &'static Regex {
    static BLOCK_SIZE: OnceLock<Regex> = OnceLock::new();
    cached(&BLOCK_SIZE, r"^block_size/(?:(\d+)|(None))")
}

fn cull_regex() -> &'static Regex {
    static CULL: OnceLock<Regex> = OnceLock::new();
    cached(&CULL, r"^100k_d(\d+)_flat/cull_(\w+)/(.+)")
}

fn flat_regex() -> &'static Regex {
    static FLAT: OnceLock<Regex> = OnceLock::new();
    // `lin_par` before `lin`: alternation is leftmost-first.
    cached(&FLAT, r"^100k_d(\d+)_flat/(lin_par|lin|seq|par|disk)")
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u64> {
    caps.get(group)?.as_str().parse().ok()
}

pub fn parse_setup_label(label: &str) -> Option<SetupLabel> {
    let caps = setup_regex().captures(label)?;
    let token = &caps[1];
    let Some(execution) = Execution::from_token(token) else {
        tracing::warn!(label, token, "unknown setup strategy");
        return None;
    };
    Some(SetupLabel {
        execution,
        points: number(&caps, 2)?,
    })
}

pub fn parse_block_size_label(label: &str) -> Option<BlockSizeLabel> {
    let caps = block_size_regex().captures(label)?;
    if caps.get(2).is_some() {
        return Some(BlockSizeLabel::Unbounded);
    }
    number(&caps, 1).map(BlockSizeLabel::Sized)
}

pub fn parse_cull_label(label: &str) -> Option<CullLabel> {
    let caps = cull_regex().captures(label)?;
    let token = &caps[2];
    let Some(strategy) = CullStrategy::from_token(token) else {
        tracing::warn!(label, token, "unknown cull strategy");
        return None;
    };
    Some(CullLabel {
        dims: number(&caps, 1)?,
        strategy,
        fraction: caps[3].to_owned(),
    })
}

pub fn parse_flat_label(label: &str) -> Option<FlatLabel> {
    let caps = flat_regex().captures(label)?;
    Some(FlatLabel {
        dims: number(&caps, 1)?,
        variant: FlatVariant::from_token(&caps[2])?,
    })
}
