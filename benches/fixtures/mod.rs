// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BitpartPlots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of bitpart-plots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Deterministic Criterion reports for benchmarks (no RNG).

use std::fmt::Write as _;

use bitpart_plots::model::Report;

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// One full bitpart run: every chart family once.
    Full,
    /// The full run repeated, as when several result files are concatenated.
    Repeated,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Repeated => "repeated_x20",
        }
    }

    fn repeats(self) -> usize {
        match self {
            Self::Full => 1,
            Self::Repeated => 20,
        }
    }
}

pub fn report_text(case: Case) -> String {
    let mut out = String::new();
    for _ in 0..case.repeats() {
        out.push_str("     Running benches/bitpart.rs (target/release/deps/bitpart-5b1c0d7e2f1a9c44)\n");
        for (execution, base) in [("seq", 30.0), ("par", 6.0), ("disk", 55.0)] {
            for points in 1..=10 {
                push_block(&mut out, &format!("setup/{execution}/{points}"), base * f64::from(points));
            }
        }
        push_block(&mut out, "block_size/None", 1480.0);
        for size in [512u32, 1024, 2048, 4096, 8192, 16384, 32768] {
            push_block(&mut out, &format!("block_size/{size}"), 900.0 + f64::from(size) / 40.0);
        }
        for dims in (10..=30).step_by(2) {
            let d = f64::from(dims);
            for (variant, scale) in [("lin", 40.0), ("lin_par", 8.0), ("seq", 20.0), ("par", 4.0), ("disk", 30.0)] {
                push_block(&mut out, &format!("100k_d{dims}_flat/{variant}"), scale * d);
            }
            for strategy in ["pop", "sim", "all"] {
                for (fraction, scale) in [("0.95", 2.5), ("0.8", 1.5)] {
                    push_block(&mut out, &format!("100k_d{dims}_flat/cull_{strategy}/{fraction}"), scale * d);
                }
            }
        }
    }
    out
}

fn push_block(out: &mut String, label: &str, ms: f64) {
    let _ = write!(
        out,
        "Benchmarking {label}\n\
         Benchmarking {label}: Warming up for 3.0000 s\n\
         Benchmarking {label}: Collecting 100 samples in estimated 5.0000 s (100 iterations)\n\
         Benchmarking {label}: Analyzing\n\
         {label:<24}time:   [{lo:.4} ms {ms:.4} ms {hi:.4} ms]\n\
         Found 2 outliers among 100 measurements (2.00%)\n\
         \x20 2 (2.00%) high mild\n\
         slope  [{lo:.4} ms {hi:.4} ms] R^2 [0.9812431 0.9809911]\n\
         mean   [{lo:.4} ms {hi:.4} ms] std. dev.   [{dev:.2} µs {dev2:.2} µs]\n\
         median [{lo:.4} ms {hi:.4} ms] med. abs. dev. [{dev:.2} µs {dev2:.2} µs]\n\n",
        lo = ms * 0.98,
        hi = ms * 1.02,
        dev = ms * 10.0,
        dev2 = ms * 15.0,
    );
}

pub fn checksum(report: &Report) -> f64 {
    report.iter().map(|record| record.time_ms() + record.err_high_ms()).sum()
}
