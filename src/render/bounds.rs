// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BitpartPlots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of bitpart-plots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{AxisScale, Chart};

const MARGIN: f64 = 0.05;

fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    if span <= 0.0 {
        return (lo - 1.0, hi + 1.0);
    }
    (lo - span * MARGIN, hi + span * MARGIN)
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
    })
}

/// Plotted x range: the fixed axis plus a 5% margin (measured in log space on log axes).
pub fn x_bounds(chart: &Chart) -> (f64, f64) {
    match chart.x_scale {
        AxisScale::Linear => {
            let (lo, hi) = min_max(chart.x_axis.iter().copied()).unwrap_or((0.0, 1.0));
            padded(lo, hi)
        }
        AxisScale::Log2 => {
            let positive = chart.x_axis.iter().copied().filter(|x| *x > 0.0);
            let (lo, hi) = min_max(positive.map(f64::log2)).unwrap_or((0.0, 1.0));
            let (lo, hi) = padded(lo, hi);
            (lo.exp2(), hi.exp2())
        }
    }
}

/// Plotted y range: every error-bar extent plus a 5% margin.
pub fn y_bounds(chart: &Chart) -> (f64, f64) {
    let extents = chart
        .points()
        .flat_map(|point| [point.bottom(), point.top()])
        .filter(|value| value.is_finite());
    let (lo, hi) = min_max(extents).unwrap_or((0.0, 1.0));
    padded(lo, hi)
}

#[cfg(test)]
mod tests {
    use super::{x_bounds, y_bounds};
    use crate::model::{AxisScale, Chart, Series, SeriesPoint};

    fn chart(x_axis: Vec<f64>, x_scale: AxisScale, series: Vec<Series>) -> Chart {
        Chart {
            file_name: "test.png",
            x_desc: "x",
            y_desc: "y",
            x_axis,
            x_scale,
            cap_size: 5,
            series,
        }
    }

    fn point(x: f64, y: f64, err_low: f64, err_high: f64) -> SeriesPoint {
        SeriesPoint {
            x,
            y,
            err_low,
            err_high,
        }
    }

    #[test]
    fn linear_x_bounds_pad_both_sides() {
        let chart = chart(vec![10.0, 20.0, 30.0], AxisScale::Linear, Vec::new());
        assert_eq!(x_bounds(&chart), (9.0, 31.0));
    }

    #[test]
    fn log_x_bounds_pad_in_log_space() {
        let chart = chart(vec![512.0, 32768.0], AxisScale::Log2, Vec::new());
        let (lo, hi) = x_bounds(&chart);
        // log2 span 9..15, padded by 0.3 on each side.
        assert!((lo.log2() - 8.7).abs() < 1e-9, "lo={lo}");
        assert!((hi.log2() - 15.3).abs() < 1e-9, "hi={hi}");
    }

    #[test]
    fn y_bounds_cover_error_bars() {
        let series = vec![
            Series::new("a", vec![point(1.0, 10.0, 2.0, 5.0)]),
            Series::new("b", vec![point(2.0, 50.0, 1.0, 5.0)]),
        ];
        let chart = chart(vec![1.0, 2.0], AxisScale::Linear, series);
        // Extents 8..55, span 47.
        let (lo, hi) = y_bounds(&chart);
        assert!((lo - (8.0 - 2.35)).abs() < 1e-9, "lo={lo}");
        assert!((hi - (55.0 + 2.35)).abs() < 1e-9, "hi={hi}");
    }

    #[test]
    fn degenerate_ranges_are_widened() {
        let series = vec![Series::new("flat", vec![point(1.0, 4.0, 0.0, 0.0)])];
        let chart = chart(vec![1.0], AxisScale::Linear, series);
        assert_eq!(x_bounds(&chart), (0.0, 2.0));
        assert_eq!(y_bounds(&chart), (3.0, 5.0));
    }

    #[test]
    fn empty_chart_has_unit_range() {
        let chart = chart(Vec::new(), AxisScale::Linear, Vec::new());
        let (lo, hi) = y_bounds(&chart);
        assert!(lo < 0.0 && hi > 1.0);
    }
}
