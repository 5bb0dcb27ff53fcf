// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BitpartPlots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of bitpart-plots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering of grouped charts to raster images.
//!
//! Output matches a 6.4x4.8 inch figure at 300 dpi. Sizes below are given in typographic points
//! and scaled to pixels with [`px`].

use std::fmt;
use std::path::Path;

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::model::{AxisScale, Chart};

pub mod bounds;

pub use bounds::{x_bounds, y_bounds};

pub const IMAGE_SIZE: (u32, u32) = (1920, 1440);
const DPI: f64 = 300.0;

const FONT: &str = "sans-serif";
const LABEL_FONT_PT: f64 = 10.0;
const LINE_WIDTH_PT: f64 = 1.5;
const LEGEND_LINE_PT: f64 = 20.0;
const LEGEND_GAP_PT: f64 = 6.0;

// Default color cycle, in series order.
const PALETTE: [RGBColor; 6] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
];

/// Points to pixels at the output resolution.
pub fn px(points: f64) -> u32 {
    (points * DPI / 72.0).round() as u32
}

pub fn series_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    Draw { file: String, message: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draw { file, message } => write!(f, "cannot draw {file}: {message}"),
        }
    }
}

impl std::error::Error for RenderError {}

fn draw_error(chart: &Chart) -> impl FnOnce(String) -> RenderError + '_ {
    move |message| RenderError::Draw {
        file: chart.file_name.to_owned(),
        message,
    }
}

/// Renders `chart` as a PNG (or any format the extension of `path` selects).
pub fn render_png(chart: &Chart, path: &Path) -> Result<(), RenderError> {
    let root = BitMapBackend::new(path, IMAGE_SIZE).into_drawing_area();
    draw_chart(&root, chart)
        .and_then(|_| root.present())
        .map_err(|err| err.to_string())
        .map_err(draw_error(chart))
}

/// Renders `chart` into an RGB pixel buffer of [`IMAGE_SIZE`].
pub fn render_rgb(chart: &Chart) -> Result<Vec<u8>, RenderError> {
    render_rgb_with_coords(chart).map(|(buffer, _)| buffer)
}

fn render_rgb_with_coords(chart: &Chart) -> Result<(Vec<u8>, PlotCoord), RenderError> {
    let (width, height) = IMAGE_SIZE;
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    let root = BitMapBackend::with_buffer(&mut buffer, IMAGE_SIZE).into_drawing_area();
    let coord = draw_chart(&root, chart)
        .and_then(|coord| root.present().map(|()| coord))
        .map_err(|err| err.to_string())
        .map_err(draw_error(chart))?;
    drop(root);
    Ok((buffer, coord))
}

/// Plot coordinates: x in plot space (see [`AxisScale`]), y in milliseconds.
pub type PlotCoord = Cartesian2d<RangedCoordf64, RangedCoordf64>;

/// Draws `chart` onto `root` and returns the coordinate mapping of its plotting area.
pub fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &Chart,
) -> Result<PlotCoord, DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let (x_lo, x_hi) = x_bounds(chart);
    let (y_lo, y_hi) = y_bounds(chart);
    let scale = chart.x_scale;
    let x_range = plot_x(scale, x_lo)..plot_x(scale, x_hi);

    let mut ctx = ChartBuilder::on(root)
        .margin(px(12.0))
        .x_label_area_size(px(32.0))
        .y_label_area_size(px(40.0))
        .build_cartesian_2d(x_range, y_lo..y_hi)?;

    let font_px = px(LABEL_FONT_PT);
    let line_px = px(LINE_WIDTH_PT);
    let legend_px = px(LEGEND_LINE_PT);

    ctx.configure_mesh()
        .x_desc(chart.x_desc)
        .y_desc(chart.y_desc)
        .x_labels(chart.x_axis.len())
        .x_label_formatter(&|x| format_tick(data_x(scale, *x)))
        .y_label_formatter(&|y| format_tick(*y))
        .label_style((FONT, font_px))
        .axis_desc_style((FONT, font_px))
        .bold_line_style(BLACK.mix(0.15).stroke_width(line_px / 3 + 1))
        .light_line_style(WHITE)
        .draw()?;

    // Caps span `cap_size` points on each side of the bar.
    let half_cap = px(f64::from(chart.cap_size)) as i32;

    for (index, series) in chart.series.iter().enumerate() {
        let style = series_color(index).stroke_width(line_px);
        let glyph_end = legend_px as i32;

        ctx.draw_series(LineSeries::new(
            series.points().iter().map(|p| (plot_x(scale, p.x), p.y)),
            style,
        ))?
        .label(series.name())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + glyph_end, y)], style));

        if !series.has_error_bars() {
            continue;
        }

        ctx.draw_series(series.points().iter().map(|p| {
            let x = plot_x(scale, p.x);
            PathElement::new(vec![(x, p.bottom()), (x, p.top())], style)
        }))?;
        ctx.draw_series(series.points().iter().flat_map(|p| {
            let x = plot_x(scale, p.x);
            [p.bottom(), p.top()].map(|y| {
                EmptyElement::at((x, y))
                    + PathElement::new(vec![(-half_cap, 0), (half_cap, 0)], style)
            })
        }))?;
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .legend_area_size(legend_px + px(LEGEND_GAP_PT))
        .label_font((FONT, font_px))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .draw()?;

    Ok(ctx.plotting_area().as_coord_spec().clone())
}

// Log axes are drawn on a linear coordinate over log2(x); tick labels map back.
fn plot_x(scale: AxisScale, x: f64) -> f64 {
    match scale {
        AxisScale::Linear => x,
        AxisScale::Log2 => x.log2(),
    }
}

fn data_x(scale: AxisScale, x: f64) -> f64 {
    match scale {
        AxisScale::Linear => x,
        AxisScale::Log2 => x.exp2(),
    }
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
