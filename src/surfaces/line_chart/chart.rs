use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::raster::draw_line::{draw_line, draw_polyline, draw_rect_outline};
use crate::core::raster::draw_text::{Align, Typeface};
use crate::core::raster::fill_rect::fill_rect;
use crate::core::util::data_to_pixel_coords::data_to_pixel_coords;
use crate::surfaces::line_chart::axes::{Axes, format_tick, nice_ticks};
use crate::surfaces::line_chart::errors::LineChartError;
use crate::surfaces::line_chart::series::LineSeries;
use crate::surfaces::ports::file_presenter::FilePresenterPort;
use crate::surfaces::ports::frame_presenter::FramePresenterPort;
use std::path::Path;

/// Resolution of the on-screen canvas.
pub const SCREEN_DPI: u32 = 100;

const FIGURE_WIDTH_IN: f64 = 6.4;
const FIGURE_HEIGHT_IN: f64 = 4.8;

// Axes placement as fractions of the figure.
const SUBPLOT_LEFT: f64 = 0.125;
const SUBPLOT_RIGHT: f64 = 0.9;
const SUBPLOT_BOTTOM: f64 = 0.11;
const SUBPLOT_TOP: f64 = 0.88;

// Sizes in points (1/72 inch).
const LINE_WIDTH_PT: f64 = 1.5;
const SPINE_WIDTH_PT: f64 = 0.8;
const TICK_LENGTH_PT: f64 = 3.5;
const TICK_LABEL_PAD_PT: f64 = 3.5;
const FONT_SIZE_PT: f64 = 10.0;
const LEGEND_PAD_PT: f64 = 5.0;
const LEGEND_ENTRY_HEIGHT_PT: f64 = 12.0;
const LEGEND_SAMPLE_LENGTH_PT: f64 = 20.0;

const MAX_TICKS: u32 = 8;
const LEGEND_EDGE: Colour = Colour { r: 204, g: 204, b: 204 };

/// Immediate-mode line chart: one figure holding one axes.
///
/// `draw` rasterizes the current series into the screen canvas and
/// `flush_events` hands that canvas to the frame presenter, if any.
pub struct LineChart {
    axes: Axes,
    canvas: PixelBuffer,
    typeface: Typeface,
    presenter: Option<Box<dyn FramePresenterPort>>,
}

impl LineChart {
    pub fn new() -> Result<Self, LineChartError> {
        Ok(Self {
            axes: Axes::new(),
            canvas: PixelBuffer::new(figure_rect(SCREEN_DPI)?),
            typeface: Typeface::dejavu_sans_mono()?,
            presenter: None,
        })
    }

    #[must_use]
    pub fn with_presenter(mut self, presenter: Box<dyn FramePresenterPort>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    #[must_use]
    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    pub fn axes_mut(&mut self) -> &mut Axes {
        &mut self.axes
    }

    #[must_use]
    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }

    pub fn draw(&mut self) -> Result<(), LineChartError> {
        render_figure(&self.axes, &self.typeface, &mut self.canvas, SCREEN_DPI)
    }

    pub fn flush_events(&mut self) -> Result<(), LineChartError> {
        if let Some(presenter) = self.presenter.as_mut() {
            presenter.present(&self.canvas)?;
        }

        Ok(())
    }

    /// Renders the figure again at `dpi` and writes it through `presenter`.
    pub fn save_figure(
        &self,
        filepath: impl AsRef<Path>,
        dpi: u32,
        presenter: &impl FilePresenterPort,
    ) -> Result<(), LineChartError> {
        if dpi == 0 {
            return Err(LineChartError::InvalidDpi(dpi));
        }

        let mut buffer = PixelBuffer::new(figure_rect(dpi)?);
        render_figure(&self.axes, &self.typeface, &mut buffer, dpi)?;
        presenter.present(&buffer, filepath)?;

        Ok(())
    }

    pub fn close(mut self) -> Result<(), LineChartError> {
        if let Some(mut presenter) = self.presenter.take() {
            presenter.close()?;
        }

        Ok(())
    }
}

fn figure_rect(dpi: u32) -> Result<PixelRect, LineChartError> {
    let width = (FIGURE_WIDTH_IN * f64::from(dpi)).round() as u32;
    let height = (FIGURE_HEIGHT_IN * f64::from(dpi)).round() as u32;

    Ok(PixelRect::from_size(width, height)?)
}

fn points_to_pixels(points: f64, dpi: u32) -> u32 {
    (points * f64::from(dpi) / 72.0).round().max(1.0) as u32
}

fn font_size_px(dpi: u32) -> f32 {
    (FONT_SIZE_PT * f64::from(dpi) / 72.0) as f32
}

fn plot_area(canvas: PixelRect) -> Result<PixelRect, LineChartError> {
    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());

    let left = (SUBPLOT_LEFT * width).round() as i32;
    let right = (SUBPLOT_RIGHT * width).round() as i32;
    let top = ((1.0 - SUBPLOT_TOP) * height).round() as i32;
    let bottom = ((1.0 - SUBPLOT_BOTTOM) * height).round() as i32;

    Ok(PixelRect::new(Point { x: left, y: top }, Point { x: right, y: bottom })?)
}

fn render_figure(
    axes: &Axes,
    typeface: &Typeface,
    buffer: &mut PixelBuffer,
    dpi: u32,
) -> Result<(), LineChartError> {
    let canvas = buffer.pixel_rect();
    let plot_area = plot_area(canvas)?;
    let spine_px = points_to_pixels(SPINE_WIDTH_PT, dpi);

    buffer.fill(Colour::WHITE);

    draw_ticks(buffer, axes, typeface, canvas, plot_area, dpi);

    let line_px = points_to_pixels(LINE_WIDTH_PT, dpi);
    for series in axes.series() {
        draw_series(buffer, axes, series, plot_area, line_px);
    }

    draw_rect_outline(buffer, plot_area, Colour::BLACK, spine_px);

    if axes.legend_visible() {
        draw_legend(buffer, typeface, axes.series(), plot_area, dpi)?;
    }

    Ok(())
}

fn tick_step(ticks: &[f64]) -> f64 {
    match ticks {
        [first, second, ..] => second - first,
        _ => 1.0,
    }
}

/// Tick marks on the bottom and left spines, labelled outside the plot area.
fn draw_ticks(
    buffer: &mut PixelBuffer,
    axes: &Axes,
    typeface: &Typeface,
    canvas: PixelRect,
    plot_area: PixelRect,
    dpi: u32,
) {
    let view = axes.view();
    let tick_px = points_to_pixels(TICK_LENGTH_PT, dpi) as i32;
    let label_pad = points_to_pixels(TICK_LABEL_PAD_PT, dpi) as i32;
    let spine_px = points_to_pixels(SPINE_WIDTH_PT, dpi);
    let font_px = font_size_px(dpi);
    let (_, text_height) = typeface.measure("0", font_px);
    let bottom = plot_area.bottom_right().y;
    let left = plot_area.top_left().x;

    let x_ticks = nice_ticks(view.x_min(), view.x_max(), MAX_TICKS);
    let x_step = tick_step(&x_ticks);
    for x in x_ticks {
        let Ok(at) = data_to_pixel_coords(x, view.y_min(), view, plot_area) else {
            continue;
        };

        draw_line(
            buffer,
            canvas,
            Point { x: at.x, y: bottom },
            Point { x: at.x, y: bottom + tick_px },
            Colour::BLACK,
            spine_px,
        );
        typeface.draw_text(
            buffer,
            Point { x: at.x, y: bottom + tick_px + label_pad },
            Align::Centre,
            &format_tick(x, x_step),
            font_px,
            Colour::BLACK,
        );
    }

    let y_ticks = nice_ticks(view.y_min(), view.y_max(), MAX_TICKS);
    let y_step = tick_step(&y_ticks);
    for y in y_ticks {
        let Ok(at) = data_to_pixel_coords(view.x_min(), y, view, plot_area) else {
            continue;
        };

        draw_line(
            buffer,
            canvas,
            Point { x: left - tick_px, y: at.y },
            Point { x: left, y: at.y },
            Colour::BLACK,
            spine_px,
        );
        typeface.draw_text(
            buffer,
            Point { x: left - tick_px - label_pad, y: at.y - text_height as i32 / 2 },
            Align::Right,
            &format_tick(y, y_step),
            font_px,
            Colour::BLACK,
        );
    }
}

/// Non-finite samples break the line into separate runs.
fn draw_series(
    buffer: &mut PixelBuffer,
    axes: &Axes,
    series: &LineSeries,
    plot_area: PixelRect,
    line_px: u32,
) {
    let view = axes.view();
    let mut run: Vec<Point> = Vec::with_capacity(series.x().len());

    for (&x, &y) in series.x().iter().zip(series.y()) {
        match data_to_pixel_coords(x, y, view, plot_area) {
            Ok(point) => run.push(point),
            Err(_) => {
                draw_polyline(buffer, plot_area, &run, series.colour(), line_px);
                run.clear();
            }
        }
    }

    draw_polyline(buffer, plot_area, &run, series.colour(), line_px);
}

struct LegendLayout {
    rect: PixelRect,
    pad: i32,
    entry_height: i32,
    sample_length: i32,
    font_px: f32,
}

impl LegendLayout {
    /// Vertical centre of the `index`th entry.
    fn entry_centre(&self, index: usize) -> i32 {
        self.rect.top_left().y + self.pad / 2 + self.entry_height * index as i32 + self.entry_height / 2
    }

    fn sample_start(&self) -> i32 {
        self.rect.top_left().x + self.pad
    }

    fn label_start(&self) -> i32 {
        self.sample_start() + self.sample_length + self.pad
    }
}

/// Upper-right legend box sized to the widest label.
fn legend_layout(
    typeface: &Typeface,
    series: &[LineSeries],
    plot_area: PixelRect,
    dpi: u32,
) -> Result<LegendLayout, LineChartError> {
    let pad = points_to_pixels(LEGEND_PAD_PT, dpi) as i32;
    let entry_height = points_to_pixels(LEGEND_ENTRY_HEIGHT_PT, dpi) as i32;
    let sample_length = points_to_pixels(LEGEND_SAMPLE_LENGTH_PT, dpi) as i32;
    let font_px = font_size_px(dpi);
    let label_width = series
        .iter()
        .map(|entry| typeface.measure(entry.label(), font_px).0)
        .max()
        .unwrap_or(0) as i32;

    let right = plot_area.bottom_right().x - pad;
    let top = plot_area.top_left().y + pad;
    let left = right - sample_length - label_width - 3 * pad;
    let bottom = top + entry_height * series.len() as i32 + pad;
    let rect = PixelRect::new(Point { x: left, y: top }, Point { x: right, y: bottom })?;

    Ok(LegendLayout {
        rect,
        pad,
        entry_height,
        sample_length,
        font_px,
    })
}

fn draw_legend(
    buffer: &mut PixelBuffer,
    typeface: &Typeface,
    series: &[LineSeries],
    plot_area: PixelRect,
    dpi: u32,
) -> Result<(), LineChartError> {
    if series.is_empty() {
        return Ok(());
    }

    let layout = legend_layout(typeface, series, plot_area, dpi)?;
    let line_px = points_to_pixels(LINE_WIDTH_PT, dpi);
    let (_, text_height) = typeface.measure("0", layout.font_px);

    fill_rect(buffer, layout.rect, Colour::WHITE);
    draw_rect_outline(buffer, layout.rect, LEGEND_EDGE, 1);

    for (index, entry) in series.iter().enumerate() {
        let y = layout.entry_centre(index);

        draw_line(
            buffer,
            layout.rect,
            Point { x: layout.sample_start(), y },
            Point { x: layout.sample_start() + layout.sample_length, y },
            entry.colour(),
            line_px,
        );
        typeface.draw_text(
            buffer,
            Point { x: layout.label_start(), y: y - text_height as i32 / 2 },
            Align::Left,
            entry.label(),
            layout.font_px,
            Colour::BLACK,
        );
    }

    Ok(())
}
