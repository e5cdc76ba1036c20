use crate::{
    axis::KpRange,
    error::{ChartError, Result},
    font::{self, FONT_DATA, FONT_FAMILY},
    format::ImageFormat,
    ticks::{line_segments, tick_positions},
};
use log::info;
use plotters::coord::{types::RangedCoordf64, Shift};
use plotters::prelude::*;
use spp_profile::{scale::validate_interval, Profile};
use std::path::Path;

const DEPTH_COLOR: RGBColor = CYAN;
const GRADIENT_COLOR: RGBColor = RED;
const AVERAGE_COLOR: RGBColor = BLACK;
const GRID_COLOR: RGBColor = RGBColor(0xdf, 0xdf, 0xdf);

const PDF_DPI: f64 = 96.0;
const PDF_MARGIN_MM: f64 = 10.0;
const MM_PER_INCH: f64 = 25.4;

type KpChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<KpRange, RangedCoordf64>>;

/// Size and fixed axis limits of a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Figure width in pixels
    pub width: u32,
    /// Figure height in pixels, shared by both panels
    pub height: u32,
    /// Padding above and below the depth range
    pub depth_margin: f64,
    /// Upper limit of the gradient panel in degrees
    pub gradient_ceiling: f64,
    /// Upper bound on x-axis ticks per panel
    pub max_ticks: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            width: 800,
            height: 400,
            depth_margin: 10.0,
            gradient_ceiling: 65.0,
            max_ticks: 500,
        }
    }
}

/// A profile ready to be drawn with a fixed tick interval.
#[derive(Debug, Clone)]
pub struct Figure<'a> {
    profile: &'a Profile,
    interval: f64,
    config: ChartConfig,
}

/// Prepare a figure for `profile` with ticks every `interval` km.
pub fn render<'a>(profile: &'a Profile, interval: f64, config: &ChartConfig) -> Result<Figure<'a>> {
    let interval = validate_interval(interval)?;
    Ok(Figure {
        profile,
        interval,
        config: config.clone(),
    })
}

impl<'a> Figure<'a> {
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Shared x-axis limits. A zero-width kp range is padded by half an
    /// interval on each side.
    pub fn kp_axis(&self) -> (f64, f64) {
        let (min, max) = self.profile.kp_bounds();
        if max > min {
            (min, max)
        } else {
            let pad = self.interval / 2.0;
            (min - pad, max + pad)
        }
    }

    /// Depth panel limits as (shallowest, deepest).
    pub fn depth_axis(&self) -> (f64, f64) {
        let (min, max) = self.profile.depth_bounds();
        (min - self.config.depth_margin, max + self.config.depth_margin)
    }

    /// Gradient panel limits in degrees.
    pub fn gradient_axis(&self) -> (f64, f64) {
        (0.0, self.config.gradient_ceiling)
    }

    pub fn ticks(&self) -> Vec<f64> {
        let (min, max) = self.kp_axis();
        tick_positions(min, max, self.interval, self.config.max_ticks)
    }

    fn kp_range(&self) -> KpRange {
        let (min, max) = self.kp_axis();
        KpRange::new(min..max, self.ticks(), self.interval)
    }

    fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Write the figure to `path`, picking the backend from its extension.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<ImageFormat> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path)?;
        match format {
            ImageFormat::Svg => self.draw(SVGBackend::new(path, self.size()).into_drawing_area())?,
            ImageFormat::Png | ImageFormat::Jpeg => {
                self.draw(BitMapBackend::new(path, self.size()).into_drawing_area())?
            }
            ImageFormat::Pdf => self.export_pdf(path)?,
        }
        info!("Wrote {:?} chart to {}", format, path.display());
        Ok(format)
    }

    /// Render the figure as an SVG document in memory.
    pub fn to_svg_string(&self) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size()).into_drawing_area();
            self.draw(root)?;
        }
        Ok(svg)
    }

    /// Single-page PDF holding the raster chart at its pixel size.
    fn export_pdf(&self, path: &Path) -> Result<()> {
        let raster = tempfile::Builder::new()
            .prefix("spp-chart-")
            .suffix(".png")
            .tempfile()?;
        self.draw(BitMapBackend::new(raster.path(), self.size()).into_drawing_area())?;

        let face = || genpdf::fonts::FontData::new(FONT_DATA.to_vec(), None).map_err(pdf_error);
        let family = genpdf::fonts::FontFamily {
            regular: face()?,
            bold: face()?,
            italic: face()?,
            bold_italic: face()?,
        };

        let mm = |px: u32| px as f64 * MM_PER_INCH / PDF_DPI;
        let (width, height) = self.size();
        let page = |px: u32| mm(px) + 2.0 * PDF_MARGIN_MM + 1.0;

        let mut doc = genpdf::Document::new(family);
        doc.set_title(self.profile.title());
        doc.set_paper_size(genpdf::Size::new(page(width), page(height)));
        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(PDF_MARGIN_MM);
        doc.set_page_decorator(decorator);

        let image = genpdf::elements::Image::from_path(raster.path())
            .map_err(pdf_error)?
            .with_dpi(PDF_DPI);
        doc.push(image);
        doc.render_to_file(path).map_err(pdf_error)
    }

    fn draw<DB: DrawingBackend>(&self, root: DrawingArea<DB, Shift>) -> Result<()> {
        font::ensure_registered()?;
        self.draw_panels(&root)
            .map_err(|e| ChartError::Draw(e.to_string()))
    }

    fn draw_panels<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> DrawResult<(), DB> {
        root.fill(&WHITE)?;
        let panels = root.split_evenly((2, 1));
        self.draw_depth_panel(&panels[0])?;
        self.draw_gradient_panel(&panels[1])?;
        root.present()
    }

    fn draw_depth_panel<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> DrawResult<(), DB> {
        let (shallow, deep) = self.depth_axis();

        // depths are negated so deeper stations sit lower on the panel
        let mut chart = ChartBuilder::on(area)
            .caption(self.profile.title(), (FONT_FAMILY, 16))
            .margin(10)
            .x_label_area_size(25)
            .y_label_area_size(50)
            .build_cartesian_2d(self.kp_range(), -deep..-shallow)?;

        chart
            .configure_mesh()
            .bold_line_style(GRID_COLOR)
            .light_line_style(WHITE)
            .label_style((FONT_FAMILY, 12))
            .y_label_formatter(&|y: &f64| format!("{:.1}", 0.0 - y))
            .y_desc("Seabed Depth")
            .axis_desc_style((FONT_FAMILY, 14).into_font().color(&DEPTH_COLOR))
            .draw()?;

        let style = DEPTH_COLOR.stroke_width(1);
        chart
            .draw_series(LineSeries::new(
                self.profile.iter().map(|s| (s.kp, -s.depth)),
                style,
            ))?
            .label("Seabed Depth")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));

        draw_legend(&mut chart)
    }

    fn draw_gradient_panel<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> DrawResult<(), DB> {
        let (floor, ceiling) = self.gradient_axis();

        let mut chart = ChartBuilder::on(area)
            .margin(10)
            .x_label_area_size(35)
            .y_label_area_size(50)
            .build_cartesian_2d(self.kp_range(), floor..ceiling)?;

        chart
            .configure_mesh()
            .bold_line_style(GRID_COLOR)
            .light_line_style(WHITE)
            .label_style((FONT_FAMILY, 12))
            .y_label_formatter(&|g: &f64| format!("{:.0}", g))
            .x_desc("Kilometer Post (KP)")
            .y_desc("Seabed Gradient (°)")
            .axis_desc_style((FONT_FAMILY, 14))
            .draw()?;

        draw_broken_line(
            &mut chart,
            self.profile.iter().map(|s| (s.kp, s.gradient)),
            GRADIENT_COLOR.stroke_width(1),
            "Seabed Gradient",
        )?;
        draw_broken_line(
            &mut chart,
            self.profile.iter().map(|s| (s.kp, s.moving_average)),
            AVERAGE_COLOR.stroke_width(1),
            "Moving Average (30)",
        )?;

        draw_legend(&mut chart)
    }
}

fn pdf_error(e: genpdf::error::Error) -> ChartError {
    ChartError::Pdf(e.to_string())
}

/// Draw a series that may contain missing values. The legend entry is
/// registered once, even when every value is missing.
fn draw_broken_line<'a, DB, I>(
    chart: &mut KpChart<'a, DB>,
    points: I,
    style: ShapeStyle,
    label: &str,
) -> DrawResult<(), DB>
where
    DB: DrawingBackend + 'a,
    I: IntoIterator<Item = (f64, Option<f64>)>,
{
    chart
        .draw_series(LineSeries::new(Vec::<(f64, f64)>::new(), style))?
        .label(label)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    for segment in line_segments(points) {
        chart.draw_series(LineSeries::new(segment, style))?;
    }
    Ok(())
}

fn draw_legend<'a, DB: DrawingBackend + 'a>(chart: &mut KpChart<'a, DB>) -> DrawResult<(), DB> {
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT_FAMILY, 12))
        .draw()
}
