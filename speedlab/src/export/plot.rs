use anyhow::Context;
use plotters::prelude::*;
use speedcore::interface::text::{PLOT_TITLE, PLOT_X_LABEL, PLOT_Y_LABEL};
use speedcore::processing::ModelReport;
use std::path::Path;

const CURVE_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Writes the speed-vs-time chart for `report` as an SVG file.
pub fn export_svg(report: &ModelReport, path: &Path) -> anyhow::Result<()> {
    draw_chart(report, path)
        .map_err(|err| anyhow::anyhow!("{err}"))
        .with_context(|| format!("rendering plot to {}", path.display()))
}

fn draw_chart(
    report: &ModelReport,
    path: &Path,
) -> Result<(), DrawingAreaErrorKind<std::io::Error>> {
    let area = SVGBackend::new(path, (960, 600)).into_drawing_area();
    area.fill(&WHITE)?;

    let bounds = report.curve.plot_bounds();
    let mut chart = ChartBuilder::on(&area)
        .caption(PLOT_TITLE, ("sans-serif", 26))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..bounds.x_max, bounds.y_min..bounds.y_max)?;

    chart
        .configure_mesh()
        .x_desc(PLOT_X_LABEL)
        .y_desc(PLOT_Y_LABEL)
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .light_line_style(BLACK.mix(0.08))
        .bold_line_style(BLACK.mix(0.2))
        .draw()?;

    let points = report.curve.points.iter().map(|p| (p.time, p.speed));
    chart.draw_series(LineSeries::new(points, CURVE_COLOR.stroke_width(2)))?;

    if report.curve.len() == 1 {
        if let Some(point) = report.curve.last() {
            chart.draw_series(std::iter::once(Circle::new(
                (point.time, point.speed),
                4,
                CURVE_COLOR.filled(),
            )))?;
        }
    }

    area.present()?;
    Ok(())
}
