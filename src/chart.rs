use crate::models::{ChartData, ChartOptions, Dataset, VisitRecord};
use std::fmt::Write;

pub const SERIES_LABEL: &str = "Daily Visitors";
pub const LINE_COLOR: &str = "#FFD700";
pub const FILL_COLOR: &str = "rgba(255, 215, 0, 0.2)";
pub const GRID_COLOR: &str = "rgba(255, 215, 0, 0.1)";
pub const LINE_TENSION: f64 = 0.4;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 400.0;
const PADDING_X: f64 = 44.0;
const PADDING_Y: f64 = 48.0;
const TOP: f64 = 40.0;
const Y_TICKS: u64 = 4;
const MAX_X_LABELS: usize = 8;

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            legend_position: "top".to_string(),
            legend_color: LINE_COLOR.to_string(),
            tick_color: LINE_COLOR.to_string(),
            grid_color: GRID_COLOR.to_string(),
        }
    }
}

pub fn build_chart(records: &[VisitRecord]) -> ChartData {
    let (labels, data): (Vec<String>, Vec<u64>) = records
        .iter()
        .map(|record| (record.date.to_string(), record.count))
        .unzip();

    ChartData {
        labels,
        datasets: vec![Dataset {
            label: SERIES_LABEL.to_string(),
            data,
            border_color: LINE_COLOR.to_string(),
            background_color: FILL_COLOR.to_string(),
            tension: LINE_TENSION,
        }],
    }
}

pub fn render_svg(chart: &ChartData, options: &ChartOptions) -> String {
    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg class="chart" viewBox="0 0 {WIDTH} {HEIGHT}" {sizing}role="img" aria-label="Daily visitors chart">"#,
        sizing = if options.responsive {
            r#"preserveAspectRatio="xMidYMid meet" "#
        } else {
            ""
        },
    );

    let Some(series) = chart.datasets.first().filter(|set| !set.data.is_empty()) else {
        let _ = write!(
            svg,
            r#"<text x="50%" y="50%" text-anchor="middle" fill="{}" font-size="14">No data yet</text></svg>"#,
            options.tick_color
        );
        return svg;
    };

    render_legend(&mut svg, series, options);

    let max = series.data.iter().copied().max().unwrap_or(0).max(1);
    let range = max as f64;
    let count = series.data.len();
    let x_step = if count > 1 {
        (WIDTH - PADDING_X * 2.0) / (count - 1) as f64
    } else {
        0.0
    };
    let scale_y = (HEIGHT - TOP - PADDING_Y) / range;
    let x = |index: usize| PADDING_X + index as f64 * x_step;
    let y = |value: f64| HEIGHT - PADDING_Y - value * scale_y;

    for tick in 0..=Y_TICKS {
        let value = range * tick as f64 / Y_TICKS as f64;
        let y_pos = y(value);
        let _ = write!(
            svg,
            r#"<line x1="{PADDING_X}" y1="{y_pos:.2}" x2="{x2}" y2="{y_pos:.2}" stroke="{grid}" />"#,
            x2 = WIDTH - PADDING_X,
            grid = options.grid_color,
        );
        let _ = write!(
            svg,
            r#"<text x="{tx}" y="{ty:.2}" text-anchor="end" fill="{color}" font-size="11">{label}</text>"#,
            tx = PADDING_X - 10.0,
            ty = y_pos + 4.0,
            color = options.tick_color,
            label = axis_label(value),
        );
    }

    let points: Vec<(f64, f64)> = series
        .data
        .iter()
        .enumerate()
        .map(|(index, value)| (x(index), y(*value as f64)))
        .collect();

    let _ = write!(
        svg,
        r#"<path d="{}" fill="none" stroke="{}" stroke-width="3" />"#,
        line_path(&points, series.tension),
        series.border_color,
    );

    for (index, (px, py)) in points.iter().enumerate() {
        let label = chart.labels.get(index).map(String::as_str).unwrap_or_default();
        let _ = write!(
            svg,
            r#"<circle cx="{px:.2}" cy="{py:.2}" r="4" fill="{}" stroke="{}" stroke-width="2"><title>{}: {}</title></circle>"#,
            series.background_color,
            series.border_color,
            escape(label),
            series.data[index],
        );
    }

    let label_every = count.div_ceil(MAX_X_LABELS).max(1);
    for (index, label) in chart.labels.iter().enumerate().take(count) {
        if index % label_every != 0 {
            continue;
        }
        let _ = write!(
            svg,
            r#"<text x="{lx:.2}" y="{ly}" text-anchor="middle" fill="{color}" font-size="11">{label}</text>"#,
            lx = x(index),
            ly = HEIGHT - PADDING_Y + 18.0,
            color = options.tick_color,
            label = escape(label),
        );
    }

    svg.push_str("</svg>");
    svg
}

fn render_legend(svg: &mut String, series: &Dataset, options: &ChartOptions) {
    let y = if options.legend_position == "bottom" {
        HEIGHT - 10.0
    } else {
        20.0
    };
    let _ = write!(
        svg,
        r#"<rect x="{rx}" y="{ry}" width="28" height="10" fill="{fill}" stroke="{stroke}" />"#,
        rx = WIDTH / 2.0 - 60.0,
        ry = y - 9.0,
        fill = series.background_color,
        stroke = series.border_color,
    );
    let _ = write!(
        svg,
        r#"<text x="{tx}" y="{y}" fill="{color}" font-size="12">{label}</text>"#,
        tx = WIDTH / 2.0 - 24.0,
        color = options.legend_color,
        label = escape(&series.label),
    );
}

fn line_path(points: &[(f64, f64)], tension: f64) -> String {
    let mut path = String::new();
    let Some(&(first_x, first_y)) = points.first() else {
        return path;
    };
    let _ = write!(path, "M {first_x:.2} {first_y:.2}");

    for i in 1..points.len() {
        let (x1, y1) = points[i];
        if tension <= 0.0 {
            let _ = write!(path, " L {x1:.2} {y1:.2}");
            continue;
        }
        let prev = points[i.saturating_sub(2)];
        let (x0, y0) = points[i - 1];
        let next = points[(i + 1).min(points.len() - 1)];
        let k = tension / 2.0;
        let c1 = (x0 + (x1 - prev.0) * k, y0 + (y1 - prev.1) * k);
        let c2 = (x1 - (next.0 - x0) * k, y1 - (next.1 - y0) * k);
        let _ = write!(
            path,
            " C {:.2} {:.2}, {:.2} {:.2}, {x1:.2} {y1:.2}",
            c1.0, c1.1, c2.0, c2.1
        );
    }
    path
}

fn axis_label(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

pub(crate) fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
