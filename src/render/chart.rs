use colored::Colorize;

use super::{format_usd, terminal_color};
use crate::core::SeriesColor;

/// Y-axis labels are currency rounded to the nearest thousand, right-aligned
/// to this width.
const AXIS_LABEL_WIDTH: usize = 11;

/// Columns reserved left of the plot for the axis glyphs.
const OFFSET: usize = 3;

pub fn axis_label(value: f64) -> String {
    let rounded = (value / 1_000.0).round() * 1_000.0;
    format!("{:>AXIS_LABEL_WIDTH$}", format_usd(rounded))
}

fn paint(glyph: &str, color: Option<SeriesColor>) -> String {
    match color {
        Some(c) => glyph.color(terminal_color(c)).to_string(),
        None => glyph.to_string(),
    }
}

/// Plot one or more series as a box-glyph line chart, one column per data
/// point. `colors[j]` styles series `j`; missing entries render uncolored.
///
/// Layout follows the classic asciichart algorithm: values are scaled to
/// `height` rows, the y axis carries `┤` ticks with currency labels, and
/// line segments are drawn with `─ ╭ ╮ ╰ ╯ │`.
pub fn plot(series: &[Vec<f64>], colors: &[SeriesColor], height: u32) -> String {
    let columns = series.iter().map(Vec::len).max().unwrap_or(0);
    if columns == 0 {
        return String::new();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for points in series {
        for &value in points {
            min = min.min(value);
            max = max.max(value);
        }
    }

    let range = max - min;
    let ratio = if range > 0.0 {
        height as f64 / range
    } else {
        1.0
    };
    let min2 = (min * ratio).round() as i64;
    let max2 = (max * ratio).round() as i64;
    let rows = (max2 - min2) as usize;
    let width = columns + OFFSET;

    let mut grid = vec![vec![" ".to_string(); width]; rows + 1];

    for y in min2..=max2 {
        let value = if rows > 0 {
            max - (y - min2) as f64 * range / rows as f64
        } else {
            min
        };
        let row = (y - min2) as usize;
        grid[row][0] = axis_label(value);
        grid[row][OFFSET - 1] = if y == 0 { "┼" } else { "┤" }.to_string();
    }

    for (j, points) in series.iter().enumerate() {
        if points.is_empty() {
            continue;
        }
        let color = colors.get(j).copied();
        let scale = |v: f64| ((v * ratio).round() as i64 - min2) as usize;

        grid[rows - scale(points[0])][OFFSET - 1] = paint("┼", color);

        for x in 0..points.len() - 1 {
            let y0 = scale(points[x]);
            let y1 = scale(points[x + 1]);
            if y0 == y1 {
                grid[rows - y0][x + OFFSET] = paint("─", color);
            } else {
                grid[rows - y1][x + OFFSET] = paint(if y0 > y1 { "╰" } else { "╭" }, color);
                grid[rows - y0][x + OFFSET] = paint(if y0 > y1 { "╮" } else { "╯" }, color);
                for y in y0.min(y1) + 1..y0.max(y1) {
                    grid[rows - y][x + OFFSET] = paint("│", color);
                }
            }
        }
    }

    grid.into_iter()
        .map(|cells| {
            let mut line = cells.concat();
            line.truncate(line.trim_end().len());
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
