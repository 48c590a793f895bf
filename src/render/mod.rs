pub mod chart;

use colored::{Color, Colorize};
use comfy_table::{Cell, Table, presets::UTF8_FULL};

use crate::core::{SeriesColor, SeriesStyle, Snapshot, SummaryRow, SummaryValue};

/// Format an amount as en-US currency: `$#,##0.00`, `-$…` when negative.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u128;
    let dollars = cents / 100;
    let fraction = cents % 100;
    let sign = if amount.is_sign_negative() && cents > 0 {
        "-"
    } else {
        ""
    };
    format!("{sign}${}.{fraction:02}", group_thousands(dollars))
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

pub(crate) fn terminal_color(color: SeriesColor) -> Color {
    match color {
        SeriesColor::Blue => Color::Blue,
        SeriesColor::BrightBlue => Color::BrightBlue,
        SeriesColor::Green => Color::Green,
        SeriesColor::BrightGreen => Color::BrightGreen,
        SeriesColor::Magenta => Color::Magenta,
        SeriesColor::BrightMagenta => Color::BrightMagenta,
        SeriesColor::Cyan => Color::Cyan,
        SeriesColor::BrightCyan => Color::BrightCyan,
        SeriesColor::Yellow => Color::Yellow,
        SeriesColor::BrightYellow => Color::BrightYellow,
        SeriesColor::Red => Color::Red,
        SeriesColor::BrightRed => Color::BrightRed,
    }
}

fn table_color(color: SeriesColor) -> comfy_table::Color {
    match color {
        // comfy-table names the bright ANSI colors plainly and prefixes the
        // normal ones with Dark.
        SeriesColor::Blue => comfy_table::Color::DarkBlue,
        SeriesColor::BrightBlue => comfy_table::Color::Blue,
        SeriesColor::Green => comfy_table::Color::DarkGreen,
        SeriesColor::BrightGreen => comfy_table::Color::Green,
        SeriesColor::Magenta => comfy_table::Color::DarkMagenta,
        SeriesColor::BrightMagenta => comfy_table::Color::Magenta,
        SeriesColor::Cyan => comfy_table::Color::DarkCyan,
        SeriesColor::BrightCyan => comfy_table::Color::Cyan,
        SeriesColor::Yellow => comfy_table::Color::DarkYellow,
        SeriesColor::BrightYellow => comfy_table::Color::Yellow,
        SeriesColor::Red => comfy_table::Color::DarkRed,
        SeriesColor::BrightRed => comfy_table::Color::Red,
    }
}

/// Build the periodic mortgage-and-investments table. Year-boundary rows are
/// rendered green to stand out from cadence rows.
pub fn periodic_table(snapshots: &[Snapshot], styles: &[SeriesStyle]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header = vec![Cell::new("Time")];
    for style in styles {
        header.push(
            Cell::new(format!("{} mortgage owed", style.label))
                .fg(table_color(style.mortgage_color)),
        );
        header.push(
            Cell::new(format!("{} in stocks", style.label))
                .fg(table_color(style.investment_color)),
        );
    }
    table.set_header(header);

    for snapshot in snapshots {
        let mut cells = vec![Cell::new(snapshot.label.display())];
        for point in &snapshot.balances {
            cells.push(Cell::new(format_usd(point.mortgage)));
            cells.push(Cell::new(format_usd(point.investment)));
        }
        if snapshot.label.is_year_boundary() {
            cells = cells
                .into_iter()
                .map(|c| c.fg(comfy_table::Color::Green))
                .collect();
        }
        table.add_row(cells);
    }

    table
}

/// Build an initial- or final-conditions table from aggregated rows.
pub fn summary_table(rows: &[SummaryRow], styles: &[SeriesStyle]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header = vec![Cell::new(" ")];
    for style in styles {
        header.push(Cell::new(&style.label));
    }
    table.set_header(header);

    for row in rows {
        let mut cells = vec![Cell::new(row.label)];
        for value in &row.values {
            let text = match value {
                SummaryValue::Currency(v) => format_usd(*v),
                SummaryValue::Percent(v) => format_percent(*v),
                SummaryValue::Blank => " ".to_string(),
            };
            cells.push(Cell::new(text));
        }
        if row.highlight {
            cells = cells
                .into_iter()
                .map(|c| c.fg(comfy_table::Color::Green))
                .collect();
        }
        table.add_row(cells);
    }

    table
}

/// Render an annual-rate fraction as a percentage string, two decimals at
/// most (`0.042` → `4.2%`).
pub fn format_percent(rate: f64) -> String {
    let percent = (rate * 10_000.0).round() / 100.0;
    format!("{percent}%")
}

/// Legend mapping each scenario to its chart color pair.
pub fn legend(styles: &[SeriesStyle]) -> String {
    let mut lines = Vec::with_capacity(styles.len() * 2);
    for style in styles {
        lines.push(format!(
            "  {} {} mortgage owed",
            "──".color(terminal_color(style.mortgage_color)),
            style.label
        ));
        lines.push(format!(
            "  {} {} in stocks",
            "──".color(terminal_color(style.investment_color)),
            style.label
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BalancePoint, DEFAULT_PALETTE, RowLabel, allocate_series};

    #[test]
    fn currency_formats_with_separators_and_cents() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(9_001.0), "$9,001.00");
        assert_eq!(format_usd(1_420.69), "$1,420.69");
        assert_eq!(format_usd(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_usd(-437.5), "-$437.50");
        assert_eq!(format_usd(999.999), "$1,000.00");
    }

    #[test]
    fn percent_drops_trailing_zeros_like_the_rate_inputs() {
        assert_eq!(format_percent(0.042), "4.2%");
        assert_eq!(format_percent(0.07), "7%");
        assert_eq!(format_percent(0.0375), "3.75%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn periodic_table_has_two_columns_per_scenario() {
        let styles = allocate_series(DEFAULT_PALETTE, 2).unwrap();
        let snapshots = vec![Snapshot {
            label: RowLabel::YearBoundary(0),
            balances: vec![
                BalancePoint {
                    mortgage: 125_000.0,
                    investment: 9_001.0,
                },
                BalancePoint {
                    mortgage: 200_000.0,
                    investment: 0.0,
                },
            ],
        }];

        let rendered = periodic_table(&snapshots, &styles).to_string();
        assert!(rendered.contains("Scenario 1 mortgage owed"));
        assert!(rendered.contains("Scenario 2 in stocks"));
        assert!(rendered.contains("Year 0"));
        assert!(rendered.contains("$125,000.00"));
        assert!(rendered.contains("$9,001.00"));
    }

    #[test]
    fn legend_names_every_series() {
        let styles = allocate_series(DEFAULT_PALETTE, 2).unwrap();
        let legend = legend(&styles);
        assert!(legend.contains("Scenario 1 mortgage owed"));
        assert!(legend.contains("Scenario 1 in stocks"));
        assert!(legend.contains("Scenario 2 mortgage owed"));
        assert!(legend.contains("Scenario 2 in stocks"));
    }
}
