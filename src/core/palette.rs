use thiserror::Error;

/// Display colors available to the series allocator. Primary shades color
/// mortgage series; their bright variants color the paired investment
/// series.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SeriesColor {
    Blue,
    BrightBlue,
    Green,
    BrightGreen,
    Magenta,
    BrightMagenta,
    Cyan,
    BrightCyan,
    Yellow,
    BrightYellow,
    Red,
    BrightRed,
}

/// Default palette: primary/bright pairs in presentation order. Scenario `i`
/// consumes entries `2i` and `2i + 1`.
pub const DEFAULT_PALETTE: &[SeriesColor] = &[
    SeriesColor::Blue,
    SeriesColor::BrightBlue,
    SeriesColor::Green,
    SeriesColor::BrightGreen,
    SeriesColor::Magenta,
    SeriesColor::BrightMagenta,
    SeriesColor::Cyan,
    SeriesColor::BrightCyan,
    SeriesColor::Yellow,
    SeriesColor::BrightYellow,
    SeriesColor::Red,
    SeriesColor::BrightRed,
];

#[derive(Debug, Error, Eq, PartialEq)]
pub enum PaletteError {
    #[error(
        "{requested} scenarios need {} palette colors, but the palette holds {capacity} \
         (at most {} scenarios)",
        .requested * 2,
        .capacity / 2
    )]
    Exhausted { requested: usize, capacity: usize },
}

/// Colors and display label assigned to one scenario's pair of chart/table
/// series.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SeriesStyle {
    pub label: String,
    pub mortgage_color: SeriesColor,
    pub investment_color: SeriesColor,
}

/// Deterministically assign each scenario a disjoint color pair from the
/// palette. Errors instead of wrapping when the palette runs out.
pub fn allocate_series(
    palette: &[SeriesColor],
    scenario_count: usize,
) -> Result<Vec<SeriesStyle>, PaletteError> {
    if scenario_count * 2 > palette.len() {
        return Err(PaletteError::Exhausted {
            requested: scenario_count,
            capacity: palette.len(),
        });
    }

    Ok((0..scenario_count)
        .map(|i| SeriesStyle {
            label: format!("Scenario {}", i + 1),
            mortgage_color: palette[2 * i],
            investment_color: palette[2 * i + 1],
        })
        .collect())
}
