mod engine;
mod palette;
mod report;
mod types;

pub use engine::{advance_month, midyear_row, run_simulation};
pub use palette::{DEFAULT_PALETTE, PaletteError, SeriesColor, SeriesStyle, allocate_series};
pub use report::{final_conditions, initial_conditions};
pub use types::{
    BalancePoint, Granularity, RowLabel, ScenarioConfig, ScenarioState, Snapshot, SummaryRow,
    SummaryValue,
};
