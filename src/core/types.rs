/// How often a mid-year snapshot row is emitted, on top of the mandatory
/// year-boundary rows.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Granularity {
    Quarterly,
    Monthly,
    Yearly,
}

/// Fixed parameters for one mortgage-vs-investment strategy. Rates are
/// annual fractions (0.042 = 4.2%), payments and contributions monthly.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioConfig {
    pub mortgage: f64,
    pub mortgage_rate: f64,
    pub mortgage_payment: f64,
    pub investment: f64,
    pub stock_rate: f64,
    pub additional_investment: f64,
}

/// Running state of one scenario. Constructed once before the run, mutated
/// in place once per simulated month, read-only afterwards.
#[derive(Debug, Clone)]
pub struct ScenarioState {
    pub config: ScenarioConfig,
    pub mortgage_principal: f64,
    pub investment_balance: f64,
    pub cumulative_interest_paid: f64,
    pub cumulative_principal_paid: f64,
    pub mortgage_history: Vec<f64>,
    pub investment_history: Vec<f64>,
}

impl ScenarioState {
    pub fn new(config: ScenarioConfig) -> Self {
        Self {
            config,
            mortgage_principal: config.mortgage,
            investment_balance: config.investment,
            cumulative_interest_paid: 0.0,
            cumulative_principal_paid: 0.0,
            mortgage_history: Vec::new(),
            investment_history: Vec::new(),
        }
    }

    pub fn net_investment_gain(&self) -> f64 {
        self.investment_balance - self.config.investment
    }
}

/// Label of one emitted table row. Year boundaries are rendered highlighted;
/// cadence rows are not.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RowLabel {
    /// `Year N`: the mandatory snapshot at the start of year 0 and after the
    /// final simulated year.
    YearBoundary(u32),
    /// `Q1`/`Q2`/`Q3` under quarterly granularity.
    Quarter(u32),
    /// Bare month number under monthly granularity.
    Month(u32),
}

impl RowLabel {
    pub fn is_year_boundary(self) -> bool {
        matches!(self, RowLabel::YearBoundary(_))
    }

    pub fn display(self) -> String {
        match self {
            RowLabel::YearBoundary(year) => format!("Year {year}"),
            RowLabel::Quarter(quarter) => format!("Q{quarter}"),
            RowLabel::Month(month) => format!("{month:>2}"),
        }
    }
}

/// Per-scenario balances captured when a snapshot row is emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalancePoint {
    pub mortgage: f64,
    pub investment: f64,
}

/// One emitted row of the periodic table: a label plus the balances of
/// every scenario at that moment, in scenario order.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub label: RowLabel,
    pub balances: Vec<BalancePoint>,
}

/// A single cell value in a summary row; formatting happens in the render
/// layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummaryValue {
    Currency(f64),
    Percent(f64),
    Blank,
}

/// One labelled row of the initial- or final-conditions summary, one value
/// per scenario. Highlighted rows are rendered in the accent color.
#[derive(Debug, Clone)]
pub struct SummaryRow {
    pub label: &'static str,
    pub values: Vec<SummaryValue>,
    pub highlight: bool,
}
