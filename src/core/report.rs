use super::types::{ScenarioState, SummaryRow, SummaryValue};

/// Rows for the "Initial conditions" summary, one value column per scenario.
pub fn initial_conditions(scenarios: &[ScenarioState]) -> Vec<SummaryRow> {
    let currency = |f: fn(&ScenarioState) -> f64| {
        scenarios
            .iter()
            .map(|s| SummaryValue::Currency(f(s)))
            .collect::<Vec<_>>()
    };
    let percent = |f: fn(&ScenarioState) -> f64| {
        scenarios
            .iter()
            .map(|s| SummaryValue::Percent(f(s)))
            .collect::<Vec<_>>()
    };

    vec![
        SummaryRow {
            label: "Mortgage amount",
            values: currency(|s| s.config.mortgage),
            highlight: false,
        },
        SummaryRow {
            label: "Mortgage payment",
            values: currency(|s| s.config.mortgage_payment),
            highlight: false,
        },
        SummaryRow {
            label: "Mortgage interest",
            values: percent(|s| s.config.mortgage_rate),
            highlight: true,
        },
        blank_row(scenarios.len()),
        SummaryRow {
            label: "Investment start",
            values: currency(|s| s.config.investment),
            highlight: false,
        },
        SummaryRow {
            label: "Monthly investment",
            values: currency(|s| s.config.additional_investment),
            highlight: false,
        },
        SummaryRow {
            label: "Stock return",
            values: percent(|s| s.config.stock_rate),
            highlight: true,
        },
    ]
}

/// Rows for the "Final conditions" summary. Reads the terminal scenario
/// states without mutating them.
pub fn final_conditions(scenarios: &[ScenarioState]) -> Vec<SummaryRow> {
    let currency = |f: fn(&ScenarioState) -> f64| {
        scenarios
            .iter()
            .map(|s| SummaryValue::Currency(f(s)))
            .collect::<Vec<_>>()
    };

    vec![
        SummaryRow {
            label: "Total paid to mortgage",
            values: currency(|s| s.cumulative_principal_paid),
            highlight: false,
        },
        SummaryRow {
            label: "Total to mortgage interest",
            values: currency(|s| s.cumulative_interest_paid),
            highlight: false,
        },
        SummaryRow {
            label: "Mortgage remaining",
            values: currency(|s| s.mortgage_principal),
            highlight: false,
        },
        blank_row(scenarios.len()),
        SummaryRow {
            label: "Total investments",
            values: currency(|s| s.investment_balance),
            highlight: false,
        },
        SummaryRow {
            label: "Made from stocks",
            values: currency(|s| s.net_investment_gain()),
            highlight: true,
        },
    ]
}

fn blank_row(columns: usize) -> SummaryRow {
    SummaryRow {
        label: " ",
        values: vec![SummaryValue::Blank; columns],
        highlight: false,
    }
}
