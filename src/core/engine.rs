use super::types::{BalancePoint, Granularity, RowLabel, ScenarioState, Snapshot};

/// Advance one scenario by exactly one calendar month, in place.
///
/// The step order is load-bearing: investment growth compounds before any
/// mortgage-driven transfer, so in the month the mortgage reaches zero the
/// redirected payment does not earn that month's growth. The original model
/// documents this as an intentional approximation; changing the order would
/// change every downstream total.
pub fn advance_month(state: &mut ScenarioState) {
    state.investment_balance = state.investment_balance
        * (1.0 + state.config.stock_rate / 12.0)
        + state.config.additional_investment;

    let interest = state.mortgage_principal * state.config.mortgage_rate / 12.0;
    state.cumulative_interest_paid += interest;
    state.mortgage_principal -= state.config.mortgage_payment - interest;

    if state.mortgage_principal <= 0.0 {
        state.mortgage_principal = 0.0;
        state.investment_balance += state.config.mortgage_payment;
    } else {
        state.cumulative_principal_paid += state.config.mortgage_payment;
    }
}

/// Decide whether month `month` (1..=12) gets a mid-year snapshot row under
/// the given granularity, and with which label. Month 12 never fires: the
/// next year-boundary row already covers it.
pub fn midyear_row(month: u32, granularity: Granularity) -> Option<RowLabel> {
    match granularity {
        Granularity::Quarterly => match month {
            3 | 6 | 9 => Some(RowLabel::Quarter(month / 3)),
            _ => None,
        },
        Granularity::Monthly => (month != 12).then_some(RowLabel::Month(month)),
        Granularity::Yearly => None,
    }
}

fn capture(label: RowLabel, scenarios: &[ScenarioState]) -> Snapshot {
    Snapshot {
        label,
        balances: scenarios
            .iter()
            .map(|s| BalancePoint {
                mortgage: s.mortgage_principal,
                investment: s.investment_balance,
            })
            .collect(),
    }
}

/// Run the simulation for `number_of_years` calendar years, advancing every
/// scenario in lock-step months.
///
/// Emits a `Year 0` snapshot before any month runs and a final
/// `Year number_of_years` snapshot after the loop; mid-year rows follow the
/// cadence policy. Histories gain one entry per simulated month; the two
/// boundary rows never touch them.
pub fn run_simulation(
    scenarios: &mut [ScenarioState],
    number_of_years: u32,
    granularity: Granularity,
) -> Vec<Snapshot> {
    tracing::debug!(
        scenarios = scenarios.len(),
        years = number_of_years,
        ?granularity,
        "starting simulation"
    );

    // The initial boundary row exists even for a zero-year run.
    let mut snapshots = vec![capture(RowLabel::YearBoundary(0), scenarios)];

    for year in 0..number_of_years {
        if year > 0 {
            snapshots.push(capture(RowLabel::YearBoundary(year), scenarios));
        }
        for month in 1..=12 {
            for state in scenarios.iter_mut() {
                advance_month(state);
            }
            if let Some(label) = midyear_row(month, granularity) {
                snapshots.push(capture(label, scenarios));
            }
            for state in scenarios.iter_mut() {
                state.mortgage_history.push(state.mortgage_principal);
                state.investment_history.push(state.investment_balance);
            }
        }
    }

    snapshots.push(capture(RowLabel::YearBoundary(number_of_years), scenarios));
    snapshots
}
