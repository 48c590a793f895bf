use std::fs;
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::core::{
    DEFAULT_PALETTE, Granularity, ScenarioConfig, ScenarioState, allocate_series, final_conditions,
    initial_conditions, run_simulation,
};
use crate::render;

#[derive(Debug, Parser)]
#[command(
    name = "payoff",
    about = "Project a mortgage balance against an investment balance, month by month"
)]
pub struct Cli {
    #[arg(long, default_value_t = 125_000.0, help = "Starting mortgage principal")]
    mortgage: f64,
    #[arg(
        long,
        default_value_t = 4.2,
        help = "Annual mortgage interest rate in percent, e.g. 4.2"
    )]
    mortgage_rate: f64,
    #[arg(long, default_value_t = 1_420.69, help = "Monthly mortgage payment")]
    mortgage_payment: f64,
    #[arg(long, default_value_t = 9_001.0, help = "Starting investment balance")]
    investment: f64,
    #[arg(
        long,
        default_value_t = 7.0,
        help = "Estimated annual stock return in percent"
    )]
    stock_rate: f64,
    #[arg(
        long,
        default_value_t = 420.69,
        help = "Additional money invested every month"
    )]
    additional_investment: f64,
    #[arg(
        long,
        help = "TOML file with [[scenario]] tables for comparing strategies; \
                replaces the single-scenario flags"
    )]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 10, help = "Number of years to simulate")]
    years: u32,
    #[arg(
        long,
        value_enum,
        default_value_t = CliGranularity::Quarterly,
        help = "How often to emit mid-year table rows"
    )]
    table_detail: CliGranularity,
    #[arg(
        long,
        help = "Suppress the periodic table; the summaries and chart still print"
    )]
    no_table: bool,
    #[arg(long, default_value_t = 25, help = "Chart height in rows")]
    chart_height: u32,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliGranularity {
    Quarterly,
    Monthly,
    Yearly,
}

impl From<CliGranularity> for Granularity {
    fn from(value: CliGranularity) -> Self {
        match value {
            CliGranularity::Quarterly => Granularity::Quarterly,
            CliGranularity::Monthly => Granularity::Monthly,
            CliGranularity::Yearly => Granularity::Yearly,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    // Defaulted so a file without any [[scenario]] table reaches the
    // at-least-one check instead of a missing-field parse error.
    #[serde(rename = "scenario", default)]
    scenarios: Vec<ScenarioEntry>,
}

/// One `[[scenario]]` table. Rates are in percent, matching the flags.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioEntry {
    mortgage: f64,
    mortgage_rate: f64,
    mortgage_payment: f64,
    investment: f64,
    stock_rate: f64,
    #[serde(default)]
    additional_investment: f64,
}

fn validate_scenario(label: &str, entry: &ScenarioEntry) -> Result<ScenarioConfig, String> {
    if !entry.mortgage.is_finite() || entry.mortgage < 0.0 {
        return Err(format!("{label}: mortgage must be >= 0"));
    }
    if !(0.0..100.0).contains(&entry.mortgage_rate) {
        return Err(format!("{label}: mortgage-rate must be in [0, 100)"));
    }
    if !entry.mortgage_payment.is_finite() || entry.mortgage_payment <= 0.0 {
        return Err(format!("{label}: mortgage-payment must be > 0"));
    }
    if !entry.investment.is_finite() {
        return Err(format!("{label}: investment must be a finite amount"));
    }
    if !entry.stock_rate.is_finite() {
        return Err(format!("{label}: stock-rate must be a finite percentage"));
    }
    if !entry.additional_investment.is_finite() || entry.additional_investment < 0.0 {
        return Err(format!("{label}: additional-investment must be >= 0"));
    }

    Ok(ScenarioConfig {
        mortgage: entry.mortgage,
        mortgage_rate: entry.mortgage_rate / 100.0,
        mortgage_payment: entry.mortgage_payment,
        investment: entry.investment,
        stock_rate: entry.stock_rate / 100.0,
        additional_investment: entry.additional_investment,
    })
}

fn parse_config_file(text: &str) -> Result<Vec<ScenarioConfig>, String> {
    let file: ConfigFile = toml::from_str(text).map_err(|e| format!("invalid config: {e}"))?;
    if file.scenarios.is_empty() {
        return Err("config must define at least one [[scenario]]".to_string());
    }

    file.scenarios
        .iter()
        .enumerate()
        .map(|(i, entry)| validate_scenario(&format!("scenario {}", i + 1), entry))
        .collect()
}

fn build_scenarios(cli: &Cli, config_text: Option<&str>) -> Result<Vec<ScenarioConfig>, String> {
    if cli.years == 0 {
        return Err("--years must be >= 1".to_string());
    }
    if cli.chart_height == 0 {
        return Err("--chart-height must be >= 1".to_string());
    }

    match config_text {
        Some(text) => parse_config_file(text),
        None => {
            let entry = ScenarioEntry {
                mortgage: cli.mortgage,
                mortgage_rate: cli.mortgage_rate,
                mortgage_payment: cli.mortgage_payment,
                investment: cli.investment,
                stock_rate: cli.stock_rate,
                additional_investment: cli.additional_investment,
            };
            Ok(vec![validate_scenario("scenario 1", &entry)?])
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    run_with(Cli::parse())
}

fn run_with(cli: Cli) -> anyhow::Result<()> {
    let config_text = match &cli.config {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?,
        ),
        None => None,
    };

    let configs = build_scenarios(&cli, config_text.as_deref()).map_err(|e| anyhow!(e))?;
    let styles = allocate_series(DEFAULT_PALETTE, configs.len())?;
    tracing::debug!(scenarios = configs.len(), years = cli.years, "configured");

    let mut scenarios: Vec<ScenarioState> =
        configs.into_iter().map(ScenarioState::new).collect();
    let snapshots = run_simulation(&mut scenarios, cli.years, cli.table_detail.into());

    if !cli.no_table {
        println!("Mortgage and investments");
        println!("{}", render::periodic_table(&snapshots, &styles));
        println!();
    }

    println!("Initial conditions");
    println!(
        "{}",
        render::summary_table(&initial_conditions(&scenarios), &styles)
    );
    println!();

    let mut series = Vec::with_capacity(scenarios.len() * 2);
    let mut colors = Vec::with_capacity(scenarios.len() * 2);
    for (state, style) in scenarios.iter().zip(&styles) {
        series.push(state.mortgage_history.clone());
        colors.push(style.mortgage_color);
        series.push(state.investment_history.clone());
        colors.push(style.investment_color);
    }
    println!("{}", render::chart::plot(&series, &colors, cli.chart_height));
    println!("{}", render::legend(&styles));
    println!();

    println!("Final conditions");
    println!(
        "{}",
        render::summary_table(&final_conditions(&scenarios), &styles)
    );

    Ok(())
}
