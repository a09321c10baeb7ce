//! Dashboard view model
//!
//! Everything the page shows for one selection, computed from scratch on
//! every call. The three page columns map to `gains_losses` + `migration`,
//! `choropleth` + `heatmap`, and `top_counties` + `about`.

use serde::Serialize;
use serde_json::Value;

use super::selection::Selection;
use crate::charts::{make_choropleth, make_donut, make_heatmap};
use crate::config::DashboardConfig;
use crate::dataset::Dataset;
use crate::metrics::{
    classify_migration, compute_year_over_year_delta, format_compact_number, max_population,
    select_year, sort_by_population_descending, MigrationSummary, PopulationDelta,
};
use crate::theme::{ColorTheme, DonutColor};

const DATA_SOURCE: &str = "https://www.knbs.or.ke/dataset.html";

/// Complete page model for one selection
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub title: String,
    pub selection: Selection,
    pub year_options: Vec<i32>,
    pub theme_options: Vec<ColorTheme>,
    pub gains_losses: GainsLosses,
    pub migration: MigrationPanel,
    pub choropleth: Value,
    pub heatmap: Value,
    pub top_counties: RankedTable,
    pub about: Vec<String>,
}

/// A labelled headline figure with its change
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub delta: String,
}

impl MetricCard {
    /// Card shown when there is no prior year to compare against
    pub fn placeholder() -> Self {
        Self {
            label: "-".to_string(),
            value: "-".to_string(),
            delta: String::new(),
        }
    }

    fn from_delta(delta: &PopulationDelta) -> Self {
        Self {
            label: delta.county.clone(),
            value: format_compact_number(delta.population as i64),
            delta: format_compact_number(delta.population_difference),
        }
    }
}

/// Largest gain and largest loss of the selected year
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GainsLosses {
    pub top: MetricCard,
    pub bottom: MetricCard,
}

/// Migration percentages and their donut charts
#[derive(Debug, Clone, Serialize)]
pub struct MigrationPanel {
    /// False at the baseline year, where the summary is all zeros
    pub available: bool,
    pub summary: MigrationSummary,
    pub inbound_chart: Value,
    pub outbound_chart: Value,
}

/// Counties of the selected year ranked by population
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RankedTable {
    /// Upper bound of the population progress bars
    pub max_population: u64,
    pub rows: Vec<RankedRow>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RankedRow {
    pub county: String,
    pub population: u64,
}

/// Build the page model for `selection`
///
/// At the baseline (oldest) year the gains/losses cards show placeholders and
/// both donuts show 0 %, since there is no earlier year to compare with.
pub fn build_dashboard(
    dataset: &Dataset,
    selection: Selection,
    settings: &DashboardConfig,
) -> DashboardView {
    let table = &dataset.table;
    let year_records = select_year(table, selection.year);
    let ranked = sort_by_population_descending(year_records.clone());
    let deltas = compute_year_over_year_delta(table, selection.year);
    let has_baseline = !selection.is_baseline_year(table) && !deltas.is_empty();

    let gains_losses = match (has_baseline, deltas.first(), deltas.last()) {
        (true, Some(first), Some(last)) => GainsLosses {
            top: MetricCard::from_delta(first),
            bottom: MetricCard::from_delta(last),
        },
        _ => GainsLosses {
            top: MetricCard::placeholder(),
            bottom: MetricCard::placeholder(),
        },
    };

    let summary = if has_baseline {
        classify_migration(&deltas, settings.migration_threshold)
    } else {
        MigrationSummary::empty(settings.migration_threshold)
    };

    let migration = MigrationPanel {
        available: has_baseline,
        summary,
        inbound_chart: make_donut(summary.inbound_percent, "Inbound Migration", DonutColor::Green),
        outbound_chart: make_donut(summary.outbound_percent, "Outbound Migration", DonutColor::Red),
    };

    tracing::debug!(
        year = selection.year,
        theme = %selection.theme,
        counties = year_records.len(),
        inbound = summary.inbound_count,
        outbound = summary.outbound_count,
        "Built dashboard view"
    );

    DashboardView {
        title: settings.title.clone(),
        selection,
        year_options: table.years(),
        theme_options: ColorTheme::all().to_vec(),
        gains_losses,
        migration,
        choropleth: make_choropleth(&year_records, &dataset.boundaries, selection.theme),
        heatmap: make_heatmap(table, selection.theme),
        top_counties: RankedTable {
            max_population: max_population(&ranked),
            rows: ranked
                .into_iter()
                .map(|r| RankedRow {
                    county: r.county,
                    population: r.population,
                })
                .collect(),
        },
        about: about_text(settings.migration_threshold),
    }
}

fn about_text(threshold: u64) -> Vec<String> {
    vec![
        format!("Data: Kenyan National Bureau Of Statistics ({}).", DATA_SOURCE),
        "Gains/Losses: counties with high inbound/ outbound migration for selected year"
            .to_string(),
        format!(
            "Counties Migration: percentage of counties with annual inbound/ outbound migration > {}",
            group_thousands(threshold)
        ),
    ]
}

/// `50000` -> `"50,000"`
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
