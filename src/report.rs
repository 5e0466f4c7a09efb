//! End-to-end report run: load, derive, filter, summarize, and write the
//! metrics table, chart datasets, summary and manifest.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::analysis::charts::ChartSet;
use crate::analysis::summary::{SummaryStats, summarize};
use crate::analysis::types::ChartNotes;
use crate::config::{DatasetFormat, ReportConfig};
use crate::filter::RouteFilter;
use crate::loader::load_routes;
use crate::metrics::derive;
use crate::model::RouteMetric;
use crate::output::{write_json, write_table};

pub const METRICS_FILE: &str = "route_metrics";
pub const SUMMARY_FILE: &str = "summary_stats.json";
pub const MANIFEST_FILE: &str = "manifest.json";

/// The metrics table for one input file, with the counts needed to explain
/// how it was obtained.
#[derive(Debug)]
pub struct MetricsTable {
    pub metrics: Vec<RouteMetric>,
    pub records_loaded: usize,
    pub records_skipped: usize,
    pub routes_eligible: usize,
}

/// Record of a completed run, written next to the datasets.
#[derive(Debug, Serialize)]
pub struct ReportManifest {
    pub generated_at: DateTime<Utc>,
    pub input: String,
    pub records_loaded: usize,
    pub records_skipped: usize,
    pub routes_eligible: usize,
    pub routes_reported: usize,
    pub filtered: bool,
    pub format: DatasetFormat,
    pub files: Vec<String>,
    pub chart_notes: ChartNotes,
}

/// Loads `input`, derives its metrics table and applies `filter`.
pub fn load_metrics(input: &Path, filter: &RouteFilter) -> Result<MetricsTable> {
    let loaded = load_routes(input)?;
    let metrics = derive(&loaded.routes);
    let routes_eligible = metrics.len();

    let metrics = if filter.is_empty() {
        metrics
    } else {
        let kept = filter.apply(&metrics);
        info!(before = routes_eligible, after = kept.len(), "Route filter applied");
        kept
    };

    info!(
        loaded = loaded.routes.len(),
        eligible = routes_eligible,
        reported = metrics.len(),
        "Processed routes with complete data"
    );

    Ok(MetricsTable {
        metrics,
        records_loaded: loaded.routes.len(),
        records_skipped: loaded.skipped,
        routes_eligible,
    })
}

/// Writes every chart dataset, returning the file names in chart order.
fn write_charts(charts: &ChartSet, config: &ReportConfig) -> Result<Vec<String>> {
    let mut files = Vec::new();
    let format = config.format;

    macro_rules! write_chart {
        ($stem:expr, $rows:expr) => {
            let path = config.dataset_path($stem);
            write_table(&path, &$rows, format)
                .with_context(|| format!("failed to write chart dataset {}", $stem))?;
            info!(file = %path.display(), rows = $rows.len(), "Saved chart dataset");
            files.push(format!("{}.{}", $stem, format.extension()));
        };
    }

    write_chart!("01_route_efficiency_ranking", charts.efficiency_ranking);
    write_chart!("02_bottom_performers", charts.bottom_performers);
    write_chart!("03_carrier_performance", charts.carrier_performance);
    write_chart!("04_route_length_distribution", charts.length_distribution);
    write_chart!("05_stop_density_analysis", charts.stop_density);
    write_chart!("06_duration_vs_distance", charts.duration_vs_distance);
    write_chart!("07_transport_hub_coverage", charts.hub_coverage);
    write_chart!("08_payment_methods", charts.payment_methods);
    write_chart!("09_tariff_analysis", charts.tariffs);
    write_chart!("10_regional_coverage", charts.regional_coverage);
    write_chart!("11_avg_stop_distance", charts.stop_spacing);
    write_chart!("12_efficiency_matrix", charts.efficiency_matrix);

    Ok(files)
}

/// Runs the full report for `input` into `config.output_dir`.
///
/// The summary is computed before anything is written, so an input with no
/// eligible routes fails without leaving partial output behind.
#[tracing::instrument(skip_all, fields(input = %input.display(), output_dir = %config.output_dir.display()))]
pub fn run_report(
    input: &Path,
    config: &ReportConfig,
    filter: &RouteFilter,
) -> Result<(SummaryStats, ReportManifest)> {
    let table = load_metrics(input, filter)?;
    let stats = summarize(&table.metrics)?;
    let charts = ChartSet::build(&table.metrics, config);

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("failed to create output directory {}", config.output_dir.display())
    })?;

    let metrics_path = config.dataset_path(METRICS_FILE);
    write_table(&metrics_path, &table.metrics, config.format)?;
    info!(file = %metrics_path.display(), rows = table.metrics.len(), "Saved route metrics");

    let mut files = vec![format!("{METRICS_FILE}.{}", config.format.extension())];
    files.extend(write_charts(&charts, config)?);

    write_json(&config.output_dir.join(SUMMARY_FILE), &stats)?;
    info!("Summary statistics saved");
    files.push(SUMMARY_FILE.to_string());

    let manifest = ReportManifest {
        generated_at: Utc::now(),
        input: input.display().to_string(),
        records_loaded: table.records_loaded,
        records_skipped: table.records_skipped,
        routes_eligible: table.routes_eligible,
        routes_reported: table.metrics.len(),
        filtered: !filter.is_empty(),
        format: config.format,
        files,
        chart_notes: charts.notes,
    };
    write_json(&config.output_dir.join(MANIFEST_FILE), &manifest)?;

    info!(files = manifest.files.len() + 1, "Report complete");
    Ok((stats, manifest))
}
