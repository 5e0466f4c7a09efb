//! CLI entry point for the bus route analyzer.
//!
//! Provides subcommands for producing the full report, printing the summary
//! statistics, and listing the values accepted by the route filter.

use anyhow::Result;
use bus_route_analyzer::analysis::summary::summarize;
use bus_route_analyzer::config::{DatasetFormat, ReportConfig};
use bus_route_analyzer::filter::{Facet, RouteFilter, distinct_values};
use bus_route_analyzer::output::{print_json, print_pretty};
use bus_route_analyzer::report::{load_metrics, run_report};
use clap::{Args, Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEFAULT_INPUT: &str = "data/bus_data.json";

#[derive(Parser)]
#[command(name = "bus_route_analyzer")]
#[command(about = "Derive business metrics and chart datasets from bus route data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the metrics table, chart datasets and summary statistics
    Report {
        /// JSON file of bus route records (`.gz` accepted)
        #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// JSON report config; flags below override its values
        #[arg(short, long)]
        config: Option<String>,

        /// Directory to write output files to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Format of the metrics table and chart datasets
        #[arg(short, long, value_enum)]
        format: Option<DatasetFormat>,

        /// Length of the speed and transport-hub rankings
        #[arg(long)]
        top: Option<usize>,

        /// Length of each stop-spacing ranking
        #[arg(long)]
        spacing_top: Option<usize>,

        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Print summary statistics as JSON without writing any files
    Summary {
        /// JSON file of bus route records (`.gz` accepted)
        #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
        input: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,
    },
    /// List the carriers, regions and payment types of eligible routes
    Facets {
        /// JSON file of bus route records (`.gz` accepted)
        #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
        input: PathBuf,
    },
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Only include routes run by this carrier (repeatable)
    #[arg(long = "carrier")]
    carriers: Vec<String>,

    /// Only include routes in this region (repeatable)
    #[arg(long = "region")]
    regions: Vec<String>,

    /// Only include this route number (repeatable)
    #[arg(long = "route")]
    routes: Vec<String>,

    /// Only include routes accepting this payment type (repeatable)
    #[arg(long = "payment-type")]
    payment_types: Vec<String>,

    /// Minimum average speed in km/h
    #[arg(long)]
    min_speed: Option<f64>,

    /// Maximum average speed in km/h
    #[arg(long)]
    max_speed: Option<f64>,

    /// Minimum route length in km
    #[arg(long)]
    min_length: Option<f64>,

    /// Maximum route length in km
    #[arg(long)]
    max_length: Option<f64>,
}

impl From<FilterArgs> for RouteFilter {
    fn from(args: FilterArgs) -> Self {
        RouteFilter {
            carriers: args.carriers,
            regions: args.regions,
            route_numbers: args.routes,
            payment_types: args.payment_types,
            min_speed: args.min_speed,
            max_speed: args.max_speed,
            min_length: args.min_length,
            max_length: args.max_length,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bus_route_analyzer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bus_route_analyzer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            input,
            config,
            output_dir,
            format,
            top,
            spacing_top,
            filter,
        } => {
            let mut report_config = match config {
                Some(path) => ReportConfig::load(&path)?,
                None => ReportConfig::default(),
            };
            if let Some(dir) = output_dir {
                report_config.output_dir = dir;
            }
            if let Some(format) = format {
                report_config.format = format;
            }
            if let Some(n) = top {
                report_config.top_n = n;
            }
            if let Some(n) = spacing_top {
                report_config.spacing_top_n = n;
            }
            print_pretty(&report_config);

            let (stats, manifest) = run_report(&input, &report_config, &filter.into())?;

            info!(
                total_routes = stats.total_routes,
                total_network_km = stats.total_network_km,
                total_stops = stats.total_stops,
                avg_speed_kmh = stats.avg_speed,
                carriers = stats.carriers,
                transport_hubs = stats.total_hubs,
                output_dir = %report_config.output_dir.display(),
                files = manifest.files.len(),
                "Key metrics"
            );
        }
        Commands::Summary { input, filter } => {
            let table = load_metrics(&input, &filter.into())?;
            let stats = summarize(&table.metrics)?;
            print_json(&stats)?;
        }
        Commands::Facets { input } => {
            let table = load_metrics(&input, &RouteFilter::default())?;

            for (label, facet) in [
                ("carriers", Facet::Carrier),
                ("regions", Facet::Region),
                ("payment_types", Facet::PaymentType),
            ] {
                let values = distinct_values(&table.metrics, facet);
                info!(facet = label, count = values.len(), values = ?values, "Facet values");
            }
        }
    }

    Ok(())
}
