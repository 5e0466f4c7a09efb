use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::analysis::utility::mean;
use crate::error::{ReportError, Result};
use crate::model::RouteMetric;

/// Network-wide summary written to `summary_stats.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_routes: usize,
    pub total_network_km: f64,
    pub avg_route_length: f64,
    pub avg_speed: f64,
    pub total_stops: usize,
    pub avg_stops_per_route: f64,
    pub fastest_route: String,
    pub fastest_speed: f64,
    pub slowest_route: String,
    pub slowest_speed: f64,
    pub longest_route: String,
    pub longest_distance: f64,
    pub carriers: usize,
    pub regions: usize,
    pub avg_tariff: f64,
    pub total_hubs: usize,
}

/// Index of the first maximum of `key` over `rows`.
fn argmax<T>(rows: &[T], key: impl Fn(&T) -> f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, row) in rows.iter().enumerate() {
        let v = key(row);
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Index of the first minimum of `key` over `rows`.
fn argmin<T>(rows: &[T], key: impl Fn(&T) -> f64) -> Option<usize> {
    argmax(rows, |r| -key(r))
}

fn count_distinct<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.collect::<HashSet<_>>().len()
}

/// Reduces the metrics table to a [`SummaryStats`].
///
/// Extrema ties resolve to the first route in table order.
///
/// # Errors
///
/// Returns [`ReportError::EmptyInput`] when `metrics` is empty.
pub fn summarize(metrics: &[RouteMetric]) -> Result<SummaryStats> {
    let (Some(fastest), Some(slowest), Some(longest)) = (
        argmax(metrics, |m| m.avg_speed_kmh),
        argmin(metrics, |m| m.avg_speed_kmh),
        argmax(metrics, |m| m.route_length_km),
    ) else {
        return Err(ReportError::EmptyInput);
    };

    let lengths: Vec<f64> = metrics.iter().map(|m| m.route_length_km).collect();
    let speeds: Vec<f64> = metrics.iter().map(|m| m.avg_speed_kmh).collect();
    let stops: Vec<f64> = metrics.iter().map(|m| m.num_stops as f64).collect();
    let tariffs: Vec<f64> = metrics.iter().map(|m| m.tariff_value).collect();

    Ok(SummaryStats {
        total_routes: metrics.len(),
        total_network_km: lengths.iter().sum(),
        avg_route_length: mean(&lengths),
        avg_speed: mean(&speeds),
        total_stops: metrics.iter().map(|m| m.num_stops).sum(),
        avg_stops_per_route: mean(&stops),
        fastest_route: metrics[fastest].bus_number.clone(),
        fastest_speed: metrics[fastest].avg_speed_kmh,
        slowest_route: metrics[slowest].bus_number.clone(),
        slowest_speed: metrics[slowest].avg_speed_kmh,
        longest_route: metrics[longest].bus_number.clone(),
        longest_distance: metrics[longest].route_length_km,
        carriers: count_distinct(metrics.iter().map(|m| m.carrier.as_str())),
        regions: count_distinct(metrics.iter().map(|m| m.region.as_str())),
        avg_tariff: mean(&tariffs),
        total_hubs: metrics.iter().map(|m| m.transport_hub_count).sum(),
    })
}
