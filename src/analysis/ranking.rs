//! Top/bottom-N rankings over the metrics table.
//!
//! Sorting is stable, so routes with equal values keep their table order.

use crate::analysis::types::{HubRanking, RankedRoute, SpacingGroup, SpacingRanking};
use crate::model::RouteMetric;

/// The `n` routes with the largest `key`, largest first.
pub fn top_n<'a>(
    metrics: &'a [RouteMetric],
    n: usize,
    key: impl Fn(&RouteMetric) -> f64,
) -> Vec<&'a RouteMetric> {
    let mut sorted: Vec<&RouteMetric> = metrics.iter().collect();
    sorted.sort_by(|a, b| key(b).total_cmp(&key(a)));
    sorted.truncate(n);
    sorted
}

/// The `n` routes with the smallest `key`, smallest first.
pub fn bottom_n<'a>(
    metrics: &'a [RouteMetric],
    n: usize,
    key: impl Fn(&RouteMetric) -> f64,
) -> Vec<&'a RouteMetric> {
    let mut sorted: Vec<&RouteMetric> = metrics.iter().collect();
    sorted.sort_by(|a, b| key(a).total_cmp(&key(b)));
    sorted.truncate(n);
    sorted
}

fn ranked(routes: Vec<&RouteMetric>, key: impl Fn(&RouteMetric) -> f64) -> Vec<RankedRoute> {
    routes
        .into_iter()
        .enumerate()
        .map(|(i, m)| RankedRoute {
            rank: i + 1,
            bus_number: m.bus_number.clone(),
            value: key(m),
        })
        .collect()
}

pub fn fastest_routes(metrics: &[RouteMetric], n: usize) -> Vec<RankedRoute> {
    let speed = |m: &RouteMetric| m.avg_speed_kmh;
    ranked(top_n(metrics, n, speed), speed)
}

pub fn slowest_routes(metrics: &[RouteMetric], n: usize) -> Vec<RankedRoute> {
    let speed = |m: &RouteMetric| m.avg_speed_kmh;
    ranked(bottom_n(metrics, n, speed), speed)
}

pub fn hub_leaders(metrics: &[RouteMetric], n: usize) -> Vec<HubRanking> {
    top_n(metrics, n, |m| m.transport_hub_count as f64)
        .into_iter()
        .enumerate()
        .map(|(i, m)| HubRanking {
            rank: i + 1,
            bus_number: m.bus_number.clone(),
            transport_hub_count: m.transport_hub_count,
            num_stops: m.num_stops,
        })
        .collect()
}

/// Widest-spaced (express) routes followed by the most densely stopping
/// (local) ones.
pub fn stop_spacing(metrics: &[RouteMetric], n: usize) -> Vec<SpacingRanking> {
    let spacing = |m: &RouteMetric| m.avg_distance_between_stops_km;

    let tag = |group: SpacingGroup, routes: Vec<&RouteMetric>| {
        routes
            .into_iter()
            .enumerate()
            .map(move |(i, m)| SpacingRanking {
                group,
                rank: i + 1,
                bus_number: m.bus_number.clone(),
                avg_distance_between_stops_km: m.avg_distance_between_stops_km,
            })
            .collect::<Vec<_>>()
    };

    let mut rows = tag(SpacingGroup::Express, top_n(metrics, n, spacing));
    rows.extend(tag(SpacingGroup::Local, bottom_n(metrics, n, spacing)));
    rows
}
