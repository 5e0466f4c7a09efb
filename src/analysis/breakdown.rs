//! Group-by and binning reductions: carrier and region totals, value counts,
//! and the route length distribution.

use std::collections::BTreeMap;

use crate::analysis::types::{CarrierBreakdown, CategoryCount, LengthBin, RegionBreakdown, TariffCount};
use crate::analysis::utility::pct;
use crate::model::RouteMetric;

/// Right-closed length bins `(lower, upper]` in kilometres.
static LENGTH_BINS: &[(&str, f64, f64)] = &[
    ("Short (0-10 km)", 0.0, 10.0),
    ("Medium (10-20 km)", 10.0, 20.0),
    ("Long (20-30 km)", 20.0, 30.0),
    ("Very Long (30-40 km)", 30.0, 40.0),
    ("Ultra Long (40+ km)", 40.0, 100.0),
];

#[derive(Default)]
struct Totals {
    routes: usize,
    length_km: f64,
    speed_sum: f64,
}

fn totals_by<'a>(
    metrics: &'a [RouteMetric],
    key: impl Fn(&'a RouteMetric) -> &'a str,
) -> Vec<(&'a str, Totals)> {
    let mut groups: BTreeMap<&str, Totals> = BTreeMap::new();
    for m in metrics {
        let t = groups.entry(key(m)).or_default();
        t.routes += 1;
        t.length_km += m.route_length_km;
        t.speed_sum += m.avg_speed_kmh;
    }

    // BTreeMap yields names in order, the stable sort keeps that for equal counts
    let mut groups: Vec<_> = groups.into_iter().collect();
    groups.sort_by(|a, b| b.1.routes.cmp(&a.1.routes));
    groups
}

/// Routes operated, network length and mean speed per carrier, busiest first.
pub fn carrier_performance(metrics: &[RouteMetric]) -> Vec<CarrierBreakdown> {
    totals_by(metrics, |m| m.carrier.as_str())
        .into_iter()
        .map(|(carrier, t)| CarrierBreakdown {
            carrier: carrier.to_string(),
            routes: t.routes,
            total_length_km: t.length_km,
            avg_speed_kmh: t.speed_sum / t.routes as f64,
        })
        .collect()
}

/// Routes and network length per region, busiest first.
pub fn regional_coverage(metrics: &[RouteMetric]) -> Vec<RegionBreakdown> {
    totals_by(metrics, |m| m.region.as_str())
        .into_iter()
        .map(|(region, t)| RegionBreakdown {
            region: region.to_string(),
            routes: t.routes,
            total_length_km: t.length_km,
        })
        .collect()
}

/// Occurrences of each payment type, most common first.
pub fn payment_methods(metrics: &[RouteMetric]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for m in metrics {
        *counts.entry(m.payment_type.as_str()).or_default() += 1;
    }

    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(value, routes)| CategoryCount {
            value: value.to_string(),
            routes,
            percentage: pct(routes, metrics.len()),
        })
        .collect()
}

/// Occurrences of each fare, cheapest first.
pub fn tariff_distribution(metrics: &[RouteMetric]) -> Vec<TariffCount> {
    // fares are whole minor units, so keying on them avoids float grouping
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for m in metrics {
        *counts.entry((m.tariff_value * 100.0).round() as i64).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(minor_units, routes)| TariffCount {
            tariff_value: minor_units as f64 / 100.0,
            routes,
            percentage: pct(routes, metrics.len()),
        })
        .collect()
}

/// Route counts per length bin. Every bin is reported, empty or not;
/// lengths outside `(0, 100]` fall in no bin but still count towards the
/// percentage denominator.
pub fn length_distribution(metrics: &[RouteMetric]) -> Vec<LengthBin> {
    LENGTH_BINS
        .iter()
        .map(|&(label, lower, upper)| {
            let routes = metrics
                .iter()
                .filter(|m| m.route_length_km > lower && m.route_length_km <= upper)
                .count();
            LengthBin {
                label: label.to_string(),
                lower_km: lower,
                upper_km: upper,
                routes,
                percentage: pct(routes, metrics.len()),
            }
        })
        .collect()
}
