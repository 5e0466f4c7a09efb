//! Derivation of per-route business metrics from raw route records.

use tracing::debug;

use crate::model::{RawRoute, RouteMetric};

/// `numerator / denominator`, or 0.0 when the denominator is not positive or
/// the quotient is not finite.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 {
        return 0.0;
    }
    let quotient = numerator / denominator;
    if quotient.is_finite() { quotient } else { 0.0 }
}

/// A route takes part in the analysis only when both its length and its
/// duration are present and non-zero.
pub fn is_eligible(route: &RawRoute) -> bool {
    let present = |v: Option<f64>| v.is_some_and(|v| v != 0.0);
    present(route.length_km) && present(route.duration_min)
}

impl RouteMetric {
    /// Builds the metric row for `route`, or `None` if the route is not eligible.
    pub fn from_raw(route: &RawRoute) -> Option<Self> {
        if !is_eligible(route) {
            return None;
        }

        let route_length_km = route.length_km.unwrap_or_default();
        let duration_min = route.duration_min.unwrap_or_default();
        let stops = route.stops();
        let num_stops = stops.len();

        let tariff_value = match route.tariff {
            Some(t) if t != 0.0 => t / 100.0,
            _ => 0.0,
        };

        Some(RouteMetric {
            bus_number: route.bus_number(),
            route_length_km,
            duration_min,
            num_stops,
            carrier: route.carrier(),
            tariff_value,
            region: route.region_name(),
            payment_type: route.payment_type_name(),
            working_zone: route.working_zone_name(),
            first_point: route.first_point(),
            last_point: route.last_point(),
            avg_speed_kmh: ratio(route_length_km * 60.0, duration_min),
            stop_density: ratio(num_stops as f64, route_length_km),
            avg_distance_between_stops_km: ratio(route_length_km, num_stops as f64),
            transport_hub_count: stops.iter().filter(|s| s.is_transport_hub()).count(),
        })
    }
}

/// Maps raw routes to the metrics table, dropping ineligible routes and
/// keeping input order.
pub fn derive(raw_routes: &[RawRoute]) -> Vec<RouteMetric> {
    let metrics: Vec<RouteMetric> = raw_routes.iter().filter_map(RouteMetric::from_raw).collect();

    debug!(
        input = raw_routes.len(),
        eligible = metrics.len(),
        dropped = raw_routes.len() - metrics.len(),
        "Derived route metrics"
    );

    metrics
}
