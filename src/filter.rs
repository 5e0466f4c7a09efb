//! Narrowing the metrics table by carrier, region, route, payment type,
//! speed and length.

use std::collections::BTreeSet;

use crate::model::RouteMetric;

/// Predicates over [`RouteMetric`] rows. Empty lists and `None` bounds do not
/// constrain; range bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteFilter {
    pub carriers: Vec<String>,
    pub regions: Vec<String>,
    pub route_numbers: Vec<String>,
    pub payment_types: Vec<String>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_length: Option<f64>,
    pub max_length: Option<f64>,
}

fn allows(list: &[String], value: &str) -> bool {
    list.is_empty() || list.iter().any(|v| v == value)
}

fn within(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}

impl RouteFilter {
    /// True when no predicate is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, m: &RouteMetric) -> bool {
        allows(&self.carriers, &m.carrier)
            && allows(&self.regions, &m.region)
            && allows(&self.route_numbers, &m.bus_number)
            && allows(&self.payment_types, &m.payment_type)
            && within(m.avg_speed_kmh, self.min_speed, self.max_speed)
            && within(m.route_length_km, self.min_length, self.max_length)
    }

    /// The matching rows, in table order.
    pub fn apply(&self, metrics: &[RouteMetric]) -> Vec<RouteMetric> {
        metrics.iter().filter(|m| self.matches(m)).cloned().collect()
    }
}

/// Categorical columns that can be listed as filter facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Carrier,
    Region,
    PaymentType,
}

/// Sorted distinct values of `facet` across the table.
pub fn distinct_values(metrics: &[RouteMetric], facet: Facet) -> Vec<String> {
    metrics
        .iter()
        .map(|m| match facet {
            Facet::Carrier => m.carrier.as_str(),
            Facet::Region => m.region.as_str(),
            Facet::PaymentType => m.payment_type.as_str(),
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
