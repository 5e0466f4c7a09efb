//! Route records as they appear in the source data, and the metrics derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder for absent categorical fields (carrier, region, payment type, zone).
pub const UNKNOWN: &str = "Unknown";

/// Placeholder for absent identifiers and terminal points.
pub const NOT_AVAILABLE: &str = "N/A";

/// Route number as published: some records use `"12A"`, others a bare `12`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RouteNumber {
    Text(String),
    Numeric(serde_json::Number),
}

impl fmt::Display for RouteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteNumber::Text(s) => f.write_str(s),
            RouteNumber::Numeric(n) => write!(f, "{n}"),
        }
    }
}

/// A nested `{ "id": .., "name": .. }` lookup record (region, payment type, zone).
/// Only the name is read; the id and any other keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// Details of the physical stop a route calls at.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopDetails {
    #[serde(default)]
    pub is_transport_hub: Option<bool>,
}

/// One halt along a route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Stop {
    #[serde(default)]
    pub stop: Option<StopDetails>,
}

impl Stop {
    pub fn is_transport_hub(&self) -> bool {
        self.stop
            .as_ref()
            .and_then(|s| s.is_transport_hub)
            .unwrap_or(false)
    }
}

/// A single bus route record from the input file. Field names follow the
/// source data, including its spelling (`routLength`, `durationMinuts`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRoute {
    #[serde(default)]
    pub number: Option<RouteNumber>,
    #[serde(default, rename = "routLength")]
    pub length_km: Option<f64>,
    #[serde(default, rename = "durationMinuts")]
    pub duration_min: Option<f64>,
    #[serde(default)]
    pub stops: Option<Vec<Stop>>,
    #[serde(default)]
    pub carrier: Option<String>,
    #[serde(default)]
    pub region: Option<NamedRef>,
    #[serde(default)]
    pub payment_type: Option<NamedRef>,
    #[serde(default)]
    pub working_zone_type: Option<NamedRef>,
    /// Fare in currency minor units (e.g. qapik, cents). Read as a float so
    /// that `60` and `60.0` both load.
    #[serde(default)]
    pub tariff: Option<f64>,
    #[serde(default)]
    pub first_point: Option<String>,
    #[serde(default)]
    pub last_point: Option<String>,
}

fn name_or_unknown(r: &Option<NamedRef>) -> String {
    r.as_ref()
        .and_then(|r| r.name.clone())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

impl RawRoute {
    pub fn bus_number(&self) -> String {
        self.number
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn stops(&self) -> &[Stop] {
        self.stops.as_deref().unwrap_or(&[])
    }

    pub fn carrier(&self) -> String {
        self.carrier.clone().unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn region_name(&self) -> String {
        name_or_unknown(&self.region)
    }

    pub fn payment_type_name(&self) -> String {
        name_or_unknown(&self.payment_type)
    }

    pub fn working_zone_name(&self) -> String {
        name_or_unknown(&self.working_zone_type)
    }

    pub fn first_point(&self) -> String {
        self.first_point
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn last_point(&self) -> String {
        self.last_point
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

/// Business metrics for one eligible route. Serialized as a row of the
/// `route_metrics` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteMetric {
    pub bus_number: String,
    pub route_length_km: f64,
    pub duration_min: f64,
    pub num_stops: usize,
    pub carrier: String,
    pub tariff_value: f64,
    pub region: String,
    pub payment_type: String,
    pub working_zone: String,
    pub first_point: String,
    pub last_point: String,

    // derived KPIs
    pub avg_speed_kmh: f64,
    pub stop_density: f64,
    pub avg_distance_between_stops_km: f64,
    pub transport_hub_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_source_field_names() {
        let json = r#"{
            "id": 7,
            "number": "12A",
            "routLength": 18.5,
            "durationMinuts": 45,
            "carrier": "BakuBus",
            "tariff": 60,
            "region": { "id": 1, "name": "Baku" },
            "paymentType": { "id": 2, "name": "Card" },
            "workingZoneType": { "id": 3, "name": "Urban" },
            "firstPoint": "Airport",
            "lastPoint": "28 May",
            "stops": [
                { "stopName": "Airport", "stop": { "isTransportHub": true } },
                { "stopName": "Koroglu" }
            ]
        }"#;

        let route: RawRoute = serde_json::from_str(json).unwrap();

        assert_eq!(route.bus_number(), "12A");
        assert_eq!(route.length_km, Some(18.5));
        assert_eq!(route.duration_min, Some(45.0));
        assert_eq!(route.tariff, Some(60.0));
        assert_eq!(route.region_name(), "Baku");
        assert_eq!(route.payment_type_name(), "Card");
        assert_eq!(route.working_zone_name(), "Urban");
        assert_eq!(route.stops().len(), 2);
        assert!(route.stops()[0].is_transport_hub());
        assert!(!route.stops()[1].is_transport_hub());
    }

    #[test]
    fn test_numeric_route_number() {
        let route: RawRoute = serde_json::from_str(r#"{ "number": 125 }"#).unwrap();
        assert_eq!(route.bus_number(), "125");
    }

    #[test]
    fn test_defaults_for_absent_fields() {
        let route: RawRoute = serde_json::from_str("{}").unwrap();

        assert_eq!(route.bus_number(), NOT_AVAILABLE);
        assert_eq!(route.carrier(), UNKNOWN);
        assert_eq!(route.region_name(), UNKNOWN);
        assert_eq!(route.first_point(), NOT_AVAILABLE);
        assert!(route.stops().is_empty());
    }

    #[test]
    fn test_unread_fields_of_any_type_are_ignored() {
        let json = r#"{
            "tariff": 60.0,
            "region": { "id": "R1", "name": "Baku" },
            "stops": [{ "stopName": 42, "stop": { "code": 7, "isTransportHub": true } }]
        }"#;

        let route: RawRoute = serde_json::from_str(json).unwrap();

        assert_eq!(route.tariff, Some(60.0));
        assert_eq!(route.region_name(), "Baku");
        assert!(route.stops()[0].is_transport_hub());
    }

    #[test]
    fn test_null_nested_records_default_to_unknown() {
        let json = r#"{ "region": null, "paymentType": {}, "carrier": null }"#;
        let route: RawRoute = serde_json::from_str(json).unwrap();

        assert_eq!(route.region_name(), UNKNOWN);
        assert_eq!(route.payment_type_name(), UNKNOWN);
        assert_eq!(route.carrier(), UNKNOWN);
    }
}
