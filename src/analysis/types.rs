//! Row types of the per-chart datasets.

use serde::Serialize;

/// One entry of a ranked route list (fastest, slowest).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRoute {
    pub rank: usize,
    pub bus_number: String,
    pub value: f64,
}

/// Ranking entry for transport-hub integration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HubRanking {
    pub rank: usize,
    pub bus_number: String,
    pub transport_hub_count: usize,
    pub num_stops: usize,
}

/// Service type inferred from stop spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpacingGroup {
    /// Largest spacing between stops.
    Express,
    /// Densest stop spacing.
    Local,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpacingRanking {
    pub group: SpacingGroup,
    pub rank: usize,
    pub bus_number: String,
    pub avg_distance_between_stops_km: f64,
}

/// Per-carrier totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarrierBreakdown {
    pub carrier: String,
    pub routes: usize,
    pub total_length_km: f64,
    pub avg_speed_kmh: f64,
}

/// Per-region totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionBreakdown {
    pub region: String,
    pub routes: usize,
    pub total_length_km: f64,
}

/// Number of routes whose length falls in `(lower_km, upper_km]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthBin {
    pub label: String,
    pub lower_km: f64,
    pub upper_km: f64,
    pub routes: usize,
    pub percentage: f64,
}

/// Occurrences of one categorical value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub value: String,
    pub routes: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TariffCount {
    pub tariff_value: f64,
    pub routes: usize,
    pub percentage: f64,
}

/// Stop density against route length, coloured by speed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityPoint {
    pub bus_number: String,
    pub route_length_km: f64,
    pub stop_density: f64,
    pub avg_speed_kmh: f64,
}

/// Travel time against route length, coloured by stop count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationPoint {
    pub bus_number: String,
    pub route_length_km: f64,
    pub duration_min: f64,
    pub num_stops: usize,
}

/// Performance quadrant relative to the median speed and median stop count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Quadrant {
    HighCoverageHighEfficiency,
    Express,
    HighCoverageNeedsOptimization,
    LowCoverageNeedsReview,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadrantPoint {
    pub bus_number: String,
    pub num_stops: usize,
    pub avg_speed_kmh: f64,
    pub quadrant: Quadrant,
}

/// Least-squares line `duration_min = slope * length_km + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendLine {
    pub slope_min_per_km: f64,
    pub intercept_min: f64,
}

/// Reference values drawn on top of the scatter charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartNotes {
    pub median_stop_density: f64,
    pub duration_trend: Option<TrendLine>,
    pub median_speed: f64,
    pub median_stops: f64,
}
