use crate::analysis::breakdown::{
    carrier_performance, length_distribution, payment_methods, regional_coverage,
    tariff_distribution,
};
use crate::analysis::quadrant::{efficiency_matrix, medians};
use crate::analysis::ranking::{fastest_routes, hub_leaders, slowest_routes, stop_spacing};
use crate::analysis::trend::linear_fit;
use crate::analysis::types::*;
use crate::analysis::utility::median;
use crate::config::ReportConfig;
use crate::model::RouteMetric;

/// The numbers behind each of the twelve report charts.
#[derive(Debug, Clone)]
pub struct ChartSet {
    pub efficiency_ranking: Vec<RankedRoute>,
    pub bottom_performers: Vec<RankedRoute>,
    pub carrier_performance: Vec<CarrierBreakdown>,
    pub length_distribution: Vec<LengthBin>,
    pub stop_density: Vec<DensityPoint>,
    pub duration_vs_distance: Vec<DurationPoint>,
    pub hub_coverage: Vec<HubRanking>,
    pub payment_methods: Vec<CategoryCount>,
    pub tariffs: Vec<TariffCount>,
    pub regional_coverage: Vec<RegionBreakdown>,
    pub stop_spacing: Vec<SpacingRanking>,
    pub efficiency_matrix: Vec<QuadrantPoint>,
    pub notes: ChartNotes,
}

impl ChartSet {
    pub fn build(metrics: &[RouteMetric], config: &ReportConfig) -> Self {
        let lengths: Vec<f64> = metrics.iter().map(|m| m.route_length_km).collect();
        let durations: Vec<f64> = metrics.iter().map(|m| m.duration_min).collect();
        let densities: Vec<f64> = metrics.iter().map(|m| m.stop_density).collect();
        let (median_speed, median_stops) = medians(metrics);

        ChartSet {
            efficiency_ranking: fastest_routes(metrics, config.top_n),
            bottom_performers: slowest_routes(metrics, config.top_n),
            carrier_performance: carrier_performance(metrics),
            length_distribution: length_distribution(metrics),
            stop_density: metrics
                .iter()
                .map(|m| DensityPoint {
                    bus_number: m.bus_number.clone(),
                    route_length_km: m.route_length_km,
                    stop_density: m.stop_density,
                    avg_speed_kmh: m.avg_speed_kmh,
                })
                .collect(),
            duration_vs_distance: metrics
                .iter()
                .map(|m| DurationPoint {
                    bus_number: m.bus_number.clone(),
                    route_length_km: m.route_length_km,
                    duration_min: m.duration_min,
                    num_stops: m.num_stops,
                })
                .collect(),
            hub_coverage: hub_leaders(metrics, config.top_n),
            payment_methods: payment_methods(metrics),
            tariffs: tariff_distribution(metrics),
            regional_coverage: regional_coverage(metrics),
            stop_spacing: stop_spacing(metrics, config.spacing_top_n),
            efficiency_matrix: efficiency_matrix(metrics),
            notes: ChartNotes {
                median_stop_density: median(&densities),
                duration_trend: linear_fit(&lengths, &durations),
                median_speed,
                median_stops,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(id: &str, length: f64, duration: f64, stops: usize) -> RouteMetric {
        RouteMetric {
            bus_number: id.to_string(),
            route_length_km: length,
            duration_min: duration,
            num_stops: stops,
            avg_speed_kmh: length / duration * 60.0,
            stop_density: stops as f64 / length,
            ..Default::default()
        }
    }

    #[test]
    fn test_build_respects_ranking_sizes() {
        let metrics: Vec<_> = (1..=30)
            .map(|i| metric(&i.to_string(), i as f64, 30.0, i))
            .collect();
        let config = ReportConfig {
            top_n: 5,
            spacing_top_n: 3,
            ..Default::default()
        };

        let charts = ChartSet::build(&metrics, &config);

        assert_eq!(charts.efficiency_ranking.len(), 5);
        assert_eq!(charts.efficiency_ranking[0].bus_number, "30");
        assert_eq!(charts.bottom_performers[0].bus_number, "1");
        assert_eq!(charts.hub_coverage.len(), 5);
        assert_eq!(charts.stop_spacing.len(), 6);
        assert_eq!(charts.stop_density.len(), 30);
        assert_eq!(charts.efficiency_matrix.len(), 30);
    }

    #[test]
    fn test_notes() {
        let metrics = vec![metric("A", 10.0, 30.0, 10), metric("B", 20.0, 50.0, 40)];

        let charts = ChartSet::build(&metrics, &ReportConfig::default());
        let trend = charts.notes.duration_trend.unwrap();

        assert!((trend.slope_min_per_km - 2.0).abs() < 1e-9);
        assert!((trend.intercept_min - 10.0).abs() < 1e-9);
        assert_eq!(charts.notes.median_stops, 25.0);
        assert_eq!(charts.notes.median_stop_density, 1.5);
    }
}
