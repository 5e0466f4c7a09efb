use crate::analysis::types::{Quadrant, QuadrantPoint};
use crate::analysis::utility::median;
use crate::model::RouteMetric;

/// Places a route relative to the network's median speed and median stop
/// count. Values equal to a median count as "high".
pub fn classify(speed: f64, stops: f64, median_speed: f64, median_stops: f64) -> Quadrant {
    match (speed >= median_speed, stops >= median_stops) {
        (true, true) => Quadrant::HighCoverageHighEfficiency,
        (true, false) => Quadrant::Express,
        (false, true) => Quadrant::HighCoverageNeedsOptimization,
        (false, false) => Quadrant::LowCoverageNeedsReview,
    }
}

/// Median speed and median stop count of the table.
pub fn medians(metrics: &[RouteMetric]) -> (f64, f64) {
    let speeds: Vec<f64> = metrics.iter().map(|m| m.avg_speed_kmh).collect();
    let stops: Vec<f64> = metrics.iter().map(|m| m.num_stops as f64).collect();
    (median(&speeds), median(&stops))
}

pub fn efficiency_matrix(metrics: &[RouteMetric]) -> Vec<QuadrantPoint> {
    let (median_speed, median_stops) = medians(metrics);

    metrics
        .iter()
        .map(|m| QuadrantPoint {
            bus_number: m.bus_number.clone(),
            num_stops: m.num_stops,
            avg_speed_kmh: m.avg_speed_kmh,
            quadrant: classify(m.avg_speed_kmh, m.num_stops as f64, median_speed, median_stops),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(20.0, 30.0, 20.0, 30.0), Quadrant::HighCoverageHighEfficiency);
        assert_eq!(classify(25.0, 10.0, 20.0, 30.0), Quadrant::Express);
        assert_eq!(classify(15.0, 40.0, 20.0, 30.0), Quadrant::HighCoverageNeedsOptimization);
        assert_eq!(classify(15.0, 10.0, 20.0, 30.0), Quadrant::LowCoverageNeedsReview);
    }

    #[test]
    fn test_efficiency_matrix() {
        let metrics: Vec<_> = [("A", 10.0, 40), ("B", 30.0, 10), ("C", 20.0, 20)]
            .into_iter()
            .map(|(id, speed, stops)| RouteMetric {
                bus_number: id.to_string(),
                avg_speed_kmh: speed,
                num_stops: stops,
                ..Default::default()
            })
            .collect();

        assert_eq!(medians(&metrics), (20.0, 20.0));

        let points = efficiency_matrix(&metrics);

        assert_eq!(points[0].quadrant, Quadrant::HighCoverageNeedsOptimization);
        assert_eq!(points[1].quadrant, Quadrant::Express);
        assert_eq!(points[2].quadrant, Quadrant::HighCoverageHighEfficiency);
    }
}
