use bus_route_analyzer::analysis::summary::summarize;
use bus_route_analyzer::config::{DatasetFormat, ReportConfig};
use bus_route_analyzer::filter::RouteFilter;
use bus_route_analyzer::loader::parse_routes;
use bus_route_analyzer::metrics::derive;
use bus_route_analyzer::report::{MANIFEST_FILE, SUMMARY_FILE, run_report};
use std::fs;
use std::path::Path;

const FIXTURE: &str = "tests/fixtures/bus_data.json";

#[test]
fn test_full_pipeline() {
    let bytes = include_bytes!("fixtures/bus_data.json");
    let loaded = parse_routes(bytes).expect("Failed to parse route data");

    assert_eq!(loaded.routes.len(), 5);
    assert_eq!(loaded.skipped, 1);

    let metrics = derive(&loaded.routes);
    let ids: Vec<_> = metrics.iter().map(|m| m.bus_number.as_str()).collect();
    // route 3 has no duration, route 5 has zero length
    assert_eq!(ids, vec!["1", "2", "4"]);

    let first = &metrics[0];
    assert_eq!(first.avg_speed_kmh, 30.0);
    assert_eq!(first.tariff_value, 0.6);
    assert_eq!(first.transport_hub_count, 2);
    assert_eq!(first.num_stops, 3);

    let fourth = &metrics[2];
    assert_eq!(fourth.num_stops, 0);
    assert_eq!(fourth.stop_density, 0.0);
    assert_eq!(fourth.avg_distance_between_stops_km, 0.0);
    assert_eq!(fourth.working_zone, "Unknown");
    assert_eq!(fourth.first_point, "N/A");

    let stats = summarize(&metrics).unwrap();
    assert_eq!(stats.total_routes, 3);
    assert_eq!(stats.total_network_km, 83.0);
    assert_eq!(stats.total_stops, 7);
    assert_eq!(stats.total_hubs, 3);
    // routes 1 and 4 both average 30 km/h; the first one wins
    assert_eq!(stats.fastest_route, "1");
    assert_eq!(stats.slowest_route, "2");
    assert_eq!(stats.longest_route, "4");
    assert_eq!(stats.carriers, 2);
    assert_eq!(stats.regions, 2);
}

#[test]
fn test_round_trip_with_missing_duration() {
    let json = br#"[
        { "number": "A", "routLength": 12.0, "durationMinuts": 30 },
        { "number": "B", "routLength": 20.0 },
        { "number": "C", "routLength": 7.5, "durationMinuts": 15 }
    ]"#;

    let metrics = derive(&parse_routes(json).unwrap().routes);
    assert_eq!(metrics.len(), 2);

    let stats = summarize(&metrics).unwrap();
    assert_eq!(stats.total_routes, 2);
    assert_eq!(stats.total_network_km, 19.5);
}

#[test]
fn test_run_report_writes_all_files() {
    let output_dir = std::env::temp_dir().join("bus_route_analyzer_test_report");
    let _ = fs::remove_dir_all(&output_dir);

    let config = ReportConfig {
        output_dir: output_dir.clone(),
        format: DatasetFormat::Csv,
        ..Default::default()
    };

    let (stats, manifest) =
        run_report(Path::new(FIXTURE), &config, &RouteFilter::default()).unwrap();

    assert_eq!(stats.total_routes, 3);
    assert_eq!(manifest.records_loaded, 5);
    assert_eq!(manifest.records_skipped, 1);
    assert_eq!(manifest.routes_eligible, 3);
    assert!(!manifest.filtered);
    // metrics table + 12 charts + summary
    assert_eq!(manifest.files.len(), 14);

    for file in &manifest.files {
        assert!(output_dir.join(file).exists(), "missing {file}");
    }
    assert!(output_dir.join(MANIFEST_FILE).exists());

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(output_dir.join(SUMMARY_FILE)).unwrap()).unwrap();
    assert_eq!(summary["total_routes"], 3);
    assert_eq!(summary["fastest_route"], "1");

    let metrics_csv = fs::read_to_string(output_dir.join("route_metrics.csv")).unwrap();
    assert_eq!(metrics_csv.lines().count(), 4);

    fs::remove_dir_all(&output_dir).unwrap();
}

#[test]
fn test_run_report_with_filter() {
    let output_dir = std::env::temp_dir().join("bus_route_analyzer_test_filtered");
    let _ = fs::remove_dir_all(&output_dir);

    let config = ReportConfig {
        output_dir: output_dir.clone(),
        format: DatasetFormat::Json,
        ..Default::default()
    };
    let filter = RouteFilter {
        regions: vec!["Baku".to_string()],
        ..Default::default()
    };

    let (stats, manifest) = run_report(Path::new(FIXTURE), &config, &filter).unwrap();

    assert_eq!(stats.total_routes, 2);
    assert_eq!(manifest.routes_eligible, 3);
    assert_eq!(manifest.routes_reported, 2);
    assert!(manifest.filtered);
    assert!(output_dir.join("route_metrics.json").exists());

    fs::remove_dir_all(&output_dir).unwrap();
}

#[test]
fn test_run_report_without_eligible_routes_writes_nothing() {
    let dir = std::env::temp_dir().join("bus_route_analyzer_test_empty");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let input = dir.join("bus_data.json");
    fs::write(&input, r#"[{ "number": "1", "routLength": 10 }]"#).unwrap();

    let config = ReportConfig {
        output_dir: dir.join("charts"),
        ..Default::default()
    };

    let err = run_report(&input, &config, &RouteFilter::default()).unwrap_err();

    assert!(err.to_string().contains("no eligible routes"));
    assert!(!config.output_dir.exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_run_report_missing_input() {
    let config = ReportConfig {
        output_dir: std::env::temp_dir().join("bus_route_analyzer_test_missing"),
        ..Default::default()
    };

    let result = run_report(
        Path::new("tests/fixtures/does_not_exist.json"),
        &config,
        &RouteFilter::default(),
    );

    assert!(result.is_err());
}
