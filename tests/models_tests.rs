// Model serialization tests (wire field names, null stats, query defaults)

use region_latency::models::*;

#[test]
fn test_region_stats_serializes_snake_case() {
    let stats = RegionStats {
        avg_latency: Some(150.0),
        p95_latency: Some(177.0),
        avg_uptime: Some(0.995),
        breaches: 1,
    };
    let json = serde_json::to_value(stats).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "avg_latency": 150.0,
            "p95_latency": 177.0,
            "avg_uptime": 0.995,
            "breaches": 1
        })
    );
}

#[test]
fn test_empty_region_stats_serialize_as_null() {
    let json = serde_json::to_string(&RegionStats::EMPTY).unwrap();
    assert_eq!(
        json,
        r#"{"avg_latency":null,"p95_latency":null,"avg_uptime":null,"breaches":0}"#
    );
}

#[test]
fn test_region_report_preserves_insertion_order() {
    let mut report = RegionReport::new();
    report.insert("emea".into(), RegionStats::EMPTY);
    report.insert("apac".into(), RegionStats::EMPTY);
    report.insert("amer".into(), RegionStats::EMPTY);
    let json = serde_json::to_string(&report).unwrap();
    let emea = json.find("emea").unwrap();
    let apac = json.find("apac").unwrap();
    let amer = json.find("amer").unwrap();
    assert!(emea < apac && apac < amer);
}

#[test]
fn test_query_defaults() {
    let q: LatencyQuery = serde_json::from_str("{}").unwrap();
    assert!(q.regions.is_empty());
    assert_eq!(q.threshold_ms, None);
    assert_eq!(q.threshold_or(180.0), 180.0);
}

#[test]
fn test_query_explicit_threshold_wins() {
    let q: LatencyQuery =
        serde_json::from_str(r#"{"regions": ["emea"], "threshold_ms": 0}"#).unwrap();
    assert_eq!(q.regions, vec!["emea".to_string()]);
    assert_eq!(q.threshold_or(180.0), 0.0);
}

#[test]
fn test_query_rejects_non_numeric_threshold() {
    let r: Result<LatencyQuery, _> =
        serde_json::from_str(r#"{"regions": ["emea"], "threshold_ms": "high"}"#);
    assert!(r.is_err());
}

#[test]
fn test_query_rejects_null_threshold() {
    let r: Result<LatencyQuery, _> =
        serde_json::from_str(r#"{"regions": ["emea"], "threshold_ms": null}"#);
    assert!(r.is_err());
}

#[test]
fn test_sample_uptime_pct_alias() {
    let s: Sample =
        serde_json::from_str(r#"{"region": "emea", "latency_ms": 1.5, "uptime_pct": 99.0}"#)
            .unwrap();
    assert_eq!(s, Sample::new("emea", 1.5, 99.0));
    let out = serde_json::to_value(&s).unwrap();
    assert!(out.get("uptime").is_some());
    assert!(out.get("uptime_pct").is_none());
}
