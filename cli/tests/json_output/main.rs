use algolab::LabApp;
use algolab::config::LabConfig;
use algolab::demo::ListGenerator;
use algolab::json_output::{JsonOutput, JsonResult, create_json_output, to_json_string};
use algolab::runner::{run_algorithm, run_sort};
use algolab_core::Algorithm;
use serde_json::{Value, json};

fn json_for(algorithm: Algorithm) -> Value {
    let mut generator = ListGenerator::new(5, 10, Some(1));
    let report = run_algorithm(algorithm, &mut generator).unwrap();
    serde_json::to_value(create_json_output(&report)).unwrap()
}

#[test]
fn test_json_output_for_sort() {
    let report = run_sort(Algorithm::MergeSort, vec![9, 7, 2, 11, 1, 39, 54]);
    let value = serde_json::to_value(create_json_output(&report)).unwrap();

    assert_eq!(value["algorithm"], "merge-sort");
    assert_eq!(value["input"], json!([9, 7, 2, 11, 1, 39, 54]));
    assert_eq!(value["result"], json!([1, 2, 7, 9, 11, 39, 54]));
    assert_eq!(value["stats"]["comparisons"], 11);
    assert_eq!(value["stats"]["movements"], 20);
    assert!(value["stats"].get("settled").is_none());
    assert!(value["stats"]["elapsed_ms"].is_number());
}

#[test]
fn test_json_output_for_floyd_uses_null_for_infinity() {
    let value = json_for(Algorithm::FloydWarshall);

    assert_eq!(value["algorithm"], "floyd-warshall");
    assert_eq!(value["input"][0], json!([0, 3, 6, null]));
    assert_eq!(
        value["result"],
        json!([
            [0, 3, 5, 4],
            [null, 0, 2, 1],
            [null, null, 0, 1],
            [null, null, null, 0]
        ])
    );
    assert!(value["stats"].get("comparisons").is_none());
}

#[test]
fn test_json_output_for_dijkstra() {
    let value = json_for(Algorithm::Dijkstra);

    assert_eq!(value["algorithm"], "dijkstra");
    assert_eq!(value["input"]["vertex_count"], 5);
    assert_eq!(value["input"]["source"], 0);
    assert_eq!(value["input"]["edges"].as_array().unwrap().len(), 10);
    assert_eq!(
        value["input"]["edges"][0],
        json!({"from": 0, "to": 1, "weight": 10})
    );
    assert_eq!(value["result"]["distances"], json!([0, 8, 9, 7, 5]));
    assert_eq!(value["result"]["paths"][2], json!([0, 4, 1, 2]));
    assert_eq!(value["stats"]["settled"], 5);
    assert_eq!(value["stats"]["relaxations"], 7);
    assert_eq!(value["stats"]["stale_skips"], 3);
}

#[test]
fn test_json_output_round_trips() {
    let report = run_sort(Algorithm::QuickSort, vec![3, 1, 2]);
    let json_string = to_json_string(&create_json_output(&report)).unwrap();

    let parsed: JsonOutput = serde_json::from_str(&json_string).unwrap();

    assert_eq!(parsed.algorithm, Algorithm::QuickSort);
    assert!(matches!(parsed.result, JsonResult::Sorted(ref values) if values == &vec![1, 2, 3]));
    assert_eq!(parsed.stats.movements, Some(2));
    assert_eq!(parsed.stats.comparisons, Some(2));
}

#[test]
fn test_run_once_json_skips_animation() {
    let mut app = LabApp::new(LabConfig::plain(4, 10, Some(5)));
    let mut out = Vec::new();

    app.run_once(Algorithm::QuickSort, true, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(!text.contains("Creating a random list"));
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["input"].as_array().unwrap().len(), 4);
}
