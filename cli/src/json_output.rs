use algolab_core::Algorithm;
use serde::{Deserialize, Serialize};

use crate::runner::RunReport;
use crate::utils::duration_ms;

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput {
    pub algorithm: Algorithm,
    pub input: JsonInput,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonInput {
    List(Vec<i64>),
    /// `null` cells are missing edges
    Matrix(Vec<Vec<Option<i64>>>),
    Graph {
        vertex_count: usize,
        source: usize,
        edges: Vec<JsonEdge>,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonEdge {
    pub from: usize,
    pub to: usize,
    pub weight: i64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonResult {
    Sorted(Vec<i64>),
    Matrix(Vec<Vec<Option<i64>>>),
    Distances {
        distances: Vec<Option<i64>>,
        paths: Vec<Option<Vec<usize>>>,
    },
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct JsonStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparisons: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movements: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settled: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relaxations: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_skips: Option<usize>,
    pub elapsed_ms: f64,
}

pub fn create_json_output(report: &RunReport) -> JsonOutput {
    let elapsed_ms = duration_ms(report.elapsed());

    let (input, result, stats) = match report {
        RunReport::Sort {
            input,
            sorted,
            stats,
            ..
        } => (
            JsonInput::List(input.clone()),
            JsonResult::Sorted(sorted.clone()),
            JsonStats {
                comparisons: Some(stats.comparisons),
                movements: Some(stats.movements),
                elapsed_ms,
                ..JsonStats::default()
            },
        ),
        RunReport::AllPairs {
            input, distances, ..
        } => (
            JsonInput::Matrix(input.to_rows()),
            JsonResult::Matrix(distances.to_rows()),
            JsonStats {
                elapsed_ms,
                ..JsonStats::default()
            },
        ),
        RunReport::SingleSource { graph, paths, .. } => (
            JsonInput::Graph {
                vertex_count: graph.vertex_count(),
                source: paths.source,
                edges: graph
                    .edges()
                    .map(|(from, edge)| JsonEdge {
                        from,
                        to: edge.to,
                        weight: edge.weight,
                    })
                    .collect(),
            },
            JsonResult::Distances {
                distances: paths.distances.clone(),
                paths: (0..graph.vertex_count())
                    .map(|vertex| paths.path_to(vertex))
                    .collect(),
            },
            JsonStats {
                settled: Some(paths.settled),
                relaxations: Some(paths.relaxations),
                stale_skips: Some(paths.stale_skips),
                elapsed_ms,
                ..JsonStats::default()
            },
        ),
    };

    JsonOutput {
        algorithm: report.algorithm(),
        input,
        result,
        stats,
    }
}

pub fn to_json_string(json_output: &JsonOutput) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(json_output)
}
