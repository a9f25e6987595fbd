use algolab_core::{
    Algorithm, DistanceMatrix, Graph, ShortestPaths, SortStats, floyd_warshall, merge_sort,
    quick_sort,
};
use std::{error::Error, time::Duration, time::Instant};
use tracing::debug;

use crate::demo::{self, DIJKSTRA_SOURCE, ListGenerator};

/// Everything produced by one algorithm run, ready for display.
#[derive(Debug, Clone)]
pub enum RunReport {
    Sort {
        algorithm: Algorithm,
        input: Vec<i64>,
        sorted: Vec<i64>,
        stats: SortStats,
        elapsed: Duration,
    },
    AllPairs {
        input: DistanceMatrix,
        distances: DistanceMatrix,
        elapsed: Duration,
    },
    SingleSource {
        graph: Graph,
        paths: ShortestPaths,
        elapsed: Duration,
    },
}

impl RunReport {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            RunReport::Sort { algorithm, .. } => *algorithm,
            RunReport::AllPairs { .. } => Algorithm::FloydWarshall,
            RunReport::SingleSource { .. } => Algorithm::Dijkstra,
        }
    }

    pub fn elapsed(&self) -> Duration {
        match self {
            RunReport::Sort { elapsed, .. }
            | RunReport::AllPairs { elapsed, .. }
            | RunReport::SingleSource { elapsed, .. } => *elapsed,
        }
    }
}

pub fn run_algorithm(
    algorithm: Algorithm,
    generator: &mut ListGenerator,
) -> Result<RunReport, Box<dyn Error>> {
    debug!(algorithm = %algorithm, "running algorithm");

    let report = match algorithm {
        Algorithm::QuickSort | Algorithm::MergeSort => {
            let input = generator.next_list();
            run_sort(algorithm, input)
        }
        Algorithm::FloydWarshall => {
            let input = demo::floyd_matrix()?;
            let timer = Instant::now();
            let distances = floyd_warshall(&input);
            RunReport::AllPairs {
                input,
                distances,
                elapsed: timer.elapsed(),
            }
        }
        Algorithm::Dijkstra => {
            let graph = demo::dijkstra_graph()?;
            let timer = Instant::now();
            let paths = graph.dijkstra(DIJKSTRA_SOURCE)?;
            RunReport::SingleSource {
                graph,
                paths,
                elapsed: timer.elapsed(),
            }
        }
    };

    Ok(report)
}

/// Sorts a copy of `input` with the chosen sorter.
pub fn run_sort(algorithm: Algorithm, input: Vec<i64>) -> RunReport {
    let mut sorted = input.clone();
    let timer = Instant::now();
    let stats = match algorithm {
        Algorithm::MergeSort => merge_sort(&mut sorted),
        _ => quick_sort(&mut sorted),
    };

    RunReport::Sort {
        algorithm,
        input,
        sorted,
        stats,
        elapsed: timer.elapsed(),
    }
}
