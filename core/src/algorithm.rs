use serde::{Deserialize, Serialize};

/// The four algorithms the lab can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    #[default]
    QuickSort,
    MergeSort,
    FloydWarshall,
    Dijkstra,
}

impl Algorithm {
    /// Menu order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::QuickSort,
        Algorithm::MergeSort,
        Algorithm::FloydWarshall,
        Algorithm::Dijkstra,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::QuickSort => "quick-sort",
            Algorithm::MergeSort => "merge-sort",
            Algorithm::FloydWarshall => "floyd-warshall",
            Algorithm::Dijkstra => "dijkstra",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::QuickSort => "Quick sort",
            Algorithm::MergeSort => "Merge sort",
            Algorithm::FloydWarshall => "Floyd algorithm",
            Algorithm::Dijkstra => "Dijkstra algorithm",
        }
    }

    /// Case-insensitive lookup that also accepts short names ("quick",
    /// "floyd") and ignores `-`, `_` and spaces.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "quick" | "quicksort" => Some(Algorithm::QuickSort),
            "merge" | "mergesort" => Some(Algorithm::MergeSort),
            "floyd" | "floydwarshall" => Some(Algorithm::FloydWarshall),
            "dijkstra" => Some(Algorithm::Dijkstra),
            _ => None,
        }
    }

    pub fn is_sort(&self) -> bool {
        matches!(self, Algorithm::QuickSort | Algorithm::MergeSort)
    }
}

impl From<&str> for Algorithm {
    fn from(s: &str) -> Self {
        Algorithm::parse(s).unwrap_or_default()
    }
}

impl From<String> for Algorithm {
    fn from(s: String) -> Self {
        Algorithm::from(s.as_str())
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
