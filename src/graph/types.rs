use serde::Serialize;

/// Directionality classification of a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Directedness {
    /// Every edge respects its direction
    Directed,
    /// Every edge connects both ways
    Undirected,
    /// Directed and undirected edges coexist
    Mixed,
}

impl std::fmt::Display for Directedness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Directedness::Directed => "directed",
            Directedness::Undirected => "undirected",
            Directedness::Mixed => "mixed",
        })
    }
}

impl std::str::FromStr for Directedness {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "directed" => Ok(Directedness::Directed),
            "undirected" => Ok(Directedness::Undirected),
            "mixed" => Ok(Directedness::Mixed),
            other => Err(format!(
                "unknown directedness '{}' (expected: directed, undirected, mixed)",
                other
            )),
        }
    }
}

/// One edge as enumerated by a [`GraphStore`](crate::graph::GraphStore)
#[derive(Debug, Clone, Serialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    /// false means the edge is traversable in both directions
    pub directed: bool,
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub attributes: serde_json::Value,
}

impl EdgeRecord {
    /// Whether the edge touches the given node
    pub fn is_incident_to(&self, id: &str) -> bool {
        self.from == id || self.to == id
    }
}
