//! JSON input model.
//!
//! ```json
//! {"graphs": [{"id": 1, "nodes": ["A", "B"], "edges": [{"from": "A", "to": "B", "weight": 4}]}]}
//! ```
//!
//! `networks` is accepted in place of `graphs`. `id` is optional and defaults
//! to the graph's 1-based position; `edges` defaults to empty.

use std::io::Read;

use roadnet_core::{Network, Road};
use serde::Deserialize;

/// Top-level input document.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct InputDocument {
    /// Networks to solve, in report order.
    #[serde(alias = "networks")]
    pub graphs: Vec<InputGraph>,
}

/// One network as it appears in the input.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct InputGraph {
    /// Caller-supplied identifier echoed into the report.
    #[serde(default)]
    pub id: Option<u64>,
    /// District labels; the first one seeds Prim's engine.
    pub nodes: Vec<String>,
    /// Candidate roads.
    #[serde(default)]
    pub edges: Vec<InputEdge>,
}

/// One candidate road.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct InputEdge {
    /// First endpoint.
    pub from: String,
    /// Second endpoint.
    pub to: String,
    /// Construction cost.
    pub weight: i64,
}

impl InputDocument {
    /// Decodes a document from `reader`.
    ///
    /// # Errors
    /// Returns [`serde_json::Error`] when the input is not a valid document.
    pub fn from_reader(reader: impl Read) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    /// Converts every graph into an identified [`Network`].
    ///
    /// # Examples
    /// ```
    /// use roadnet_cli::cli::InputDocument;
    ///
    /// let raw = r#"{"networks": [{"nodes": ["A"]}, {"id": 9, "nodes": []}]}"#;
    /// let document = InputDocument::from_reader(raw.as_bytes())?;
    /// let batch = document.into_batch();
    /// assert_eq!(batch[0].0, 1);
    /// assert_eq!(batch[1].0, 9);
    /// assert_eq!(batch[0].1.district_count(), 1);
    /// # Ok::<(), serde_json::Error>(())
    /// ```
    #[must_use]
    pub fn into_batch(self) -> Vec<(u64, Network)> {
        (1_u64..)
            .zip(self.graphs)
            .map(|(position, graph)| (graph.id.unwrap_or(position), graph.into_network()))
            .collect()
    }
}

impl InputGraph {
    fn into_network(self) -> Network {
        let roads = self
            .edges
            .into_iter()
            .map(|edge| Road::new(edge.from, edge.to, edge.weight));
        Network::new(self.nodes, roads)
    }
}
