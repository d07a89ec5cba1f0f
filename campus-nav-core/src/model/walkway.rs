//! Simplified walkway graph between campus path nodes.
//!
//! Directions are straight lines; this network is only validated and drawn.

use hashbrown::{HashMap, HashSet};
use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};

use super::Coordinates;
use crate::{Miles, routing::haversine_miles};

/// Walkway graph vertex
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathNode {
    pub id: String,
    pub coordinates: Coordinates,
    /// Ids of adjacent nodes, expected to be listed on both ends
    #[serde(default)]
    pub connected_to: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct WalkwayNetwork {
    /// Edge weights are segment lengths in miles
    pub graph: UnGraph<PathNode, Miles>,
    index: HashMap<String, NodeIndex>,
}

impl WalkwayNetwork {
    pub fn new(nodes: Vec<PathNode>) -> Self {
        let mut graph = UnGraph::with_capacity(nodes.len(), nodes.len() * 2);
        let mut index = HashMap::with_capacity(nodes.len());

        for node in nodes {
            let id = node.id.clone();
            let idx = graph.add_node(node);
            index.insert(id, idx);
        }

        // A link listed on either end becomes one undirected edge
        let mut links = HashSet::new();
        for source in graph.node_indices() {
            for neighbor in &graph[source].connected_to {
                if let Some(&target) = index.get(neighbor)
                    && source != target
                {
                    links.insert((source.min(target), source.max(target)));
                }
            }
        }

        let mut links: Vec<_> = links.into_iter().collect();
        links.sort_unstable();
        for (a, b) in links {
            let length = haversine_miles(graph[a].coordinates, graph[b].coordinates);
            graph.add_edge(a, b, length);
        }

        Self { graph, index }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn node(&self, id: &str) -> Option<&PathNode> {
        self.index.get(id).map(|&idx| &self.graph[idx])
    }

    pub fn nodes(&self) -> impl Iterator<Item = &PathNode> {
        self.graph.node_weights()
    }

    /// Links listed by one node but not by its neighbor
    pub fn asymmetric_links(&self) -> Vec<(&str, &str)> {
        self.nodes()
            .flat_map(|node| {
                node.connected_to.iter().filter_map(move |neighbor| {
                    let other = self.node(neighbor)?;
                    (!other.connected_to.contains(&node.id))
                        .then_some((node.id.as_str(), neighbor.as_str()))
                })
            })
            .collect()
    }

    /// Links pointing at node ids that do not exist
    pub fn dangling_links(&self) -> Vec<(&str, &str)> {
        self.nodes()
            .flat_map(|node| {
                node.connected_to
                    .iter()
                    .filter(|neighbor| !self.index.contains_key(neighbor.as_str()))
                    .map(move |neighbor| (node.id.as_str(), neighbor.as_str()))
            })
            .collect()
    }

    pub fn component_count(&self) -> usize {
        petgraph::algo::connected_components(&self.graph)
    }

    pub fn total_length(&self) -> Miles {
        self.graph.edge_weights().sum()
    }
}
