//! Degree centrality used to size graph nodes.

use std::collections::HashMap;

use super::types::{ReviewEdge, ReviewNode};

/// Degree of every node, keyed by id.
///
/// Each edge adds one to its source and one to its target. Nodes without
/// edges get a degree of 1 so they still draw at a visible size.
pub fn degree_centrality(nodes: &[ReviewNode], edges: &[ReviewEdge]) -> HashMap<String, u32> {
	let mut counts: HashMap<&str, u32> = HashMap::new();
	for edge in edges {
		*counts.entry(edge.source.as_str()).or_default() += 1;
		*counts.entry(edge.target.as_str()).or_default() += 1;
	}

	nodes
		.iter()
		.map(|node| {
			let degree = counts.get(node.id.as_str()).copied().unwrap_or(1);
			(node.id.clone(), degree)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network_graph::types::NodeKind;
	use crate::data::review_network;

	fn user(id: &str) -> ReviewNode {
		ReviewNode {
			id: id.into(),
			kind: NodeKind::User,
			suspicion: 0.0,
		}
	}

	fn edge(source: &str, target: &str) -> ReviewEdge {
		ReviewEdge {
			source: source.into(),
			target: target.into(),
		}
	}

	#[test]
	fn sample_network_degrees() {
		let data = review_network();
		let degrees = degree_centrality(&data.nodes, &data.edges);
		assert_eq!(degrees["P101"], 2);
		assert_eq!(degrees["P203"], 2);
		assert_eq!(degrees["P330"], 2);
		assert_eq!(degrees["U001"], 1);
		assert_eq!(degrees["U214"], 2);
		assert_eq!(degrees["U552"], 2);
		assert_eq!(degrees["U773"], 1);
	}

	#[test]
	fn degree_sum_is_twice_edge_count() {
		let nodes: Vec<_> = ["a", "b", "c", "d", "e"].iter().map(|id| user(id)).collect();
		let edges = vec![
			edge("a", "b"),
			edge("a", "c"),
			edge("b", "c"),
			edge("c", "d"),
			edge("a", "b"),
		];
		let degrees = degree_centrality(&nodes, &edges);
		let connected: u32 = ["a", "b", "c", "d"].iter().map(|id| degrees[*id]).sum();
		assert_eq!(connected, 2 * edges.len() as u32);
		assert_eq!(degrees["a"], 3);
		assert_eq!(degrees["b"], 3);
	}

	#[test]
	fn isolated_nodes_floor_at_one() {
		let nodes = vec![user("a"), user("b"), user("lonely")];
		let degrees = degree_centrality(&nodes, &[edge("a", "b")]);
		assert_eq!(degrees["lonely"], 1);
		assert!(degrees.values().all(|&d| d >= 1));
	}

	#[test]
	fn empty_graph_has_no_degrees() {
		assert!(degree_centrality(&[], &[]).is_empty());
	}
}
