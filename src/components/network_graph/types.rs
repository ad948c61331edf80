use std::collections::HashSet;
use std::fmt;

use crate::error::GraphDataError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeKind {
	Product,
	#[default]
	User,
}

impl NodeKind {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Product => "product",
			Self::User => "user",
		}
	}
}

impl fmt::Display for NodeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewNode {
	pub id: String,
	pub kind: NodeKind,
	/// Likelihood in [0, 1] that this account or listing is manipulated.
	pub suspicion: f64,
}

/// A review linking a user to a product. Undirected for centrality.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewEdge {
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworkData {
	pub nodes: Vec<ReviewNode>,
	pub edges: Vec<ReviewEdge>,
}

impl NetworkData {
	/// Every id unique, every edge endpoint known.
	pub fn validate(&self) -> Result<(), GraphDataError> {
		let mut ids = HashSet::new();
		for node in &self.nodes {
			if !ids.insert(node.id.as_str()) {
				return Err(GraphDataError::DuplicateNode(node.id.clone()));
			}
		}
		for edge in &self.edges {
			for endpoint in [&edge.source, &edge.target] {
				if !ids.contains(endpoint.as_str()) {
					return Err(GraphDataError::DanglingEdge {
						source_id: edge.source.clone(),
						target_id: edge.target.clone(),
						missing: endpoint.clone(),
					});
				}
			}
		}
		Ok(())
	}
}

/// What the tooltip and side panel say about one node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeSummary {
	pub id: String,
	pub kind: NodeKind,
	pub degree: u32,
	pub suspicion: f64,
}

impl NodeSummary {
	pub fn suspicion_percent(&self) -> String {
		crate::format::percent(self.suspicion)
	}

	/// One-line description for the selection panel.
	pub fn info_line(&self) -> String {
		format!(
			"Type: {}, Degree: {}, Suspicion: {}",
			self.kind,
			self.degree,
			self.suspicion_percent()
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str) -> ReviewNode {
		ReviewNode {
			id: id.into(),
			kind: NodeKind::User,
			suspicion: 0.5,
		}
	}

	fn edge(source: &str, target: &str) -> ReviewEdge {
		ReviewEdge {
			source: source.into(),
			target: target.into(),
		}
	}

	#[test]
	fn duplicate_ids_are_rejected() {
		let data = NetworkData {
			nodes: vec![node("U1"), node("U1")],
			edges: vec![],
		};
		assert_eq!(
			data.validate(),
			Err(GraphDataError::DuplicateNode("U1".into()))
		);
	}

	#[test]
	fn dangling_edges_are_rejected() {
		let data = NetworkData {
			nodes: vec![node("U1")],
			edges: vec![edge("U1", "P9")],
		};
		assert_eq!(
			data.validate(),
			Err(GraphDataError::DanglingEdge {
				source_id: "U1".into(),
				target_id: "P9".into(),
				missing: "P9".into(),
			})
		);
	}

	#[test]
	fn info_line_formats_suspicion() {
		let summary = NodeSummary {
			id: "U552".into(),
			kind: NodeKind::User,
			degree: 2,
			suspicion: 0.9,
		};
		assert_eq!(summary.info_line(), "Type: user, Degree: 2, Suspicion: 90.0%");
	}
}
