use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::warn;

use super::centrality::degree_centrality;
use super::palette::{node_fill, node_radius};
use super::simulation::Simulation;
use super::types::{NetworkData, NodeKind, NodeSummary, ReviewEdge};

/// Radius of the ring nodes are seeded on before the first tick.
const SEED_RING: f64 = 100.0;
/// Share of the centroid offset corrected per tick at full energy.
const CENTERING_STRENGTH: f32 = 0.1;
const FRAME_DT: f32 = 0.016;
/// Energy restored when the viewport changes size.
const RESIZE_ALPHA: f64 = 0.3;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub kind: NodeKind,
	pub suspicion: f64,
	pub degree: u32,
	pub radius: f64,
	pub fill: String,
}

impl NodeInfo {
	pub fn summary(&self) -> NodeSummary {
		NodeSummary {
			id: self.id.clone(),
			kind: self.kind,
			degree: self.degree,
			suspicion: self.suspicion,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	/// Pointer minus node center at press time, kept while dragging.
	pub offset_x: f64,
	pub offset_y: f64,
	/// Pointer travelled far enough that releasing it is not a click.
	pub moved: bool,
}

/// The single selected node, which is also the only one drawn with a glow.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
	pub glowing: Option<DefaultNodeIdx>,
}

pub struct NetworkGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub simulation: Simulation,
	pub drag: DragState,
	pub hover: Option<DefaultNodeIdx>,
	pub selection: SelectionState,
	pub width: f64,
	pub height: f64,
	ids: HashMap<String, DefaultNodeIdx>,
}

impl NetworkGraphState {
	pub fn new(data: &NetworkData, width: f64, height: f64) -> Self {
		if let Err(err) = data.validate() {
			warn!("Review network is inconsistent: {}", err);
		}

		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 280.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let known: HashSet<&str> = data.nodes.iter().map(|n| n.id.as_str()).collect();
		let (edges, dangling): (Vec<ReviewEdge>, Vec<ReviewEdge>) =
			data.edges.iter().cloned().partition(|e| {
				known.contains(e.source.as_str()) && known.contains(e.target.as_str())
			});
		for edge in &dangling {
			warn!("Skipping edge {} -> {}", edge.source, edge.target);
		}
		let degrees = degree_centrality(&data.nodes, &edges);
		let mut ids = HashMap::new();

		for (i, node) in data.nodes.iter().enumerate() {
			if ids.contains_key(&node.id) {
				continue;
			}
			let degree = degrees.get(&node.id).copied().unwrap_or(1);
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let (x, y) = (
				(width / 2.0 + SEED_RING * angle.cos()) as f32,
				(height / 2.0 + SEED_RING * angle.sin()) as f32,
			);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					kind: node.kind,
					suspicion: node.suspicion,
					degree,
					radius: node_radius(node.kind, degree),
					fill: node_fill(node.kind, node.suspicion),
				},
			});
			ids.insert(node.id.clone(), idx);
		}

		for edge in &edges {
			if let (Some(&src), Some(&tgt)) = (ids.get(&edge.source), ids.get(&edge.target)) {
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		Self {
			graph,
			simulation: Simulation::default(),
			drag: DragState::default(),
			hover: None,
			selection: SelectionState::default(),
			width,
			height,
			ids,
		}
	}

	pub fn index_of(&self, id: &str) -> Option<DefaultNodeIdx> {
		self.ids.get(id).copied()
	}

	/// Re-apply the glow to `id` after the graph was rebuilt from new data.
	pub fn restore_selection(&mut self, id: &str) {
		self.selection.glowing = self.index_of(id);
	}

	pub fn position(&self, idx: DefaultNodeIdx) -> Option<(f64, f64)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.x() as f64, node.y() as f64));
			}
		});
		found
	}

	pub fn info(&self, idx: DefaultNodeIdx) -> Option<NodeInfo> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.clone());
			}
		});
		found
	}

	/// Topmost node whose circle contains the point.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<DefaultNodeIdx> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - x, node.y() as f64 - y);
			if (dx * dx + dy * dy).sqrt() <= node.data.user_data.radius {
				found = Some(node.index());
			}
		});
		found
	}

	/// Pin a node at a position, or release it back to the forces.
	pub fn pin(&mut self, idx: DefaultNodeIdx, at: Option<(f64, f64)>) {
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				match at {
					Some((x, y)) => {
						node.data.x = x as f32;
						node.data.y = y as f32;
						node.data.is_anchor = true;
					}
					None => node.data.is_anchor = false,
				}
			}
		});
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover == Some(idx)
	}

	pub fn is_glowing(&self, idx: DefaultNodeIdx) -> bool {
		self.selection.glowing == Some(idx)
	}

	/// Advance the layout one frame. Returns false once it has settled.
	pub fn tick(&mut self) -> bool {
		let Some(alpha) = self.simulation.step() else {
			return false;
		};
		self.graph.update(FRAME_DT * alpha as f32);
		self.pull_to_center(alpha as f32);
		true
	}

	/// Shift free nodes so their centroid drifts toward the viewport center.
	fn pull_to_center(&mut self, alpha: f32) {
		let (mut sum_x, mut sum_y, mut count) = (0.0f32, 0.0f32, 0usize);
		self.graph.visit_nodes(|node| {
			sum_x += node.x();
			sum_y += node.y();
			count += 1;
		});
		if count == 0 {
			return;
		}
		let strength = (CENTERING_STRENGTH * alpha.max(0.1)).min(1.0);
		let (shift_x, shift_y) = (
			(self.width as f32 / 2.0 - sum_x / count as f32) * strength,
			(self.height as f32 / 2.0 - sum_y / count as f32) * strength,
		);
		self.graph.visit_nodes_mut(|node| {
			if !node.data.is_anchor {
				node.data.x += shift_x;
				node.data.y += shift_y;
			}
		});
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.simulation.kick(RESIZE_ALPHA);
	}
}

#[cfg(test)]
impl NetworkGraphState {
	pub fn is_pinned(&self, idx: DefaultNodeIdx) -> bool {
		let mut pinned = false;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				pinned = node.data.is_anchor;
			}
		});
		pinned
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network_graph::simulation::LayoutPhase;
	use crate::components::network_graph::types::{ReviewEdge, ReviewNode};
	use crate::data::review_network;

	#[test]
	fn builds_nodes_with_degree_radius_and_fill() {
		let state = NetworkGraphState::new(&review_network(), 800.0, 500.0);
		let p101 = state.info(state.index_of("P101").unwrap()).unwrap();
		assert_eq!(p101.degree, 2);
		assert_eq!(p101.radius, 18.0);
		assert_eq!(p101.fill, "#2563eb");

		let u773 = state.info(state.index_of("U773").unwrap()).unwrap();
		assert_eq!(u773.degree, 1);
		assert_eq!(u773.radius, 13.0);
		assert_eq!(u773.fill, "rgb(250, 204, 21)");
	}

	#[test]
	fn unknown_edge_endpoints_are_skipped() {
		let data = NetworkData {
			nodes: vec![
				ReviewNode {
					id: "U1".into(),
					kind: NodeKind::User,
					suspicion: 0.1,
				},
				ReviewNode {
					id: "P1".into(),
					kind: NodeKind::Product,
					suspicion: 0.0,
				},
			],
			edges: vec![
				ReviewEdge {
					source: "U1".into(),
					target: "P1".into(),
				},
				ReviewEdge {
					source: "U1".into(),
					target: "ghost".into(),
				},
			],
		};
		let state = NetworkGraphState::new(&data, 400.0, 400.0);
		let mut edges = 0;
		state.graph.visit_edges(|_, _, _| edges += 1);
		assert_eq!(edges, 1);
		assert!(state.index_of("ghost").is_none());

		// Degree counts only the edges that were drawn.
		let u1 = state.info(state.index_of("U1").unwrap()).unwrap();
		assert_eq!(u1.degree, 1);
		assert_eq!(u1.radius, 13.0);
	}

	#[test]
	fn rebuilt_graph_keeps_selection_glow() {
		let mut state = NetworkGraphState::new(&review_network(), 800.0, 500.0);
		state.restore_selection("U214");
		assert!(state.is_glowing(state.index_of("U214").unwrap()));

		state.restore_selection("removed");
		assert_eq!(state.selection.glowing, None);
	}

	#[test]
	fn hit_test_uses_node_radius() {
		let state = NetworkGraphState::new(&review_network(), 800.0, 500.0);
		let idx = state.index_of("P101").unwrap();
		let (x, y) = state.position(idx).unwrap();
		assert_eq!(state.node_at_position(x + 17.0, y), Some(idx));
		assert_eq!(state.node_at_position(x + 19.5, y), None);
	}

	#[test]
	fn layout_ticks_until_settled() {
		let mut state = NetworkGraphState::new(&review_network(), 800.0, 500.0);
		assert_eq!(state.simulation.phase(), LayoutPhase::Unpositioned);
		let mut ticks = 0;
		while state.tick() {
			ticks += 1;
			assert!(ticks < 1000);
		}
		assert_eq!(state.simulation.phase(), LayoutPhase::Settled);
		state.graph.visit_nodes(|node| {
			assert!(node.x().is_finite() && node.y().is_finite());
		});
	}

	#[test]
	fn pinned_nodes_ignore_centering() {
		let mut state = NetworkGraphState::new(&review_network(), 800.0, 500.0);
		let idx = state.index_of("U552").unwrap();
		state.pin(idx, Some((5.0, 5.0)));
		state.tick();
		assert_eq!(state.position(idx), Some((5.0, 5.0)));
		assert!(state.is_pinned(idx));

		state.pin(idx, None);
		assert!(!state.is_pinned(idx));
	}

	#[test]
	fn resize_recenters_a_settled_layout() {
		let mut state = NetworkGraphState::new(&review_network(), 800.0, 500.0);
		while state.tick() {}
		state.resize(1200.0, 500.0);
		assert_eq!(state.simulation.phase(), LayoutPhase::Simulating);
		assert!(state.tick());
		assert_eq!(state.width, 1200.0);
	}

	#[test]
	fn centering_pulls_centroid_to_new_viewport_center() {
		let mut state = NetworkGraphState::new(&review_network(), 800.0, 500.0);
		while state.tick() {}
		state.resize(1200.0, 500.0);
		while state.tick() {}

		let (mut sum_x, mut count) = (0.0f64, 0.0f64);
		state.graph.visit_nodes(|node| {
			sum_x += node.x() as f64;
			count += 1.0;
		});
		let centroid_x = sum_x / count;
		assert!((centroid_x - 600.0).abs() < 30.0, "centroid x = {centroid_x}");
	}
}
