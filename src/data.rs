//! Sample data embedded in the build.

use crate::components::network_graph::{NetworkData, NodeKind, ReviewEdge, ReviewNode};

/// Offline evaluation numbers for the static performance chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleMetrics {
	pub precision: f64,
	pub recall: f64,
	pub f1: f64,
	pub false_alarm: f64,
}

pub const SAMPLE_METRICS: SampleMetrics = SampleMetrics {
	precision: 0.91,
	recall: 0.88,
	f1: 0.89,
	false_alarm: 0.07,
};

/// Confusion-matrix counts for the class summary chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassSummary {
	pub true_positive: u32,
	pub false_positive: u32,
	pub true_negative: u32,
	pub false_negative: u32,
}

pub const CLASS_SUMMARY: ClassSummary = ClassSummary {
	true_positive: 430,
	false_positive: 32,
	true_negative: 489,
	false_negative: 49,
};

const NODES: &[(&str, NodeKind, f64)] = &[
	("P101", NodeKind::Product, 0.2),
	("P203", NodeKind::Product, 0.4),
	("P330", NodeKind::Product, 0.1),
	("U001", NodeKind::User, 0.7),
	("U214", NodeKind::User, 0.55),
	("U552", NodeKind::User, 0.9),
	("U773", NodeKind::User, 0.3),
];

const EDGES: &[(&str, &str)] = &[
	("U001", "P101"),
	("U214", "P101"),
	("U552", "P203"),
	("U214", "P203"),
	("U773", "P330"),
	("U552", "P330"),
];

/// Users and the products they reviewed.
pub fn review_network() -> NetworkData {
	NetworkData {
		nodes: NODES
			.iter()
			.map(|&(id, kind, suspicion)| ReviewNode {
				id: id.to_string(),
				kind,
				suspicion,
			})
			.collect(),
		edges: EDGES
			.iter()
			.map(|&(source, target)| ReviewEdge {
				source: source.to_string(),
				target: target.to_string(),
			})
			.collect(),
	}
}
