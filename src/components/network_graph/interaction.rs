//! Pointer handling for the network graph.
//!
//! Each handler takes the graph state and one pointer event, updates the
//! state, and reports what the surrounding view needs to change. Painting
//! happens on the next animation frame.

use force_graph::DefaultNodeIdx;
use log::debug;

use super::simulation::DRAG_ALPHA_TARGET;
use super::state::{DragState, NetworkGraphState};
use super::types::NodeSummary;

/// Pointer travel, in pixels, beyond which a press becomes a drag.
pub const CLICK_SLOP: f64 = 3.0;
/// The tooltip sits this far above the pointer.
pub const TOOLTIP_OFFSET_Y: f64 = 30.0;

/// Pointer position relative to the graph container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
	Down { x: f64, y: f64 },
	Move { x: f64, y: f64 },
	Up { x: f64, y: f64 },
	Leave,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
	pub node: NodeSummary,
	pub left: f64,
	pub top: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TooltipChange {
	Show(Tooltip),
	Hide,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outcome {
	pub tooltip: Option<TooltipChange>,
	pub selected: Option<NodeSummary>,
}

pub fn handle(state: &mut NetworkGraphState, event: PointerEvent) -> Outcome {
	match event {
		PointerEvent::Down { x, y } => pointer_down(state, x, y),
		PointerEvent::Move { x, y } => pointer_move(state, x, y),
		PointerEvent::Up { x, y } => pointer_up(state, x, y),
		PointerEvent::Leave => pointer_leave(state),
	}
}

fn pointer_down(state: &mut NetworkGraphState, x: f64, y: f64) -> Outcome {
	let Some(idx) = state.node_at_position(x, y) else {
		return Outcome::default();
	};
	if state.simulation.is_idle() {
		debug!("Reheating {:?} layout for drag", state.simulation.phase());
	}
	state.simulation.reheat(DRAG_ALPHA_TARGET);
	let (node_x, node_y) = state.position(idx).unwrap_or((x, y));
	state.pin(idx, Some((node_x, node_y)));
	state.drag = DragState {
		node_idx: Some(idx),
		start_x: x,
		start_y: y,
		offset_x: x - node_x,
		offset_y: y - node_y,
		moved: false,
	};
	Outcome::default()
}

fn pointer_move(state: &mut NetworkGraphState, x: f64, y: f64) -> Outcome {
	if let Some(idx) = state.drag.node_idx {
		let (dx, dy) = (x - state.drag.start_x, y - state.drag.start_y);
		if (dx * dx + dy * dy).sqrt() > CLICK_SLOP {
			state.drag.moved = true;
		}
		state.pin(idx, Some((x - state.drag.offset_x, y - state.drag.offset_y)));
		return Outcome {
			tooltip: hovered_tooltip(state, x, y),
			selected: None,
		};
	}

	let hovered = state.node_at_position(x, y);
	state.hover = hovered;
	Outcome {
		tooltip: Some(match hovered {
			Some(_) => hovered_tooltip(state, x, y).unwrap_or(TooltipChange::Hide),
			None => TooltipChange::Hide,
		}),
		selected: None,
	}
}

fn pointer_up(state: &mut NetworkGraphState, _x: f64, _y: f64) -> Outcome {
	let Some(idx) = state.drag.node_idx.take() else {
		return Outcome::default();
	};
	state.pin(idx, None);
	state.simulation.cool();

	if state.drag.moved {
		state.drag.moved = false;
		return Outcome::default();
	}
	Outcome {
		tooltip: None,
		selected: select(state, idx),
	}
}

fn pointer_leave(state: &mut NetworkGraphState) -> Outcome {
	if let Some(idx) = state.drag.node_idx.take() {
		state.pin(idx, None);
		state.simulation.cool();
	}
	state.drag.moved = false;
	state.hover = None;
	Outcome {
		tooltip: Some(TooltipChange::Hide),
		selected: None,
	}
}

/// Move the glow to `idx`; any previously glowing node loses it.
fn select(state: &mut NetworkGraphState, idx: DefaultNodeIdx) -> Option<NodeSummary> {
	let summary = state.info(idx)?.summary();
	state.selection.glowing = Some(idx);
	debug!("Selected node {}", summary.id);
	Some(summary)
}

fn hovered_tooltip(state: &NetworkGraphState, x: f64, y: f64) -> Option<TooltipChange> {
	let idx = state.hover?;
	let node = state.info(idx)?.summary();
	Some(TooltipChange::Show(Tooltip {
		node,
		left: x,
		top: y - TOOLTIP_OFFSET_Y,
	}))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network_graph::simulation::LayoutPhase;
	use crate::data::review_network;

	fn graph() -> NetworkGraphState {
		NetworkGraphState::new(&review_network(), 800.0, 500.0)
	}

	fn center_of(state: &NetworkGraphState, id: &str) -> (f64, f64) {
		state.position(state.index_of(id).unwrap()).unwrap()
	}

	fn click(state: &mut NetworkGraphState, id: &str) -> Outcome {
		let (x, y) = center_of(state, id);
		handle(state, PointerEvent::Down { x, y });
		handle(state, PointerEvent::Up { x, y })
	}

	#[test]
	fn click_selects_and_glows() {
		let mut state = graph();
		let outcome = click(&mut state, "U552");
		let selected = outcome.selected.unwrap();
		assert_eq!(selected.id, "U552");
		assert_eq!(selected.info_line(), "Type: user, Degree: 2, Suspicion: 90.0%");
		assert!(state.is_glowing(state.index_of("U552").unwrap()));
	}

	#[test]
	fn glow_moves_to_the_latest_click() {
		let mut state = graph();
		click(&mut state, "P101");
		let outcome = click(&mut state, "U773");
		assert_eq!(outcome.selected.unwrap().id, "U773");

		let a = state.index_of("P101").unwrap();
		let b = state.index_of("U773").unwrap();
		assert!(!state.is_glowing(a));
		assert!(state.is_glowing(b));

		let mut glowing = 0;
		state.graph.visit_nodes(|node| {
			if state.is_glowing(node.index()) {
				glowing += 1;
			}
		});
		assert_eq!(glowing, 1);
	}

	#[test]
	fn off_center_click_leaves_node_in_place() {
		let mut state = graph();
		let idx = state.index_of("P101").unwrap();
		let (x, y) = center_of(&state, "P101");
		handle(&mut state, PointerEvent::Down { x: x + 15.0, y });
		assert_eq!(state.position(idx), Some((x, y)));
		let outcome = handle(&mut state, PointerEvent::Up { x: x + 15.0, y });
		assert_eq!(outcome.selected.unwrap().id, "P101");
		assert_eq!(state.position(idx), Some((x, y)));
	}

	#[test]
	fn drag_keeps_grab_offset() {
		let mut state = graph();
		let idx = state.index_of("P101").unwrap();
		let (x, y) = center_of(&state, "P101");
		handle(&mut state, PointerEvent::Down { x: x + 10.0, y: y - 5.0 });
		handle(&mut state, PointerEvent::Move { x: x + 60.0, y: y + 15.0 });
		let (px, py) = state.position(idx).unwrap();
		assert!((px - (x + 50.0)).abs() < 1e-3);
		assert!((py - (y + 20.0)).abs() < 1e-3);
	}

	#[test]
	fn click_on_background_keeps_selection() {
		let mut state = graph();
		click(&mut state, "P203");
		let outcome = handle(&mut state, PointerEvent::Down { x: 1.0, y: 1.0 });
		assert_eq!(outcome, Outcome::default());
		let outcome = handle(&mut state, PointerEvent::Up { x: 1.0, y: 1.0 });
		assert_eq!(outcome.selected, None);
		assert!(state.is_glowing(state.index_of("P203").unwrap()));
	}

	#[test]
	fn drag_pins_follows_and_releases() {
		let mut state = graph();
		while state.simulation.step().is_some() {}
		assert!(state.simulation.is_idle());

		let idx = state.index_of("U214").unwrap();
		let (x, y) = center_of(&state, "U214");
		handle(&mut state, PointerEvent::Down { x, y });
		assert!(state.is_pinned(idx));
		assert_eq!(state.simulation.phase(), LayoutPhase::Simulating);
		assert_eq!(state.simulation.alpha_target(), DRAG_ALPHA_TARGET);

		handle(&mut state, PointerEvent::Move { x: x + 40.0, y: y + 10.0 });
		let (px, py) = state.position(idx).unwrap();
		assert!((px - (x + 40.0)).abs() < 1e-3);
		assert!((py - (y + 10.0)).abs() < 1e-3);

		let outcome = handle(&mut state, PointerEvent::Up { x: x + 40.0, y: y + 10.0 });
		assert_eq!(outcome.selected, None, "a drag is not a click");
		assert!(!state.is_pinned(idx));
		assert_eq!(state.simulation.alpha_target(), 0.0);
		assert_eq!(state.position(idx), Some((px, py)), "no snap back");
	}

	#[test]
	fn hover_shows_and_hides_tooltip() {
		let mut state = graph();
		let (x, y) = center_of(&state, "U001");
		let outcome = handle(&mut state, PointerEvent::Move { x, y });
		match outcome.tooltip {
			Some(TooltipChange::Show(tip)) => {
				assert_eq!(tip.node.id, "U001");
				assert_eq!(tip.node.degree, 1);
				assert_eq!(tip.node.suspicion_percent(), "70.0%");
				assert_eq!(tip.left, x);
				assert_eq!(tip.top, y - TOOLTIP_OFFSET_Y);
			}
			other => panic!("expected tooltip, got {other:?}"),
		}
		assert!(state.is_hovered(state.index_of("U001").unwrap()));

		let outcome = handle(&mut state, PointerEvent::Move { x: 0.0, y: 0.0 });
		assert_eq!(outcome.tooltip, Some(TooltipChange::Hide));
		assert_eq!(state.hover, None);
	}

	#[test]
	fn leaving_mid_drag_releases_the_node() {
		let mut state = graph();
		let idx = state.index_of("P330").unwrap();
		let (x, y) = center_of(&state, "P330");
		handle(&mut state, PointerEvent::Down { x, y });
		let outcome = handle(&mut state, PointerEvent::Leave);
		assert_eq!(outcome.tooltip, Some(TooltipChange::Hide));
		assert!(!state.is_pinned(idx));
		assert_eq!(state.drag.node_idx, None);
	}
}
