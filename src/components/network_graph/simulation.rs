//! Energy schedule for the force layout.
//!
//! The physics itself lives in `force_graph`; this decides how hard to run it.
//! Energy starts at 1, eases toward a target each tick, and the layout settles
//! once it falls below [`ALPHA_MIN`]. Dragging raises the target so the graph
//! keeps moving gently until the drag ends.

pub const ALPHA_MIN: f64 = 0.001;
/// Target energy while a node is being dragged.
pub const DRAG_ALPHA_TARGET: f64 = 0.2;
/// Roughly 300 ticks from full energy to settled.
const SETTLE_TICKS: f64 = 300.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutPhase {
	/// Nodes sit at their seeded positions, no tick yet.
	Unpositioned,
	Simulating,
	Settled,
}

#[derive(Clone, Debug)]
pub struct Simulation {
	alpha: f64,
	alpha_target: f64,
	alpha_decay: f64,
	phase: LayoutPhase,
}

impl Default for Simulation {
	fn default() -> Self {
		Self {
			alpha: 1.0,
			alpha_target: 0.0,
			alpha_decay: 1.0 - ALPHA_MIN.powf(1.0 / SETTLE_TICKS),
			phase: LayoutPhase::Unpositioned,
		}
	}
}

impl Simulation {
	pub fn phase(&self) -> LayoutPhase {
		self.phase
	}

	#[cfg(test)]
	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	#[cfg(test)]
	pub fn alpha_target(&self) -> f64 {
		self.alpha_target
	}

	pub fn is_idle(&self) -> bool {
		self.phase == LayoutPhase::Settled
	}

	/// Advance one tick. Returns the energy to apply, or `None` once settled.
	pub fn step(&mut self) -> Option<f64> {
		if self.phase == LayoutPhase::Settled {
			return None;
		}
		self.alpha += (self.alpha_target - self.alpha) * self.alpha_decay;
		if self.alpha < ALPHA_MIN {
			self.phase = LayoutPhase::Settled;
			return None;
		}
		self.phase = LayoutPhase::Simulating;
		Some(self.alpha)
	}

	/// Keep the layout running toward `target` and wake it if it had settled.
	pub fn reheat(&mut self, target: f64) {
		self.alpha_target = target;
		if self.phase == LayoutPhase::Settled {
			self.phase = LayoutPhase::Simulating;
		}
	}

	/// Raise the energy to at least `alpha` and resume ticking.
	pub fn kick(&mut self, alpha: f64) {
		self.alpha = self.alpha.max(alpha);
		self.phase = LayoutPhase::Simulating;
	}

	/// Let the layout wind down to rest.
	pub fn cool(&mut self) {
		self.alpha_target = 0.0;
	}
}
