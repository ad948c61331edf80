//! Node colors and sizes.

use super::types::NodeKind;

pub const PRODUCT_FILL: &str = "#2563eb";
pub const PRODUCT_BASE_RADIUS: f64 = 12.0;
pub const USER_BASE_RADIUS: f64 = 10.0;
pub const RADIUS_PER_DEGREE: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
	pub const fn from_hex(hex: u32) -> Self {
		Self((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
	}

	fn lerp(self, other: Self, t: f64) -> Self {
		let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
		Self(
			channel(self.0, other.0),
			channel(self.1, other.1),
			channel(self.2, other.2),
		)
	}

	pub fn to_css(self) -> String {
		format!("rgb({}, {}, {})", self.0, self.1, self.2)
	}
}

/// Green, yellow, orange, red.
pub const SUSPICION_STOPS: [(f64, Rgb); 4] = [
	(0.0, Rgb::from_hex(0x10b981)),
	(0.3, Rgb::from_hex(0xfacc15)),
	(0.6, Rgb::from_hex(0xf97316)),
	(1.0, Rgb::from_hex(0xdc2626)),
];

/// Linear gradient over [`SUSPICION_STOPS`]; scores outside [0, 1] are clamped.
pub fn suspicion_color(score: f64) -> Rgb {
	let s = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };
	for pair in SUSPICION_STOPS.windows(2) {
		let ((lo, from), (hi, to)) = (pair[0], pair[1]);
		if s <= hi {
			return from.lerp(to, (s - lo) / (hi - lo));
		}
	}
	SUSPICION_STOPS[SUSPICION_STOPS.len() - 1].1
}

pub fn node_fill(kind: NodeKind, suspicion: f64) -> String {
	match kind {
		NodeKind::Product => PRODUCT_FILL.to_string(),
		NodeKind::User => suspicion_color(suspicion).to_css(),
	}
}

pub fn node_radius(kind: NodeKind, degree: u32) -> f64 {
	let base = match kind {
		NodeKind::Product => PRODUCT_BASE_RADIUS,
		NodeKind::User => USER_BASE_RADIUS,
	};
	base + RADIUS_PER_DEGREE * degree as f64
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stops_are_exact() {
		assert_eq!(suspicion_color(0.0), Rgb(0x10, 0xb9, 0x81));
		assert_eq!(suspicion_color(0.3), Rgb(0xfa, 0xcc, 0x15));
		assert_eq!(suspicion_color(0.6), Rgb(0xf9, 0x73, 0x16));
		assert_eq!(suspicion_color(1.0), Rgb(0xdc, 0x26, 0x26));
	}

	#[test]
	fn interpolation_is_monotonic_between_stops() {
		for pair in SUSPICION_STOPS.windows(2) {
			let ((lo, from), (hi, to)) = (pair[0], pair[1]);
			let mut prev = from;
			for step in 1..=50 {
				let s = lo + (hi - lo) * step as f64 / 50.0;
				let c = suspicion_color(s);
				for (p, n, a, b) in [
					(prev.0, c.0, from.0, to.0),
					(prev.1, c.1, from.1, to.1),
					(prev.2, c.2, from.2, to.2),
				] {
					if b >= a {
						assert!(n >= p && n <= b, "channel rose out of order at {s}");
					} else {
						assert!(n <= p && n >= b, "channel fell out of order at {s}");
					}
				}
				prev = c;
			}
		}
	}

	#[test]
	fn midpoint_is_interpolated_not_stepped() {
		let mid = suspicion_color(0.15);
		assert_ne!(mid, suspicion_color(0.0));
		assert_ne!(mid, suspicion_color(0.3));
		assert_eq!(mid, Rgb(0x85, 0xc3, 0x4b));
	}

	#[test]
	fn out_of_range_scores_clamp() {
		assert_eq!(suspicion_color(-0.5), suspicion_color(0.0));
		assert_eq!(suspicion_color(1.7), suspicion_color(1.0));
		assert_eq!(suspicion_color(f64::NAN), suspicion_color(0.0));
	}

	#[test]
	fn products_use_flat_fill() {
		assert_eq!(node_fill(NodeKind::Product, 0.9), PRODUCT_FILL);
		assert_eq!(node_fill(NodeKind::User, 1.0), "rgb(220, 38, 38)");
	}

	#[test]
	fn radius_grows_with_degree() {
		for kind in [NodeKind::Product, NodeKind::User] {
			for degree in 0..20 {
				assert!(node_radius(kind, degree + 1) > node_radius(kind, degree));
			}
		}
		assert!(node_radius(NodeKind::Product, 0) > node_radius(NodeKind::User, 0));
		assert_eq!(node_radius(NodeKind::User, 2), 16.0);
	}
}
