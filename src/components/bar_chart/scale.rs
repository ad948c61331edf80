//! Axis math for bar charts.

use super::types::AxisRange;

const TARGET_TICKS: f64 = 5.0;
const EPSILON: f64 = 1e-9;

pub fn ease_out_quart(t: f64) -> f64 {
	1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(4)
}

/// Lower and upper bound of the value axis.
pub fn resolve(range: AxisRange, values: &[f64]) -> (f64, f64) {
	let data_min = values.iter().copied().fold(f64::INFINITY, f64::min);
	let data_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
	let (min, max) = match range {
		AxisRange::Fixed { min, max } => (min, max),
		AxisRange::Suggested { min, max } => (min.min(data_min), max.max(data_max)),
		AxisRange::Auto => {
			let top = if data_max.is_finite() && data_max > 0.0 {
				let step = nice_step(data_max);
				(data_max / step - EPSILON).ceil() * step
			} else {
				1.0
			};
			(0.0f64.min(data_min), top)
		}
	};
	if max - min < EPSILON {
		(min, min + 1.0)
	} else {
		(min, max)
	}
}

/// A 1, 2 or 5 times power-of-ten step giving about five intervals over `span`.
pub fn nice_step(span: f64) -> f64 {
	let raw = span / TARGET_TICKS;
	let magnitude = 10f64.powf(raw.log10().floor());
	let normalized = raw / magnitude;
	let factor = if normalized <= 1.0 + EPSILON {
		1.0
	} else if normalized <= 2.0 + EPSILON {
		2.0
	} else if normalized <= 5.0 + EPSILON {
		5.0
	} else {
		10.0
	};
	factor * magnitude
}

pub fn ticks(min: f64, max: f64) -> Vec<f64> {
	let step = nice_step(max - min);
	let first = (min / step - EPSILON).ceil();
	(0..)
		.map(|i| (first + i as f64) * step)
		.take_while(|v| *v <= max + step * EPSILON)
		.collect()
}

/// Pixel row for `value`, with `min` at `bottom` and `max` at `top`.
pub fn y_for(value: f64, (min, max): (f64, f64), top: f64, bottom: f64) -> f64 {
	if max - min < EPSILON {
		return bottom;
	}
	let ratio = (value.clamp(min, max) - min) / (max - min);
	bottom - ratio * (bottom - top)
}
