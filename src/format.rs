//! Number formatting for display fields.

/// A ratio in [0, 1] as a percentage with one decimal, e.g. `0.914` -> `"91.4%"`.
pub fn percent(ratio: f64) -> String {
	format!("{:.1}%", ratio * 100.0)
}

pub fn fixed(value: f64, decimals: usize) -> String {
	format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn percent_has_one_decimal() {
		assert_eq!(percent(0.914), "91.4%");
		assert_eq!(percent(0.882), "88.2%");
		assert_eq!(percent(0.071), "7.1%");
		assert_eq!(percent(0.73), "73.0%");
		assert_eq!(percent(0.0), "0.0%");
		assert_eq!(percent(1.0), "100.0%");
	}

	#[test]
	fn fixed_pads_decimals() {
		assert_eq!(fixed(0.5, 2), "0.50");
		assert_eq!(fixed(1.0, 2), "1.00");
		assert_eq!(fixed(430.0, 0), "430");
	}
}
