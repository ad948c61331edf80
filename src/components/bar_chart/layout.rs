//! Geometry shared by painting and pointer hit testing.

use super::scale;
use super::types::BarChartSpec;

const PADDING_LEFT: f64 = 44.0;
const PADDING_RIGHT: f64 = 12.0;
const PADDING_TOP: f64 = 12.0;
const PADDING_BOTTOM: f64 = 28.0;
/// Room above the plot for the series legend.
pub const LEGEND_HEIGHT: f64 = 24.0;
/// Share of each slot taken by its bar.
const BAR_FILL: f64 = 0.6;
/// Gap between the top of a bar and the bottom of its tooltip.
const TOOLTIP_GAP: f64 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
	pub left: f64,
	pub right: f64,
	pub top: f64,
	pub bottom: f64,
}

impl PlotArea {
	pub fn new(spec: &BarChartSpec, width: f64, height: f64) -> Self {
		let legend = if spec.show_legend { LEGEND_HEIGHT } else { 0.0 };
		Self {
			left: PADDING_LEFT,
			right: width - PADDING_RIGHT,
			top: PADDING_TOP + legend,
			bottom: height - PADDING_BOTTOM,
		}
	}
}

/// A bar in canvas pixels, `y` being its upper edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl BarRect {
	pub fn contains(&self, px: f64, py: f64) -> bool {
		px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
	}

	pub fn center_x(&self) -> f64 {
		self.x + self.width / 2.0
	}
}

/// Bars grown to `eased`, where 1 is their full height.
pub fn bar_rects(spec: &BarChartSpec, area: &PlotArea, eased: f64) -> Vec<BarRect> {
	if spec.is_empty() {
		return Vec::new();
	}
	let range = scale::resolve(spec.range, &spec.values);
	let slot = (area.right - area.left) / spec.values.len() as f64;
	let bar_width = slot * BAR_FILL;
	let baseline = scale::y_for(range.0.max(0.0), range, area.top, area.bottom);

	spec.values
		.iter()
		.enumerate()
		.map(|(i, value)| {
			let full = scale::y_for(*value, range, area.top, area.bottom);
			let y = baseline + (full - baseline) * eased;
			BarRect {
				x: area.left + slot * i as f64 + (slot - bar_width) / 2.0,
				y: y.min(baseline),
				width: bar_width,
				height: (baseline - y).abs(),
			}
		})
		.collect()
}

/// Label and value of the bar under the pointer, anchored above that bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarTooltip {
	pub title: String,
	pub body: String,
	pub left: f64,
	pub top: f64,
}

pub fn hover(spec: &BarChartSpec, width: f64, height: f64, px: f64, py: f64) -> Option<BarTooltip> {
	let area = PlotArea::new(spec, width, height);
	let rects = bar_rects(spec, &area, 1.0);
	let idx = rects.iter().position(|bar| bar.contains(px, py))?;
	let bar = rects[idx];
	let body = if spec.series_label.is_empty() {
		spec.values[idx].to_string()
	} else {
		format!("{}: {}", spec.series_label, spec.values[idx])
	};
	Some(BarTooltip {
		title: spec.labels.get(idx).cloned().unwrap_or_default(),
		body,
		left: bar.center_x(),
		top: bar.y - TOOLTIP_GAP,
	})
}
