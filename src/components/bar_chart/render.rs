use web_sys::CanvasRenderingContext2d;

use super::layout::{BarRect, LEGEND_HEIGHT, PlotArea, bar_rects};
use super::scale::{self, ease_out_quart};
use super::types::BarChartSpec;

const GRID: &str = "#e5e7eb";
const AXIS_TEXT: &str = "#6b7280";
const FONT: &str = "11px sans-serif";
const LEGEND_BOX: f64 = 12.0;
const LEGEND_GAP: f64 = 6.0;

/// Paint the chart with bars grown to `progress` (0 to 1, before easing).
pub fn render(
	spec: &BarChartSpec,
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
	progress: f64,
) {
	ctx.clear_rect(0.0, 0.0, width, height);
	let area = PlotArea::new(spec, width, height);
	let range = scale::resolve(spec.range, &spec.values);

	ctx.set_font(FONT);
	if spec.show_legend {
		draw_legend(spec, ctx, width);
	}

	ctx.set_line_width(1.0);
	ctx.set_stroke_style_str(GRID);
	ctx.set_fill_style_str(AXIS_TEXT);
	ctx.set_text_align("right");
	ctx.set_text_baseline("middle");
	for tick in scale::ticks(range.0, range.1) {
		let y = scale::y_for(tick, range, area.top, area.bottom).round() + 0.5;
		ctx.begin_path();
		ctx.move_to(area.left, y);
		ctx.line_to(area.right, y);
		ctx.stroke();
		let _ = ctx.fill_text(&spec.ticks.format(tick), area.left - 6.0, y);
	}

	ctx.set_text_align("center");
	ctx.set_text_baseline("top");
	let bars = bar_rects(spec, &area, ease_out_quart(progress));
	for (i, (bar, color)) in bars.iter().zip(spec.bar_colors()).enumerate() {
		ctx.set_fill_style_str(color);
		fill_bar(ctx, bar, spec.corner_radius);

		if let Some(label) = spec.labels.get(i) {
			ctx.set_fill_style_str(AXIS_TEXT);
			let _ = ctx.fill_text(label, bar.center_x(), area.bottom + 8.0);
		}
	}
}

/// Swatch in the first bar color followed by the series name, centered on top.
fn draw_legend(spec: &BarChartSpec, ctx: &CanvasRenderingContext2d, width: f64) {
	let text_width = ctx
		.measure_text(&spec.series_label)
		.map(|m| m.width())
		.unwrap_or(0.0);
	let total = LEGEND_BOX + LEGEND_GAP + text_width;
	let x = (width - total) / 2.0;
	let y = LEGEND_HEIGHT / 2.0;

	ctx.set_fill_style_str(spec.bar_colors().first().copied().unwrap_or(AXIS_TEXT));
	ctx.fill_rect(x, y - LEGEND_BOX / 2.0, LEGEND_BOX, LEGEND_BOX);
	ctx.set_fill_style_str(AXIS_TEXT);
	ctx.set_text_align("left");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(&spec.series_label, x + LEGEND_BOX + LEGEND_GAP, y);
}

/// Bar with rounded top corners.
fn fill_bar(ctx: &CanvasRenderingContext2d, bar: &BarRect, radius: f64) {
	let BarRect { x, y, width: w, height: h } = *bar;
	let r = radius.min(w / 2.0).min(h);
	ctx.begin_path();
	ctx.move_to(x, y + h);
	ctx.line_to(x, y + r);
	let _ = ctx.arc_to(x, y, x + r, y, r);
	ctx.line_to(x + w - r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + r, r);
	ctx.line_to(x + w, y + h);
	ctx.close_path();
	ctx.fill();
}
