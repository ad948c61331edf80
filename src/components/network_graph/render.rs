use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::NetworkGraphState;

const BACKGROUND: &str = "#ffffff";
const EDGE_STROKE: &str = "#cbd5e1";
const EDGE_WIDTH: f64 = 1.5;
const NODE_STROKE: &str = "#1e293b";
const NODE_STROKE_WIDTH: f64 = 1.2;
const HOVER_STROKE: &str = "#000";
const HOVER_STROKE_WIDTH: f64 = 3.0;
const GLOW_BLUR: f64 = 12.0;
const LABEL_COLOR: &str = "#374151";
const LABEL_FONT: &str = "11px sans-serif";
const LABEL_GAP: f64 = 3.0;

pub fn render(state: &NetworkGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	draw_labels(state, ctx);
}

fn draw_edges(state: &NetworkGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(EDGE_STROKE);
	ctx.set_line_width(EDGE_WIDTH);
	ctx.begin_path();
	state.graph.visit_edges(|n1, n2, _| {
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
	});
	ctx.stroke();
}

fn draw_nodes(state: &NetworkGraphState, ctx: &CanvasRenderingContext2d) {
	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let info = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);

		if state.is_glowing(idx) {
			// Blurred halo first, then the crisp circle over it.
			ctx.save();
			ctx.set_shadow_color(&info.fill);
			ctx.set_shadow_blur(GLOW_BLUR);
			fill_circle(ctx, x, y, info.radius, &info.fill);
			ctx.restore();
		}

		fill_circle(ctx, x, y, info.radius, &info.fill);

		let (stroke, width) = if state.is_hovered(idx) {
			(HOVER_STROKE, HOVER_STROKE_WIDTH)
		} else {
			(NODE_STROKE, NODE_STROKE_WIDTH)
		};
		ctx.set_stroke_style_str(stroke);
		ctx.set_line_width(width);
		ctx.stroke();
	});
}

fn fill_circle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, fill: &str) {
	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(fill);
	ctx.fill();
}

fn draw_labels(state: &NetworkGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(LABEL_COLOR);
	ctx.set_font(LABEL_FONT);
	ctx.set_text_baseline("middle");
	state.graph.visit_nodes(|node| {
		let info = &node.data.user_data;
		let _ = ctx.fill_text(
			&info.id,
			node.x() as f64 + info.radius + LABEL_GAP,
			node.y() as f64,
		);
	});
}
