use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::layout::{self, BarTooltip};
use super::render;
use super::types::BarChartSpec;

const FALLBACK_WIDTH: f64 = 480.0;

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Canvas bar chart that grows its bars in whenever `spec` changes.
///
/// Follows its container's width across window resizes and shows the label
/// and value of the bar under the pointer.
#[component]
pub fn BarChart(
	/// Element id of the canvas.
	id: &'static str,
	#[prop(into)] spec: Signal<BarChartSpec>,
	#[prop(default = 260.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let tooltip = RwSignal::new(None::<BarTooltip>);
	// Bumped on every redraw so a superseded animation stops on its next frame.
	let generation = Rc::new(Cell::new(0u32));

	let mounted = Arc::new(AtomicBool::new(true));
	let mounted_cleanup = mounted.clone();

	let generation_resize = generation.clone();
	let resize = window_event_listener(leptos::ev::resize, move |_| {
		let Some((canvas, ctx)) = prepare(canvas_ref, height, id) else {
			return;
		};
		generation_resize.set(generation_resize.get().wrapping_add(1));
		tooltip.set(None);
		spec.with_untracked(|spec| render::render(spec, &ctx, canvas.width() as f64, height, 1.0));
	});
	on_cleanup(move || {
		mounted_cleanup.store(false, Ordering::Relaxed);
		resize.remove();
	});

	Effect::new(move |_| {
		let spec = spec.get();
		let Some((canvas, ctx)) = prepare(canvas_ref, height, id) else {
			return;
		};
		let width = canvas.width() as f64;
		tooltip.set(None);

		generation.set(generation.get().wrapping_add(1));
		let current = generation.get();
		let started = Cell::new(None::<f64>);
		let frame: FrameClosure = Rc::new(RefCell::new(None));
		let (frame_inner, generation_inner, mounted_inner) =
			(frame.clone(), generation.clone(), mounted.clone());

		*frame.borrow_mut() = Some(Closure::new(move |now: f64| {
			if generation_inner.get() != current || !mounted_inner.load(Ordering::Relaxed) {
				// Drops this closure once it returns.
				let _ = frame_inner.borrow_mut().take();
				return;
			}
			let start = started.get().unwrap_or(now);
			started.set(Some(start));
			let progress = if spec.animation_ms > 0.0 {
				(now - start) / spec.animation_ms
			} else {
				1.0
			};
			render::render(&spec, &ctx, width, height, progress);

			if progress >= 1.0 {
				let _ = frame_inner.borrow_mut().take();
				return;
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), frame_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));

		if let (Some(win), Some(cb)) = (web_sys::window(), frame.borrow().as_ref()) {
			let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let on_move = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		let hovered =
			spec.with_untracked(|spec| layout::hover(spec, canvas.width() as f64, height, x, y));
		if tooltip.with_untracked(|current| *current != hovered) {
			tooltip.set(hovered);
		}
	};
	let on_leave = move |_: MouseEvent| tooltip.set(None);

	view! {
		<div class="bar-chart" style="position: relative;">
			<canvas
				id=id
				node_ref=canvas_ref
				on:mousemove=on_move
				on:mouseleave=on_leave
				style="display: block; width: 100%;"
			/>
			{move || {
				tooltip
					.get()
					.map(|tip| {
						view! {
							<div
								class="chart-tooltip"
								style=format!(
									"position: absolute; pointer-events: none; left: {}px; top: {}px; transform: translate(-50%, -100%);",
									tip.left,
									tip.top,
								)
							>
								<strong>{tip.title}</strong>
								<br />
								{tip.body}
							</div>
						}
					})
			}}
		</div>
	}
}

/// Size the canvas to its container and hand back its 2d context.
fn prepare(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	height: f64,
	id: &str,
) -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let width = canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(FALLBACK_WIDTH);
	canvas.set_width(width as u32);
	canvas.set_height(height as u32);

	let ctx = canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
	if ctx.is_none() {
		error!("Chart canvas {} has no 2d context", id);
	}
	Some((canvas, ctx?))
}
