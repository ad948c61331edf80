use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::interaction::{self, Outcome, PointerEvent, Tooltip, TooltipChange};
use super::render;
use super::state::NetworkGraphState;
use super::types::{NetworkData, NodeSummary};

const FALLBACK_WIDTH: f64 = 800.0;

type SharedClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Force-directed view of users, products and the reviews between them.
///
/// The layout loop runs on animation frames for as long as the component is
/// mounted. Clicking a node writes its summary into `selected`.
#[component]
pub fn NetworkGraph(
	#[prop(into)] data: Signal<NetworkData>,
	selected: RwSignal<Option<NodeSummary>>,
	#[prop(default = 480.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let tooltip = RwSignal::new(None::<Tooltip>);
	let state: Rc<RefCell<Option<NetworkGraphState>>> = Rc::new(RefCell::new(None));
	let animate: SharedClosure = Rc::new(RefCell::new(None));
	let resize_cb: SharedClosure = Rc::new(RefCell::new(None));

	let mounted = Arc::new(AtomicBool::new(true));
	let mounted_cleanup = mounted.clone();
	on_cleanup(move || mounted_cleanup.store(false, Ordering::Relaxed));

	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let width = container_width(&canvas).unwrap_or(FALLBACK_WIDTH);
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let Some(ctx) = context_2d(&canvas) else {
			error!("Network graph canvas has no 2d context");
			return;
		};
		let mut next = NetworkGraphState::new(&data.get(), width, height);
		if let Some(id) = selected.with_untracked(|s| s.as_ref().map(|n| n.id.clone())) {
			next.restore_selection(&id);
		}
		*state_init.borrow_mut() = Some(next);

		// A data change only swaps the state; the frame loop is already running.
		if animate_init.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(w) = container_width(&canvas_resize) else {
				return;
			};
			canvas_resize.set_width(w as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(w, height);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner, resize_stop, mounted_anim) = (
			state_init.clone(),
			animate_init.clone(),
			resize_cb_init.clone(),
			mounted.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !mounted_anim.load(Ordering::Relaxed) {
				if let (Some(win), Some(cb)) = (web_sys::window(), resize_stop.borrow().as_ref()) {
					let _ = win
						.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
				}
				info!("Network graph unmounted, layout stopped");
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick();
				render::render(s, &ctx);
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let dispatch = move |event: PointerEvent| {
		let outcome = match *state.borrow_mut() {
			Some(ref mut s) => interaction::handle(s, event),
			None => return,
		};
		apply(outcome, tooltip, selected);
	};

	let on_down = {
		let dispatch = dispatch.clone();
		move |ev: MouseEvent| {
			if let Some((x, y)) = local_point(canvas_ref, &ev) {
				dispatch(PointerEvent::Down { x, y });
			}
		}
	};
	let on_move = {
		let dispatch = dispatch.clone();
		move |ev: MouseEvent| {
			if let Some((x, y)) = local_point(canvas_ref, &ev) {
				dispatch(PointerEvent::Move { x, y });
			}
		}
	};
	let on_up = {
		let dispatch = dispatch.clone();
		move |ev: MouseEvent| {
			if let Some((x, y)) = local_point(canvas_ref, &ev) {
				dispatch(PointerEvent::Up { x, y });
			}
		}
	};
	let on_leave = move |_: MouseEvent| dispatch(PointerEvent::Leave);

	view! {
		<div
			id="network-graph"
			class="network-graph"
			style=format!("position: relative; height: {}px;", height)
		>
			<canvas
				node_ref=canvas_ref
				class="network-graph-canvas"
				on:mousedown=on_down
				on:mousemove=on_move
				on:mouseup=on_up
				on:mouseleave=on_leave
				style="display: block; cursor: grab;"
			/>
			<div class="graph-tooltip" style=move || tooltip_style(tooltip.get().as_ref())>
				{move || {
					tooltip
						.get()
						.map(|tip| {
							view! {
								<strong>{tip.node.id.clone()}</strong>
								<br />
								{format!("Type: {}", tip.node.kind)}
								<br />
								{format!("Degree: {}", tip.node.degree)}
								<br />
								{format!("Suspicion: {}", tip.node.suspicion_percent())}
							}
						})
				}}
			</div>
		</div>
	}
}

fn apply(
	outcome: Outcome,
	tooltip: RwSignal<Option<Tooltip>>,
	selected: RwSignal<Option<NodeSummary>>,
) {
	match outcome.tooltip {
		Some(TooltipChange::Show(tip)) => tooltip.set(Some(tip)),
		Some(TooltipChange::Hide) => tooltip.set(None),
		None => {}
	}
	if let Some(node) = outcome.selected {
		info!("Selected {} ({})", node.id, node.info_line());
		selected.set(Some(node));
	}
}

fn tooltip_style(tip: Option<&Tooltip>) -> String {
	match tip {
		Some(tip) => format!(
			"position: absolute; pointer-events: none; opacity: 1; left: {}px; top: {}px;",
			tip.left, tip.top
		),
		None => "position: absolute; pointer-events: none; opacity: 0;".to_string(),
	}
}

fn container_width(canvas: &HtmlCanvasElement) -> Option<f64> {
	canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
}

fn local_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}
