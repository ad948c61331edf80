//! Free-text review classification.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, error, warn};

use crate::api::DetectionClient;
use crate::format::percent;
use crate::types::{PredictionResult, ReviewText, Verdict};

const NEUTRAL_BADGE: &str = "background: #f1f5f9; color: #334155; border-color: #e2e8f0;";

/// Validate and send `text`. Blank input raises a blocking alert and sends nothing.
pub fn submit_prediction(
	client: DetectionClient,
	text: &str,
	prediction: RwSignal<Option<PredictionResult>>,
) {
	let Some(review) = validated_review(text, |message| {
		if let Some(win) = web_sys::window() {
			let _ = win.alert_with_message(message);
		}
	}) else {
		return;
	};

	debug!("Classifying review of {} chars", review.as_str().chars().count());
	spawn_local(async move {
		match client.predict(review).await {
			Ok(result) => {
				if result.label_disagrees() {
					warn!(
						"Service label {:?} disagrees with probability {}",
						result.service_label, result.probability
					);
				}
				prediction.set(Some(result));
			}
			Err(err) => error!("Prediction failed: {}", err),
		}
	});
}

/// The review to send, or `None` after `alert` was shown the reason.
fn validated_review(text: &str, alert: impl FnOnce(&str)) -> Option<ReviewText> {
	match ReviewText::parse(text) {
		Ok(review) => Some(review),
		Err(err) => {
			alert(&err.to_string());
			None
		}
	}
}

fn badge_style(verdict: Option<Verdict>) -> String {
	match verdict {
		Some(verdict) => {
			let palette = verdict.palette();
			format!(
				"background: {}; color: {}; border-color: {};",
				palette.background, palette.text, palette.border
			)
		}
		None => NEUTRAL_BADGE.to_string(),
	}
}

fn probability_line(prediction: Option<&PredictionResult>) -> String {
	match prediction {
		Some(p) => format!("Probability (Fake): {}", percent(p.probability)),
		None => "Probability (Fake): --".to_string(),
	}
}

#[component]
pub fn PredictionForm() -> impl IntoView {
	let client = expect_context::<DetectionClient>();
	let review = RwSignal::new(String::new());
	let prediction = RwSignal::new(None::<PredictionResult>);
	let verdict = move || prediction.get().map(|p| p.verdict());

	view! {
		<section class="card prediction-card">
			<h2>"Check a Review"</h2>
			<textarea
				id="review-input"
				rows="5"
				placeholder="Paste review text..."
				prop:value=move || review.get()
				on:input=move |ev| review.set(event_target_value(&ev))
			/>
			<button
				id="predict-button"
				class="button"
				on:click=move |_| {
					submit_prediction(client.clone(), &review.get_untracked(), prediction)
				}
			>
				"Predict"
			</button>
			<div class="prediction-result">
				<span id="prediction-badge" class="badge" style=move || badge_style(verdict())>
					{move || verdict().map(Verdict::badge_text).unwrap_or("Prediction: --")}
				</span>
				<p id="prediction-prob">{move || probability_line(prediction.get().as_ref())}</p>
				<p id="prediction-explanation">
					{move || prediction.get().map(|p| p.explanation).unwrap_or_default()}
				</p>
			</div>
		</section>
	}
}
