//! Accuracy of the candidate classifiers, as reported by the service.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, error};

use super::bar_chart::{AxisRange, BarChart, BarChartSpec, TickFormat};
use crate::api::DetectionClient;
use crate::types::ModelComparison;

pub const MODEL_PALETTE: [&str; 4] = ["#3b82f6", "#10b981", "#f59e0b", "#ef4444"];

pub fn comparison_chart(comparison: &ModelComparison) -> BarChartSpec {
	BarChartSpec {
		labels: comparison.labels(),
		values: comparison.accuracies(),
		series_label: "Accuracy".to_string(),
		show_legend: true,
		palette: MODEL_PALETTE.to_vec(),
		range: AxisRange::Fixed { min: 0.0, max: 1.0 },
		ticks: TickFormat::Decimals(1),
		..Default::default()
	}
}

pub fn load_model_comparison(client: DetectionClient, comparison: RwSignal<ModelComparison>) {
	spawn_local(async move {
		match client.fetch_model_comparison().await {
			Ok(models) => {
				debug!("Comparing {} models", models.0.len());
				comparison.set(models);
			}
			Err(err) => error!("Model comparison failed: {}", err),
		}
	});
}

#[component]
pub fn ModelComparisonChart() -> impl IntoView {
	let client = expect_context::<DetectionClient>();
	let comparison = RwSignal::new(ModelComparison::default());
	load_model_comparison(client, comparison);
	let spec = Signal::derive(move || comparison_chart(&comparison.get()));

	view! {
		<section class="card chart-card">
			<h2>"Model Comparison"</h2>
			<BarChart id="model-comparison-chart" spec=spec />
			<Show when=move || comparison.with(ModelComparison::is_empty)>
				<p class="muted">"Waiting for model accuracies..."</p>
			</Show>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::ModelAccuracy;

	fn models(names: &[(&str, f64)]) -> ModelComparison {
		ModelComparison(
			names
				.iter()
				.map(|&(model, accuracy)| ModelAccuracy {
					model: model.to_string(),
					accuracy,
				})
				.collect(),
		)
	}

	#[test]
	fn chart_follows_response_order_on_unit_axis() {
		let spec = comparison_chart(&models(&[
			("Gradient Boosting", 0.94),
			("Logistic Regression", 0.77),
			("Random Forest", 0.70),
			("SVM", 0.50),
		]));
		assert_eq!(spec.labels[0], "Gradient Boosting");
		assert_eq!(spec.values, vec![0.94, 0.77, 0.70, 0.50]);
		assert_eq!(spec.range, AxisRange::Fixed { min: 0.0, max: 1.0 });
		assert_eq!(spec.bar_colors(), MODEL_PALETTE.to_vec());
		assert_eq!(spec.series_label, "Accuracy");
		assert!(spec.show_legend);
	}

	#[test]
	fn fifth_model_reuses_first_color() {
		let spec = comparison_chart(&models(&[
			("a", 0.1),
			("b", 0.2),
			("c", 0.3),
			("d", 0.4),
			("e", 0.5),
		]));
		assert_eq!(spec.bar_colors()[4], MODEL_PALETTE[0]);
	}
}
