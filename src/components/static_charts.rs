//! Illustrative charts drawn from the embedded sample numbers.

use leptos::prelude::*;

use super::bar_chart::{AxisRange, BarChart, BarChartSpec, TickFormat};
use crate::data::{CLASS_SUMMARY, ClassSummary, SAMPLE_METRICS, SampleMetrics};

const CORNER_RADIUS: f64 = 12.0;

pub fn metrics_chart(metrics: &SampleMetrics) -> BarChartSpec {
	BarChartSpec {
		labels: ["Precision", "Recall", "F1 Score", "False Alarm"]
			.map(String::from)
			.to_vec(),
		values: vec![
			metrics.precision,
			metrics.recall,
			metrics.f1,
			metrics.false_alarm,
		],
		series_label: "Score".to_string(),
		palette: vec!["#2563eb", "#10b981", "#f59e0b", "#ef4444"],
		range: AxisRange::Suggested { min: 0.0, max: 1.0 },
		ticks: TickFormat::Decimals(2),
		corner_radius: CORNER_RADIUS,
		..Default::default()
	}
}

pub fn class_summary_chart(counts: &ClassSummary) -> BarChartSpec {
	BarChartSpec {
		labels: ["TP", "FP", "TN", "FN"].map(String::from).to_vec(),
		values: [
			counts.true_positive,
			counts.false_positive,
			counts.true_negative,
			counts.false_negative,
		]
		.map(f64::from)
		.to_vec(),
		series_label: "Count".to_string(),
		palette: vec!["#22c55e", "#ef4444", "#3b82f6", "#f59e0b"],
		range: AxisRange::Auto,
		ticks: TickFormat::Integer,
		corner_radius: CORNER_RADIUS,
		..Default::default()
	}
}

#[component]
pub fn StaticCharts() -> impl IntoView {
	view! {
		<section class="card chart-card">
			<h2>"Performance Metrics"</h2>
			<BarChart id="metrics-bar-chart" spec=Signal::derive(|| metrics_chart(&SAMPLE_METRICS)) />
		</section>
		<section class="card chart-card">
			<h2>"Class Summary"</h2>
			<BarChart
				id="class-bar-chart"
				spec=Signal::derive(|| class_summary_chart(&CLASS_SUMMARY))
			/>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::bar_chart::scale;

	#[test]
	fn metrics_chart_layout() {
		let spec = metrics_chart(&SAMPLE_METRICS);
		assert_eq!(spec.labels, vec!["Precision", "Recall", "F1 Score", "False Alarm"]);
		assert_eq!(spec.values, vec![0.91, 0.88, 0.89, 0.07]);
		assert_eq!(scale::resolve(spec.range, &spec.values), (0.0, 1.0));
		assert_eq!(spec.ticks.format(0.4), "0.40");
		assert_eq!(spec.animation_ms, 1200.0);
		assert_eq!(spec.series_label, "Score");
		assert!(!spec.show_legend);
	}

	#[test]
	fn class_summary_uses_raw_counts() {
		let spec = class_summary_chart(&CLASS_SUMMARY);
		assert_eq!(spec.labels, vec!["TP", "FP", "TN", "FN"]);
		assert_eq!(spec.values, vec![430.0, 32.0, 489.0, 49.0]);
		assert_eq!(spec.range, AxisRange::Auto);
		assert_eq!(spec.series_label, "Count");
		assert_eq!(spec.bar_colors(), vec!["#22c55e", "#ef4444", "#3b82f6", "#f59e0b"]);
	}
}
