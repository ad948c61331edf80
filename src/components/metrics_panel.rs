//! Live detector metrics, the on-page report and the report download.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};

use crate::api::DetectionClient;
use crate::download::download_text;
use crate::report::{REPORT_FILE_NAME, Report};

const PLACEHOLDER: &str = "--";

/// Fetch `/metrics` and publish the formatted report. Failures leave `report` as it was.
pub fn load_metrics(client: DetectionClient, report: RwSignal<Option<Report>>) {
	spawn_local(async move {
		match client.fetch_metrics().await {
			Ok(metrics) => report.set(Some(Report::from(&metrics))),
			Err(err) => error!("Metrics load failed: {}", err),
		}
	});
}

/// Fetch fresh metrics and offer them as a text file.
pub fn download_report(client: DetectionClient) {
	spawn_local(async move {
		let metrics = match client.fetch_metrics().await {
			Ok(metrics) => metrics,
			Err(err) => {
				error!("Report download aborted: {}", err);
				return;
			}
		};
		let text = Report::from(&metrics).to_plain_text();
		match download_text(REPORT_FILE_NAME, &text) {
			Ok(()) => info!("Offered {}", REPORT_FILE_NAME),
			Err(err) => error!("{}", err),
		}
	});
}

fn metric_text(
	report: RwSignal<Option<Report>>,
	pick: fn(&Report) -> String,
) -> impl Fn() -> String + Send + Sync + 'static {
	move || {
		report
			.get()
			.as_ref()
			.map(pick)
			.unwrap_or_else(|| PLACEHOLDER.to_string())
	}
}

#[component]
pub fn MetricsPanel() -> impl IntoView {
	let client = expect_context::<DetectionClient>();
	let report = RwSignal::new(None::<Report>);
	load_metrics(client.clone(), report);

	view! {
		<section class="card metrics-card">
			<h2>"Detection Metrics"</h2>
			<div class="metric-grid">
				<div class="metric">
					<span class="metric-label">"Precision"</span>
					<span id="precision-value" class="metric-value">{metric_text(report, |r| r.precision.clone())}</span>
				</div>
				<div class="metric">
					<span class="metric-label">"Recall"</span>
					<span id="recall-value" class="metric-value">{metric_text(report, |r| r.recall.clone())}</span>
				</div>
				<div class="metric">
					<span class="metric-label">"False Alarm Rate"</span>
					<span id="false-alarm-value" class="metric-value">{metric_text(report, |r| r.false_alarm.clone())}</span>
				</div>
			</div>
		</section>

		<section class="card report-card">
			<h2>"Report"</h2>
			<div id="report-content" class="report-content">
				{move || match report.get() {
					Some(r) => r
						.summary_lines()
						.into_iter()
						.map(|line| view! { <p>{line}</p> })
						.collect_view()
						.into_any(),
					None => view! { <p class="muted">"Waiting for metrics..."</p> }.into_any(),
				}}
			</div>
			<button
				id="download-report"
				class="button"
				on:click=move |_| download_report(client.clone())
			>
				"Download Report"
			</button>
		</section>
	}
}
