use leptos::prelude::*;

use crate::components::metrics_panel::MetricsPanel;
use crate::components::model_comparison::ModelComparisonChart;
use crate::components::network_graph::{NetworkGraph, NodeSummary};
use crate::components::prediction_form::PredictionForm;
use crate::components::service_status::ServiceStatus;
use crate::components::static_charts::StaticCharts;
use crate::data::review_network;

/// Metrics, prediction, charts and the reviewer network on one page.
#[component]
pub fn Dashboard() -> impl IntoView {
	let network = Signal::derive(review_network);
	let selected = RwSignal::new(None::<NodeSummary>);

	view! {
		<header class="topbar">
			<h1>"Fake Review Detection"</h1>
			<ServiceStatus />
		</header>

		<main class="dashboard">
			<div class="dashboard-grid">
				<MetricsPanel />
				<PredictionForm />
				<StaticCharts />
				<ModelComparisonChart />
			</div>

			<section class="card network-card">
				<h2>"Reviewer Network"</h2>
				<div class="network-layout">
					<NetworkGraph data=network selected=selected />
					<aside class="selected-node">
						<h3>"Selected Node"</h3>
						<p id="selected-node-id">
							{move || selected.get().map(|n| n.id).unwrap_or_else(|| "None".to_string())}
						</p>
						<p id="selected-node-info">
							{move || {
								selected
									.get()
									.map(|n| n.info_line())
									.unwrap_or_else(|| "Click a node to inspect it.".to_string())
							}}
						</p>
					</aside>
				</div>
			</section>
		</main>
	}
}
