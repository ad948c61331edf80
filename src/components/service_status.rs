use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};

use crate::api::DetectionClient;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Health {
	Checking,
	Up(String),
	Unreachable,
}

impl Health {
	fn label(&self) -> String {
		match self {
			Self::Checking => "Checking API...".to_string(),
			Self::Up(status) => status.clone(),
			Self::Unreachable => "API unreachable".to_string(),
		}
	}

	fn class(&self) -> &'static str {
		match self {
			Self::Checking => "status-pill checking",
			Self::Up(_) => "status-pill up",
			Self::Unreachable => "status-pill down",
		}
	}
}

/// Header pill showing whether the detection service answers `GET /`.
#[component]
pub fn ServiceStatus() -> impl IntoView {
	let client = expect_context::<DetectionClient>();
	let health = RwSignal::new(Health::Checking);

	spawn_local(async move {
		match client.health().await {
			Ok(status) => {
				info!("Detection service: {}", status.status);
				health.set(Health::Up(status.status));
			}
			Err(err) => {
				error!("Health check failed: {}", err);
				health.set(Health::Unreachable);
			}
		}
	});

	view! { <span class=move || health.with(Health::class)>{move || health.with(Health::label)}</span> }
}
