//! Client for the fake review detection service.
//!
//! Every call is a single request with no retry and no cancellation. Callers
//! decide what to do with an [`ApiError`]; the dashboard logs and drops them.

use gloo_net::http::{Request, Response};
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::config::DashboardConfig;
use crate::error::ApiError;
use crate::types::{
	MetricsSnapshot, ModelComparison, PredictResponse, PredictionResult, ReviewText,
	ServiceStatus,
};

const HEALTH: &str = "/";
const METRICS: &str = "/metrics";
const PREDICT: &str = "/predict";
const MODEL_COMPARISON: &str = "/model_comparison";

#[derive(Clone, Debug)]
pub struct DetectionClient {
	config: DashboardConfig,
}

impl DetectionClient {
	pub fn new(config: DashboardConfig) -> Self {
		Self { config }
	}

	pub async fn health(&self) -> Result<ServiceStatus, ApiError> {
		let response = self.get(HEALTH).await?;
		decode(HEALTH, response).await
	}

	pub async fn fetch_metrics(&self) -> Result<MetricsSnapshot, ApiError> {
		let response = self.get(METRICS).await?;
		let metrics: MetricsSnapshot = decode(METRICS, response).await?;
		debug!("Fetched metrics: {:?}", metrics);
		Ok(metrics)
	}

	pub async fn predict(&self, review: ReviewText) -> Result<PredictionResult, ApiError> {
		let url = self.config.endpoint(PREDICT);
		let response = Request::post(&url)
			.json(&review.into_request())
			.map_err(|e| ApiError::transport(PREDICT, e))?
			.send()
			.await
			.map_err(|e| ApiError::transport(PREDICT, e))?;
		let response = ensure_ok(PREDICT, response)?;
		let body: PredictResponse = decode(PREDICT, response).await?;
		Ok(body.into())
	}

	pub async fn fetch_model_comparison(&self) -> Result<ModelComparison, ApiError> {
		let response = self.get(MODEL_COMPARISON).await?;
		let object: Map<String, Value> = decode(MODEL_COMPARISON, response).await?;
		ModelComparison::from_json_object(object)
			.map_err(|message| ApiError::decode(MODEL_COMPARISON, message))
	}

	async fn get(&self, endpoint: &'static str) -> Result<Response, ApiError> {
		let url = self.config.endpoint(endpoint);
		let response = Request::get(&url)
			.send()
			.await
			.map_err(|e| ApiError::transport(endpoint, e))?;
		ensure_ok(endpoint, response)
	}
}

fn ensure_ok(endpoint: &'static str, response: Response) -> Result<Response, ApiError> {
	if !response.ok() {
		return Err(ApiError::Status {
			endpoint,
			status: response.status(),
		});
	}
	Ok(response)
}

async fn decode<T: DeserializeOwned>(
	endpoint: &'static str,
	response: Response,
) -> Result<T, ApiError> {
	response
		.json::<T>()
		.await
		.map_err(|e| ApiError::decode(endpoint, e))
}
