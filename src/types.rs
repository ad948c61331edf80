//! Wire and domain types shared by the dashboard components.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ReviewInputError;

/// Aggregate detector quality as reported by `/metrics`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
	pub precision: f64,
	pub recall: f64,
	pub false_alarm: f64,
}

/// Body of `POST /predict`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PredictRequest {
	pub review: String,
}

/// Raw `/predict` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PredictResponse {
	pub prob: f64,
	pub explanation: String,
	#[serde(default)]
	pub label: Option<String>,
}

/// Outcome of one prediction round trip.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionResult {
	pub probability: f64,
	pub explanation: String,
	/// Label the service computed, when it sends one.
	pub service_label: Option<String>,
}

impl From<PredictResponse> for PredictionResult {
	fn from(resp: PredictResponse) -> Self {
		Self {
			probability: resp.prob,
			explanation: resp.explanation,
			service_label: resp.label,
		}
	}
}

impl PredictionResult {
	pub fn verdict(&self) -> Verdict {
		Verdict::from_probability(self.probability)
	}

	/// True when the service sent a label that contradicts the probability threshold.
	pub fn label_disagrees(&self) -> bool {
		self.service_label
			.as_deref()
			.is_some_and(|label| !label.eq_ignore_ascii_case(self.verdict().service_label()))
	}
}

/// Binary classification shown on the prediction badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
	Fake,
	Genuine,
}

/// Colors applied to the prediction badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgePalette {
	pub background: &'static str,
	pub text: &'static str,
	pub border: &'static str,
}

const ALERT_PALETTE: BadgePalette = BadgePalette {
	background: "#fee2e2",
	text: "#b91c1c",
	border: "#fecaca",
};

const CONFIRM_PALETTE: BadgePalette = BadgePalette {
	background: "#dcfce7",
	text: "#166534",
	border: "#bbf7d0",
};

impl Verdict {
	/// Strictly above one half is fake.
	pub fn from_probability(prob: f64) -> Self {
		if prob > 0.5 { Self::Fake } else { Self::Genuine }
	}

	pub fn badge_text(self) -> &'static str {
		match self {
			Self::Fake => "Prediction: Fake",
			Self::Genuine => "Prediction: Genuine",
		}
	}

	pub fn palette(self) -> BadgePalette {
		match self {
			Self::Fake => ALERT_PALETTE,
			Self::Genuine => CONFIRM_PALETTE,
		}
	}

	fn service_label(self) -> &'static str {
		match self {
			Self::Fake => "FAKE",
			Self::Genuine => "GENUINE",
		}
	}
}

/// Review text that is known to be non-blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewText(String);

impl ReviewText {
	pub fn parse(raw: &str) -> Result<Self, ReviewInputError> {
		let trimmed = raw.trim();
		if trimmed.is_empty() {
			return Err(ReviewInputError::Empty);
		}
		Ok(Self(trimmed.to_string()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_request(self) -> PredictRequest {
		PredictRequest { review: self.0 }
	}
}

/// Accuracy of one model in the comparison chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelAccuracy {
	pub model: String,
	pub accuracy: f64,
}

/// `/model_comparison` entries in the order the service sent them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelComparison(pub Vec<ModelAccuracy>);

impl ModelComparison {
	/// Convert the response object, rejecting any non-numeric accuracy.
	pub fn from_json_object(object: Map<String, Value>) -> Result<Self, String> {
		object
			.into_iter()
			.map(|(model, value)| match value.as_f64() {
				Some(accuracy) => Ok(ModelAccuracy { model, accuracy }),
				None => Err(format!("accuracy for '{}' is not a number: {}", model, value)),
			})
			.collect::<Result<Vec<_>, _>>()
			.map(Self)
	}

	pub fn labels(&self) -> Vec<String> {
		self.0.iter().map(|m| m.model.clone()).collect()
	}

	pub fn accuracies(&self) -> Vec<f64> {
		self.0.iter().map(|m| m.accuracy).collect()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// `GET /` health payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ServiceStatus {
	pub status: String,
}
