//! Error types for the dashboard.

use thiserror::Error;

/// Failures talking to the detection service.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
	/// The request never produced a response
	#[error("request to {endpoint} failed: {message}")]
	Transport {
		endpoint: &'static str,
		message: String,
	},

	/// The service answered with a non-success status
	#[error("{endpoint} returned status {status}")]
	Status { endpoint: &'static str, status: u16 },

	/// The body was not the JSON shape we expect
	#[error("unexpected response from {endpoint}: {message}")]
	Decode {
		endpoint: &'static str,
		message: String,
	},
}

impl ApiError {
	pub fn transport(endpoint: &'static str, err: impl std::fmt::Display) -> Self {
		Self::Transport {
			endpoint,
			message: err.to_string(),
		}
	}

	pub fn decode(endpoint: &'static str, err: impl std::fmt::Display) -> Self {
		Self::Decode {
			endpoint,
			message: err.to_string(),
		}
	}
}

/// Rejected review input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReviewInputError {
	#[error("Please enter a review first.")]
	Empty,
}

/// Browser API failure while building a file download.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("download failed at {stage}")]
pub struct DownloadError {
	pub stage: &'static str,
}

/// Inconsistent static graph data.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphDataError {
	#[error("node id '{0}' appears more than once")]
	DuplicateNode(String),

	#[error("edge {source_id} -> {target_id} references unknown node '{missing}'")]
	DanglingEdge {
		source_id: String,
		target_id: String,
		missing: String,
	},
}
