//! Runtime configuration for the dashboard.

use log::debug;

/// Detection service used when the page does not name one.
pub const DEFAULT_API_BASE: &str = "https://fake-review-detection-2.onrender.com";

/// Root element attribute that overrides the service base URL.
pub const API_URL_ATTRIBUTE: &str = "data-api-url";

/// Settings resolved once at startup and shared through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
	pub api_base: String,
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self::with_api_base(DEFAULT_API_BASE)
	}
}

impl DashboardConfig {
	pub fn with_api_base(base: &str) -> Self {
		Self {
			api_base: base.trim().trim_end_matches('/').to_string(),
		}
	}

	/// Read the override from `<html data-api-url="...">`, falling back to the default.
	pub fn from_document() -> Self {
		let configured = web_sys::window()
			.and_then(|win| win.document())
			.and_then(|doc| doc.document_element())
			.and_then(|root| root.get_attribute(API_URL_ATTRIBUTE))
			.filter(|url| !url.trim().is_empty());

		match configured {
			Some(url) => {
				debug!("Using API base from {}: {}", API_URL_ATTRIBUTE, url);
				Self::with_api_base(&url)
			}
			None => Self::default(),
		}
	}

	pub fn endpoint(&self, path: &str) -> String {
		format!("{}/{}", self.api_base, path.trim_start_matches('/'))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_points_at_hosted_service() {
		let config = DashboardConfig::default();
		assert_eq!(
			config.endpoint("/metrics"),
			"https://fake-review-detection-2.onrender.com/metrics"
		);
	}

	#[test]
	fn trailing_slashes_do_not_double_up() {
		let config = DashboardConfig::with_api_base(" http://127.0.0.1:5001/ ");
		assert_eq!(config.api_base, "http://127.0.0.1:5001");
		assert_eq!(config.endpoint("predict"), "http://127.0.0.1:5001/predict");
		assert_eq!(config.endpoint("/"), "http://127.0.0.1:5001/");
	}
}
