//! Human-readable detection report built from a metrics snapshot.

use crate::format::percent;
use crate::types::MetricsSnapshot;

/// File name offered for the downloaded report.
pub const REPORT_FILE_NAME: &str = "fake_review_report.txt";

/// Illustrative reviewer ids; `/metrics` does not provide any.
pub const FLAGGED_REVIEWERS: [&str; 3] = ["user_194", "user_552", "user_882"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
	pub precision: String,
	pub recall: String,
	pub false_alarm: String,
	pub flagged: Vec<String>,
}

impl From<&MetricsSnapshot> for Report {
	fn from(metrics: &MetricsSnapshot) -> Self {
		Self {
			precision: percent(metrics.precision),
			recall: percent(metrics.recall),
			false_alarm: percent(metrics.false_alarm),
			flagged: FLAGGED_REVIEWERS.iter().map(|id| id.to_string()).collect(),
		}
	}
}

impl Report {
	/// Lines shown in the on-page report panel.
	pub fn summary_lines(&self) -> Vec<String> {
		vec![
			format!("- Precision: {}", self.precision),
			format!("- Recall: {}", self.recall),
			format!("- False Alarm Rate: {}", self.false_alarm),
			format!("- Top suspicious reviewers: {}", self.flagged.join(" · ")),
		]
	}

	/// Body of the downloadable text file.
	pub fn to_plain_text(&self) -> String {
		let reviewers: String = self
			.flagged
			.iter()
			.map(|id| format!("- {}\n", id))
			.collect();
		format!(
			"\nFake Review Detection Report\n\
			 ----------------------------\n\
			 Precision: {}\n\
			 Recall: {}\n\
			 False Alarm Rate: {}\n\
			 \n\
			 Suspicious Reviewers:\n\
			 {}",
			self.precision, self.recall, self.false_alarm, reviewers
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn snapshot() -> MetricsSnapshot {
		MetricsSnapshot {
			precision: 0.914,
			recall: 0.882,
			false_alarm: 0.071,
		}
	}

	#[test]
	fn summary_lines_match_panel_layout() {
		let report = Report::from(&snapshot());
		assert_eq!(
			report.summary_lines(),
			vec![
				"- Precision: 91.4%",
				"- Recall: 88.2%",
				"- False Alarm Rate: 7.1%",
				"- Top suspicious reviewers: user_194 · user_552 · user_882",
			]
		);
	}

	#[test]
	fn plain_text_layout() {
		let text = Report::from(&snapshot()).to_plain_text();
		let expected = "
Fake Review Detection Report
----------------------------
Precision: 91.4%
Recall: 88.2%
False Alarm Rate: 7.1%

Suspicious Reviewers:
- user_194
- user_552
- user_882
";
		assert_eq!(text, expected);
	}

	#[test]
	fn report_tracks_the_snapshot_it_was_built_from() {
		let first = Report::from(&snapshot());
		let later = Report::from(&MetricsSnapshot {
			precision: 0.5,
			recall: 0.25,
			false_alarm: 0.125,
		});
		assert_ne!(first, later);
		let text = later.to_plain_text();
		assert!(text.contains("Precision: 50.0%\n"));
		assert!(text.contains("Recall: 25.0%\n"));
		assert!(text.contains("False Alarm Rate: 12.5%\n"));
	}
}
