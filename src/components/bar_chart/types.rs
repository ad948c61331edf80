/// How the value axis picks its bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisRange {
	/// Exactly these bounds; bars beyond them are clipped.
	Fixed { min: f64, max: f64 },
	/// At least these bounds, widened to fit the data.
	Suggested { min: f64, max: f64 },
	/// From zero up to a rounded value above the data.
	Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
	Decimals(usize),
	Integer,
}

impl TickFormat {
	pub fn format(self, value: f64) -> String {
		match self {
			Self::Decimals(places) => crate::format::fixed(value, places),
			Self::Integer => format!("{}", value.round() as i64),
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarChartSpec {
	pub labels: Vec<String>,
	pub values: Vec<f64>,
	/// Name of the plotted series, shown in tooltips and the legend.
	pub series_label: String,
	pub show_legend: bool,
	/// Applied per bar, repeating from the start when there are more bars.
	pub palette: Vec<&'static str>,
	pub range: AxisRange,
	pub ticks: TickFormat,
	pub corner_radius: f64,
	pub animation_ms: f64,
}

impl Default for BarChartSpec {
	fn default() -> Self {
		Self {
			labels: Vec::new(),
			values: Vec::new(),
			series_label: String::new(),
			show_legend: false,
			palette: vec!["#3b82f6"],
			range: AxisRange::Auto,
			ticks: TickFormat::Decimals(2),
			corner_radius: 0.0,
			animation_ms: 1200.0,
		}
	}
}

impl BarChartSpec {
	/// Color of every bar, cycling through the palette.
	pub fn bar_colors(&self) -> Vec<&'static str> {
		if self.palette.is_empty() {
			return Vec::new();
		}
		(0..self.values.len())
			.map(|i| self.palette[i % self.palette.len()])
			.collect()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}
