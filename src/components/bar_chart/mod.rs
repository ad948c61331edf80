mod component;
mod layout;
mod render;
pub mod scale;
mod types;

pub use component::BarChart;
pub use types::{AxisRange, BarChartSpec, TickFormat};
