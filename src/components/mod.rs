pub mod bar_chart;
pub mod metrics_panel;
pub mod model_comparison;
pub mod network_graph;
pub mod prediction_form;
pub mod service_status;
pub mod static_charts;
