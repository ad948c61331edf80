mod centrality;
mod component;
mod interaction;
mod palette;
mod render;
mod simulation;
mod state;
mod types;

pub use component::NetworkGraph;
pub use types::{NetworkData, NodeKind, NodeSummary, ReviewEdge, ReviewNode};
