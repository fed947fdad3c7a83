pub mod subgraph_projector;

pub use subgraph_projector::{ProjectionOptions, SubgraphProjector};
