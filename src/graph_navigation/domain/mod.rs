pub mod breadcrumb;
pub mod graph_index;
pub mod subgraph_document;

pub use breadcrumb::Breadcrumb;
pub use graph_index::{GraphIndex, GraphIndexBuilder};
pub use subgraph_document::{
    EdgeDecl, EdgeDirection, EdgeStyle, Legend, NodeDecl, NodeStyle, SubgraphDocument,
};
