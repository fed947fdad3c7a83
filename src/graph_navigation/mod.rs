/// Domain layer for dependency-graph navigation
///
/// Pure data structures and algorithms: the graph snapshot, the breadcrumb
/// navigation value, and the subgraph projection. Nothing here performs I/O.
pub mod domain;
pub mod services;
