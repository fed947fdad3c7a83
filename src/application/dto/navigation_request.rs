use crate::graph_navigation::domain::Breadcrumb;

/// NavigationRequest - the breadcrumb parameters of one inbound request
///
/// `requested_nodes` keeps the caller's order; an empty list asks for the
/// graph's default root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationRequest {
    pub requested_nodes: Vec<String>,
}

impl NavigationRequest {
    pub fn new(requested_nodes: Vec<String>) -> Self {
        Self { requested_nodes }
    }

    /// Builds a request from a raw URL query string (without the leading `?`)
    pub fn from_query(raw_query: Option<&str>) -> Self {
        Self::new(Breadcrumb::query_nodes(raw_query))
    }
}
