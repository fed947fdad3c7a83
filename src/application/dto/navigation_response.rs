use crate::graph_navigation::domain::Breadcrumb;

/// NavigationResponse - outcome of one drill-down request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationResponse {
    /// The diagram was rendered
    Rendered {
        breadcrumb: Breadcrumb,
        content_type: &'static str,
        body: Vec<u8>,
    },
    /// Rendering failed; `message` describes why
    RenderFailed {
        breadcrumb: Breadcrumb,
        message: String,
    },
}

impl NavigationResponse {
    pub fn breadcrumb(&self) -> &Breadcrumb {
        match self {
            NavigationResponse::Rendered { breadcrumb, .. }
            | NavigationResponse::RenderFailed { breadcrumb, .. } => breadcrumb,
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, NavigationResponse::Rendered { .. })
    }
}
