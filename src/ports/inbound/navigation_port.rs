use crate::application::dto::{NavigationRequest, NavigationResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// NavigationPort - Inbound port for serving one drill-down view
///
/// Implementations must be stateless between calls: everything a view depends
/// on travels in the request, so concurrent calls need no coordination.
#[async_trait]
pub trait NavigationPort: Send + Sync {
    /// Projects and renders the view for the requested breadcrumb
    ///
    /// Never fails: a render failure is returned as
    /// `NavigationResponse::RenderFailed` so the caller can report it in place
    /// of the diagram.
    async fn navigate(&self, request: NavigationRequest) -> NavigationResponse;
}

/// Navigator handle shared by every request handler
pub type SharedNavigator = Arc<dyn NavigationPort>;
