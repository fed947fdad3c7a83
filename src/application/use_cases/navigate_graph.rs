use crate::application::dto::{NavigationRequest, NavigationResponse};
use crate::graph_navigation::domain::{Breadcrumb, GraphIndex, SubgraphDocument};
use crate::graph_navigation::services::{ProjectionOptions, SubgraphProjector};
use crate::ports::inbound::NavigationPort;
use crate::ports::outbound::{DocumentFormatter, RenderGateway};
use async_trait::async_trait;
use std::sync::Arc;

/// NavigateGraphUseCase - serves one drill-down view per request
///
/// Resolves the breadcrumb, projects the subgraph, serializes it and hands it
/// to the render gateway. The graph snapshot is shared read-only; no other
/// state is touched, so any number of requests may run concurrently.
///
/// # Type Parameters
/// * `F` - DocumentFormatter implementation
/// * `R` - RenderGateway implementation
pub struct NavigateGraphUseCase<F, R> {
    index: Arc<GraphIndex>,
    formatter: F,
    renderer: R,
    options: ProjectionOptions,
}

impl<F, R> NavigateGraphUseCase<F, R>
where
    F: DocumentFormatter,
    R: RenderGateway,
{
    /// Creates a new NavigateGraphUseCase with injected dependencies
    pub fn new(
        index: Arc<GraphIndex>,
        formatter: F,
        renderer: R,
        options: ProjectionOptions,
    ) -> Self {
        Self {
            index,
            formatter,
            renderer,
            options,
        }
    }

    pub fn resolve(&self, request: NavigationRequest) -> Breadcrumb {
        Breadcrumb::resolve(request.requested_nodes, self.index.default_root())
    }

    pub fn project(&self, breadcrumb: &Breadcrumb) -> SubgraphDocument {
        SubgraphProjector::project(&self.index, breadcrumb, self.options)
    }
}

#[async_trait]
impl<F, R> NavigationPort for NavigateGraphUseCase<F, R>
where
    F: DocumentFormatter,
    R: RenderGateway,
{
    async fn navigate(&self, request: NavigationRequest) -> NavigationResponse {
        let breadcrumb = self.resolve(request);
        let focus = breadcrumb.focus();
        if self.index.contains(focus) {
            tracing::debug!(
                depth = breadcrumb.len(),
                dependencies = self.index.fan_out(focus),
                dependers = self.index.fan_in(focus),
                "projecting {}",
                focus
            );
        } else {
            tracing::debug!(depth = breadcrumb.len(), "{} is not in the graph", focus);
        }
        let document = self.project(&breadcrumb);

        let rendered = match self.formatter.format(&document) {
            Ok(text) => self.renderer.render(&text).await,
            Err(e) => Err(e),
        };

        match rendered {
            Ok(body) => {
                tracing::debug!(breadcrumb = %breadcrumb, bytes = body.len(), "rendered view");
                NavigationResponse::Rendered {
                    breadcrumb,
                    content_type: self.renderer.content_type(),
                    body,
                }
            }
            Err(e) => {
                tracing::warn!(breadcrumb = %breadcrumb, error = %format!("{:#}", e), "render failed");
                NavigationResponse::RenderFailed {
                    breadcrumb,
                    message: format!("{:#}", e),
                }
            }
        }
    }
}
