//! depgraph-nav - interactive dependency-graph navigator
//!
//! This library turns a `before after` edge list (such as the output of
//! `go mod graph`) into drill-down diagrams served over loopback HTTP,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_navigation`): Graph index, breadcrumb and subgraph projection
//! - **Application Layer** (`application`): Use cases, DTOs and adapter factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP server, edge-list sources, renderers, console
//! - **Config** (`config`): YAML config file and setting precedence
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use depgraph_nav::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<()> {
//! let source = EdgeSourceFactory::create(&EdgeSourceSpec::default_command());
//! let index = LoadGraphUseCase::new(source, StderrProgressReporter::new())
//!     .execute()
//!     .await?;
//!
//! let navigator: SharedNavigator = Arc::new(NavigateGraphUseCase::new(
//!     Arc::new(index),
//!     DotFormatter::new(),
//!     RendererFactory::create(OutputFormat::Svg, "dot"),
//!     ProjectionOptions::default(),
//! ));
//!
//! let server = NavigationServer::bind(0).await?;
//! println!("{}", server.url());
//! server.serve(router(navigator)).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod graph_navigation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::http::{router, NavigationServer};
    pub use crate::adapters::outbound::browser::SystemBrowserLauncher;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::edge_sources::{
        CommandEdgeListSource, FileEdgeListSource,
    };
    pub use crate::adapters::outbound::formatters::DotFormatter;
    pub use crate::adapters::outbound::rendering::{DotSourceRenderer, GraphvizRenderer};
    pub use crate::application::dto::{
        EdgeSourceSpec, NavigationRequest, NavigationResponse, OutputFormat,
    };
    pub use crate::application::factories::{EdgeSourceFactory, RendererFactory};
    pub use crate::application::use_cases::{
        LoadGraphUseCase, NavigateGraphUseCase, OpenBrowserUseCase,
    };
    pub use crate::graph_navigation::domain::{Breadcrumb, GraphIndex, SubgraphDocument};
    pub use crate::graph_navigation::services::{ProjectionOptions, SubgraphProjector};
    pub use crate::ports::inbound::{NavigationPort, SharedNavigator};
    pub use crate::ports::outbound::{
        BrowserLauncher, DocumentFormatter, EdgeListSource, ProgressReporter, RenderGateway,
    };
    pub use crate::shared::error::{ExitCode, NavigatorError};
    pub use crate::shared::Result;
}
