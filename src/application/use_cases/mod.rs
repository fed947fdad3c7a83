/// Use cases module containing application business logic orchestration
mod load_graph;
mod navigate_graph;
mod open_browser;

pub use load_graph::LoadGraphUseCase;
pub use navigate_graph::NavigateGraphUseCase;
pub use open_browser::OpenBrowserUseCase;
