/// Mock implementations for testing
mod mock_browser_launcher;
mod mock_edge_list_source;
mod mock_progress_reporter;
mod mock_renderer;

pub use mock_browser_launcher::MockBrowserLauncher;
pub use mock_edge_list_source::MockEdgeListSource;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_renderer::MockRenderer;
