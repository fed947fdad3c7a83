/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (processes, file system, console, browser).
pub mod browser_launcher;
pub mod document_formatter;
pub mod edge_list_source;
pub mod progress_reporter;
pub mod render_gateway;

pub use browser_launcher::BrowserLauncher;
pub use document_formatter::DocumentFormatter;
pub use edge_list_source::EdgeListSource;
pub use progress_reporter::ProgressReporter;
pub use render_gateway::RenderGateway;
