/// HTTP adapter serving drill-down views to the browser
mod router;
mod server;

pub use router::{router, HEALTH_PATH, VIEW_PATH};
pub use server::NavigationServer;
