/// Browser launcher adapters
mod system_browser;

pub use system_browser::SystemBrowserLauncher;
