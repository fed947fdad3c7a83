use crate::shared::Result;
use async_trait::async_trait;

/// BrowserLauncher port for opening the navigator in the user's browser
#[async_trait]
pub trait BrowserLauncher: Send + Sync {
    /// Opens `url` in the default browser
    ///
    /// # Errors
    /// Returns an error if no launcher is available or it reports failure
    async fn open(&self, url: &str) -> Result<()>;
}
