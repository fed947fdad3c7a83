use crate::ports::outbound::{BrowserLauncher, ProgressReporter};

/// OpenBrowserUseCase - points the user's browser at the navigator once
///
/// A launcher failure is only a warning: the server keeps serving and the
/// user can open the URL by hand.
///
/// # Type Parameters
/// * `B` - BrowserLauncher implementation
/// * `PR` - ProgressReporter implementation
pub struct OpenBrowserUseCase<B, PR> {
    launcher: B,
    progress_reporter: PR,
}

impl<B, PR> OpenBrowserUseCase<B, PR>
where
    B: BrowserLauncher,
    PR: ProgressReporter,
{
    pub fn new(launcher: B, progress_reporter: PR) -> Self {
        Self {
            launcher,
            progress_reporter,
        }
    }

    /// Opens `url`; returns whether the launcher succeeded
    pub async fn execute(&self, url: &str) -> bool {
        match self.launcher.open(url).await {
            Ok(()) => {
                tracing::info!(url, "browser opened");
                true
            }
            Err(e) => {
                tracing::warn!(url, error = %format!("{:#}", e), "browser launch failed");
                self.progress_reporter.report_error(&format!(
                    "⚠️  Could not open the browser ({:#}); open {} manually",
                    e, url
                ));
                false
            }
        }
    }
}
