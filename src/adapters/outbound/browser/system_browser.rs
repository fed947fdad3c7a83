use crate::ports::outbound::BrowserLauncher;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// SystemBrowserLauncher adapter delegating to the platform's URL opener
///
/// `open` on macOS, `cmd /C start` on Windows, `xdg-open` elsewhere.
pub struct SystemBrowserLauncher {
    program: String,
    args: Vec<String>,
}

impl SystemBrowserLauncher {
    pub fn new() -> Self {
        let (program, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
            ("open", &[])
        } else if cfg!(target_os = "windows") {
            ("cmd", &["/C", "start", ""])
        } else {
            ("xdg-open", &[])
        };
        Self::with_command(program, args.iter().map(|a| a.to_string()).collect())
    }

    /// Uses a custom opener; the URL is appended as the last argument
    pub fn with_command(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl Default for SystemBrowserLauncher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BrowserLauncher for SystemBrowserLauncher {
    async fn open(&self, url: &str) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .with_context(|| format!("Failed to start browser launcher `{}`", self.program))?;

        if !status.success() {
            anyhow::bail!(
                "Browser launcher `{}` exited with {} while opening {}",
                self.program,
                status,
                url
            );
        }
        Ok(())
    }
}
