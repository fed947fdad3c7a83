use crate::application::dto::OutputFormat;
use crate::ports::outbound::RenderGateway;
use crate::shared::error::NavigatorError;
use crate::shared::Result;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// GraphvizRenderer adapter piping a DOT document through the layout engine
///
/// Runs `<program> [args...] -T<format>` once per call, writes the document to
/// its stdin and returns its stdout. Any failure (spawn error, broken pipe,
/// non-zero exit) becomes `NavigatorError::RenderFailed` for that call only.
/// There is no timeout: a hung engine stalls only the request waiting on it.
pub struct GraphvizRenderer {
    program: String,
    args: Vec<String>,
    format: OutputFormat,
}

impl GraphvizRenderer {
    pub fn new(program: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            format,
        }
    }

    /// Extra arguments placed before the `-T` flag
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    fn failure(&self, details: String) -> NavigatorError {
        NavigatorError::RenderFailed {
            renderer: self.program.clone(),
            details,
        }
    }
}

#[async_trait]
impl RenderGateway for GraphvizRenderer {
    async fn render(&self, document: &str) -> Result<Vec<u8>> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(format!("-T{}", self.format.graphviz_format()))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.failure(format!("failed to start: {}", e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| self.failure("stdin was not captured".to_string()))?;

        // Feed stdin concurrently so a large diagram cannot fill stdout and deadlock.
        let input = document.as_bytes().to_vec();
        let writer = tokio::spawn(async move {
            stdin.write_all(&input).await?;
            stdin.shutdown().await
        });

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| self.failure(format!("waiting for output: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self
                .failure(format!("exited with {}: {}", output.status, stderr.trim()))
                .into());
        }

        match writer.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(self.failure(format!("writing document: {}", e)).into()),
            Err(e) => return Err(self.failure(format!("writer task failed: {}", e)).into()),
        }

        Ok(output.stdout)
    }

    fn content_type(&self) -> &'static str {
        self.format.content_type()
    }
}
