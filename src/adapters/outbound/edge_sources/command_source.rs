use super::{scan_lines, ScanOutcome};
use crate::graph_navigation::domain::{GraphIndex, GraphIndexBuilder};
use crate::ports::outbound::EdgeListSource;
use crate::shared::error::NavigatorError;
use crate::shared::Result;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::BufReader;
use tokio::process::Command;

/// CommandEdgeListSource adapter reading the edge list from a command's stdout
///
/// The command's stderr is inherited so the operator sees its diagnostics.
/// A read failure and an abnormal exit are both collected and reported
/// together as `NavigatorError::EdgeSourceFailed`.
pub struct CommandEdgeListSource {
    program: String,
    args: Vec<String>,
}

impl CommandEdgeListSource {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    fn failure(&self, causes: Vec<String>) -> NavigatorError {
        NavigatorError::EdgeSourceFailed {
            source_description: self.describe(),
            causes,
        }
    }
}

#[async_trait]
impl EdgeListSource for CommandEdgeListSource {
    async fn load(&self) -> Result<GraphIndex> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.failure(vec![format!("failed to start `{}`: {}", self.program, e)]))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| self.failure(vec!["stdout was not captured".to_string()]))?;

        let mut builder = GraphIndexBuilder::new();
        let mut causes = Vec::new();

        match scan_lines(BufReader::new(stdout), &mut builder).await {
            ScanOutcome::Complete => {}
            ScanOutcome::Malformed(e) => {
                // The child is killed when dropped.
                return Err(e.into());
            }
            ScanOutcome::ReadFailed(e) => {
                causes.push(format!("reading output after line {}: {}", builder.lines_read(), e));
            }
        }

        match child.wait().await {
            Ok(status) if status.success() => {}
            Ok(status) => causes.push(format!("`{}` exited with {}", self.program, status)),
            Err(e) => causes.push(format!("waiting for `{}`: {}", self.program, e)),
        }

        if !causes.is_empty() {
            return Err(self.failure(causes).into());
        }

        Ok(builder.build(&self.describe())?)
    }

    fn describe(&self) -> String {
        let mut command = vec![self.program.as_str()];
        command.extend(self.args.iter().map(String::as_str));
        format!("`{}`", command.join(" "))
    }
}
