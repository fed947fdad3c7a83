use super::{scan_lines, ScanOutcome};
use crate::graph_navigation::domain::{GraphIndex, GraphIndexBuilder};
use crate::ports::outbound::EdgeListSource;
use crate::shared::error::NavigatorError;
use crate::shared::security::{validate_input_file, MAX_FILE_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::BufReader;

#[derive(Debug, Clone)]
enum Input {
    File(PathBuf),
    Stdin,
}

/// FileEdgeListSource adapter reading a saved edge list
///
/// Reads either a file (a regular file of at most 100 MB, symbolic links
/// rejected) or the process's standard input, e.g. `go mod graph | depgraph-nav --input -`.
pub struct FileEdgeListSource {
    input: Input,
}

impl FileEdgeListSource {
    pub fn file(path: PathBuf) -> Self {
        Self {
            input: Input::File(path),
        }
    }

    pub fn stdin() -> Self {
        Self {
            input: Input::Stdin,
        }
    }

    fn finish(&self, builder: GraphIndexBuilder, outcome: ScanOutcome) -> Result<GraphIndex> {
        match outcome {
            ScanOutcome::Complete => Ok(builder.build(&self.describe())?),
            ScanOutcome::Malformed(e) => Err(e.into()),
            ScanOutcome::ReadFailed(e) => Err(NavigatorError::EdgeSourceFailed {
                source_description: self.describe(),
                causes: vec![format!(
                    "reading input after line {}: {}",
                    builder.lines_read(),
                    e
                )],
            }
            .into()),
        }
    }
}

#[async_trait]
impl EdgeListSource for FileEdgeListSource {
    async fn load(&self) -> Result<GraphIndex> {
        let mut builder = GraphIndexBuilder::new();

        let outcome = match &self.input {
            Input::File(path) => {
                validate_input_file(path, MAX_FILE_SIZE)?;
                let file = tokio::fs::File::open(path).await.map_err(|e| {
                    NavigatorError::FileReadError {
                        path: path.clone(),
                        details: e.to_string(),
                    }
                })?;
                scan_lines(BufReader::new(file), &mut builder).await
            }
            Input::Stdin => scan_lines(BufReader::new(tokio::io::stdin()), &mut builder).await,
        };

        self.finish(builder, outcome)
    }

    fn describe(&self) -> String {
        match &self.input {
            Input::File(path) => path.display().to_string(),
            Input::Stdin => "stdin".to_string(),
        }
    }
}
