/// Edge-list source adapters: package-manager commands, files, and stdin
mod command_source;
mod file_source;

pub use command_source::CommandEdgeListSource;
pub use file_source::FileEdgeListSource;

use crate::graph_navigation::domain::GraphIndexBuilder;
use crate::shared::error::NavigatorError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// How a line scan ended
#[derive(Debug)]
enum ScanOutcome {
    /// Reached end of input
    Complete,
    /// A line had no separator; construction must stop
    Malformed(NavigatorError),
    /// The underlying reader failed part-way through
    ReadFailed(std::io::Error),
}

/// Feeds every line of `reader` into `builder`, stopping at the first problem.
async fn scan_lines<R>(reader: R, builder: &mut GraphIndexBuilder) -> ScanOutcome
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if let Err(e) = builder.add_line(&line) {
                    return ScanOutcome::Malformed(e);
                }
            }
            Ok(None) => return ScanOutcome::Complete,
            Err(e) => return ScanOutcome::ReadFailed(e),
        }
    }
}
