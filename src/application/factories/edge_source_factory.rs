use crate::adapters::outbound::edge_sources::{CommandEdgeListSource, FileEdgeListSource};
use crate::application::dto::EdgeSourceSpec;
use crate::ports::outbound::EdgeListSource;

/// Factory for creating edge-list sources
pub struct EdgeSourceFactory;

impl EdgeSourceFactory {
    /// Creates the source described by `spec`
    ///
    /// An empty command falls back to the default `go mod graph`.
    pub fn create(spec: &EdgeSourceSpec) -> Box<dyn EdgeListSource> {
        match spec {
            EdgeSourceSpec::Command(command) => match command.split_first() {
                Some((program, args)) => {
                    Box::new(CommandEdgeListSource::new(program.clone(), args.to_vec()))
                }
                None => Self::create(&EdgeSourceSpec::default_command()),
            },
            EdgeSourceSpec::File(path) => Box::new(FileEdgeListSource::file(path.clone())),
            EdgeSourceSpec::Stdin => Box::new(FileEdgeListSource::stdin()),
        }
    }
}
