mod cli;

use cli::Args;
use depgraph_nav::config::{discover_config, load_config_from_path, Settings};
use depgraph_nav::prelude::*;
use owo_colors::OwoColorize;
use std::process;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    init_tracing();

    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            process::exit(cli::exit_code_for(&e).as_i32());
        }
    };

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }

    process::exit(ExitCode::Success.as_i32());
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "depgraph_nav=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(args: Args) -> Result<()> {
    // Resolve settings: CLI > config file > defaults
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    let settings = Settings::resolve(args.overrides(), config)?;
    tracing::debug!(?settings, "settings resolved");

    // Build the graph snapshot once; every request reads it
    let source = EdgeSourceFactory::create(&settings.source);
    let index = LoadGraphUseCase::new(source, StderrProgressReporter::new())
        .execute()
        .await?;

    let progress_reporter = StderrProgressReporter::new();
    progress_reporter.report(&RendererFactory::progress_message(
        settings.format,
        &settings.renderer,
    ));

    let renderer = RendererFactory::create(settings.format, &settings.renderer);
    let navigator: SharedNavigator = Arc::new(NavigateGraphUseCase::new(
        Arc::new(index),
        DotFormatter::new(),
        renderer,
        settings.projection,
    ));

    let server = NavigationServer::bind(settings.port).await?;
    let url = server.url();
    progress_reporter.report(&format!(
        "🌐 Navigator running at {} (Ctrl-C to stop)",
        url.bold().cyan()
    ));

    if settings.open_browser {
        OpenBrowserUseCase::new(SystemBrowserLauncher::new(), progress_reporter)
            .execute(&url)
            .await;
    }

    server.serve(router(navigator)).await
}
