use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use zerospan::{
    analyzer::{self, AnalyzerConfig},
    cli::{Cli, ReportFormat},
    json_output,
    loader::LoaderConfig,
    markdown_output, text_output,
};

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    if !args.delimiter.is_ascii() {
        anyhow::bail!(
            "Invalid value for --delimiter: '{}' (must be a single ASCII character)",
            args.delimiter
        );
    }

    init_tracing(args.debug);

    let config = AnalyzerConfig {
        input: args.input,
        time_column: args.time_column,
        id_column: args.id_column,
        window_size: args.window_size,
        preview_rows: args.preview_rows,
        loader: LoaderConfig {
            encoding: args.encoding,
            delimiter: args.delimiter as u8,
        },
    };

    let report = analyzer::analyze(&config)?;

    let document = match args.format {
        ReportFormat::Markdown => markdown_output::render(&report),
        ReportFormat::Text => text_output::render(&report),
        ReportFormat::Json => {
            json_output::render(&report).context("failed to serialize report")?
        }
    };

    // The document is fully rendered before anything touches the output
    // path; a failed run leaves no partial artifact.
    match &args.output {
        Some(path) => {
            std::fs::write(path, &document)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => print!("{}", document),
    }

    Ok(())
}
