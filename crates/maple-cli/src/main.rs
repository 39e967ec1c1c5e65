mod render;

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use maple_core::OutputFormat;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "maple-cli")]
#[command(about = "Extract current conditions, forecasts and warnings from a weather feed")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a saved feed snapshot and print the report.
    Report {
        /// Feed file to read. Falls back to `MAPLE_FEED_PATH`, then stdin.
        path: Option<PathBuf>,
        /// Output format; overrides `MAPLE_OUTPUT_FORMAT`.
        #[arg(long, value_parser = parse_format)]
        format: Option<OutputFormat>,
        /// Exit non-zero when current conditions are present but unparseable.
        #[arg(long)]
        strict: bool,
    },
}

fn parse_format(raw: &str) -> Result<OutputFormat, String> {
    raw.parse()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = maple_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Report {
            path,
            format,
            strict,
        } => {
            let path = path.or_else(|| config.feed_path.clone());
            let raw = read_feed(path.as_ref())?;
            let outcome = maple_feed::parse_feed(&raw).context("failed to decode weather feed")?;

            let rendered = match format.unwrap_or(config.output_format) {
                OutputFormat::Json => render::json(&outcome)?,
                OutputFormat::Text => render::text(&outcome, config.location()),
            };
            println!("{rendered}");

            if strict {
                if let Some(err) = outcome.condition_error {
                    anyhow::bail!(err);
                }
            }
        }
    }

    Ok(())
}

fn read_feed(path: Option<&PathBuf>) -> anyhow::Result<Vec<u8>> {
    if let Some(path) = path {
        tracing::debug!(path = %path.display(), "reading feed file");
        return std::fs::read(path)
            .with_context(|| format!("failed to read feed file {}", path.display()));
    }

    tracing::debug!("reading feed from stdin");
    let mut raw = Vec::new();
    std::io::stdin()
        .read_to_end(&mut raw)
        .context("failed to read feed from stdin")?;
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn arguments_parse_without_configuration() {
        let cli = Cli::try_parse_from(["maple-cli", "report", "feed.xml", "--format", "text"])
            .expect("arguments should parse");
        let Commands::Report {
            path,
            format,
            strict,
        } = cli.command;
        assert_eq!(path, Some(PathBuf::from("feed.xml")));
        assert_eq!(format, Some(OutputFormat::Text));
        assert!(!strict);

        let help = Cli::try_parse_from(["maple-cli", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
