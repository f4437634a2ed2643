use std::io::{self, Write};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use mkversion::config::Config;
use mkversion::{metadata, render, revision};

fn main() -> anyhow::Result<()> {
    // stdout carries only the rendered artifact; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    let source = revision::for_strategy(config.revision_strategy);
    let meta = metadata::collect(&config, source.as_ref());

    let artifact = render::render(&meta);
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(artifact.as_bytes())
        .context("failed to write version fragment to stdout")?;
    stdout.flush().context("failed to flush stdout")?;

    Ok(())
}
