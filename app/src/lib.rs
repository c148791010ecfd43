mod cli;
mod commands;
mod config;
mod infrastructure;
mod render;
mod repl;

use anyhow::Context as _;
use charta_config::{ChartaPaths, ConfigSection, TomlConfigBackend};
use charta_source::SourceConfig;
use clap::Parser;
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::config::{ExportConfig, ViewConfig};

/// Everything a command needs that comes from the environment.
pub(crate) struct Context {
  pub paths: ChartaPaths,
  pub backend: TomlConfigBackend,
  pub source: SourceConfig,
  pub view: ViewConfig,
  pub export: ExportConfig,
}

impl Context {
  fn load(paths: ChartaPaths) -> anyhow::Result<Self> {
    let backend = TomlConfigBackend::from_paths(&paths);
    debug!(file = %backend.file().display(), "loading configuration");

    let source = SourceConfig::load_from(&backend).context("reading [source] config")?;
    let view = ViewConfig::load_from(&backend).context("reading [view] config")?;
    let export = ExportConfig::load_from(&backend).context("reading [export] config")?;

    Ok(Self { paths, backend, source, view, export })
  }
}

fn configure_logging() {
  use tracing_subscriber::prelude::*;

  let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

  // stdout carries exports and views, logs stay on stderr.
  let fmt_layer = tracing_subscriber::fmt::layer()
    .with_writer(std::io::stderr)
    .with_line_number(true)
    .with_target(false)
    .with_file(true);

  tracing_subscriber::registry().with(env_filter).with(fmt_layer).init();
}

pub async fn run() -> anyhow::Result<()> {
  let cli = Cli::parse();
  configure_logging();

  let paths = match cli.base_dir {
    Some(base) => ChartaPaths::under(base),
    None => ChartaPaths::detect().context("locating config directories")?,
  };
  let ctx = Context::load(paths)?;

  match cli.command {
    Command::List(args) => commands::list(&ctx, &cli.sources, args).await,
    Command::Show { name } => commands::show(&ctx, &cli.sources, &name).await,
    Command::Playlist(args) => commands::playlist(&ctx, &cli.sources, args).await,
    Command::Repl(args) => commands::repl(&ctx, &cli.sources, args).await,
    Command::Aggregate(args) => commands::aggregate(&ctx, args).await,
    Command::Config { path } => commands::config(&ctx, path),
  }
}
