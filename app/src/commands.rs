use anyhow::{Context as _, anyhow};
use charta_core::CatalogApp;
use charta_core::aggregate::{AggregateOptions, RegionChart, aggregate_overlaps, assess_quality};
use charta_core::domain::PopularityBucket;
use charta_core::export::{self, ExportError};
use charta_core::services::{CatalogLoader, LoadOutcome};
use charta_core::share::SharedImport;
use charta_core::view::{artist_details, regions_label};
use charta_source::ChartaSource;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::Context;
use crate::cli::{AggregateArgs, ExportFormat, ListArgs, PlaylistArgs, ReplArgs, SelectionArgs, ViewArgs};
use crate::config::ExportConfig;
use crate::infrastructure::clipboard::Clipboards;
use crate::infrastructure::reporter::TracingReporter;
use crate::render::{origin_notice, render_catalog, render_details, render_playlist};
use crate::repl::{self, Session};

/// Command line sources first, then the configured candidates, then the
/// catalog `charta aggregate` writes by default.
pub(crate) fn candidate_list(ctx: &Context, extra: &[String]) -> Vec<String> {
  let local = ctx.paths.catalog_file().display().to_string();

  let mut candidates: Vec<String> = Vec::new();
  for candidate in extra.iter().chain(&ctx.source.candidates).chain(std::iter::once(&local)) {
    if !candidates.contains(candidate) {
      candidates.push(candidate.clone());
    }
  }
  candidates
}

async fn load_catalog(ctx: &Context, extra: &[String]) -> anyhow::Result<LoadOutcome> {
  let source = ChartaSource::new(&ctx.source).context("building catalog source")?;
  let loader = CatalogLoader::new(source, TracingReporter);

  let outcome = loader.load(&candidate_list(ctx, extra)).await;
  if let Some(notice) = origin_notice(&outcome.origin) {
    eprintln!("{notice}");
  }
  Ok(outcome)
}

fn new_app(ctx: &Context, outcome: LoadOutcome) -> CatalogApp {
  CatalogApp::with_settings(outcome.records, ctx.view.initial_state(), ctx.view.quiet_period())
}

pub(crate) fn apply_view_args(app: &mut CatalogApp, args: &ViewArgs) -> anyhow::Result<()> {
  if let Some(search) = &args.search {
    app.set_search(search);
  }
  if let Some(filter) = args.filter {
    app.set_category(filter);
  }
  if let Some(sort) = args.sort {
    app.set_sort(sort);
  }
  for name in &args.expand {
    if !app.state().is_expanded(name) {
      app.toggle_expanded(name)?;
    }
  }
  Ok(())
}

/// Human readable summary of a share link import.
pub(crate) fn describe_import(import: &SharedImport) -> String {
  match import {
    SharedImport::Absent => "The link carries no playlist.".to_string(),
    SharedImport::Invalid { reason } => format!("Could not read the shared playlist: {reason}"),
    SharedImport::Loaded { names, added, .. } => format!("Loaded a shared playlist of {names} artists ({added} new)."),
  }
}

pub(crate) fn apply_selection(app: &mut CatalogApp, args: &SelectionArgs) -> anyhow::Result<()> {
  if let Some(url) = &args.from_url {
    let import = app.apply_shared(url);
    match &import {
      SharedImport::Loaded { cleaned_url, .. } => debug!(%cleaned_url, "shared playlist applied"),
      _ => warn!("{}", describe_import(&import)),
    }
  }
  for name in &args.select {
    if !app.playlist().contains(name) {
      app.toggle_selected(name)?;
    }
  }
  Ok(())
}

pub(crate) fn export_text(
  app: &CatalogApp,
  format: ExportFormat,
  today: NaiveDate,
  config: &ExportConfig,
) -> Result<String, ExportError> {
  let contents = app.contents();
  let branding = config.branding();

  match format {
    ExportFormat::Names => export::plain_names(&contents),
    ExportFormat::List => export::numbered_list(&contents, today, &branding),
    ExportFormat::Email => export::email_body(&contents, &branding),
    ExportFormat::Mailto => export::mailto_uri(&contents, &branding),
    ExportFormat::Share => app.share_url(&config.page_url),
  }
}

fn clipboards(ctx: &Context) -> Clipboards {
  Clipboards::system(ctx.paths.cache_dir.join("clipboard.txt"))
}

pub async fn list(ctx: &Context, sources: &[String], args: ListArgs) -> anyhow::Result<()> {
  let outcome = load_catalog(ctx, sources).await?;
  let mut app = new_app(ctx, outcome);
  apply_view_args(&mut app, &args.view)?;
  apply_selection(&mut app, &args.selection)?;

  let view = app.view();
  if args.json {
    println!("{}", serde_json::to_string_pretty(&view)?);
  } else {
    print!("{}", render_catalog(&view));
  }

  if args.share_url {
    println!("{}", app.share_url(&ctx.export.page_url)?);
  }
  Ok(())
}

pub async fn show(ctx: &Context, sources: &[String], name: &str) -> anyhow::Result<()> {
  let outcome = load_catalog(ctx, sources).await?;
  let app = new_app(ctx, outcome);

  let record = app
    .find(name)
    .or_else(|| app.records().iter().find(|r| r.name.eq_ignore_ascii_case(name)))
    .ok_or_else(|| anyhow!("no artist named {name:?} in the catalog"))?;

  println!(
    "{} | {} | {}",
    record.name,
    regions_label(record.region_count),
    PopularityBucket::from_region_count(record.region_count).label()
  );
  print!("{}", render_details(&artist_details(record)));
  Ok(())
}

pub async fn playlist(ctx: &Context, sources: &[String], args: PlaylistArgs) -> anyhow::Result<()> {
  let outcome = load_catalog(ctx, sources).await?;
  let mut app = new_app(ctx, outcome);
  apply_selection(&mut app, &args.selection)?;

  let unknown = app.playlist_view().unknown;
  if !unknown.is_empty() && args.format != ExportFormat::Share {
    warn!(?unknown, "artists missing from the catalog are left out of the export");
  }

  let today = args.date.unwrap_or_else(|| chrono::Local::now().date_naive());
  let text = export_text(&app, args.format, today, &ctx.export)?;

  if args.copy {
    println!("{}", clipboards(ctx).copy(&text));
  } else {
    println!("{text}");
  }
  Ok(())
}

pub async fn repl(ctx: &Context, sources: &[String], args: ReplArgs) -> anyhow::Result<()> {
  let outcome = load_catalog(ctx, sources).await?;
  let mut app = new_app(ctx, outcome);
  apply_view_args(&mut app, &args.view)?;
  apply_selection(&mut app, &args.selection)?;

  let session =
    Session { export: ctx.export.clone(), clipboards: clipboards(ctx), today: chrono::Local::now().date_naive() };
  repl::run(app, session).await
}

pub async fn aggregate(ctx: &Context, args: AggregateArgs) -> anyhow::Result<()> {
  let raw = charta_fs::read_text(&args.charts).await.with_context(|| format!("reading {}", args.charts.display()))?;
  let charts: Vec<RegionChart> =
    serde_json::from_str(&raw).with_context(|| format!("parsing chart listings in {}", args.charts.display()))?;

  let options = AggregateOptions { min_regions: args.min_regions, top_n: args.top_n };
  let records = aggregate_overlaps(&charts, options);
  if records.is_empty() {
    anyhow::bail!("no artist charts in {} or more of the {} regions given", options.min_regions, charts.len());
  }

  let out = args.out.unwrap_or_else(|| ctx.paths.catalog_file());
  let json = serde_json::to_string_pretty(&records)?;
  charta_fs::atomic_write_str(&out, &json).with_context(|| format!("writing {}", out.display()))?;
  info!(count = records.len(), path = %out.display(), "catalog written");

  let report = assess_quality(&records);
  println!("Wrote {} artists from {} regions to {}", records.len(), charts.len(), out.display());
  println!(
    "Quality: {}/{} expected headliners in the top ten ({:.0}%)",
    report.matches,
    report.expected,
    report.score * 100.0
  );
  if !report.good {
    warn!(score = report.score, "few well-known artists near the top, the chart listings may be incomplete");
  }
  Ok(())
}

pub fn config(ctx: &Context, path_only: bool) -> anyhow::Result<()> {
  let file = ctx.backend.file();
  if path_only {
    println!("{}", file.display());
    return Ok(());
  }

  let text = charta_fs::read_optional(file).with_context(|| format!("reading {}", file.display()))?.unwrap_or_default();
  println!("# {}\n{text}", file.display());
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use charta_config::{ChartaPaths, TomlConfigBackend};
  use charta_core::domain::sample_artists;
  use charta_source::SourceConfig;
  use tempfile::tempdir;

  use crate::config::ViewConfig;

  fn context(base: std::path::PathBuf) -> Context {
    let paths = ChartaPaths::under(base);
    Context {
      backend: TomlConfigBackend::from_paths(&paths),
      paths,
      source: SourceConfig::default(),
      view: ViewConfig::default(),
      export: ExportConfig::default(),
    }
  }

  fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
  }

  #[test]
  fn command_line_sources_come_first_and_data_file_last() {
    let tmp = tempdir().unwrap();
    let ctx = context(tmp.path().to_path_buf());

    let candidates = candidate_list(&ctx, &["https://cdn.example.org/artists.json".into(), "artists.json".into()]);

    assert_eq!(candidates[0], "https://cdn.example.org/artists.json");
    assert_eq!(candidates[1], "artists.json");
    assert_eq!(candidates.iter().filter(|c| *c == "artists.json").count(), 1);
    assert_eq!(candidates.last().unwrap(), &ctx.paths.catalog_file().display().to_string());
  }

  #[test]
  fn selection_merges_link_and_names() {
    let mut app = CatalogApp::new(sample_artists());
    let link = charta_core::share::encode_share_url("http://localhost:8000/", &["SZA".to_string()]);

    let args = SelectionArgs { select: vec!["Adele".into(), "SZA".into()], from_url: Some(link) };
    apply_selection(&mut app, &args).unwrap();

    assert_eq!(app.playlist().len(), 2);
    assert!(app.playlist().contains("SZA"));
  }

  #[test]
  fn unknown_names_are_rejected() {
    let mut app = CatalogApp::new(sample_artists());
    let args = SelectionArgs { select: vec!["Nobody".into()], from_url: None };
    assert!(apply_selection(&mut app, &args).is_err());

    let view = ViewArgs { expand: vec!["Nobody".into()], ..ViewArgs::default() };
    assert!(apply_view_args(&mut app, &view).is_err());
  }

  #[test]
  fn expand_is_idempotent() {
    let mut app = CatalogApp::new(sample_artists());
    let view = ViewArgs { expand: vec!["Adele".into(), "Adele".into()], ..ViewArgs::default() };

    apply_view_args(&mut app, &view).unwrap();

    assert!(app.state().is_expanded("Adele"));
  }

  #[test]
  fn exports_follow_the_requested_format() {
    let mut app = CatalogApp::new(sample_artists());
    app.toggle_selected("Adele").unwrap();
    app.toggle_selected("Taylor Swift").unwrap();
    let config = ExportConfig { title: "Prom".into(), ..ExportConfig::default() };

    assert_eq!(export_text(&app, ExportFormat::Names, today(), &config).unwrap(), "Taylor Swift\nAdele");
    assert!(export_text(&app, ExportFormat::List, today(), &config).unwrap().starts_with("Prom - 3/7/2025\n2 Artists"));
    assert!(export_text(&app, ExportFormat::Mailto, today(), &config).unwrap().starts_with("mailto:?subject="));
    let share = export_text(&app, ExportFormat::Share, today(), &config).unwrap();
    assert!(share.starts_with("http://localhost:8000/?playlist="));
  }

  #[test]
  fn exports_refuse_an_empty_playlist() {
    let app = CatalogApp::new(sample_artists());
    let formats =
      [ExportFormat::Names, ExportFormat::List, ExportFormat::Email, ExportFormat::Mailto, ExportFormat::Share];
    for format in formats {
      assert_eq!(export_text(&app, format, today(), &ExportConfig::default()), Err(ExportError::EmptyPlaylist));
    }
  }

  #[tokio::test]
  async fn aggregate_writes_a_catalog_the_loader_accepts() {
    let tmp = tempdir().unwrap();
    let ctx = context(tmp.path().to_path_buf());
    let charts = tmp.path().join("charts.json");
    std::fs::write(
      &charts,
      r#"[
        {"region": "USA", "artists": ["Taylor Swift", "SZA feat. Drake", "Drake"]},
        {"region": "UK", "artists": ["Taylor Swift", "Adele", "Drake & Future"]},
        {"region": "Canada", "artists": ["Drake", "Taylor Swift"]}
      ]"#,
    )
    .unwrap();

    aggregate(&ctx, AggregateArgs { charts, min_regions: 2, top_n: 50, out: None }).await.unwrap();

    let outcome = load_catalog(&ctx, &[]).await.unwrap();
    assert!(matches!(outcome.origin, charta_core::services::DataOrigin::Remote { .. }));
    let names: Vec<&str> = outcome.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Taylor Swift"));
    assert!(names.contains(&"Drake"));
  }

  #[tokio::test]
  async fn aggregate_refuses_to_write_an_empty_catalog() {
    let tmp = tempdir().unwrap();
    let ctx = context(tmp.path().to_path_buf());
    let charts = tmp.path().join("charts.json");
    std::fs::write(&charts, r#"[{"region": "USA", "artists": ["Taylor Swift"]}]"#).unwrap();

    let result = aggregate(&ctx, AggregateArgs { charts, min_regions: 2, top_n: 50, out: None }).await;

    assert!(result.is_err());
    assert!(!ctx.paths.catalog_file().exists());
  }
}
