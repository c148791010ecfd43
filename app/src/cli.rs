use std::path::PathBuf;

use charta_core::{CategoryFilter, SortMode};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
  name = "charta",
  version,
  about = "Which artists chart across the most regions, and playlists built from them"
)]
pub struct Cli {
  /// Config, data and cache directories all live under this directory.
  #[arg(long, global = true)]
  pub base_dir: Option<PathBuf>,

  /// Catalog location tried before the configured candidates (repeatable).
  #[arg(long = "source", global = true, value_name = "PATH_OR_URL")]
  pub sources: Vec<String>,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Print the filtered, sorted catalog.
  List(ListArgs),

  /// Region breakdown of one artist.
  Show {
    name: String,
  },

  /// Export a playlist.
  Playlist(PlaylistArgs),

  /// Interactive session on a line-based prompt.
  Repl(ReplArgs),

  /// Build a catalog file out of per-region chart listings.
  Aggregate(AggregateArgs),

  /// Print the effective configuration.
  Config {
    /// Only print where the config file lives.
    #[arg(long)]
    path: bool,
  },
}

#[derive(Debug, Args, Default)]
pub struct ViewArgs {
  /// Case-insensitive match on artist names and regions.
  #[arg(long, short)]
  pub search: Option<String>,

  /// all, global, mega, trending or a minimum number of regions.
  #[arg(long, short)]
  pub filter: Option<CategoryFilter>,

  /// popularity or alphabetical.
  #[arg(long)]
  pub sort: Option<SortMode>,

  /// Show the region breakdown of this artist (repeatable).
  #[arg(long, value_name = "NAME")]
  pub expand: Vec<String>,
}

#[derive(Debug, Args, Default)]
pub struct SelectionArgs {
  /// Add this artist to the playlist (repeatable).
  #[arg(long, value_name = "NAME")]
  pub select: Vec<String>,

  /// Start from the playlist carried by a share link.
  #[arg(long, value_name = "URL")]
  pub from_url: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
  #[command(flatten)]
  pub view: ViewArgs,

  #[command(flatten)]
  pub selection: SelectionArgs,

  /// Also print a share link for the selection.
  #[arg(long)]
  pub share_url: bool,

  /// Emit the view model as JSON instead of text.
  #[arg(long)]
  pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
  /// One name per line.
  Names,
  /// Titled, numbered list with the date.
  List,
  /// Mail draft body.
  Email,
  /// `mailto:` link with subject and body.
  Mailto,
  /// Share link carrying the playlist.
  Share,
}

#[derive(Debug, Args)]
pub struct PlaylistArgs {
  #[arg(value_enum, default_value_t = ExportFormat::List)]
  pub format: ExportFormat,

  #[command(flatten)]
  pub selection: SelectionArgs,

  /// Put the export on the clipboard instead of printing it.
  #[arg(long)]
  pub copy: bool,

  /// Date printed in the list header (defaults to today).
  #[arg(long, value_name = "YYYY-MM-DD")]
  pub date: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct ReplArgs {
  #[command(flatten)]
  pub view: ViewArgs,

  #[command(flatten)]
  pub selection: SelectionArgs,
}

#[derive(Debug, Args)]
pub struct AggregateArgs {
  /// JSON array of `{ "region": ..., "artists": [...] }` chart listings.
  #[arg(long)]
  pub charts: PathBuf,

  /// Leave out artists charting in fewer regions.
  #[arg(long, default_value_t = 2)]
  pub min_regions: usize,

  /// Entries considered per chart.
  #[arg(long, default_value_t = 50)]
  pub top_n: usize,

  /// Where to write the catalog (defaults to the data directory).
  #[arg(long)]
  pub out: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
  }

  #[test]
  fn parses_list_with_filters_and_selection() {
    let cli = Cli::try_parse_from([
      "charta",
      "list",
      "--filter",
      "12",
      "--sort",
      "alphabetical",
      "-s",
      "swift",
      "--select",
      "SZA",
      "--select",
      "Adele",
    ])
    .unwrap();

    let Command::List(args) = cli.command else { panic!("expected list") };
    assert_eq!(args.view.filter, Some(CategoryFilter::MinRegions(12)));
    assert_eq!(args.view.sort, Some(SortMode::Alphabetical));
    assert_eq!(args.view.search.as_deref(), Some("swift"));
    assert_eq!(args.selection.select, ["SZA", "Adele"]);
  }

  #[test]
  fn playlist_defaults_to_numbered_list() {
    let cli = Cli::try_parse_from(["charta", "playlist", "--select", "SZA"]).unwrap();
    let Command::Playlist(args) = cli.command else { panic!("expected playlist") };
    assert_eq!(args.format, ExportFormat::List);
    assert!(!args.copy);
  }

  #[test]
  fn rejects_unknown_filters() {
    assert!(Cli::try_parse_from(["charta", "list", "--filter", "popular"]).is_err());
  }
}
