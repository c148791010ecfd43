//! Line-based interactive session.
//!
//! Input is read a line at a time. While the search box is focused (after
//! `/`), every line is a new value of the box and is applied once typing has
//! been quiet for the configured period.

use std::io::Write;
use std::time::Instant;

use charta_core::app::{KeyAction, KeyPress};
use charta_core::{CatalogApp, CategoryFilter, SortMode};
use chrono::NaiveDate;
use clap::ValueEnum;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::ExportFormat;
use crate::commands::{describe_import, export_text};
use crate::config::ExportConfig;
use crate::infrastructure::clipboard::Clipboards;
use crate::render::{render_catalog, render_playlist};

const HELP: &str = "\
/                 focus the search box (type to filter, `esc` to leave)
search <text>     set the search term
filter <f>        all | global | mega | trending | <min regions>
sort [mode]       toggle, or popularity | alphabetical
clear             show all artists again
expand <name>     show or hide the region breakdown
select <name>     add or remove from the playlist
playlist          open the playlist panel (also ctrl-p)
esc               close panels
empty             clear the playlist
export [format]   names | list | email | mailto | share
copy [format]     same, onto the clipboard
import <url>      merge a shared playlist link
show              print the catalog
quit";

pub(crate) struct Session {
  pub export: ExportConfig,
  pub clipboards: Clipboards,
  pub today: NaiveDate,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Reply {
  Quiet,
  Print(String),
  Quit,
}

fn parse_format(arg: &str) -> Result<ExportFormat, String> {
  if arg.is_empty() {
    return Ok(ExportFormat::List);
  }
  <ExportFormat as ValueEnum>::from_str(arg, true).map_err(|_| format!("unknown export format `{arg}`"))
}

fn export_reply(app: &CatalogApp, arg: &str, session: &Session, copy: bool) -> Reply {
  let text = parse_format(arg)
    .and_then(|format| export_text(app, format, session.today, &session.export).map_err(|e| e.to_string()));

  match text {
    Ok(text) if copy => Reply::Print(session.clipboards.copy(&text)),
    Ok(text) => Reply::Print(text),
    Err(message) => Reply::Print(message),
  }
}

fn catalog(app: &CatalogApp) -> Reply {
  Reply::Print(render_catalog(&app.view()))
}

pub(crate) fn handle_line(app: &mut CatalogApp, line: &str, now: Instant, session: &Session) -> Reply {
  if app.flags().search_focused {
    if line.trim() == "esc" {
      app.on_key(KeyPress::Escape);
      return Reply::Print("Search closed.".to_string());
    }
    app.on_search_input(line, now);
    return Reply::Quiet;
  }

  let line = line.trim();
  let (cmd, arg) = line.split_once(' ').map(|(c, a)| (c, a.trim())).unwrap_or((line, ""));

  match cmd {
    "" => Reply::Quiet,
    "/" => match app.on_key(KeyPress::Char { ch: '/', modifier: false }) {
      KeyAction::FocusSearch => Reply::Print("Searching, type to filter, `esc` to leave.".to_string()),
      _ => Reply::Quiet,
    },
    "search" => {
      app.on_search_input(arg, now);
      Reply::Quiet
    }
    "filter" => match arg.parse::<CategoryFilter>() {
      Ok(filter) => {
        app.set_category(filter);
        catalog(app)
      }
      Err(e) => Reply::Print(e.to_string()),
    },
    "sort" => {
      if arg.is_empty() {
        app.toggle_sort();
      } else {
        match arg.parse::<SortMode>() {
          Ok(sort) => app.set_sort(sort),
          Err(e) => return Reply::Print(e.to_string()),
        }
      }
      catalog(app)
    }
    "clear" => {
      if !app.state().has_filters() && app.state().sort == SortMode::Popularity {
        return Reply::Print("Nothing to clear, all artists are shown.".to_string());
      }
      app.clear_filters();
      catalog(app)
    }
    "expand" => match app.toggle_expanded(arg) {
      Ok(_) => catalog(app),
      Err(e) => Reply::Print(e.to_string()),
    },
    "select" => match app.toggle_selected(arg) {
      Ok(true) => Reply::Print(format!("Added {arg} ({} selected).", app.playlist().len())),
      Ok(false) => Reply::Print(format!("Removed {arg} ({} selected).", app.playlist().len())),
      Err(e) => Reply::Print(e.to_string()),
    },
    "playlist" | "ctrl-p" => {
      app.on_key(KeyPress::Char { ch: 'p', modifier: true });
      Reply::Print(render_playlist(&app.playlist_view()))
    }
    "esc" => {
      app.on_key(KeyPress::Escape);
      catalog(app)
    }
    "empty" => {
      app.clear_playlist();
      Reply::Print("Playlist cleared.".to_string())
    }
    "export" => export_reply(app, arg, session, false),
    "copy" => export_reply(app, arg, session, true),
    "import" => Reply::Print(describe_import(&app.apply_shared(arg))),
    "show" => {
      app.flush_search();
      if app.flags().playlist_open {
        Reply::Print(render_playlist(&app.playlist_view()))
      } else {
        catalog(app)
      }
    }
    "help" | "?" => Reply::Print(HELP.to_string()),
    "quit" | "exit" | "q" => Reply::Quit,
    other => Reply::Print(format!("unknown command `{other}`, try `help`")),
  }
}

fn prompt(app: &CatalogApp) -> std::io::Result<()> {
  let mut stdout = std::io::stdout();
  write!(stdout, "{}", if app.flags().search_focused { "search> " } else { "charta> " })?;
  stdout.flush()
}

async fn wait_until(deadline: Option<Instant>) {
  match deadline {
    Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
    None => std::future::pending().await,
  }
}

pub(crate) async fn run(mut app: CatalogApp, session: Session) -> anyhow::Result<()> {
  let mut lines = BufReader::new(tokio::io::stdin()).lines();

  print!("{}", render_catalog(&app.view()));
  prompt(&app)?;

  loop {
    let deadline = app.search_deadline();

    tokio::select! {
      line = lines.next_line() => {
        let Some(line) = line? else { break };
        match handle_line(&mut app, &line, Instant::now(), &session) {
          Reply::Quit => break,
          Reply::Print(text) => println!("{}", text.trim_end()),
          Reply::Quiet => {}
        }
        prompt(&app)?;
      }
      _ = wait_until(deadline), if deadline.is_some() => {
        if app.tick(Instant::now()) {
          print!("\n{}", render_catalog(&app.view()));
          prompt(&app)?;
        }
      }
    }
  }

  println!();
  Ok(())
}
