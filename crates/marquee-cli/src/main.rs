//! `marquee`: terminal viewer for TMDB movie details.
//!
//! # Usage
//!
//! ```
//! marquee /filme/27205
//! marquee --print /filme/27205
//! MARQUEE_API_KEY=… marquee --config ~/.config/marquee/config.toml
//! ```

mod app;
mod print;
mod settings;
mod ui;

use std::{
  fs::File,
  io,
  path::{Path, PathBuf},
  sync::Mutex,
  time::Duration,
};

use anyhow::{Context, Result, anyhow, bail};
use app::App;
use clap::Parser;
use crossterm::{
  event::{self, Event, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use marquee_core::{catalog::Catalog, render::ImageConfig, resolve, route::Route};
use marquee_tmdb::{TmdbClient, TmdbConfig};
use ratatui::{Terminal, backend::CrosstermBackend};
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "marquee", version, about = "Terminal viewer for TMDB movie details")]
struct Args {
  /// Route to open, e.g. `/filme/27205`.
  route: Option<String>,

  /// Path to a TOML config file.
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// TMDB API key.
  #[arg(long, env = "MARQUEE_API_KEY", hide_env_values = true)]
  api_key: Option<String>,

  /// Catalog base URL.
  #[arg(long)]
  base_url: Option<String>,

  /// Response language sent to the catalog.
  #[arg(long)]
  language: Option<String>,

  /// Resolve once, print the result to stdout and exit.
  #[arg(long)]
  print: bool,

  /// Write logs to this file (the viewer discards logs otherwise).
  #[arg(long, value_name = "FILE")]
  log_file: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();
  init_tracing(args.log_file.as_deref(), args.print)?;

  let config_path = args.config.clone().unwrap_or_else(settings::default_path);
  let settings = Settings::load(&config_path)
    .with_context(|| format!("loading {}", config_path.display()))?;

  // CLI flags override the environment, which overrides the config file.
  let api_key = args
    .api_key
    .or_else(|| settings.api_key.clone())
    .filter(|k| !k.trim().is_empty())
    .ok_or_else(|| anyhow!("no TMDB API key; set MARQUEE_API_KEY or api_key in the config file"))?;

  let tmdb = TmdbConfig {
    base_url: args.base_url.unwrap_or_else(|| settings.base_url.clone()),
    api_key,
    language: args.language.unwrap_or_else(|| settings.language.clone()),
    timeout_secs: settings.timeout_secs,
  };
  let images = ImageConfig {
    base_url: settings.image_base_url.clone(),
    size:     settings.poster_size,
  };

  let raw_route = args
    .route
    .or_else(|| settings.start_route.clone())
    .context("no route given; pass one such as /filme/27205")?;
  let route = Route::parse(&raw_route)?;

  let client = TmdbClient::new(tmdb).context("creating TMDB client")?;

  if args.print {
    return print_once(&client, route, &images).await;
  }

  run_viewer(client, route, images).await
}

fn init_tracing(log_file: Option<&Path>, print: bool) -> Result<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();
  let fmt = tracing_subscriber::fmt().with_env_filter(filter);

  match log_file {
    Some(path) => {
      let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
      fmt.with_ansi(false).with_writer(Mutex::new(file)).init();
    }
    None if print => fmt.with_writer(io::stderr).init(),
    // The terminal belongs to the viewer.
    None => fmt.with_writer(io::sink).init(),
  }
  Ok(())
}

// ─── Print mode ───────────────────────────────────────────────────────────────

async fn print_once<C: Catalog>(catalog: &C, route: Route, images: &ImageConfig) -> Result<()> {
  let Some(resolved) = resolve::resolve(catalog, &route)
    .await
    .with_context(|| format!("resolving {route}"))?
  else {
    bail!("{route} is not a movie route; nothing to show");
  };
  print!("{}", print::render(&resolved, images));
  Ok(())
}

// ─── Viewer ───────────────────────────────────────────────────────────────────

async fn run_viewer(client: TmdbClient, route: Route, images: ImageConfig) -> Result<()> {
  let mut app = App::new(client, images);
  app.navigate(route);

  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  let run_result = run_event_loop(&mut terminal, &mut app).await;

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  app.view.teardown();
  run_result
}

async fn run_event_loop<C: Catalog + 'static>(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App<C>,
) -> Result<()> {
  loop {
    app.drain();
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    match maybe_event {
      Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
        if !app.handle_key(key) {
          break;
        }
      }
      // Resizes and everything else redraw on the next iteration.
      _ => {}
    }
  }

  Ok(())
}
