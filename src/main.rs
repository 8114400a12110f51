use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs, io, path::PathBuf, sync::Arc, time::Duration};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rackdesk::api::AdminClient;
use rackdesk::config::Config;
use rackdesk::logic::route::Route;
use rackdesk::model::Model;
use rackdesk::session::{self, CredentialResolver, CredentialStore, MemoryStore, SessionDb};
use rackdesk::utils;

mod app;
mod handlers;
mod services;
mod ui;

/// Terminal admin console for a device-repair business
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp>/rackdesk-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Override the API origin from the config file
    #[arg(long)]
    base_url: Option<String>,

    /// Keep the session in memory only; nothing is written to disk
    #[arg(long)]
    ephemeral: bool,

    /// Route to open first, e.g. /admin/repairs
    #[arg(long, default_value = "/admin/dashboard")]
    route: String,
}

pub struct App {
    pub model: Model,

    store: Arc<dyn CredentialStore>,
    resolver: CredentialResolver,
    api_tx: mpsc::UnboundedSender<services::api::ApiRequest>,
    api_rx: mpsc::UnboundedReceiver<services::api::ApiResponse>,
    base_url: String,
}

impl App {
    fn new(config: Config, store: Arc<dyn CredentialStore>, columns: u16) -> Result<Self> {
        let resolver = CredentialResolver::new(config.credential_keys.iter().cloned());
        let client = AdminClient::new(&config.base_url, &config.api_prefix, store.clone(), resolver.clone())
            .with_timeout(Duration::from_secs(config.request_timeout_secs))?;
        let base_url = client.base_url().to_string();
        tracing::info!(%base_url, "admin API client ready");

        let (api_tx, api_rx) = services::api::spawn_api_service(client);

        let admin = session::load_admin_user(store.as_ref());
        let model = Model::new(
            admin,
            config.page_limit,
            config.vim_mode,
            config.cell_width_px,
            columns,
        );

        Ok(Self {
            model,
            store,
            resolver,
            api_tx,
            api_rx,
            base_url,
        })
    }

    /// Queue a request for the background worker
    fn send(&self, request: services::api::ApiRequest) {
        if let Err(e) = self.api_tx.send(request) {
            tracing::error!(error = %e, "API worker is gone; request dropped");
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Determine the config file path with fallback logic
fn get_config_path(cli_path: Option<String>) -> Result<PathBuf> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(p);
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("rackdesk").join("config.yaml");
        if config_path.exists() {
            return Ok(config_path);
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(local_config);
    }

    let expected_path = dirs::config_dir()
        .map(|dir| dir.join("rackdesk").join("config.yaml").display().to_string())
        .unwrap_or_else(|| "~/.config/rackdesk/config.yaml".to_string());

    anyhow::bail!(
        "Config file not found. Expected locations:\n\
         1. {} (preferred)\n\
         2. ./config.yaml (fallback)\n\
         \n\
         Use --config <path> to specify a custom location.",
        expected_path
    )
}

/// Log to a file; the terminal belongs to the UI
fn init_logging(debug: bool) -> Result<()> {
    let log_path = utils::get_debug_log_path();
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let default_level = if debug { "rackdesk=debug" } else { "rackdesk=warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.debug)?;

    let config_path = get_config_path(args.config)?;
    tracing::info!(path = %config_path.display(), "loading config");

    let config_str = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let mut config = Config::from_yaml(&config_str)?;

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    let store: Arc<dyn CredentialStore> = if args.ephemeral {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(SessionDb::new()?)
    };

    let start_route = Route::from_path(&args.route).unwrap_or_else(|| {
        tracing::warn!(route = %args.route, "unknown route; opening dashboard");
        Route::Dashboard
    });

    let columns = crossterm::terminal::size().map(|(w, _)| w).unwrap_or(120);
    let mut app = App::new(config, store, columns)?;
    app.navigate(start_route);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            handlers::handle_api_response(app, response);
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handlers::handle_key(app, key)?;
                }
                Event::Resize(columns, _) => {
                    app.model.ui.on_resize(columns);
                }
                _ => {}
            }
        }

        // Yield so spawned API tasks make progress between frames
        tokio::task::yield_now().await;
    }

    Ok(())
}
