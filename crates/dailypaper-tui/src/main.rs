use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use tokio::sync::mpsc;

use dailypaper_core::Config;
use dailypaper_core::config_file;

mod action;
mod app;
mod backend;
mod input;
mod logging;
mod theme;
mod tui_event;
mod view;

use app::App;

/// Daily paper viewer: browse the classified arXiv feed in the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL the JSON files are published under
    #[arg(long)]
    remote_url: Option<String>,

    /// Local directory holding the same files, used when the remote fails
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Read only from the local directory
    #[arg(long)]
    no_remote: bool,

    /// Per-request timeout for the remote source, in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Color theme: hacker (default) or modern
    #[arg(long)]
    theme: Option<String>,

    /// Where to write the log (default: <cache_dir>/dailypaper/tui.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let log_path = args.log_file.clone().unwrap_or_else(logging::default_log_path);
    let _log_guard = logging::init(&log_path)?;

    // Resolve config from CLI flags > env vars > config file > defaults
    let file_config = config_file::load_config();
    let mut config = Config::from_file(&file_config);
    config.apply_env(|key| std::env::var(key).ok());
    if let Some(url) = args.remote_url {
        config.remote_base_url = Some(url);
    }
    if let Some(dir) = args.data_dir {
        config.local_dir = Some(dir);
    }
    if args.no_remote {
        config.remote_base_url = None;
    }
    if let Some(secs) = args.timeout {
        config.timeout_secs = secs;
    }

    let loader = Arc::new(config.build_loader()?);
    tracing::info!(sources = ?loader.source_names(), "starting");

    let theme_name = args
        .theme
        .or_else(|| file_config.display.as_ref().and_then(|d| d.theme.clone()))
        .unwrap_or_else(|| "hacker".to_string());

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let backend_terminal = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_terminal)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let mut app = App::new(&theme_name, file_config);
    if let Ok(size) = terminal.size() {
        app.update(action::Action::Resize(size.width, size.height));
    }

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    app.backend_cmd_tx = Some(cmd_tx.clone());
    tokio::spawn(backend::run_listener(loader, cmd_rx, event_tx));
    let _ = cmd_tx.send(tui_event::BackendCommand::LoadDates);

    // Main event loop
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|f| app.view(f))?;

        tokio::select! {
            maybe_event = event_rx.recv() => {
                if let Some(backend_event) = maybe_event {
                    app.handle_backend_event(backend_event);
                    while let Ok(evt) = event_rx.try_recv() {
                        app.handle_backend_event(evt);
                    }
                }
            }
            _ = async {
                if event::poll(tick_rate).unwrap_or(false)
                    && let Ok(evt) = event::read()
                {
                    let action = input::map_event(&evt, &app.input_mode);
                    if action != action::Action::None {
                        // Any keypress clears the last status message
                        app.status = None;
                    }
                    app.update(action);
                }
            } => {}
        }

        app.update(action::Action::Tick);

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;

    Ok(())
}
