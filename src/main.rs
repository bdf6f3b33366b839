pub mod ui;

use breathetrack::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    logging,
    runtime::{AppEvent, CrosstermEventSource, EventSource, FixedTicker, Runner, Ticker},
    session::{SessionConfig, SessionController, Transition},
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    cursor,
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
};

/// breath-hold (BOLT) test timer with a trend sparkline
#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about,
    long_about = "Times a BOLT breath-hold test, keeps this session's results and draws their trend. Press space or enter to start and stop."
)]
pub struct Cli {
    /// cap for a single hold, in seconds
    #[arg(short = 'm', long)]
    max_secs: Option<u32>,

    /// timer period in milliseconds (one second is added per period)
    #[arg(short = 't', long)]
    tick_ms: Option<u64>,

    /// stop the test automatically once the cap is reached
    #[arg(long)]
    auto_stop: bool,

    /// config file to use instead of the default location
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// write the effective configuration to the config file and exit
    #[arg(long)]
    save_config: bool,

    /// append logs to this file, or to the default log location when no path
    /// is given (filter with RUST_LOG)
    #[arg(long, num_args = 0..=1, value_name = "PATH")]
    log_file: Option<Option<PathBuf>>,
}

impl Cli {
    /// Layer command line overrides on top of the stored config
    fn apply(&self, mut cfg: Config) -> Config {
        if let Some(max) = self.max_secs {
            cfg.max_seconds = max;
        }
        if let Some(ms) = self.tick_ms {
            cfg.tick_interval_ms = ms;
        }
        if self.auto_stop {
            cfg.auto_stop_at_cap = true;
        }
        cfg
    }

    /// Where to log, if logging was requested
    fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .as_ref()
            .map(|path| path.clone().unwrap_or_else(AppDirs::log_path))
    }

    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppState {
    Timer,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
    Quit,
}

#[derive(Debug)]
pub struct App {
    pub controller: SessionController,
    pub state: AppState,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            controller: SessionController::new(SessionConfig::from(config)),
            state: AppState::Timer,
        }
    }

    /// Deliver due timer ticks. Returns true when the display changed.
    pub fn on_tick(&mut self) -> bool {
        let was_active = self.controller.is_active();
        self.controller.poll() > 0 || was_active != self.controller.is_active()
    }

    pub fn on_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyOutcome::Quit;
        }

        match self.state {
            AppState::Timer => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => {
                    if let Transition::Stopped { committed: None } = self.controller.toggle() {
                        tracing::debug!("zero-length hold discarded");
                    }
                    KeyOutcome::Handled
                }
                KeyCode::Char('?') | KeyCode::Char('h') => {
                    self.state = AppState::Help;
                    KeyOutcome::Handled
                }
                KeyCode::Char('q') | KeyCode::Esc => KeyOutcome::Quit,
                _ => KeyOutcome::Ignored,
            },
            AppState::Help => match key.code {
                KeyCode::Esc
                | KeyCode::Enter
                | KeyCode::Char('?')
                | KeyCode::Char('h')
                | KeyCode::Char('c') => {
                    self.state = AppState::Timer;
                    KeyOutcome::Handled
                }
                KeyCode::Char('q') => KeyOutcome::Quit,
                _ => KeyOutcome::Ignored,
            },
        }
    }
}

/// Raw mode + alternate screen for as long as the guard lives.
/// Restores the terminal on every exit path, including panics.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, cursor::Show);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(path) = cli.log_path() {
        logging::init(&path)?;
    }

    let store = cli.config_store();
    let config = cli.apply(store.load());
    config.validate()?;

    if cli.save_config {
        store.save(&config)?;
        println!("wrote {}", store.path().display());
        return Ok(());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(config.ui_refresh()),
    );
    start_tui(&mut terminal, &mut app, &runner)?;

    tracing::info!(results = app.controller.history().len(), "exiting");
    Ok(())
}

fn start_tui<B: Backend, E: EventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| ui(app, f))?;

    loop {
        let event = runner.step();

        // deliver elapsed periods before acting on the event so a stop
        // commits every second that has already passed
        let mut redraw = app.on_tick();

        match event {
            AppEvent::Tick => {}
            AppEvent::Resize => redraw = true,
            AppEvent::Closed => {
                tracing::warn!("input source closed, exiting");
                break;
            }
            AppEvent::Key(key) => match app.on_key(key) {
                KeyOutcome::Quit => break,
                KeyOutcome::Handled => redraw = true,
                KeyOutcome::Ignored => {}
            },
        }

        if redraw {
            terminal.draw(|f| ui(app, f))?;
        }
    }

    Ok(())
}

fn ui(app: &mut App, f: &mut Frame) {
    ui::screen::current_screen(&app.state).render(app, f);
}
