use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, info, warn};

use crate::models::{Calibration, Config, ScanSnapshot, ScanStep};
use crate::ui::{
    layout::AppLayout,
    results::ResultsScreen,
    state::{InMemoryScanStore, LogLevel, ScanStore, StoreUpdate},
    welcome::WelcomeView,
    View,
};

pub struct ScanResultsApp {
    pub store: InMemoryScanStore,
    pub welcome: WelcomeView,
    pub results: Option<ResultsScreen>,
    pub should_quit: bool,
    show_confidences_on_mount: bool,
    store_updates: broadcast::Receiver<StoreUpdate>,
    last_update: Option<StoreUpdate>,
}

impl ScanResultsApp {
    /// Build the app from configuration, preloading a scan snapshot when one is configured
    pub fn new(config: &Config) -> Result<Self> {
        let mut store = match &config.scan_results_path {
            Some(path) => {
                let snapshot = ScanSnapshot::from_json_file(path)?;
                info!(
                    "Loaded {} measurements from {}",
                    snapshot.measurements.len(),
                    path.display()
                );
                InMemoryScanStore::from_snapshot(snapshot)
            }
            None => InMemoryScanStore::new(),
        };

        if let Some(scale_factor) = config.scale_factor {
            store.set_calibration(Some(Calibration::new(scale_factor)));
        }

        Ok(Self::open(store, config.show_confidences, config.start_step))
    }

    /// Open the results step over an existing store
    pub fn with_store(store: InMemoryScanStore, show_confidences: bool) -> Self {
        Self::open(store, show_confidences, ScanStep::Results)
    }

    /// Open `start_step` over an existing store; results are only mounted once that step is active
    pub fn open(mut store: InMemoryScanStore, show_confidences: bool, start_step: ScanStep) -> Self {
        let store_updates = store.subscribe();
        store.set_step(start_step);

        let mut app = Self {
            store,
            welcome: WelcomeView,
            results: None,
            should_quit: false,
            show_confidences_on_mount: show_confidences,
            store_updates,
            last_update: None,
        };
        app.sync_screen();
        app
    }

    pub fn last_update(&self) -> Option<&StoreUpdate> {
        self.last_update.as_ref()
    }

    pub fn draw(&mut self, f: &mut Frame) {
        self.drain_store_updates();

        let layout = AppLayout::new(f.area());

        let (title, status, level) = match (self.store.step(), self.results.as_mut()) {
            (ScanStep::Results, Some(screen)) => {
                screen.render(f, layout.content, &self.store);
                (screen.get_title(), screen.get_status(), screen.get_status_level())
            }
            _ => {
                self.welcome.render(f, layout.content, &self.store);
                (
                    self.welcome.get_title(),
                    self.welcome.get_status(),
                    self.welcome.get_status_level(),
                )
            }
        };

        self.render_status_bar(f, layout.status_bar, &title, &status, level);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect, title: &str, status_text: &str, level: LogLevel) {
        let mut spans = vec![
            Span::styled(format!("{} • ", title), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled("Q", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(" to quit • ", Style::default().fg(Color::Gray)),
            Span::styled(status_text.to_string(), Style::default().fg(level.color())),
        ];
        if let Some(update) = &self.last_update {
            spans.push(Span::styled(
                format!(" • {}", update.describe()),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let paragraph = Paragraph::new(vec![Line::from(spans)])
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White));

        f.render_widget(paragraph, area);
    }

    pub fn handle_key_event(&mut self, key: KeyCode) -> Result<()> {
        if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
            self.should_quit = true;
            return Ok(());
        }

        let handled = match (self.store.step(), self.results.as_mut()) {
            (ScanStep::Results, Some(screen)) => screen.handle_key(key, &mut self.store)?,
            _ => self.welcome.handle_key(key, &mut self.store)?,
        };
        if !handled {
            debug!("Ignoring key {:?} on step {}", key, self.store.step());
        }

        self.sync_screen();
        Ok(())
    }

    /// Mount a fresh results screen when entering the results step and drop it on leaving
    fn sync_screen(&mut self) {
        match (self.store.step(), self.results.is_some()) {
            (ScanStep::Results, false) => {
                let mut screen = ResultsScreen::mount(&mut self.store);
                screen.set_show_confidences(self.show_confidences_on_mount);
                self.results = Some(screen);
            }
            (ScanStep::Welcome, true) => {
                self.results = None;
            }
            _ => {}
        }
    }

    fn drain_store_updates(&mut self) {
        loop {
            match self.store_updates.try_recv() {
                Ok(update) => self.last_update = Some(update),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!("Status bar skipped {} store updates", skipped);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
    }
}

/// Run the results TUI until the user quits
pub fn run_app(config: &Config) -> Result<()> {
    // Build the app before touching the terminal so load errors print cleanly
    let mut app = ScanResultsApp::new(config)?;

    enable_raw_mode()?;
    with_terminal_restored(
        || {
            io::stdout().execute(EnterAlternateScreen)?;
            let backend = CrosstermBackend::new(io::stdout());
            let mut terminal = Terminal::new(backend)?;
            event_loop(&mut terminal, &mut app)
        },
        restore_terminal,
    )
}

/// Run `body`, then `restore` whether or not `body` failed. The body's error wins over a restore error.
fn with_terminal_restored<T>(
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let result = body();
    let restored = restore();
    if let Err(e) = &restored {
        warn!("Failed to restore terminal: {}", e);
    }
    let value = result?;
    restored?;
    Ok(value)
}

fn restore_terminal() -> Result<()> {
    let raw_mode = disable_raw_mode();
    // Leaving an alternate screen that was never entered is a no-op
    let screen = io::stdout().execute(LeaveAlternateScreen).map(|_| ());
    raw_mode?;
    screen?;
    Ok(())
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut ScanResultsApp) -> Result<()> {
    loop {
        terminal.draw(|f| app.draw(f))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key_event(key.code)?;
                if app.should_quit {
                    return Ok(());
                }
            }
        }
    }
}
