//! Terminal user interface: `AppState`, the main loop and widget layout.

pub mod chord_view;
pub mod help_overlay;
pub mod info_panel;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

use crate::branding::APP_DISPLAY_NAME;
use crate::config::Config;
use crate::music::{Key, Navigator};
use crate::shortcuts::{Action, ShortcutRegistry};

pub use chord_view::ChordView;
pub use help_overlay::HelpOverlay;
pub use info_panel::InfoPanel;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// State of the single chord screen.
pub struct AppState {
    /// Selected key
    pub navigator: Navigator,
    /// UI preferences
    pub config: Config,
    /// Resolved colors
    pub theme: Theme,
    /// Help overlay visibility
    pub show_help: bool,
    /// Transient message for the status bar
    pub status_message: String,
    /// Set when the user quits
    pub should_quit: bool,
    shortcuts: ShortcutRegistry,
}

impl AppState {
    /// Creates the state starting at `start`.
    #[must_use]
    pub fn new(config: Config, start: Key) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        Self {
            navigator: Navigator::with_key(start),
            show_help: config.ui.show_help_on_startup,
            config,
            theme,
            status_message: String::new(),
            should_quit: false,
            shortcuts: ShortcutRegistry::new(),
        }
    }

    /// Currently selected key.
    #[must_use]
    pub const fn current_key(&self) -> Key {
        self.navigator.current()
    }

    /// Applies an action to the state.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::NextKey => {
                let key = self.navigator.advance();
                debug!("Advanced to {key}");
                self.status_message.clear();
            }
            Action::PreviousKey => {
                let key = self.navigator.retreat();
                debug!("Retreated to {key}");
                self.status_message.clear();
            }
            Action::FirstKey => {
                self.navigator.jump_to(Key::C);
                self.status_message.clear();
            }
            Action::TogglePreviews => {
                let ui = &mut self.config.ui;
                ui.show_neighbor_previews = !ui.show_neighbor_previews;
                self.status_message = format!(
                    "Neighbor previews {}",
                    if ui.show_neighbor_previews { "on" } else { "off" }
                );
            }
            Action::TogglePentatonic => {
                let ui = &mut self.config.ui;
                ui.show_pentatonic = !ui.show_pentatonic;
                self.status_message = format!(
                    "Pentatonic positions {}",
                    if ui.show_pentatonic { "on" } else { "off" }
                );
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::Cancel => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Routes a key event through the shortcut registry.
    pub fn handle_key_event(&mut self, key: event::KeyEvent) {
        // Windows reports releases too
        if key.kind != KeyEventKind::Press {
            return;
        }

        if let Some(action) = self.shortcuts.lookup(key) {
            self.dispatch(action);
        }
    }
}

/// Setup terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    info!("Starting chord screen at {}", state.current_key());

    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                state.handle_key_event(key);
            }
        }

        if state.should_quit {
            break;
        }
    }

    info!("Leaving chord screen at {}", state.current_key());
    Ok(())
}

/// Render the whole screen.
pub fn render(f: &mut Frame, state: &AppState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_main_content(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state);

    if state.show_help {
        HelpOverlay::render(f, f.area(), &state.shortcuts, &state.theme);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let title = Line::from(vec![
        Span::styled(
            format!(" {APP_DISPLAY_NAME} "),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "- Navigate through different keys to transpose chord progressions",
            Style::default().fg(theme.text_muted),
        ),
    ]);

    let bar = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary)),
    );
    f.render_widget(bar, area);
}

fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    let ui = &state.config.ui;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ChordView::height(ui.show_neighbor_previews)),
            Constraint::Length(1),
            Constraint::Length(InfoPanel::height(ui.show_pentatonic)),
            Constraint::Min(0),
        ])
        .split(area);

    ChordView::render(f, chunks[0], state);
    InfoPanel::render(f, chunks[2], state);
}
