//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::ui_consts;
use crate::data::OutageDataSource;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::Instant;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying outage statistics and filters.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// Data source backing the dashboard's metrics and chart.
    source: Arc<dyn OutageDataSource>,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// UI configuration handed to the dashboard on creation.
    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(source: Arc<dyn OutageDataSource>, ui_config: UIConfig) -> Self {
        Self {
            start_time: Instant::now(),
            source,
            current_screen: Screen::Splash,
            ui_config,
        }
    }

    /// Transition from the splash screen to the dashboard.
    fn enter_dashboard(&mut self) {
        let state = DashboardState::new(self.start_time, self.ui_config.clone());
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    // UI event loop
    loop {
        // Update the state based on the current screen
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update(app.source.as_ref()).await;
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= ui_consts::SPLASH_DURATION {
                app.enter_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(ui_consts::EVENT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Esc always exits
                if key.code == KeyCode::Esc {
                    return Ok(());
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        // Any key press will skip the splash screen
                        app.enter_dashboard();
                    }
                    Screen::Dashboard(state) => {
                        // 'q' exits unless a text input is consuming keystrokes
                        if key.code == KeyCode::Char('q') && !state.is_text_input_focused() {
                            return Ok(());
                        }
                        state.handle_key(key.code);
                    }
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
