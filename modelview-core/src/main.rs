//! src/main.rs
//! ============================================================================
//! # Model Catalog Viewer Entry Point
//!
//! An interactive terminal viewer over a locally-stored catalog of
//! machine-learning model records: live substring filtering on three fields,
//! column sorting, and one-key symlink command generation to the clipboard.

use std::{
    io::{self, Stdout},
    sync::Arc,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend as Backend};
use tokio::{
    signal,
    sync::{Mutex, MutexGuard, Notify},
};
use tracing::{error, info};

use modelview_core::{
    Logger,
    config::Config,
    controller::{Action, Controller},
    model::app_state::AppState,
    view::ui::View,
};

type AppTerminal = Terminal<Backend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup panic handler early
    setup_panic_handler();

    Logger::init_tracing();
    info!("Starting Model Catalog Viewer");

    // Configuration failures are fatal and must be readable: resolve them
    // before the terminal enters the alternate screen.
    let config: Arc<Config> = Arc::new(
        Config::load()
            .await
            .context("Failed to load configuration")?,
    );

    let app: App = App::new(config).context("Failed to initialize application")?;

    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

/// Application runtime: terminal, controller, and shared state.
struct App {
    terminal: AppTerminal,
    controller: Controller,
    state: Arc<Mutex<AppState>>,
    shutdown: Arc<Notify>,
}

impl App {
    fn new(config: Arc<Config>) -> Result<Self> {
        let terminal: AppTerminal = setup_terminal().context("Failed to initialize terminal")?;

        let mut app_state: AppState = AppState::new(config);

        // Initial snapshot. A missing or corrupt store is a status-line
        // error, not a startup failure; the table just starts empty.
        app_state.load_records();

        let state: Arc<Mutex<AppState>> = Arc::new(Mutex::new(app_state));
        let controller: Controller = Controller::new(state.clone());
        let shutdown: Arc<Notify> = Arc::new(Notify::new());

        info!("Application initialization complete");

        Ok(Self {
            terminal,
            controller,
            state,
            shutdown,
        })
    }

    /// Run the main application event loop.
    async fn run(mut self) -> Result<()> {
        self.setup_shutdown_handler();

        info!("Starting main event loop");

        loop {
            // Render UI if needed
            self.render().await?;

            let action: Action = tokio::select! {
                _ = self.shutdown.notified() => {
                    info!("Shutdown signal received");
                    break;
                }

                maybe_action = self.controller.next_action() => {
                    match maybe_action {
                        Some(action) => action,
                        None => {
                            info!("Terminal event stream ended");
                            break;
                        }
                    }
                }
            };

            if matches!(action, Action::Quit) {
                info!("Quit action received");
                break;
            }

            self.controller.dispatch_action(action).await;
        }

        info!("Main event loop ended");
        Ok(())
    }

    /// Render the UI if a redraw is needed.
    async fn render(&mut self) -> Result<()> {
        let mut state: MutexGuard<'_, AppState> = self.state.lock().await;

        if state.ui.redraw {
            self.terminal
                .draw(|frame: &mut Frame<'_>| {
                    View::redraw(frame, &mut state);
                })
                .context("Failed to draw terminal")?;

            state.ui.redraw = false;
        }

        Ok(())
    }

    /// Setup signal handler for graceful shutdown.
    fn setup_shutdown_handler(&self) {
        let shutdown: Arc<Notify> = self.shutdown.clone();

        tokio::spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C signal");
                    shutdown.notify_one();
                }
                Err(e) => {
                    error!("Failed to listen for Ctrl+C: {e}");
                }
            }
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            error!("Failed to cleanup terminal: {e}");
        }
    }
}

/// Initialize terminal in raw mode with alternate screen and mouse capture
/// (header clicks sort columns).
fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend: Backend<Stdout> = Backend::new(stdout);
    let terminal: AppTerminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!("Terminal setup complete");
    Ok(terminal)
}

/// Restore terminal to normal mode.
fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    info!("Terminal cleanup complete");
    Ok(())
}

/// Setup panic handler for graceful terminal restoration.
fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal on panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);

        error!("Application panicked: {panic_info}");
        original_hook(panic_info);
    }));
}
