// ABOUTME: Main entry point for the Ajo terminal client
//
// Binary: ajo-tutorial
// Usage: ajo-tutorial [--config PATH] [--data-dir PATH] [--ephemeral] [COMMAND]
// - No command: launches the TUI, showing the tutorial on first run
// - status: report whether the tutorial has been seen

#![allow(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*, Terminal};
use std::{
    io::{self, IsTerminal},
    path::Path,
    time::{Duration, Instant},
};

use ajo_tutorial::app::{App, EventHandler};
use ajo_tutorial::components::LayoutComponent;
use ajo_tutorial::config::{
    AppConfig, CompletionStore, FileCompletionStore, MemoryCompletionStore, TutorialStatus,
};
use ajo_tutorial::logging;

mod cli;

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let config = AppConfig::load(args.config.as_deref())?;
    let data_dir = config.resolve_data_dir(args.data_dir.clone(), args.ephemeral)?;

    // Ephemeral runs write nothing to disk, logs included
    if let Some(dir) = &data_dir {
        if let Err(e) = logging::setup_logging(dir, &config.logging.filter) {
            eprintln!("Logging disabled: {e:#}");
        }
    }
    setup_panic_handler();

    let store = open_store(data_dir.as_deref());

    let result = match args.command {
        Some(cli::Commands::Status { format }) => {
            print_status(store.as_ref(), format, data_dir.as_deref())
        }
        Some(cli::Commands::Tui) | None => {
            let mut app = App::with_builtin_tutorial(store);
            let mut layout = LayoutComponent::new();
            let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
            run_tui(&mut app, &mut layout, tick_rate)
        }
    };

    // Ensure terminal is cleaned up on any error
    if result.is_err() {
        cleanup_terminal();
    }

    result
}

fn open_store(data_dir: Option<&Path>) -> Box<dyn CompletionStore> {
    match data_dir {
        Some(dir) => {
            let store = FileCompletionStore::in_dir(dir);
            tracing::debug!("Tutorial state at {}", store.path().display());
            Box::new(store)
        }
        None => Box::new(MemoryCompletionStore::new()),
    }
}

fn print_status(
    store: &dyn CompletionStore,
    format: cli::OutputFormat,
    data_dir: Option<&Path>,
) -> Result<()> {
    let status = TutorialStatus::read(store, data_dir)?;

    match format {
        cli::OutputFormat::Text => println!("{}", status.to_text()),
        cli::OutputFormat::Json => println!("{}", status.to_json()?),
    }

    Ok(())
}

fn run_tui<S: CompletionStore>(
    app: &mut App<S>,
    layout: &mut LayoutComponent,
    tick_rate: Duration,
) -> Result<()> {
    // Check if we have a proper TTY
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Flush stray keypresses so they don't skip through the tutorial
    while event::poll(Duration::from_millis(10)).unwrap_or(false) {
        let _ = event::read();
    }

    let result = run_tui_loop(app, layout, &mut terminal, tick_rate);

    // Always clean up terminal using unified cleanup
    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

fn run_tui_loop<S: CompletionStore>(
    app: &mut App<S>,
    layout: &mut LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    // Startup guard: ignore key events for the first 100ms
    let startup_time = Instant::now();
    const STARTUP_GUARD_MS: u64 = 100;

    loop {
        if app.state.ui_needs_refresh {
            terminal.draw(|frame| {
                layout.render(frame, &app.state);
            })?;
            app.state.ui_needs_refresh = false;
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) => {
                    if startup_time.elapsed() < Duration::from_millis(STARTUP_GUARD_MS) {
                        tracing::debug!(
                            "Ignoring key event {:?} during startup guard period",
                            key_event.code
                        );
                        continue;
                    }

                    if let Some(app_event) = EventHandler::handle_key_event(key_event, &app.state) {
                        EventHandler::process_event(app_event, &mut app.state);
                    }
                }
                Event::Resize(_, _) => {
                    app.state.ui_needs_refresh = true;
                }
                _ => {}
            }
        }

        if app.state.should_quit {
            break;
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
