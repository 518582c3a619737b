use glow_tour::app::{App, AppMessage, Screen};
use glow_tour::clock::ClockTicker;
use glow_tour::storage::{config_dir, FilePreferenceStore};
use glow_tour::theme::ThemeResolver;
use glow_tour::ui;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // Handle --version flag before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("glow-tour {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    // Log to a file in the config directory; stdout belongs to the TUI
    init_logging();

    let runtime = tokio::runtime::Runtime::new()?;

    // Resolve the theme before the first frame so the startup palette is
    // already correct
    let store = FilePreferenceStore::open_default()?;
    let mut app = App::new(ThemeResolver::new(Box::new(store)))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Capture initial terminal dimensions
    let size = terminal.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    // Main event loop
    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    // Restore terminal
    restore_terminal(&mut terminal)?;

    result
}

/// Route tracing output to `tour.log` in the config directory.
///
/// Logging is best-effort: if the config directory or log file cannot be
/// created the app simply runs without logs.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let Ok(dir) = config_dir() else {
        return;
    };
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("tour.log"))
    else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    // Menu-bar clock refresh; aborted on drop when run_app returns
    let _clock = ClockTicker::spawn(app.message_tx.clone());

    loop {
        // Draw the UI only when needed (dirty flag)
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, app);
            })?;
            app.needs_redraw = false;
        }

        // Poll keyboard events and the message channel using tokio::select!
        // 16ms tick keeps pending selection commits close to their deadline
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick(Instant::now());
            }

            // Handle keyboard events
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(width, height) => {
                            app.update_terminal_dimensions(width, height);
                            continue;
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            match key.code {
                                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                    app.quit();
                                }
                                KeyCode::Char('q') | KeyCode::Esc => {
                                    app.quit();
                                }
                                KeyCode::Tab => app.next_screen(),
                                KeyCode::BackTab => app.previous_screen(),
                                KeyCode::Char('1') => app.go_to_screen(Screen::Features),
                                KeyCode::Char('2') => app.go_to_screen(Screen::Faq),
                                KeyCode::Char('3') => app.go_to_screen(Screen::Changelog),
                                KeyCode::Up | KeyCode::Char('k') => app.select_up(Instant::now()),
                                KeyCode::Down | KeyCode::Char('j') => app.select_down(Instant::now()),
                                KeyCode::Home => app.activate_index(0, Instant::now()),
                                KeyCode::Char('t') => app.toggle_theme(),
                                KeyCode::Char('s') => app.cycle_header_layout(),
                                KeyCode::Char('i') => app.toggle_header_icons(),
                                _ => {}
                            }
                        }
                        _ => {}
                    }
                }
            }

            // Handle messages from async tasks (clock)
            Some(message) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => None,
                }
            } => {
                app.handle_message(message);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
