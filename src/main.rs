//! Todo TUI - Terminal User Interface for an in-memory todo list.
//!
//! Main entry point and event loop for the application.

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod notify;
mod todo;
mod ui;

use app::{App, UiMode};
use clap::Parser;
use cli::Cli;
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
};
use std::io;
use std::time::{Duration, Instant};
use ui::RowAction;

const HELP: &str =
    "q quit | / search | n new | j/k move | c complete | d delete | Enter commit | Esc cancel";

/// Screen regions, recomputed on every draw.
#[derive(Debug, Clone, Copy, Default)]
struct Areas {
    screen: Rect,
    search: Rect,
    new_todo: Rect,
    list: Rect,
    status: Rect,
}

impl Areas {
    fn split(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search box
                Constraint::Length(3), // New todo box
                Constraint::Min(0),    // Todo list
                Constraint::Length(1), // Status bar
            ])
            .split(area);
        Self {
            screen: area,
            search: chunks[0],
            new_todo: chunks[1],
            list: chunks[2],
            status: chunks[3],
        }
    }
}

/// Main application entry point.
///
/// # Details
/// Loads configuration (the optional positional argument overrides its path),
/// starts file logging, seeds the store and runs the event loop.
/// `--init-config [PATH]` writes the default configuration and exits.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(target) = cli.init_config {
        let path = match target {
            Some(p) => p,
            None => Config::default_config_path()?,
        };
        Config::default().save(Some(&path))?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;

    match config.log_file_path() {
        Ok(log_file) => {
            if let Err(e) = logging::init_logging(&config.log_level, &log_file) {
                eprintln!("Warning: logging disabled: {:#}", e);
            }
        }
        Err(e) => eprintln!("Warning: logging disabled: {:#}", e),
    }

    let mut app = App::from_config(&config);
    tracing::info!(
        todos = app.store.len(),
        scope = ?config.completion_scope,
        "starting"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "event loop failed");
    }
    tracing::info!(todos = app.store.len(), "exiting");
    result
}

/// Render the complete UI.
fn render_ui(f: &mut ratatui::Frame, app: &App, areas: Areas) {
    ui::render_search(app, areas.search, f.buffer_mut());
    ui::render_new_todo(app, areas.new_todo, f.buffer_mut());
    ui::render_list(app, areas.list, f.buffer_mut());

    let status_text = app.status_message.as_deref().unwrap_or(HELP);
    let status = ratatui::widgets::Paragraph::new(ratatui::text::Line::from(status_text));
    f.render_widget(status, areas.status);

    ui::render_toasts(app, areas.screen, f.buffer_mut());
}

/// Main event loop.
///
/// # Details
/// Polls with a timeout so notifications expire even without input.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    let mut areas = Areas::default();

    loop {
        app.tick(Instant::now());
        terminal.draw(|f| {
            areas = Areas::split(f.area());
            render_ui(f, app, areas);
        })?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_key(app, key) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(app, mouse, areas),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Route a key press to the focused widget.
///
/// # Returns
/// * `bool` - True if the application should quit
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match app.mode {
        UiMode::List => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::Char('k') => app.move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.move_down(),
            KeyCode::Char('/') => app.enter_mode(UiMode::Search),
            KeyCode::Char('n') | KeyCode::Char('a') => app.enter_mode(UiMode::NewTodo),
            KeyCode::Char('c') | KeyCode::Char(' ') | KeyCode::Enter => app.complete_selected(),
            KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
            _ => {}
        },
        UiMode::Search | UiMode::NewTodo => match key.code {
            KeyCode::Enter => {
                if app.mode == UiMode::Search {
                    app.commit_search();
                } else {
                    app.commit_new_todo();
                }
            }
            KeyCode::Esc => app.cancel_input(),
            KeyCode::Backspace => {
                if let Some(input) = app.active_input() {
                    input.pop();
                }
            }
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some(input) = app.active_input() {
                    input.push(c);
                }
            }
            _ => {}
        },
    }

    false
}

/// Handle mouse events (scroll and click).
///
/// # Details
/// Wheel moves the selection. A left click on a toast is swallowed so it never
/// reaches the row drawn underneath. A click on an input box focuses it; a click
/// on a row selects it and triggers the affordance under the cursor.
fn handle_mouse_event(app: &mut App, mouse: MouseEvent, areas: Areas) {
    match mouse.kind {
        MouseEventKind::ScrollUp if app.mode == UiMode::List => app.move_up(),
        MouseEventKind::ScrollDown if app.mode == UiMode::List => app.move_down(),
        MouseEventKind::Down(MouseButton::Left) => {
            let (column, row) = (mouse.column, mouse.row);
            let on_toast = ui::toast_areas(app, areas.screen)
                .into_iter()
                .any(|rect| contains(rect, column, row));
            if on_toast {
                return;
            }
            if contains(areas.search, column, row) {
                app.enter_mode(UiMode::Search);
            } else if contains(areas.new_todo, column, row) {
                app.enter_mode(UiMode::NewTodo);
            } else if let Some(hit) = ui::hit_test(app, areas.list, column, row) {
                app.mode = UiMode::List;
                app.select(hit.index);
                match hit.action {
                    Some(RowAction::Complete) => app.complete_selected(),
                    Some(RowAction::Delete) => app.delete_selected(),
                    None => {}
                }
            }
        }
        _ => {}
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}
