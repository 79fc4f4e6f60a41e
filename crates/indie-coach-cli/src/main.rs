mod app;
mod lines;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use indie_coach_config::Config;
use indie_coach_engine::{load_history, render_response, save_history};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::{
    env, fs,
    io::{self, Read, Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

use app::App;

const PAGE: u16 = 10;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.as_slice() {
        [_, flag, source] if flag == "--render" => {
            init_logging("warn");
            render_to_stdout(source)
        }
        [_, flag, out] if flag == "--export" => {
            init_logging("warn");
            export_to(None, Path::new(out))
        }
        [_, flag, out, history] if flag == "--export" => {
            init_logging("warn");
            export_to(Some(Path::new(history)), Path::new(out))
        }
        [_] => {
            init_logging("off");
            view_history(None)
        }
        [_, path] if !path.starts_with('-') => {
            init_logging("off");
            view_history(Some(Path::new(path)))
        }
        _ => {
            let bin = args.first().map(String::as_str).unwrap_or("indie-coach-cli");
            eprintln!("Usage: {bin} [history.json]");
            eprintln!("       {bin} --render <response.md|->");
            eprintln!("       {bin} --export <out.json> [history.json]");
            process::exit(1);
        }
    }
}

/// Logs go to stderr, so the viewer keeps them off unless `RUST_LOG` asks.
fn init_logging(default_filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Renders one response (a file, or stdin for `-`) and prints it as JSON.
fn render_to_stdout(source: &str) -> Result<()> {
    let text = if source == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read response from stdin")?;
        text
    } else {
        fs::read_to_string(source).with_context(|| format!("Failed to read {source}"))?
    };

    let rendered = render_response(&text);
    println!("{}", serde_json::to_string_pretty(&rendered)?);
    Ok(())
}

/// Writes a copy of the history without attachment contents.
fn export_to(arg: Option<&Path>, out: &Path) -> Result<()> {
    let history_path = resolve_history_path(arg);
    let count = export_history(&history_path, out)?;
    println!("Exported {count} chats to {}", out.display());
    Ok(())
}

fn export_history(from: &Path, to: &Path) -> Result<usize> {
    let sessions = load_history(from)?;
    save_history(to, &sessions)?;
    Ok(sessions.len())
}

fn resolve_history_path(arg: Option<&Path>) -> PathBuf {
    match Config::load_or_default() {
        Ok(config) => config.history_path_or(arg),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Pass a history file explicitly or fix {}", Config::config_path().display());
            process::exit(1);
        }
    }
}

fn view_history(arg: Option<&Path>) -> Result<()> {
    let history_path = resolve_history_path(arg);
    let sessions = match load_history(&history_path) {
        Ok(sessions) => sessions,
        Err(e) => {
            let source = if arg.is_none() {
                format!(" (from config file '{}')", Config::config_path().display())
            } else {
                String::new()
            };
            eprintln!("Error: {e}{source}");
            process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(sessions);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Char('q') => return Ok(()),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(()),
            KeyCode::Down | KeyCode::Char('j') => app.next_session(),
            KeyCode::Up | KeyCode::Char('k') => app.previous_session(),
            KeyCode::Tab => app.focus_next(),
            KeyCode::BackTab => app.focus_previous(),
            KeyCode::Esc => app.clear_focus(),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Left => app.nudge(-1.0),
            KeyCode::Right => app.nudge(1.0),
            KeyCode::Char('r') => app.reset_focused(),
            KeyCode::PageDown => app.scroll_down(PAGE),
            KeyCode::PageUp => app.scroll_up(PAGE),
            KeyCode::Char(c) => app.input_char(c),
            _ => {}
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // Session list panel
    let session_items: Vec<ListItem> = app
        .sessions
        .iter()
        .map(|s| ListItem::new(Line::from(format!("💬 {}", s.title))))
        .collect();

    let sessions = List::new(session_items)
        .block(Block::default().borders(Borders::ALL).title("Chats"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(sessions, chunks[0], &mut app.session_state);

    // Conversation panel
    let title = app
        .selected_session()
        .map(|s| s.title.clone())
        .unwrap_or_else(|| "Conversation".to_string());
    let content = Paragraph::new(lines::session_lines(app))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[1]);

    let help = Line::from(vec![
        Span::raw("q: Quit | ↑/k ↓/j: Chat | "),
        Span::raw("Tab: Next field | 0-9 . ⌫: Edit | ←/→: Slide | r: Reset | "),
        Span::raw("PgUp/PgDn: Scroll"),
    ]);
    f.render_widget(Paragraph::new(help), rows[1]);
}
