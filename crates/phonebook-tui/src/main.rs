mod actions;
mod app;
mod clipboard;
mod ui;

use std::fs::{self, OpenOptions};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use crate::actions::execute_action;
use crate::app::App;
use crate::clipboard::{Clipboard, SystemClipboard};
use phonebook_config as config;
use phonebook_store::ids::now_millis;
use phonebook_store::repo::ContactNew;
use phonebook_store::Store;

#[derive(Debug, Parser)]
#[command(name = "phonebook-tui", version, about = "phonebook TUI")]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    copy_feedback_ms: Option<u64>,
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let app_config = config::load(args.config).with_context(|| "load config")?;

    let log_file = args.log_file.or_else(|| app_config.log_file.clone());
    init_logging(log_file);

    let copy_feedback_ms = match args.copy_feedback_ms {
        Some(value) => config::validate_copy_feedback_ms(value)?,
        None => app_config.copy_feedback_ms,
    };

    let extra = app_config.contacts.iter().map(|contact| ContactNew {
        name: contact.name.clone(),
        phone: contact.phone.clone(),
    });
    let store = Store::bootstrap(app_config.seed_defaults, extra, now_millis())
        .with_context(|| "build contact book")?;
    info!(contacts = store.contacts().count(), "contact book ready");

    let mut app = App::new(Duration::from_millis(copy_feedback_ms));
    let mut clipboard = SystemClipboard::default();

    let mut terminal = TerminalGuard::new()?;
    run_app(&mut terminal, &store, &mut clipboard, &mut app)
}

fn run_app(
    terminal: &mut TerminalGuard,
    store: &Store,
    clipboard: &mut dyn Clipboard,
    app: &mut App,
) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        while let Some(action) = app.next_action() {
            if let Err(err) = execute_action(app, store, clipboard, action) {
                app.set_error(err.to_string());
            }
        }
        app.tick(Instant::now());

        terminal.terminal_mut().draw(|frame| ui::draw(frame, app))?;

        if app.should_quit {
            break;
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::from_secs(0));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    Ok(())
}

/// Logs go to a file; writing to the terminal would corrupt the alternate
/// screen. Without a usable log file, events are dropped.
fn init_logging(log_file: Option<PathBuf>) {
    use tracing_subscriber::{fmt, EnvFilter};

    let path = match log_file {
        Some(path) => path,
        None => match config::default_log_path() {
            Ok(path) => path,
            Err(_) => return,
        },
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            original_hook(info);
        }));

        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
