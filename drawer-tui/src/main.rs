mod paths;

use std::error::Error;
use std::fs::{self, File};
use std::time::{Duration, Instant};

use crossterm::event::{Event as CtEvent, KeyCode, KeyEventKind, KeyModifiers};
use drawer::{registry, Attributes, DrawerConfig, Event, Mount, Page, Terminal, Theme};
use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Poll interval while no hide is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() {
    init_logging();

    if let Err(e) = run() {
        error!("{e}");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    paths::rotate_logs();

    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    let Ok(log_file) = File::create(&path) else { return };
    let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = DrawerConfig::default();
    let root = registry().create("app-drawer", &Attributes::new(), &config)?;

    let mut page = Page::new(root, Theme::default());
    page.mount(Mount::new(2, 1));

    let mut term = Terminal::new()?;
    let (width, height) = term.size();
    page.resize(width, height);
    info!("started with a {width}x{height} viewport");

    loop {
        term.draw(&page)?;

        let timeout = page
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL);

        for raw in term.poll(Some(timeout))? {
            if is_quit(&raw) {
                info!("quit requested");
                return Ok(());
            }
            if let Some(event) = Event::from_crossterm(&raw) {
                page.dispatch(&event, Instant::now());
            }
        }

        page.tick(Instant::now());
    }
}

/// Esc or Ctrl+Q. Plain keys go to the hovered cell.
fn is_quit(event: &CtEvent) -> bool {
    let CtEvent::Key(key) = event else {
        return false;
    };
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Esc)
        || (key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL))
}
