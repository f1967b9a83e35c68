//! Terminal runner (default binary).
//!
//! Drives a [`GameSession`] from key presses and redraws the grid as plain
//! text after every command. Persistence goes to `WATER2048_DATA_DIR`; logs
//! go to a file in the same directory so they never corrupt the screen.

use std::io::{self, Stdout, Write};

use anyhow::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use log::warn;

use water_2048::core::{Events, GameSession, MemoryStore, ProgressStore};
use water_2048::input::{handle_key_event, should_quit, Command};
use water_2048::store::{FileKv, KvProgressStore};
use water_2048::types::{fact_message, GameEvent, BLOCKER, EMPTY, GRID_SIZE};
use water_2048::RunnerConfig;

type Session = GameSession<Box<dyn ProgressStore>>;

const HELP: &str = "arrows/wasd/hjkl move  u undo  n/r new  m mode  enter/esc/space dismiss  q quit";

fn main() -> Result<()> {
    let config = RunnerConfig::from_env();
    let _logger = init_logging(&config);

    let mut session: Session = GameSession::new(config.mode, config.seed, open_store(&config));

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = run(&mut stdout, &mut session);

    // Always try to restore terminal state.
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    result
}

fn init_logging(config: &RunnerConfig) -> Option<LoggerHandle> {
    let started = Logger::try_with_env_or_str(&config.log_spec).and_then(|logger| {
        logger
            .log_to_file(
                FileSpec::default()
                    .directory(&config.data_dir)
                    .basename("water-2048"),
            )
            .format(flexi_logger::detailed_format)
            .start()
    });
    match started {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("logging disabled: {}", e);
            None
        }
    }
}

/// Gameplay never blocks on storage: fall back to memory if the directory is unusable.
fn open_store(config: &RunnerConfig) -> Box<dyn ProgressStore> {
    match FileKv::open(&config.data_dir) {
        Ok(kv) => Box::new(KvProgressStore::with_namespace(kv, &config.namespace)),
        Err(e) => {
            warn!(
                "cannot open {}, progress will not be saved: {}",
                config.data_dir.display(),
                e
            );
            Box::new(MemoryStore::default())
        }
    }
}

fn run(out: &mut Stdout, session: &mut Session) -> Result<()> {
    let mut status = String::new();

    loop {
        draw(out, session, &status)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }

        let Some(command) = handle_key_event(key) else {
            continue;
        };

        status.clear();
        match command {
            Command::Move(direction) => match session.apply_move(direction) {
                Ok(outcome) => status = describe_all(outcome.events),
                Err(e) => {
                    warn!("move rejected: {}", e);
                    status = format!("Move rejected: {}", e);
                }
            },
            Command::Undo => {
                if !session.undo() {
                    status = "Nothing to undo".to_string();
                }
            }
            Command::NewGame => {
                let mode = session.mode();
                status = describe_all(session.reset(mode));
            }
            Command::CycleMode => {
                let next = session.mode().next();
                let events = describe_all(session.set_mode(next));
                status = format!("Switched to {} mode", next.as_str());
                if !events.is_empty() {
                    status.push_str("  ");
                    status.push_str(&events);
                }
            }
            Command::Dismiss => {
                session.dismiss_fact();
            }
        }
    }
}

fn describe_all(events: Events) -> String {
    events.into_iter().map(describe).collect::<Vec<_>>().join("  ")
}

fn describe(event: GameEvent) -> String {
    match event {
        GameEvent::FactUnlocked { threshold } => format!("Fact unlocked at {}!", threshold),
        GameEvent::GameWon { score } => format!("You built the well! Score {}. Keep going?", score),
        GameEvent::GameOver { score } => format!("Game over. Final score: {}", score),
    }
}

fn draw(out: &mut Stdout, session: &Session, status: &str) -> Result<()> {
    let snap = session.snapshot();

    let mut lines: Vec<String> = Vec::with_capacity(GRID_SIZE * 2 + 8);
    lines.push(format!(
        "Water 2048 [{}]   score {}   best {}",
        snap.mode.as_str(),
        snap.score,
        snap.best
    ));
    lines.push(String::new());

    let border = format!("+{}", "------+".repeat(GRID_SIZE));
    lines.push(border.clone());
    for row in snap.board.iter() {
        let cells: String = row.iter().map(|&v| format!("{:>5} |", cell_label(v))).collect();
        lines.push(format!("|{}", cells));
        lines.push(border.clone());
    }
    lines.push(String::new());

    if let Some(threshold) = snap.showing_fact {
        lines.push(format!("Fact ({}): {}", threshold, fact_message(threshold)));
        lines.push("  [enter/esc/space] dismiss".to_string());
    }
    if !status.is_empty() {
        lines.push(status.to_string());
    }
    lines.push(String::new());
    lines.push(HELP.to_string());

    queue!(out, Clear(ClearType::All))?;
    for (y, line) in lines.iter().enumerate() {
        queue!(out, MoveTo(0, y as u16), Print(line))?;
    }
    out.flush()?;
    Ok(())
}

fn cell_label(value: u32) -> String {
    match value {
        EMPTY => String::new(),
        BLOCKER => "##".to_string(),
        v => v.to_string(),
    }
}
