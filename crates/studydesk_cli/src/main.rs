//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `studydesk_core` wiring end to
//!   end: store bootstrap, one widget round-trip per family, timer state.
//! - Keep output deterministic for quick local sanity checks.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use studydesk_core::db::open_db_in_memory;
use studydesk_core::{
    core_version, DeletePrompt, MemoryDocumentStore, NotesWidget, SessionIdentity, SqliteKvStore,
    StudyTimer, SystemClock, TasksBoard, TasksWidget,
};

/// Confirmation source: automatic for scripted runs, stdin with
/// `--interactive`.
#[derive(Clone, Copy)]
enum Prompt {
    Auto,
    Stdin,
}

impl DeletePrompt for Prompt {
    fn confirm_delete(&self, label: &str) -> bool {
        match self {
            Self::Auto => true,
            Self::Stdin => {
                print!("delete `{label}`? [y/N] ");
                let _ = io::stdout().flush();
                let mut line = String::new();
                if io::stdin().lock().read_line(&mut line).is_err() {
                    return false;
                }
                matches!(line.trim(), "y" | "Y" | "yes")
            }
        }
    }
}

fn main() {
    let prompt = if std::env::args().any(|arg| arg == "--interactive") {
        Prompt::Stdin
    } else {
        Prompt::Auto
    };

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("studydesk_cli: failed to open store: {err}");
            std::process::exit(1);
        }
    };

    let mut notes = NotesWidget::new(SqliteKvStore::new(&conn), prompt);
    notes.refresh();
    notes.add("Skim the ownership chapter");
    notes.add("Collect flashcard topics");

    let mut tasks = TasksWidget::new(SqliteKvStore::new(&conn), prompt);
    tasks.refresh();
    tasks.add("Read ch.1");
    tasks.add("Quiz");
    let first = tasks.view().items().first().map(|item| item.entry);
    if let Some(first) = first {
        tasks.toggle_completed(first);
    }

    let timer = StudyTimer::new(SqliteKvStore::new(&conn), SystemClock);
    timer.start();

    let board_store = Rc::new(RefCell::new(MemoryDocumentStore::new()));
    let mut identity = SessionIdentity::pending();
    identity.resolve_anonymous();
    let mut board = TasksBoard::new(Rc::clone(&board_store), identity, prompt, "studydesk");
    board.attach();
    board.quick_add("Review flashcards");

    println!("studydesk_core version={}", core_version());
    println!("notes={}", notes.view().items().len());
    let counts = tasks.counts();
    println!("tasks={} completed={}", counts.total, counts.completed);
    println!("board_tasks={}", board.counts().total);
    println!("timer_running={} display={}", timer.is_running(), timer.display());
}
