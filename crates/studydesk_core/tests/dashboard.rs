use std::cell::Cell;
use std::rc::Rc;
use studydesk_core::dashboard::{content_to_editable, content_to_stored};
use studydesk_core::{
    AutoConfirm, BoardNote, BoardTask, Clock, DeletePrompt, DocumentStore, MemoryDocumentStore,
    NoteDraft, NotesBoard, Priority, SessionIdentity, TaskDraft, TasksBoard,
};

const APP_ID: &str = "studydesk";
const UID: &str = "uid-1";

#[derive(Clone)]
struct FakeClock(Rc<Cell<i64>>);

impl FakeClock {
    fn at(ms: i64) -> Self {
        Self(Rc::new(Cell::new(ms)))
    }

    fn advance_to(&self, ms: i64) {
        self.0.set(ms);
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> i64 {
        self.0.get()
    }
}

struct DeclineAll;

impl DeletePrompt for DeclineAll {
    fn confirm_delete(&self, _label: &str) -> bool {
        false
    }
}

fn tasks_collection() -> String {
    format!("artifacts/{APP_ID}/users/{UID}/tasks")
}

fn task_board(
    store: &Rc<RefCellStore<BoardTask>>,
) -> TasksBoard<MemoryDocumentStore<BoardTask>, SessionIdentity, AutoConfirm> {
    let board = TasksBoard::new(
        Rc::clone(store),
        SessionIdentity::with_token_uid(UID),
        AutoConfirm,
        APP_ID,
    );
    board.attach();
    board
}

type RefCellStore<T> = std::cell::RefCell<MemoryDocumentStore<T>>;

fn note_board(
    store: &Rc<RefCellStore<BoardNote>>,
    clock: FakeClock,
) -> NotesBoard<MemoryDocumentStore<BoardNote>, SessionIdentity, FakeClock, AutoConfirm> {
    let board = NotesBoard::new(
        Rc::clone(store),
        SessionIdentity::with_token_uid(UID),
        clock,
        AutoConfirm,
        APP_ID,
    );
    board.attach();
    board
}

#[test]
fn attach_delivers_the_current_snapshot_immediately() {
    let store = Rc::new(RefCellStore::new(MemoryDocumentStore::new()));
    store
        .borrow_mut()
        .add(&tasks_collection(), BoardTask::quick("pre-existing"))
        .unwrap();

    let board = task_board(&store);
    assert_eq!(board.view().rows().len(), 1);
    assert_eq!(board.view().rows()[0].description, "pre-existing");
}

#[test]
fn quick_add_uses_medium_priority_and_no_deadline() {
    let store = Rc::new(RefCellStore::new(MemoryDocumentStore::new()));
    let mut board = task_board(&store);

    board.quick_add("  Read ch.1  ");

    let rows = board.view().rows().to_vec();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "Read ch.1");
    assert_eq!(rows[0].priority, Priority::Medium);
    assert_eq!(rows[0].deadline_ms, None);
    assert!(!rows[0].completed);
}

#[test]
fn quick_add_rejects_blank_input() {
    let store = Rc::new(RefCellStore::new(MemoryDocumentStore::new()));
    let mut board = task_board(&store);

    board.quick_add("   ");
    assert!(board.view().rows().is_empty());
}

#[test]
fn every_mutation_re_renders_the_view() {
    let store = Rc::new(RefCellStore::new(MemoryDocumentStore::new()));
    let mut board = task_board(&store);

    board.quick_add("one");
    assert_eq!(board.counts().total, 1);
    board.quick_add("two");
    assert_eq!(board.counts().total, 2);

    let id = board.view().rows()[0].id;
    board.toggle_completed(id);
    assert_eq!(board.counts().completed, 1);
}

#[test]
fn out_of_band_store_writes_re_render_the_attached_view() {
    let store = Rc::new(RefCellStore::new(MemoryDocumentStore::new()));
    let board = task_board(&store);
    assert!(board.view().rows().is_empty());

    // Another session writing to the same collection.
    store
        .borrow_mut()
        .add(&tasks_collection(), BoardTask::quick("from elsewhere"))
        .unwrap();

    assert_eq!(board.view().rows().len(), 1);
}

#[test]
fn tasks_sort_by_completion_priority_then_deadline() {
    let store = Rc::new(RefCellStore::new(MemoryDocumentStore::new()));
    let mut board = task_board(&store);

    board.submit(TaskDraft {
        description: "low late".to_string(),
        priority: Priority::Low,
        deadline_ms: Some(1_000),
    });
    board.submit(TaskDraft {
        description: "high no deadline".to_string(),
        priority: Priority::High,
        deadline_ms: None,
    });
    board.submit(TaskDraft {
        description: "high soon".to_string(),
        priority: Priority::High,
        deadline_ms: Some(2_000),
    });
    board.quick_add("medium quick");

    let done_id = board
        .view()
        .rows()
        .iter()
        .find(|row| row.description == "high soon")
        .map(|row| row.id)
        .unwrap();
    board.toggle_completed(done_id);

    let order: Vec<String> = board
        .view()
        .rows()
        .iter()
        .map(|row| row.description.clone())
        .collect();
    assert_eq!(
        order,
        vec!["high no deadline", "medium quick", "low late", "high soon"]
    );
    assert!(board.view().rows()[3].completed);
}

#[test]
fn clear_completed_removes_exactly_the_completed_set() {
    let store = Rc::new(RefCellStore::new(MemoryDocumentStore::new()));
    let mut board = task_board(&store);

    board.quick_add("keep a");
    board.quick_add("done b");
    board.quick_add("done c");
    let ids: Vec<_> = board
        .view()
        .rows()
        .iter()
        .filter(|row| row.description.starts_with("done"))
        .map(|row| row.id)
        .collect();
    for id in ids {
        board.toggle_completed(id);
    }
    assert_eq!(board.counts().completed, 2);

    board.clear_completed();

    let rows = board.view().rows().to_vec();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "keep a");
    assert_eq!(board.counts().completed, 0);
}

#[test]
fn editing_a_task_replaces_its_fields_and_reopens_it() {
    let store = Rc::new(RefCellStore::new(MemoryDocumentStore::new()));
    let mut board = task_board(&store);

    board.quick_add("original");
    let id = board.view().rows()[0].id;
    board.toggle_completed(id);

    let draft = board.begin_edit(id).unwrap();
    assert_eq!(draft.description, "original");
    assert_eq!(board.editing(), Some(id));

    board.submit(TaskDraft {
        description: "rewritten".to_string(),
        priority: Priority::High,
        deadline_ms: Some(9_000),
    });

    let rows = board.view().rows().to_vec();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "rewritten");
    assert_eq!(rows[0].priority, Priority::High);
    assert!(!rows[0].completed);
    assert_eq!(board.editing(), None);
}

#[test]
fn unresolved_identity_makes_all_task_operations_noops() {
    let store = Rc::new(RefCellStore::new(MemoryDocumentStore::new()));
    let mut board = TasksBoard::new(
        Rc::clone(&store),
        SessionIdentity::pending(),
        AutoConfirm,
        APP_ID,
    );

    board.attach();
    board.quick_add("never stored");
    board.clear_completed();

    assert!(board.view().rows().is_empty());
    let all = store.borrow().query_where(&tasks_collection(), &|_| true);
    assert!(all.is_empty());
}

#[test]
fn notes_sort_newest_first_and_edit_restamps_the_date() {
    let store = Rc::new(RefCellStore::new(MemoryDocumentStore::new()));
    let clock = FakeClock::at(1_000);
    let mut board = note_board(&store, clock.clone());

    board.submit(NoteDraft {
        title: "older".to_string(),
        content: "body".to_string(),
        category: "general".to_string(),
    });
    clock.advance_to(2_000);
    board.submit(NoteDraft {
        title: "newer".to_string(),
        content: "body".to_string(),
        category: "general".to_string(),
    });

    let titles: Vec<String> = board
        .view()
        .cards()
        .iter()
        .map(|card| card.title.clone())
        .collect();
    assert_eq!(titles, vec!["newer", "older"]);

    // Editing the older note moves it back to the top.
    let older = board.view().cards()[1].id;
    let draft = board.begin_edit(older).unwrap();
    clock.advance_to(3_000);
    board.submit(draft);

    let titles: Vec<String> = board
        .view()
        .cards()
        .iter()
        .map(|card| card.title.clone())
        .collect();
    assert_eq!(titles, vec!["older", "newer"]);
}

#[test]
fn note_content_round_trips_between_stored_and_editable_forms() {
    let store = Rc::new(RefCellStore::new(MemoryDocumentStore::new()));
    let mut board = note_board(&store, FakeClock::at(1_000));

    board.submit(NoteDraft {
        title: "multi-line".to_string(),
        content: "first line\nsecond line".to_string(),
        category: "general".to_string(),
    });

    let card = board.view().cards()[0].clone();
    assert_eq!(card.content, "first line<br>second line");

    let draft = board.begin_edit(card.id).unwrap();
    assert_eq!(draft.content, "first line\nsecond line");
    board.cancel_edit();
    assert_eq!(board.editing(), None);
}

#[test]
fn stored_br_variants_all_convert_back_to_newlines() {
    assert_eq!(content_to_editable("a<br>b<BR>c<br/>d<br />e"), "a\nb\nc\nd\ne");
    assert_eq!(content_to_stored("a\nb"), "a<br>b");
}

#[test]
fn blank_note_title_is_rejected() {
    let store = Rc::new(RefCellStore::new(MemoryDocumentStore::new()));
    let mut board = note_board(&store, FakeClock::at(1_000));

    board.submit(NoteDraft {
        title: "   ".to_string(),
        content: "body".to_string(),
        category: "general".to_string(),
    });
    assert!(board.view().is_empty());
}

#[test]
fn declined_confirmation_keeps_the_note() {
    let store = Rc::new(RefCellStore::new(MemoryDocumentStore::new()));
    let mut board = NotesBoard::new(
        Rc::clone(&store),
        SessionIdentity::with_token_uid(UID),
        FakeClock::at(1_000),
        DeclineAll,
        APP_ID,
    );
    board.attach();

    board.submit(NoteDraft {
        title: "sticky".to_string(),
        content: String::new(),
        category: "general".to_string(),
    });
    let id = board.view().cards()[0].id;

    board.delete(id);
    assert_eq!(board.view().cards().len(), 1);
}
