use studydesk_core::db::open_db_in_memory;
use studydesk_core::{
    AutoConfirm, DeletePrompt, ListAction, ListStore, Note, NotesWidget, SqliteKvStore,
};

struct DeclineAll;

impl DeletePrompt for DeclineAll {
    fn confirm_delete(&self, _label: &str) -> bool {
        false
    }
}

fn labels(widget: &NotesWidget<SqliteKvStore<'_>, impl DeletePrompt>) -> Vec<String> {
    widget
        .view()
        .items()
        .iter()
        .map(|item| item.label.clone())
        .collect()
}

#[test]
fn add_appends_in_arrival_order() {
    let conn = open_db_in_memory().unwrap();
    let mut widget = NotesWidget::new(SqliteKvStore::new(&conn), AutoConfirm);
    widget.refresh();
    assert!(widget.view().is_empty());

    widget.add("first");
    widget.add("second");

    assert_eq!(labels(&widget), vec!["first", "second"]);
}

#[test]
fn add_increases_rendered_node_count_by_one() {
    let conn = open_db_in_memory().unwrap();
    let mut widget = NotesWidget::new(SqliteKvStore::new(&conn), AutoConfirm);
    widget.refresh();
    widget.add("a");
    widget.add("b");

    let before = widget.view().items().len();
    widget.add("c");
    assert_eq!(widget.view().items().len(), before + 1);
}

#[test]
fn blank_and_whitespace_input_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let mut widget = NotesWidget::new(SqliteKvStore::new(&conn), AutoConfirm);
    widget.refresh();

    widget.add("");
    widget.add("   \t  ");

    assert!(widget.view().is_empty());
    let store: ListStore<_, Note> = ListStore::new(SqliteKvStore::new(&conn), "sidebar.notes");
    assert!(store.load().is_empty());
}

#[test]
fn input_is_trimmed_before_storage() {
    let conn = open_db_in_memory().unwrap();
    let mut widget = NotesWidget::new(SqliteKvStore::new(&conn), AutoConfirm);
    widget.refresh();

    widget.add("  keep this  ");
    assert_eq!(labels(&widget), vec!["keep this"]);
}

#[test]
fn delete_middle_note_with_confirmation_granted() {
    let conn = open_db_in_memory().unwrap();
    let mut widget = NotesWidget::new(SqliteKvStore::new(&conn), AutoConfirm);
    widget.refresh();
    widget.add("a");
    widget.add("b");
    widget.add("c");

    let middle = widget.view().items()[1].entry;
    widget.delete(middle);

    assert_eq!(labels(&widget), vec!["a", "c"]);
}

#[test]
fn delete_declined_leaves_list_untouched() {
    let conn = open_db_in_memory().unwrap();
    let mut widget = NotesWidget::new(SqliteKvStore::new(&conn), DeclineAll);
    widget.refresh();
    widget.add("a");
    widget.add("b");

    let first = widget.view().items()[0].entry;
    widget.delete(first);

    assert_eq!(labels(&widget), vec!["a", "b"]);
}

#[test]
fn delete_unknown_id_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut widget = NotesWidget::new(SqliteKvStore::new(&conn), AutoConfirm);
    widget.refresh();
    widget.add("a");

    widget.delete(uuid::Uuid::new_v4());
    assert_eq!(labels(&widget), vec!["a"]);
}

#[test]
fn render_is_idempotent_without_mutation() {
    let conn = open_db_in_memory().unwrap();
    let mut widget = NotesWidget::new(SqliteKvStore::new(&conn), AutoConfirm);
    widget.refresh();
    widget.add("a");
    widget.add("b");

    let once: Vec<_> = widget.view().items().to_vec();
    widget.refresh();
    widget.refresh();
    assert_eq!(widget.view().items(), once.as_slice());
}

#[test]
fn stale_binding_after_delete_dispatches_to_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut widget = NotesWidget::new(SqliteKvStore::new(&conn), AutoConfirm);
    widget.refresh();
    widget.add("a");
    widget.add("b");

    let binding = widget.view().items()[0]
        .actions
        .iter()
        .copied()
        .find(|binding| binding.action == ListAction::Delete)
        .unwrap();

    widget.dispatch(binding);
    assert_eq!(labels(&widget), vec!["b"]);

    // The entry is gone; the kept binding no longer resolves.
    widget.dispatch(binding);
    assert_eq!(labels(&widget), vec!["b"]);
}

#[test]
fn notes_persist_across_widget_instances() {
    let conn = open_db_in_memory().unwrap();
    {
        let mut widget = NotesWidget::new(SqliteKvStore::new(&conn), AutoConfirm);
        widget.refresh();
        widget.add("durable");
    }

    let mut reopened = NotesWidget::new(SqliteKvStore::new(&conn), AutoConfirm);
    reopened.refresh();
    assert_eq!(labels(&reopened), vec!["durable"]);
}

#[test]
fn every_operation_reloads_rather_than_trusting_the_snapshot() {
    let conn = open_db_in_memory().unwrap();
    let mut widget = NotesWidget::new(SqliteKvStore::new(&conn), AutoConfirm);
    widget.refresh();
    widget.add("a");

    // Out-of-band write through a second store handle, invisible to the
    // widget's last render.
    let store: ListStore<_, Note> = ListStore::new(SqliteKvStore::new(&conn), "sidebar.notes");
    let mut list = store.load();
    list.push(Note::new("b"));
    store.save(&list).unwrap();

    widget.add("c");
    assert_eq!(labels(&widget), vec!["a", "b", "c"]);
}
