//! Deterministic display ordering for dashboard collections.
//!
//! Applied by the subscription listeners before every render, so the same
//! rules hold regardless of which store implementation backs the list.

use super::Document;
use crate::model::dashboard::{BoardNote, BoardTask};
use std::cmp::Ordering;

/// Notes sort newest first by save date.
pub fn sort_notes(docs: &mut [Document<BoardNote>]) {
    docs.sort_by(|a, b| b.data.date_ms.cmp(&a.data.date_ms));
}

/// Tasks sort incomplete first, then by priority `High > Medium > Low`,
/// then by ascending deadline with missing deadlines last. Ties keep
/// arrival order (the sort is stable).
pub fn sort_tasks(docs: &mut [Document<BoardTask>]) {
    docs.sort_by(|a, b| {
        a.data
            .completed
            .cmp(&b.data.completed)
            .then_with(|| b.data.priority.rank().cmp(&a.data.priority.rank()))
            .then_with(|| compare_deadlines(a.data.deadline_ms, b.data.deadline_ms))
    });
}

fn compare_deadlines(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::{sort_notes, sort_tasks};
    use crate::dashboard::Document;
    use crate::model::dashboard::{BoardNote, BoardTask, Priority};
    use uuid::Uuid;

    fn note(date_ms: i64) -> Document<BoardNote> {
        Document {
            id: Uuid::new_v4(),
            data: BoardNote {
                title: "n".to_string(),
                content: String::new(),
                category: "general".to_string(),
                date_ms,
            },
        }
    }

    fn task(completed: bool, priority: Priority, deadline_ms: Option<i64>) -> Document<BoardTask> {
        Document {
            id: Uuid::new_v4(),
            data: BoardTask {
                description: "t".to_string(),
                priority,
                deadline_ms,
                completed,
            },
        }
    }

    #[test]
    fn notes_sort_newest_first() {
        let mut docs = vec![note(1_000), note(3_000), note(2_000)];
        sort_notes(&mut docs);
        let dates: Vec<i64> = docs.iter().map(|d| d.data.date_ms).collect();
        assert_eq!(dates, vec![3_000, 2_000, 1_000]);
    }

    #[test]
    fn tasks_sort_incomplete_then_priority_then_deadline() {
        let mut docs = vec![
            task(true, Priority::High, None),
            task(false, Priority::Low, Some(1_000)),
            task(false, Priority::High, Some(9_000)),
            task(false, Priority::High, Some(2_000)),
            task(false, Priority::High, None),
        ];
        sort_tasks(&mut docs);

        assert!(!docs[0].data.completed);
        assert_eq!(docs[0].data.deadline_ms, Some(2_000));
        assert_eq!(docs[1].data.deadline_ms, Some(9_000));
        // Same rank without a deadline comes after dated peers.
        assert_eq!(docs[2].data.deadline_ms, None);
        assert_eq!(docs[2].data.priority, Priority::High);
        assert_eq!(docs[3].data.priority, Priority::Low);
        assert!(docs[4].data.completed);
    }
}
