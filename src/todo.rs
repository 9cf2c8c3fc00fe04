// todo.rs

use crate::error::TodoError;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Deadline input pattern, e.g. `2025/01/01 12:00:00`.
pub const DEADLINE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Pending,
    Done,
    Deleted,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Done => "done",
            Status::Deleted => "deleted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub task: String,
    pub limit: DateTime<Local>,
    pub created_at: DateTime<Local>,
    pub updated_at: DateTime<Local>,
    #[serde(default, deserialize_with = "unset_time::deserialize")]
    pub deleted_at: Option<DateTime<Local>>,
    pub is_done: bool,
    pub is_deleted: bool,
}

impl Todo {
    pub fn new(id: u32, task: String, limit: DateTime<Local>, now: DateTime<Local>) -> Self {
        Self {
            id,
            task,
            limit,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            is_done: false,
            is_deleted: false,
        }
    }

    /// Deleted wins over done, although a done todo can never be deleted.
    pub fn status(&self) -> Status {
        if self.is_deleted {
            Status::Deleted
        } else if self.is_done {
            Status::Done
        } else {
            Status::Pending
        }
    }

    pub fn ensure_completable(&self) -> Result<(), TodoError> {
        if self.is_done {
            return Err(TodoError::AlreadyDone(self.id));
        }
        Ok(())
    }

    pub fn ensure_deletable(&self) -> Result<(), TodoError> {
        if self.is_done {
            return Err(TodoError::CannotDeleteCompleted(self.id));
        }
        if self.is_deleted {
            return Err(TodoError::AlreadyDeleted(self.id));
        }
        Ok(())
    }

    pub fn complete(&mut self, now: DateTime<Local>) -> Result<(), TodoError> {
        self.ensure_completable()?;
        self.is_done = true;
        self.updated_at = now;
        Ok(())
    }

    pub fn soft_delete(&mut self, now: DateTime<Local>) -> Result<(), TodoError> {
        self.ensure_deletable()?;
        self.is_deleted = true;
        self.deleted_at = Some(now);
        self.updated_at = now;
        Ok(())
    }
}

/// Parses a deadline typed by the user as local time.
pub fn parse_deadline(input: &str) -> Result<DateTime<Local>, TodoError> {
    let input = input.trim();
    let naive = NaiveDateTime::parse_from_str(input, DEADLINE_FORMAT).map_err(|_| {
        TodoError::Validation(format!(
            "Invalid deadline `{input}`, expected YYYY/MM/DD HH:MM:SS (e.g. 2025/01/01 12:00:00)"
        ))
    })?;
    Local.from_local_datetime(&naive).single().ok_or_else(|| {
        TodoError::Validation(format!("Deadline `{input}` is not a valid local time"))
    })
}

/// Id for the next todo: one past the highest id in use, so ids are never reused.
pub fn next_id(todos: &[Todo]) -> Result<u32, TodoError> {
    match todos.iter().map(|t| t.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(TodoError::IdsExhausted(max)),
    }
}

mod unset_time {
    use chrono::{DateTime, Datelike, Local};
    use serde::{Deserialize, Deserializer};

    // Older files store the zero time (0001-01-01) instead of null.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Local>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<DateTime<Local>> = Option::deserialize(deserializer)?;
        Ok(value.filter(|t| t.year() > 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn at(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    fn pending(id: u32) -> Todo {
        Todo::new(
            id,
            "buy milk".to_string(),
            at(2025, 1, 1, 12),
            at(2024, 12, 1, 9),
        )
    }

    #[test]
    fn new_todo_is_pending() {
        let todo = pending(1);
        assert_eq!(todo.status(), Status::Pending);
        assert_eq!(todo.created_at, todo.updated_at);
        assert!(todo.deleted_at.is_none());
    }

    #[test]
    fn complete_sets_done_and_is_not_repeatable() {
        let mut todo = pending(1);
        let later = at(2024, 12, 2, 9);
        todo.complete(later).unwrap();
        assert!(todo.is_done);
        assert_eq!(todo.updated_at, later);

        let err = todo.complete(later + Duration::hours(1)).unwrap_err();
        assert!(matches!(err, TodoError::AlreadyDone(1)));
        assert_eq!(todo.updated_at, later);
    }

    #[test]
    fn done_todo_cannot_be_deleted() {
        let mut todo = pending(3);
        todo.complete(at(2024, 12, 2, 9)).unwrap();
        let before = todo.clone();

        let err = todo.soft_delete(at(2024, 12, 3, 9)).unwrap_err();
        assert!(matches!(err, TodoError::CannotDeleteCompleted(3)));
        assert_eq!(todo, before);
    }

    #[test]
    fn soft_delete_once() {
        let mut todo = pending(2);
        let when = at(2024, 12, 5, 18);
        todo.soft_delete(when).unwrap();
        assert!(todo.is_deleted);
        assert_eq!(todo.deleted_at, Some(when));
        assert_eq!(todo.status(), Status::Deleted);

        let err = todo.soft_delete(when).unwrap_err();
        assert!(matches!(err, TodoError::AlreadyDeleted(2)));
    }

    #[test]
    fn deleted_label_wins_over_done() {
        let mut todo = pending(1);
        todo.is_done = true;
        todo.is_deleted = true;
        assert_eq!(todo.status().label(), "deleted");
    }

    #[test]
    fn parse_deadline_accepts_fixed_pattern_only() {
        assert_eq!(
            parse_deadline(" 2025/01/01 12:00:00 ").unwrap(),
            at(2025, 1, 1, 12)
        );
        for bad in [
            "2025-01-01 12:00:00",
            "2025/01/01",
            "tomorrow",
            "",
            "2025/13/01 00:00:00",
        ] {
            assert!(
                matches!(parse_deadline(bad), Err(TodoError::Validation(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn next_id_is_one_past_the_highest() {
        assert_eq!(next_id(&[]).unwrap(), 1);
        assert_eq!(next_id(&[pending(4), pending(2)]).unwrap(), 5);
    }

    #[test]
    fn next_id_refuses_to_wrap_past_u32_max() {
        let err = next_id(&[pending(7), pending(u32::MAX)]).unwrap_err();
        assert!(matches!(err, TodoError::IdsExhausted(u32::MAX)));
    }

    #[test]
    fn legacy_zero_deleted_at_reads_as_unset() {
        let json = r#"{
            "id": 1,
            "task": "old",
            "done": false,
            "limit": "2025-01-01T12:00:00Z",
            "created_at": "2024-12-01T09:00:00Z",
            "updated_at": "2024-12-01T09:00:00Z",
            "deleted_at": "0001-01-01T00:00:00Z",
            "is_done": false,
            "is_deleted": false
        }"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.deleted_at, None);
        assert_eq!(todo.task, "old");
    }
}
