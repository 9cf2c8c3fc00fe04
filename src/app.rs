// app.rs

use crate::error::TodoError;
use crate::store::Store;
use crate::todo::{Todo, next_id, parse_deadline};
use chrono::Local;
use log::{debug, info, warn};

/// Todo lifecycle operations. Each one reads the whole list from the store,
/// validates, mutates in memory and writes the whole list back.
pub struct App {
    store: Store,
}

impl App {
    pub fn new(store: Store) -> Self {
        debug!("event=app_init data_file={}", store.path().display());
        Self { store }
    }

    pub fn add(&self, description: &str, deadline: &str) -> Result<Todo, TodoError> {
        let task = description.trim();
        if task.is_empty() {
            return Err(TodoError::Validation(
                "Description cannot be empty.".to_string(),
            ));
        }
        let limit = parse_deadline(deadline)?;

        let mut todos = self.store.load()?;
        let id = next_id(&todos)?;
        let todo = Todo::new(id, task.to_string(), limit, Local::now());
        todos.push(todo.clone());
        self.store.save(&todos)?;

        info!("event=todo_add status=ok id={}", todo.id);
        Ok(todo)
    }

    pub fn complete(&self, id: u32) -> Result<Todo, TodoError> {
        self.transition(id, "todo_done", |todo| todo.complete(Local::now()))
    }

    pub fn soft_delete(&self, id: u32) -> Result<Todo, TodoError> {
        self.transition(id, "todo_delete", |todo| todo.soft_delete(Local::now()))
    }

    pub fn list(&self) -> Result<Vec<Todo>, TodoError> {
        self.store.load()
    }

    // Guards run in order: lookup, then the todo's own state checks. Nothing
    // is written unless all of them pass.
    fn transition<F>(&self, id: u32, event: &str, apply: F) -> Result<Todo, TodoError>
    where
        F: FnOnce(&mut Todo) -> Result<(), TodoError>,
    {
        let mut todos = self.store.load()?;
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))
            .and_then(|todo| {
                apply(todo)?;
                Ok(todo.clone())
            })
            .inspect_err(|e| warn!("event={event} status=rejected id={id} reason=\"{e}\""))?;
        self.store.save(&todos)?;

        info!("event={event} status=ok id={id}");
        Ok(todo)
    }
}
