// repl.rs

use crate::app::App;
use crate::command::Command;
use crate::error::TodoError;
use crate::table;
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Available commands:
  add(a) <task>      Add a task (asks for a deadline)
  list(l)            List all tasks
  done(d) <id>       Mark a task as done
  delete(del) <id>   Delete a task
  help(h)            Show this help
  exit(e)            Quit";

enum Flow {
    Continue,
    Exit,
}

/// Prompt-driven command loop over any line source and sink.
pub struct Repl<R, W> {
    app: App,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(app: App, input: R, output: W) -> Self {
        Self { app, input, output }
    }

    /// Runs until `exit` or end of input. Command errors are reported and the
    /// loop goes on; only failures of the terminal streams end it early.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Todo CLI - type 'help' or 'h' for commands")?;
        loop {
            let Some(line) = self.prompt()? else {
                writeln!(self.output)?;
                break;
            };
            let flow = match Command::parse(&line) {
                Ok(Some(command)) => self.dispatch(command)?,
                Ok(None) => Flow::Continue,
                Err(err) => {
                    self.report(&err)?;
                    Flow::Continue
                }
            };
            if let Flow::Exit = flow {
                break;
            }
        }
        writeln!(self.output, "Bye!")?;
        self.output.flush()
    }

    fn dispatch(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Add(task) => self.add(&task)?,
            Command::List => self.list()?,
            Command::Done(id) => match self.app.complete(id) {
                Ok(todo) => self.success(&format!("Done: {}", todo.task))?,
                Err(err) => self.report(&err)?,
            },
            Command::Delete(id) => match self.app.soft_delete(id) {
                Ok(todo) => self.success(&format!("Deleted: {}", todo.task))?,
                Err(err) => self.report(&err)?,
            },
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self, task: &str) -> io::Result<()> {
        writeln!(
            self.output,
            "Enter a deadline for the task (e.g. 2025/01/01 12:00:00)"
        )?;
        let result = match self.prompt()? {
            Some(deadline) => self.app.add(task, &deadline),
            None => Err(TodoError::Validation(
                "No deadline entered; task not added".to_string(),
            )),
        };
        match result {
            Ok(todo) => self.success(&format!("Added: {}", todo.task)),
            Err(err) => self.report(&err),
        }
    }

    fn list(&mut self) -> io::Result<()> {
        match self.app.list() {
            Ok(todos) if todos.is_empty() => writeln!(self.output, "No todos yet."),
            Ok(todos) => {
                for line in table::render(&todos) {
                    writeln!(self.output, "{line}")?;
                }
                Ok(())
            }
            Err(err) => self.report(&err),
        }
    }

    /// Writes `> ` and reads one line. `None` at end of input.
    fn prompt(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "> ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message.green())
    }

    fn report(&mut self, err: &TodoError) -> io::Result<()> {
        if err.is_storage() {
            writeln!(
                self.output,
                "{}",
                format!("Error: {err} (changes were not saved)").red()
            )
        } else {
            writeln!(self.output, "{}", err.to_string().yellow())
        }
    }
}
