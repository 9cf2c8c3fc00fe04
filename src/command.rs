// command.rs

use crate::error::TodoError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Task description; the deadline is asked for separately.
    Add(String),
    List,
    Done(u32),
    Delete(u32),
    Exit,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, TodoError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match name {
            "help" | "h" => no_args("help", &args, Command::Help)?,
            "add" | "a" => {
                if args.is_empty() {
                    return Err(TodoError::Validation(
                        "Please enter a task: add <task>".to_string(),
                    ));
                }
                Command::Add(args.join(" "))
            }
            "list" | "l" => no_args("list", &args, Command::List)?,
            "done" | "d" => Command::Done(single_id("done", &args)?),
            "delete" | "del" => Command::Delete(single_id("delete", &args)?),
            "exit" | "e" => no_args("exit", &args, Command::Exit)?,
            other => return Err(TodoError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn no_args(name: &str, args: &[&str], command: Command) -> Result<Command, TodoError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(TodoError::Validation(format!(
            "`{name}` takes no arguments"
        )))
    }
}

fn single_id(name: &str, args: &[&str]) -> Result<u32, TodoError> {
    match args {
        [] => Err(TodoError::Validation(format!(
            "Please enter an ID: {name} <id>"
        ))),
        [raw] => raw.parse().map_err(|_| {
            TodoError::Validation(format!("ID must be a number, got `{raw}`"))
        }),
        _ => Err(TodoError::Validation(format!(
            "`{name}` takes exactly one ID"
        ))),
    }
}
