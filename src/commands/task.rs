//! Task commands: add, delete, mark, unmark

use super::{Command, CommandResult, ListView};
use crate::core::error::CommandError;
use crate::core::model::Model;
use crate::core::value::{Name, TaskDescription};

pub const MESSAGE_DUPLICATE_TASK: &str = "This task already exists in the event";
pub const MESSAGE_MISSING_TASK: &str = "This task does not exist";
pub const MESSAGE_MISSING_EVENT: &str = "This event does not exist";

/// Adds a task to an existing event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskCommand {
    description: TaskDescription,
    event_name: Name,
}

impl AddTaskCommand {
    pub const WORD: &'static str = "add_task";

    pub fn new(description: TaskDescription, event_name: Name) -> Self {
        Self {
            description,
            event_name,
        }
    }
}

impl Command for AddTaskCommand {
    fn word(&self) -> &'static str {
        Self::WORD
    }

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if !model.has_event(&self.event_name) {
            return Err(CommandError::new(MESSAGE_MISSING_EVENT));
        }
        if model.has_task(&self.description, &self.event_name) {
            return Err(CommandError::new(MESSAGE_DUPLICATE_TASK));
        }

        model.add_task(self.description.clone(), &self.event_name)?;
        Ok(CommandResult::new(
            format!(
                "New task added: {} to event: {}",
                self.description, self.event_name
            ),
            ListView::Events,
        ))
    }
}

/// Deletes a task from its event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTaskCommand {
    description: TaskDescription,
    event_name: Name,
}

impl DeleteTaskCommand {
    pub const WORD: &'static str = "delete_task";

    pub fn new(description: TaskDescription, event_name: Name) -> Self {
        Self {
            description,
            event_name,
        }
    }
}

impl Command for DeleteTaskCommand {
    fn word(&self) -> &'static str {
        Self::WORD
    }

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if !model.has_task(&self.description, &self.event_name) {
            return Err(CommandError::new(MESSAGE_MISSING_TASK));
        }

        model.delete_task(&self.description, &self.event_name)?;
        Ok(CommandResult::new(
            format!(
                "Deleted task: {} from event: {}",
                self.description, self.event_name
            ),
            ListView::Events,
        ))
    }
}

/// Marks a task as done, or back to not done
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkTaskCommand {
    description: TaskDescription,
    event_name: Name,
    done: bool,
}

impl MarkTaskCommand {
    pub const MARK_WORD: &'static str = "mark_task";
    pub const UNMARK_WORD: &'static str = "unmark_task";

    pub fn mark(description: TaskDescription, event_name: Name) -> Self {
        Self {
            description,
            event_name,
            done: true,
        }
    }

    pub fn unmark(description: TaskDescription, event_name: Name) -> Self {
        Self {
            description,
            event_name,
            done: false,
        }
    }
}

impl Command for MarkTaskCommand {
    fn word(&self) -> &'static str {
        if self.done {
            Self::MARK_WORD
        } else {
            Self::UNMARK_WORD
        }
    }

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if !model.has_task(&self.description, &self.event_name) {
            return Err(CommandError::new(MESSAGE_MISSING_TASK));
        }

        model.set_task_done(&self.description, &self.event_name, self.done)?;
        let status = if self.done { "done" } else { "not done" };
        Ok(CommandResult::new(
            format!(
                "Marked task as {}: {} in event: {}",
                status, self.description, self.event_name
            ),
            ListView::Events,
        ))
    }
}
