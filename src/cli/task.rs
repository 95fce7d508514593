//! Task subcommands
//!
//! # Usage
//! ```bash
//! jobfest add_task "Book Venue" --event "NUS Career Fair 2024"
//! jobfest mark_task "Book Venue" --event "NUS Career Fair 2024"
//! jobfest delete_task "Book Venue" --event "NUS Career Fair 2024"
//! ```

use clap::Args;

use crate::commands::{AddTaskCommand, DeleteTaskCommand, MarkTaskCommand};
use crate::core::value::{Name, TaskDescription};

#[derive(Args, Debug)]
pub struct TaskArgs {
    /// Task description
    pub description: TaskDescription,

    /// Event the task belongs to
    #[arg(long)]
    pub event: Name,
}

impl TaskArgs {
    pub fn into_add(self) -> AddTaskCommand {
        AddTaskCommand::new(self.description, self.event)
    }

    pub fn into_delete(self) -> DeleteTaskCommand {
        DeleteTaskCommand::new(self.description, self.event)
    }

    pub fn into_mark(self, done: bool) -> MarkTaskCommand {
        if done {
            MarkTaskCommand::mark(self.description, self.event)
        } else {
            MarkTaskCommand::unmark(self.description, self.event)
        }
    }
}
