//! Commands - validated, single-step operations on the store
//!
//! Every command is built from already-validated values and executed
//! against a `Model` passed in by the caller. A command either returns a
//! `CommandResult` after one store mutation, or a `CommandError` with the
//! store untouched.

use std::fmt;

use tracing::{info, warn};

use crate::core::error::CommandError;
use crate::core::model::Model;

pub mod contact;
pub mod event;
pub mod link;
pub mod tag;
pub mod task;

pub use contact::{
    AddContactCommand, DeleteContactCommand, EditContactCommand, FilterContactsCommand,
    FindContactCommand, ViewContactsCommand,
};
pub use event::{AddEventCommand, DeleteEventCommand, SelectEventCommand, ViewEventsCommand};
pub use link::{LinkCommand, UnlinkCommand};
pub use tag::{AddTagCommand, DeleteTagCommand, ViewTagsCommand};
pub use task::{AddTaskCommand, DeleteTaskCommand, MarkTaskCommand};

/// Which list the caller should show after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Contacts,
    Events,
    Tags,
}

/// Outcome of a successful command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub view: ListView,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>, view: ListView) -> Self {
        Self {
            feedback: feedback.into(),
            view,
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.feedback)
    }
}

pub trait Command: fmt::Debug {
    /// Word the command is invoked by (e.g. `add_tag`)
    fn word(&self) -> &'static str;

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError>;

    /// Whether a successful run changes the persisted state
    fn is_mutating(&self) -> bool {
        true
    }
}

/// Run `command` against `model`, logging the outcome
pub fn execute(command: &dyn Command, model: &mut Model) -> Result<CommandResult, CommandError> {
    match command.execute(model) {
        Ok(result) => {
            info!(command = command.word(), "{}", result.feedback);
            Ok(result)
        }
        Err(e) => {
            warn!(command = command.word(), "rejected: {}", e);
            Err(e)
        }
    }
}
