//! `add_tag`, `delete_tag` and `view_tags`

use super::{Command, CommandResult, ListView};
use crate::core::error::CommandError;
use crate::core::model::Model;
use crate::core::value::Tag;

pub const MESSAGE_DUPLICATE_TAG: &str = "This tag already exists";
pub const MESSAGE_MISSING_TAG: &str = "This tag does not exist";

/// Adds a tag to the tag list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTagCommand {
    to_add: Tag,
}

impl AddTagCommand {
    pub const WORD: &'static str = "add_tag";

    pub fn new(tag: Tag) -> Self {
        Self { to_add: tag }
    }
}

impl Command for AddTagCommand {
    fn word(&self) -> &'static str {
        Self::WORD
    }

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if model.has_tag(&self.to_add) {
            return Err(CommandError::new(MESSAGE_DUPLICATE_TAG));
        }

        model.add_tag(self.to_add.clone())?;
        Ok(CommandResult::new(
            format!("New tag added: {}", self.to_add),
            ListView::Tags,
        ))
    }
}

/// Deletes a tag from the tag list and from every contact carrying it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTagCommand {
    to_delete: Tag,
}

impl DeleteTagCommand {
    pub const WORD: &'static str = "delete_tag";

    pub fn new(tag: Tag) -> Self {
        Self { to_delete: tag }
    }
}

impl Command for DeleteTagCommand {
    fn word(&self) -> &'static str {
        Self::WORD
    }

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if !model.has_tag(&self.to_delete) {
            return Err(CommandError::new(MESSAGE_MISSING_TAG));
        }

        model.delete_tag(&self.to_delete)?;
        Ok(CommandResult::new(
            format!("Deleted tag: {}", self.to_delete),
            ListView::Tags,
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewTagsCommand;

impl ViewTagsCommand {
    pub const WORD: &'static str = "view_tags";
}

impl Command for ViewTagsCommand {
    fn word(&self) -> &'static str {
        Self::WORD
    }

    fn execute(&self, _model: &mut Model) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::new("Listed all tags", ListView::Tags))
    }

    fn is_mutating(&self) -> bool {
        false
    }
}
