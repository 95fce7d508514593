//! Contact commands: add, delete, edit, and the contact list views

use super::{Command, CommandResult, ListView};
use crate::core::contact::{Contact, EditContactDescriptor};
use crate::core::error::CommandError;
use crate::core::filter;
use crate::core::model::Model;
use crate::core::value::{Name, Tag};

pub const MESSAGE_DUPLICATE_CONTACT: &str = "This contact already exists";
pub const MESSAGE_MISSING_CONTACT: &str = "This contact does not exist";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided";

/// Every tag must already be in the tag list
fn require_tags_exist<'a>(
    model: &Model,
    tags: impl IntoIterator<Item = &'a Tag>,
) -> Result<(), CommandError> {
    for tag in tags {
        if !model.has_tag(tag) {
            return Err(CommandError::new(format!(
                "Tag {} does not exist, add it with add_tag first",
                tag
            )));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddContactCommand {
    to_add: Contact,
}

impl AddContactCommand {
    pub const WORD: &'static str = "add_contact";

    pub fn new(contact: Contact) -> Self {
        Self { to_add: contact }
    }
}

impl Command for AddContactCommand {
    fn word(&self) -> &'static str {
        Self::WORD
    }

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if model.has_contact(&self.to_add) {
            return Err(CommandError::new(MESSAGE_DUPLICATE_CONTACT));
        }
        require_tags_exist(model, self.to_add.tags())?;

        model.add_contact(self.to_add.clone())?;
        Ok(CommandResult::new(
            format!("New contact added: {}", self.to_add),
            ListView::Contacts,
        ))
    }
}

/// Deletes a contact and unlinks it from every event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteContactCommand {
    name: Name,
}

impl DeleteContactCommand {
    pub const WORD: &'static str = "delete_contact";

    pub fn new(name: Name) -> Self {
        Self { name }
    }
}

impl Command for DeleteContactCommand {
    fn word(&self) -> &'static str {
        Self::WORD
    }

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = model
            .contact(&self.name)
            .cloned()
            .ok_or_else(|| CommandError::new(MESSAGE_MISSING_CONTACT))?;

        let removed = model.delete_contact(&target)?;
        Ok(CommandResult::new(
            format!("Deleted Contact: {}", removed),
            ListView::Contacts,
        ))
    }
}

/// Edits the contact with the given name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditContactCommand {
    name: Name,
    descriptor: EditContactDescriptor,
}

impl EditContactCommand {
    pub const WORD: &'static str = "edit_contact";

    pub fn new(name: Name, descriptor: EditContactDescriptor) -> Self {
        Self { name, descriptor }
    }
}

impl Command for EditContactCommand {
    fn word(&self) -> &'static str {
        Self::WORD
    }

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if !self.descriptor.is_any_field_edited() {
            return Err(CommandError::new(MESSAGE_NOT_EDITED));
        }

        let target = model
            .contact(&self.name)
            .cloned()
            .ok_or_else(|| CommandError::new(MESSAGE_MISSING_CONTACT))?;
        let edited = self.descriptor.apply(&target);

        if !target.is_same_contact(&edited) && model.has_contact(&edited) {
            return Err(CommandError::new(MESSAGE_DUPLICATE_CONTACT));
        }
        require_tags_exist(model, edited.tags())?;

        let feedback = format!("Edited Contact: {}", edited);
        model.set_contact(&target, edited)?;
        Ok(CommandResult::new(feedback, ListView::Contacts))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewContactsCommand;

impl ViewContactsCommand {
    pub const WORD: &'static str = "view_contacts";
}

impl Command for ViewContactsCommand {
    fn word(&self) -> &'static str {
        Self::WORD
    }

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_contact_list(filter::show_all_contacts);
        Ok(CommandResult::new("Listed all contacts", ListView::Contacts))
    }

    fn is_mutating(&self) -> bool {
        false
    }
}

/// Lists contacts whose name contains any keyword as a whole word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindContactCommand {
    keywords: Vec<String>,
}

impl FindContactCommand {
    pub const WORD: &'static str = "find_contact";

    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl Command for FindContactCommand {
    fn word(&self) -> &'static str {
        Self::WORD
    }

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if self.keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(CommandError::new("At least one keyword must be provided"));
        }

        model.update_filtered_contact_list(filter::name_contains_any(self.keywords.clone()));
        Ok(CommandResult::new(
            format!("{} contacts listed!", model.filtered_contacts().len()),
            ListView::Contacts,
        ))
    }

    fn is_mutating(&self) -> bool {
        false
    }
}

/// Lists contacts carrying any of the given tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterContactsCommand {
    tags: Vec<Tag>,
}

impl FilterContactsCommand {
    pub const WORD: &'static str = "filter_by_tag";

    pub fn new(tags: Vec<Tag>) -> Self {
        Self { tags }
    }
}

impl Command for FilterContactsCommand {
    fn word(&self) -> &'static str {
        Self::WORD
    }

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if self.tags.is_empty() {
            return Err(CommandError::new("At least one tag must be provided"));
        }
        require_tags_exist(model, &self.tags)?;

        model.update_filtered_contact_list(filter::has_any_tag(self.tags.clone()));
        Ok(CommandResult::new(
            format!("{} contacts listed!", model.filtered_contacts().len()),
            ListView::Contacts,
        ))
    }

    fn is_mutating(&self) -> bool {
        false
    }
}
