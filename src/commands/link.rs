//! `link` and `unlink`: attach contacts to an event or detach them
//!
//! Both take several contact names. All of them are checked before the
//! first link changes, so a bad name leaves every event as it was.

use std::collections::HashSet;

use super::{Command, CommandResult, ListView};
use crate::core::contact::Contact;
use crate::core::error::CommandError;
use crate::core::model::Model;
use crate::core::value::Name;

pub const MESSAGE_MISSING_EVENT: &str = "This event does not exist";
pub const MESSAGE_NO_CONTACTS: &str = "At least one contact must be provided";

/// Resolve `names` to stored contacts, rejecting unknown and repeated names
fn resolve_contacts(model: &Model, names: &[Name]) -> Result<Vec<Contact>, CommandError> {
    if names.is_empty() {
        return Err(CommandError::new(MESSAGE_NO_CONTACTS));
    }

    let mut seen = HashSet::new();
    names
        .iter()
        .map(|name| {
            if !seen.insert(name) {
                return Err(CommandError::new(format!(
                    "Contact {} was given more than once",
                    name
                )));
            }
            model
                .contact(name)
                .cloned()
                .ok_or_else(|| CommandError::new(format!("Contact {} does not exist", name)))
        })
        .collect()
}

fn name_list(contacts: &[Contact]) -> String {
    contacts
        .iter()
        .map(|c| c.name().as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCommand {
    contacts: Vec<Name>,
    event_name: Name,
}

impl LinkCommand {
    pub const WORD: &'static str = "link";

    pub fn new(contacts: Vec<Name>, event_name: Name) -> Self {
        Self {
            contacts,
            event_name,
        }
    }
}

impl Command for LinkCommand {
    fn word(&self) -> &'static str {
        Self::WORD
    }

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if !model.has_event(&self.event_name) {
            return Err(CommandError::new(MESSAGE_MISSING_EVENT));
        }
        let contacts = resolve_contacts(model, &self.contacts)?;
        if let Some(linked) = contacts
            .iter()
            .find(|c| model.is_linked(c, &self.event_name))
        {
            return Err(CommandError::new(format!(
                "Contact {} is already linked to {}",
                linked.name(),
                self.event_name
            )));
        }

        model.link_contacts(&contacts, &self.event_name)?;
        Ok(CommandResult::new(
            format!("Linked {} to {}", name_list(&contacts), self.event_name),
            ListView::Events,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlinkCommand {
    contacts: Vec<Name>,
    event_name: Name,
}

impl UnlinkCommand {
    pub const WORD: &'static str = "unlink";

    pub fn new(contacts: Vec<Name>, event_name: Name) -> Self {
        Self {
            contacts,
            event_name,
        }
    }
}

impl Command for UnlinkCommand {
    fn word(&self) -> &'static str {
        Self::WORD
    }

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if !model.has_event(&self.event_name) {
            return Err(CommandError::new(MESSAGE_MISSING_EVENT));
        }
        let contacts = resolve_contacts(model, &self.contacts)?;
        if let Some(unlinked) = contacts
            .iter()
            .find(|c| !model.is_linked(c, &self.event_name))
        {
            return Err(CommandError::new(format!(
                "Contact {} is not linked to {}",
                unlinked.name(),
                self.event_name
            )));
        }

        model.unlink_contacts(&contacts, &self.event_name)?;
        Ok(CommandResult::new(
            format!("Unlinked {} from {}", name_list(&contacts), self.event_name),
            ListView::Events,
        ))
    }
}
