//! Event commands: add, delete, and the event list views

use super::{Command, CommandResult, ListView};
use crate::core::error::CommandError;
use crate::core::event::Event;
use crate::core::filter;
use crate::core::model::Model;
use crate::core::value::Name;

pub const MESSAGE_DUPLICATE_EVENT: &str = "This event already exists";
pub const MESSAGE_MISSING_EVENT: &str = "This event does not exist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddEventCommand {
    to_add: Event,
}

impl AddEventCommand {
    pub const WORD: &'static str = "add_event";

    pub fn new(event: Event) -> Self {
        Self { to_add: event }
    }
}

impl Command for AddEventCommand {
    fn word(&self) -> &'static str {
        Self::WORD
    }

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if model.has_event(self.to_add.name()) {
            return Err(CommandError::new(MESSAGE_DUPLICATE_EVENT));
        }

        model.add_event(self.to_add.clone())?;
        Ok(CommandResult::new(
            format!("New event added: {}", self.to_add),
            ListView::Events,
        ))
    }
}

/// Deletes an event together with its tasks; linked contacts stay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteEventCommand {
    name: Name,
}

impl DeleteEventCommand {
    pub const WORD: &'static str = "delete_event";

    pub fn new(name: Name) -> Self {
        Self { name }
    }
}

impl Command for DeleteEventCommand {
    fn word(&self) -> &'static str {
        Self::WORD
    }

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if !model.has_event(&self.name) {
            return Err(CommandError::new(MESSAGE_MISSING_EVENT));
        }

        let removed = model.delete_event(&self.name)?;
        Ok(CommandResult::new(
            format!("Deleted Event: {}", removed),
            ListView::Events,
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewEventsCommand;

impl ViewEventsCommand {
    pub const WORD: &'static str = "view_events";
}

impl Command for ViewEventsCommand {
    fn word(&self) -> &'static str {
        Self::WORD
    }

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_event_list(filter::show_all_events);
        Ok(CommandResult::new("Listed all events", ListView::Events))
    }

    fn is_mutating(&self) -> bool {
        false
    }
}

/// Narrows both views to one event and the contacts linked to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectEventCommand {
    name: Name,
}

impl SelectEventCommand {
    pub const WORD: &'static str = "select_event";

    pub fn new(name: Name) -> Self {
        Self { name }
    }
}

impl Command for SelectEventCommand {
    fn word(&self) -> &'static str {
        Self::WORD
    }

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if !model.has_event(&self.name) {
            return Err(CommandError::new(MESSAGE_MISSING_EVENT));
        }

        model.set_contact_filter(filter::linked_to(self.name.clone()));
        model.update_filtered_event_list(filter::event_named(self.name.clone()));
        Ok(CommandResult::new(
            format!(
                "Selected event: {}, {} linked contacts listed!",
                self.name,
                model.filtered_contacts().len()
            ),
            ListView::Contacts,
        ))
    }

    fn is_mutating(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contact::fixtures::contact;
    use crate::core::event::fixtures::event;
    use crate::core::value::TaskDescription;

    fn name(s: &str) -> Name {
        Name::parse(s).unwrap()
    }

    #[test]
    fn test_add_event() {
        let mut model = Model::new();
        let result = AddEventCommand::new(event("Career Fair"))
            .execute(&mut model)
            .unwrap();
        assert_eq!(
            result.feedback,
            "New event added: Career Fair; Date: 2024-03-01; Address: NUS"
        );

        let err = AddEventCommand::new(event("Career Fair"))
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err.message(), MESSAGE_DUPLICATE_EVENT);
    }

    #[test]
    fn test_delete_event_cascades_tasks_only() {
        let mut model = Model::new();
        model.add_contact(contact("Alice", &[])).unwrap();
        model.add_event(event("Career Fair")).unwrap();
        model
            .link_contact(&contact("Alice", &[]), &name("Career Fair"))
            .unwrap();
        let book = TaskDescription::parse("Book Venue").unwrap();
        model.add_task(book.clone(), &name("Career Fair")).unwrap();

        DeleteEventCommand::new(name("Career Fair"))
            .execute(&mut model)
            .unwrap();
        assert!(!model.has_task(&book, &name("Career Fair")));
        assert!(model.has_contact(&contact("Alice", &[])));

        let err = DeleteEventCommand::new(name("Career Fair"))
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err.message(), MESSAGE_MISSING_EVENT);
    }

    #[test]
    fn test_select_event() {
        let mut model = Model::new();
        model.add_contact(contact("Alice", &[])).unwrap();
        model.add_contact(contact("Bob", &[])).unwrap();
        model.add_event(event("Career Fair")).unwrap();
        model.add_event(event("Open House")).unwrap();
        model
            .link_contact(&contact("Bob", &[]), &name("Career Fair"))
            .unwrap();

        SelectEventCommand::new(name("Career Fair"))
            .execute(&mut model)
            .unwrap();
        assert_eq!(model.filtered_contacts().len(), 1);
        assert_eq!(model.filtered_contacts()[0].name().as_str(), "Bob");
        assert_eq!(model.filtered_events().len(), 1);

        ViewEventsCommand.execute(&mut model).unwrap();
        assert_eq!(model.filtered_events().len(), 2);
    }

    #[test]
    fn test_selected_view_tracks_later_commands() {
        use crate::commands::{EditContactCommand, LinkCommand, UnlinkCommand};
        use crate::core::contact::EditContactDescriptor;

        let mut model = Model::new();
        for n in ["Alice", "Bob", "Carl"] {
            model.add_contact(contact(n, &[])).unwrap();
        }
        model.add_event(event("Career Fair")).unwrap();
        model
            .link_contact(&contact("Alice", &[]), &name("Career Fair"))
            .unwrap();

        SelectEventCommand::new(name("Career Fair"))
            .execute(&mut model)
            .unwrap();
        let listed = |model: &Model| -> Vec<String> {
            model
                .filtered_contacts()
                .iter()
                .map(|c| c.name().to_string())
                .collect()
        };
        assert_eq!(listed(&model), vec!["Alice"]);

        LinkCommand::new(vec![name("Carl")], name("Career Fair"))
            .execute(&mut model)
            .unwrap();
        assert_eq!(listed(&model), vec!["Alice", "Carl"]);

        EditContactCommand::new(
            name("Alice"),
            EditContactDescriptor {
                name: Some(name("Alicia")),
                ..Default::default()
            },
        )
        .execute(&mut model)
        .unwrap();
        assert_eq!(listed(&model), vec!["Alicia", "Carl"]);

        UnlinkCommand::new(vec![name("Carl")], name("Career Fair"))
            .execute(&mut model)
            .unwrap();
        assert_eq!(listed(&model), vec!["Alicia"]);
    }

    #[test]
    fn test_select_missing_event() {
        let mut model = Model::new();
        let err = SelectEventCommand::new(name("Nowhere"))
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err.message(), MESSAGE_MISSING_EVENT);
    }
}
