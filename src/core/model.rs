//! Model - the in-memory entity store
//!
//! Owns the canonical contacts, events and tags, and keeps them consistent:
//!
//! 1. no two contacts share a name
//! 2. no two events share a name
//! 3. every tag carried by a contact (including contact copies linked into
//!    events) is in the tag set
//! 4. every task sits in the event whose name it carries, at most once
//! 5. every contact linked into an event matches a stored contact by name
//!
//! Each mutation checks everything it needs up front and only then touches
//! state, so a returned error means nothing changed.
//!
//! Filtered views are recomputed eagerly: on every `update_filtered_*` call
//! and after every mutation, in insertion order.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::contact::Contact;
use super::error::{EntityKind, ModelError, Result};
use super::event::Event;
use super::filter::ContactFilter;
use super::task::Task;
use super::value::{Name, Tag, TaskDescription};

/// Predicate over events used for the filtered event view
pub type EventPredicate = Box<dyn Fn(&Event) -> bool>;

/// Complete, serializable state of a [`Model`]
///
/// Filtered views are derived and never part of a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub events: Vec<Event>,
}

pub struct Model {
    contacts: Vec<Contact>,
    events: Vec<Event>,
    tags: Vec<Tag>,

    contact_filter: ContactFilter,
    event_filter: EventPredicate,
    filtered_contacts: Vec<Contact>,
    filtered_events: Vec<Event>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("contacts", &self.contacts)
            .field("events", &self.events)
            .field("tags", &self.tags)
            .field("contact_filter", &self.contact_filter)
            .field("filtered_contacts", &self.filtered_contacts.len())
            .field("filtered_events", &self.filtered_events.len())
            .finish()
    }
}

impl Model {
    /// Empty store showing everything
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
            events: Vec::new(),
            tags: Vec::new(),
            contact_filter: ContactFilter::matching(|_| true),
            event_filter: Box::new(|_| true),
            filtered_contacts: Vec::new(),
            filtered_events: Vec::new(),
        }
    }

    /// Rebuild a store from a snapshot
    ///
    /// Goes through the regular add operations (tags, then contacts, then
    /// events) so a snapshot that breaks any invariant is rejected.
    pub fn from_snapshot(snapshot: ModelSnapshot) -> Result<Self> {
        let mut model = Model::new();
        for tag in snapshot.tags {
            model.add_tag(tag)?;
        }
        for contact in snapshot.contacts {
            model.add_contact(contact)?;
        }
        for event in snapshot.events {
            model.add_event(event)?;
        }
        Ok(model)
    }

    pub fn snapshot(&self) -> ModelSnapshot {
        ModelSnapshot {
            tags: self.tags.clone(),
            contacts: self.contacts.clone(),
            events: self.events.clone(),
        }
    }

    // === Read interface ===

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn filtered_contacts(&self) -> &[Contact] {
        &self.filtered_contacts
    }

    pub fn filtered_events(&self) -> &[Event] {
        &self.filtered_events
    }

    // === Contacts ===

    pub fn has_contact(&self, contact: &Contact) -> bool {
        self.contact_index(contact.name()).is_some()
    }

    /// Stored contact with this name
    pub fn contact(&self, name: &Name) -> Option<&Contact> {
        self.contact_index(name).map(|i| &self.contacts[i])
    }

    /// Insert a contact
    ///
    /// Fails with `DuplicateEntity` if a contact with the same name exists,
    /// or `EntityNotFound` if it carries a tag the store does not hold.
    pub fn add_contact(&mut self, contact: Contact) -> Result<()> {
        if self.has_contact(&contact) {
            return Err(ModelError::duplicate(EntityKind::Contact, contact.name()));
        }
        self.check_tags_known(&contact)?;

        debug!(contact = %contact.name(), "adding contact");
        self.contacts.push(contact);
        self.refresh_filtered();
        Ok(())
    }

    /// Remove a contact and unlink it from every event
    ///
    /// Touches: the contact list, and the linked-contact list of each event.
    /// Events themselves are kept.
    pub fn delete_contact(&mut self, contact: &Contact) -> Result<Contact> {
        let idx = self
            .contact_index(contact.name())
            .ok_or_else(|| ModelError::not_found(EntityKind::Contact, contact.name()))?;

        let removed = self.contacts.remove(idx);
        let mut unlinked = 0;
        for event in &mut self.events {
            if event.remove_contact(&removed) {
                unlinked += 1;
            }
        }

        debug!(contact = %removed.name(), unlinked, "deleted contact");
        self.refresh_filtered();
        Ok(removed)
    }

    /// Replace `target` with `edited`
    ///
    /// Touches: the contact list, and every event copy of `target`, which is
    /// replaced by `edited` so links follow renames.
    pub fn set_contact(&mut self, target: &Contact, edited: Contact) -> Result<()> {
        let idx = self
            .contact_index(target.name())
            .ok_or_else(|| ModelError::not_found(EntityKind::Contact, target.name()))?;

        if !target.is_same_contact(&edited) && self.has_contact(&edited) {
            return Err(ModelError::duplicate(EntityKind::Contact, edited.name()));
        }
        self.check_tags_known(&edited)?;

        for event in &mut self.events {
            for linked in event.contacts_mut().iter_mut() {
                if linked.is_same_contact(target) {
                    *linked = edited.clone();
                }
            }
        }

        debug!(from = %target.name(), to = %edited.name(), "edited contact");
        self.contacts[idx] = edited;
        self.refresh_filtered();
        Ok(())
    }

    // === Events ===

    pub fn has_event(&self, name: &Name) -> bool {
        self.event_index(name).is_some()
    }

    pub fn event(&self, name: &Name) -> Option<&Event> {
        self.event_index(name).map(|i| &self.events[i])
    }

    /// Insert an event
    ///
    /// Fails with `DuplicateEntity` on a name clash. An event that already
    /// carries tasks or linked contacts (as when loading a snapshot) must
    /// satisfy the task and link invariants against this store.
    pub fn add_event(&mut self, event: Event) -> Result<()> {
        if self.has_event(event.name()) {
            return Err(ModelError::duplicate(EntityKind::Event, event.name()));
        }

        for (i, linked) in event.contacts().iter().enumerate() {
            if !self.has_contact(linked) {
                return Err(ModelError::not_found(EntityKind::Contact, linked.name()));
            }
            self.check_tags_known(linked)?;
            if event.contacts()[..i].iter().any(|c| c.is_same_contact(linked)) {
                return Err(ModelError::duplicate(
                    EntityKind::Link,
                    link_key(linked.name(), event.name()),
                ));
            }
        }

        for (i, task) in event.tasks().iter().enumerate() {
            if task.event_name() != event.name() {
                return Err(ModelError::not_found(EntityKind::Event, task.event_name()));
            }
            if event.tasks()[..i].iter().any(|t| t.is_same_task(task)) {
                return Err(ModelError::duplicate(
                    EntityKind::Task,
                    task_key(task.description(), event.name()),
                ));
            }
        }

        debug!(event = %event.name(), "adding event");
        self.events.push(event);
        self.refresh_filtered();
        Ok(())
    }

    /// Remove an event
    ///
    /// Touches: the event list only. Its tasks go with it; the contacts it
    /// linked stay in the store.
    pub fn delete_event(&mut self, name: &Name) -> Result<Event> {
        let idx = self
            .event_index(name)
            .ok_or_else(|| ModelError::not_found(EntityKind::Event, name))?;

        let removed = self.events.remove(idx);
        debug!(
            event = %removed.name(),
            tasks = removed.tasks().len(),
            links = removed.contacts().len(),
            "deleted event"
        );
        self.refresh_filtered();
        Ok(removed)
    }

    // === Tags ===

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    pub fn add_tag(&mut self, tag: Tag) -> Result<()> {
        if self.has_tag(&tag) {
            return Err(ModelError::duplicate(EntityKind::Tag, &tag));
        }

        debug!(tag = %tag, "adding tag");
        self.tags.push(tag);
        Ok(())
    }

    /// Remove a tag from the store and from everything that carries it
    ///
    /// Touches: the tag set, every stored contact, and every contact copy
    /// linked into an event.
    pub fn delete_tag(&mut self, tag: &Tag) -> Result<Tag> {
        let idx = self
            .tags
            .iter()
            .position(|t| t == tag)
            .ok_or_else(|| ModelError::not_found(EntityKind::Tag, tag))?;

        let removed = self.tags.remove(idx);
        let mut stripped = 0;
        for contact in &mut self.contacts {
            if contact.has_tag(&removed) {
                *contact = contact.without_tag(&removed);
                stripped += 1;
            }
        }
        for event in &mut self.events {
            for linked in event.contacts_mut().iter_mut() {
                if linked.has_tag(&removed) {
                    *linked = linked.without_tag(&removed);
                }
            }
        }

        debug!(tag = %removed, contacts = stripped, "deleted tag");
        self.refresh_filtered();
        Ok(removed)
    }

    // === Tasks ===

    pub fn has_task(&self, description: &TaskDescription, event_name: &Name) -> bool {
        self.event(event_name)
            .map_or(false, |e| e.has_task(description))
    }

    /// Add a new, not-done task to the named event
    pub fn add_task(&mut self, description: TaskDescription, event_name: &Name) -> Result<()> {
        let event = self.event_mut(event_name)?;
        if event.has_task(&description) {
            return Err(ModelError::duplicate(
                EntityKind::Task,
                task_key(&description, event_name),
            ));
        }

        debug!(task = %description, event = %event_name, "adding task");
        event.push_task(Task::new(description, event_name.clone()));
        self.refresh_filtered();
        Ok(())
    }

    pub fn delete_task(&mut self, description: &TaskDescription, event_name: &Name) -> Result<Task> {
        let removed = self
            .event_mut(event_name)?
            .remove_task(description)
            .ok_or_else(|| {
                ModelError::not_found(EntityKind::Task, task_key(description, event_name))
            })?;

        debug!(task = %description, event = %event_name, "deleted task");
        self.refresh_filtered();
        Ok(removed)
    }

    /// Mark a task done or not done
    pub fn set_task_done(
        &mut self,
        description: &TaskDescription,
        event_name: &Name,
        done: bool,
    ) -> Result<()> {
        self.event_mut(event_name)?
            .task_mut(description)
            .ok_or_else(|| {
                ModelError::not_found(EntityKind::Task, task_key(description, event_name))
            })?
            .set_done(done);

        debug!(task = %description, event = %event_name, done, "updated task");
        self.refresh_filtered();
        Ok(())
    }

    // === Links ===

    pub fn is_linked(&self, contact: &Contact, event_name: &Name) -> bool {
        self.event(event_name)
            .map_or(false, |e| e.is_linked_to_contact(contact))
    }

    /// Link a stored contact to an event
    ///
    /// The event receives a copy of the stored contact with the same name as
    /// `contact`. Linking twice fails with `DuplicateEntity`.
    pub fn link_contact(&mut self, contact: &Contact, event_name: &Name) -> Result<()> {
        self.link_contacts(std::slice::from_ref(contact), event_name)
    }

    /// Link several stored contacts to an event in one step
    ///
    /// Every contact must exist, must not already be linked, and must appear
    /// once in `contacts`; otherwise nothing is linked.
    pub fn link_contacts(&mut self, contacts: &[Contact], event_name: &Name) -> Result<()> {
        let event = self
            .event(event_name)
            .ok_or_else(|| ModelError::not_found(EntityKind::Event, event_name))?;

        let mut stored = Vec::with_capacity(contacts.len());
        for (i, contact) in contacts.iter().enumerate() {
            let copy = self
                .contact(contact.name())
                .cloned()
                .ok_or_else(|| ModelError::not_found(EntityKind::Contact, contact.name()))?;
            if event.is_linked_to_contact(&copy)
                || contacts[..i].iter().any(|c| c.is_same_contact(contact))
            {
                return Err(ModelError::duplicate(
                    EntityKind::Link,
                    link_key(copy.name(), event_name),
                ));
            }
            stored.push(copy);
        }

        debug!(event = %event_name, count = stored.len(), "linking contacts");
        let event = self.event_mut(event_name)?;
        for copy in stored {
            event.push_contact(copy);
        }
        self.refresh_filtered();
        Ok(())
    }

    pub fn unlink_contact(&mut self, contact: &Contact, event_name: &Name) -> Result<()> {
        self.unlink_contacts(std::slice::from_ref(contact), event_name)
    }

    /// Unlink several contacts from an event in one step
    ///
    /// Every contact must currently be linked and appear once in `contacts`;
    /// otherwise nothing is unlinked.
    pub fn unlink_contacts(&mut self, contacts: &[Contact], event_name: &Name) -> Result<()> {
        let event = self
            .event(event_name)
            .ok_or_else(|| ModelError::not_found(EntityKind::Event, event_name))?;

        for (i, contact) in contacts.iter().enumerate() {
            if !event.is_linked_to_contact(contact)
                || contacts[..i].iter().any(|c| c.is_same_contact(contact))
            {
                return Err(ModelError::not_found(
                    EntityKind::Link,
                    link_key(contact.name(), event_name),
                ));
            }
        }

        debug!(event = %event_name, count = contacts.len(), "unlinking contacts");
        let event = self.event_mut(event_name)?;
        for contact in contacts {
            event.remove_contact(contact);
        }
        self.refresh_filtered();
        Ok(())
    }

    // === Filtered views ===

    pub fn update_filtered_contact_list<F>(&mut self, predicate: F)
    where
        F: Fn(&Contact) -> bool + 'static,
    {
        self.set_contact_filter(ContactFilter::matching(predicate));
    }

    pub fn set_contact_filter(&mut self, filter: ContactFilter) {
        self.contact_filter = filter;
        self.refresh_filtered();
    }

    pub fn update_filtered_event_list<F>(&mut self, predicate: F)
    where
        F: Fn(&Event) -> bool + 'static,
    {
        self.event_filter = Box::new(predicate);
        self.refresh_filtered();
    }

    fn refresh_filtered(&mut self) {
        self.filtered_contacts = self
            .contacts
            .iter()
            .filter(|&c| self.contact_filter.accepts(c, &self.events))
            .cloned()
            .collect();
        self.filtered_events = self
            .events
            .iter()
            .filter(|&e| (self.event_filter)(e))
            .cloned()
            .collect();
    }

    // === Helpers ===

    fn contact_index(&self, name: &Name) -> Option<usize> {
        self.contacts.iter().position(|c| c.name() == name)
    }

    fn event_index(&self, name: &Name) -> Option<usize> {
        self.events.iter().position(|e| e.name() == name)
    }

    fn event_mut(&mut self, name: &Name) -> Result<&mut Event> {
        let idx = self
            .event_index(name)
            .ok_or_else(|| ModelError::not_found(EntityKind::Event, name))?;
        Ok(&mut self.events[idx])
    }

    fn check_tags_known(&self, contact: &Contact) -> Result<()> {
        match contact.tags().iter().find(|t| !self.has_tag(t)) {
            Some(missing) => Err(ModelError::not_found(EntityKind::Tag, missing)),
            None => Ok(()),
        }
    }
}

fn task_key(description: &TaskDescription, event_name: &Name) -> String {
    format!("{} (event: {})", description, event_name)
}

fn link_key(contact: &Name, event_name: &Name) -> String {
    format!("{} -> {}", contact, event_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contact::fixtures::contact;
    use crate::core::event::fixtures::event;

    fn name(s: &str) -> Name {
        Name::parse(s).unwrap()
    }

    fn tag(s: &str) -> Tag {
        Tag::parse(s).unwrap()
    }

    fn desc(s: &str) -> TaskDescription {
        TaskDescription::parse(s).unwrap()
    }

    /// Checks every store invariant; panics with the broken one
    fn assert_invariants(model: &Model) {
        for (i, c) in model.contacts().iter().enumerate() {
            assert!(
                !model.contacts()[..i].iter().any(|o| o.is_same_contact(c)),
                "duplicate contact {}",
                c.name()
            );
            for t in c.tags() {
                assert!(model.has_tag(t), "dangling tag {} on {}", t, c.name());
            }
        }
        for (i, e) in model.events().iter().enumerate() {
            assert!(
                !model.events()[..i].iter().any(|o| o.is_same_event(e)),
                "duplicate event {}",
                e.name()
            );
            for task in e.tasks() {
                assert_eq!(task.event_name(), e.name());
                assert_eq!(
                    e.tasks().iter().filter(|t| t.is_same_task(task)).count(),
                    1
                );
            }
            for linked in e.contacts() {
                assert!(model.has_contact(linked), "dangling link {}", linked.name());
                for t in linked.tags() {
                    assert!(model.has_tag(t), "dangling tag {} in {}", t, e.name());
                }
            }
        }
    }

    fn populated() -> Model {
        let mut model = Model::new();
        model.add_tag(tag("vendor")).unwrap();
        model.add_tag(tag("customer")).unwrap();
        model.add_contact(contact("Alice", &["vendor"])).unwrap();
        model
            .add_contact(contact("Bob", &["vendor", "customer"]))
            .unwrap();
        model.add_contact(contact("Carl", &[])).unwrap();
        model.add_event(event("Career Fair")).unwrap();
        model.add_event(event("Open House")).unwrap();
        model
            .link_contact(&contact("Alice", &[]), &name("Career Fair"))
            .unwrap();
        model
            .link_contact(&contact("Bob", &[]), &name("Career Fair"))
            .unwrap();
        model
            .add_task(desc("Book Venue"), &name("Career Fair"))
            .unwrap();
        model
            .add_task(desc("Order Food"), &name("Career Fair"))
            .unwrap();
        assert_invariants(&model);
        model
    }

    #[test]
    fn test_add_and_delete_contact() {
        let mut model = Model::new();
        let alice = contact("Alice", &[]);

        model.add_contact(alice.clone()).unwrap();
        assert!(model.has_contact(&alice));

        model.delete_contact(&alice).unwrap();
        assert!(!model.has_contact(&alice));
        assert_invariants(&model);
    }

    #[test]
    fn test_add_contact_same_name_rejected() {
        let mut model = Model::new();
        model.add_contact(contact("Alice", &[])).unwrap();

        let other = EditHelper::with_address(&contact("Alice", &[]), "Somewhere Else");
        let err = model.add_contact(other).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateEntity { kind: EntityKind::Contact, .. }));
        assert_eq!(model.contacts().len(), 1);
    }

    #[test]
    fn test_add_contact_unknown_tag_rejected() {
        let mut model = Model::new();
        let err = model.add_contact(contact("Alice", &["vendor"])).unwrap_err();
        assert_eq!(err, ModelError::not_found(EntityKind::Tag, "vendor"));
        assert!(model.contacts().is_empty());
    }

    #[test]
    fn test_delete_contact_unlinks_but_keeps_events() {
        let mut model = populated();
        model.delete_contact(&contact("Alice", &[])).unwrap();

        let fair = model.event(&name("Career Fair")).unwrap();
        assert_eq!(fair.contacts().len(), 1);
        assert_eq!(fair.contacts()[0].name().as_str(), "Bob");
        assert_eq!(fair.tasks().len(), 2);
        assert_eq!(model.events().len(), 2);
        assert_invariants(&model);
    }

    #[test]
    fn test_delete_missing_contact() {
        let mut model = populated();
        let before = model.snapshot();
        let err = model.delete_contact(&contact("Zed", &[])).unwrap_err();
        assert!(matches!(err, ModelError::EntityNotFound { kind: EntityKind::Contact, .. }));
        assert_eq!(model.snapshot(), before);
    }

    #[test]
    fn test_set_contact_propagates_to_links() {
        let mut model = populated();
        let target = model.contact(&name("Alice")).unwrap().clone();
        let edited = EditHelper::renamed(&target, "Alicia");

        model.set_contact(&target, edited).unwrap();
        assert!(model.contact(&name("Alice")).is_none());
        assert!(model.contact(&name("Alicia")).is_some());
        assert!(model.is_linked(&contact("Alicia", &[]), &name("Career Fair")));
        assert!(!model.is_linked(&contact("Alice", &[]), &name("Career Fair")));
        assert_invariants(&model);
    }

    #[test]
    fn test_set_contact_keeps_position() {
        let mut model = populated();
        let target = model.contact(&name("Bob")).unwrap().clone();
        model
            .set_contact(&target, EditHelper::with_address(&target, "New Road"))
            .unwrap();
        assert_eq!(model.contacts()[1].address().as_str(), "New Road");
    }

    #[test]
    fn test_set_contact_name_clash() {
        let mut model = populated();
        let before = model.snapshot();
        let target = model.contact(&name("Alice")).unwrap().clone();

        let err = model
            .set_contact(&target, EditHelper::renamed(&target, "Bob"))
            .unwrap_err();
        assert!(matches!(err, ModelError::DuplicateEntity { .. }));
        assert_eq!(model.snapshot(), before);
    }

    #[test]
    fn test_add_event_duplicate_name() {
        let mut model = Model::new();
        model.add_event(event("Career Fair")).unwrap();
        let err = model.add_event(event("Career Fair")).unwrap_err();
        assert_eq!(err, ModelError::duplicate(EntityKind::Event, "Career Fair"));
    }

    #[test]
    fn test_delete_event_drops_tasks_keeps_contacts() {
        let mut model = populated();
        let removed = model.delete_event(&name("Career Fair")).unwrap();
        assert_eq!(removed.tasks().len(), 2);

        assert!(!model.has_event(&name("Career Fair")));
        assert!(!model.has_task(&desc("Book Venue"), &name("Career Fair")));
        assert!(!model.has_task(&desc("Order Food"), &name("Career Fair")));
        assert!(model.has_contact(&contact("Alice", &[])));
        assert!(model.has_contact(&contact("Bob", &[])));
        assert_invariants(&model);
    }

    #[test]
    fn test_delete_tag_cascades() {
        let mut model = populated();
        model.delete_tag(&tag("vendor")).unwrap();

        assert!(!model.has_tag(&tag("vendor")));
        assert!(model.contacts().iter().all(|c| !c.has_tag(&tag("vendor"))));
        let fair = model.event(&name("Career Fair")).unwrap();
        assert!(fair.contacts().iter().all(|c| !c.has_tag(&tag("vendor"))));
        assert!(model.contact(&name("Bob")).unwrap().has_tag(&tag("customer")));
        assert_invariants(&model);
    }

    #[test]
    fn test_delete_unknown_tag_leaves_store_unchanged() {
        let mut model = populated();
        let before = model.snapshot();
        let err = model.delete_tag(&tag("sponsor")).unwrap_err();
        assert_eq!(err, ModelError::not_found(EntityKind::Tag, "sponsor"));
        assert_eq!(model.snapshot(), before);
    }

    #[test]
    fn test_tag_scenario() {
        let mut model = Model::new();
        model.add_tag(tag("vendor")).unwrap();
        assert!(matches!(
            model.add_tag(tag("vendor")),
            Err(ModelError::DuplicateEntity { .. })
        ));
        model.delete_tag(&tag("vendor")).unwrap();
        assert!(matches!(
            model.delete_tag(&tag("vendor")),
            Err(ModelError::EntityNotFound { .. })
        ));
    }

    #[test]
    fn test_task_scenario() {
        let mut model = Model::new();
        model.add_event(event("Career Fair")).unwrap();
        model
            .add_task(desc("Book Venue"), &name("Career Fair"))
            .unwrap();
        assert!(model.has_task(&desc("Book Venue"), &name("Career Fair")));

        model
            .delete_task(&desc("Book Venue"), &name("Career Fair"))
            .unwrap();
        assert!(!model.has_task(&desc("Book Venue"), &name("Career Fair")));

        model.delete_event(&name("Career Fair")).unwrap();
        assert!(model.events().is_empty());
    }

    #[test]
    fn test_add_task_errors() {
        let mut model = populated();
        assert!(matches!(
            model.add_task(desc("Book Venue"), &name("Nowhere")),
            Err(ModelError::EntityNotFound { kind: EntityKind::Event, .. })
        ));
        assert!(matches!(
            model.add_task(desc("Book Venue"), &name("Career Fair")),
            Err(ModelError::DuplicateEntity { kind: EntityKind::Task, .. })
        ));
        // Same description on another event is a different task
        model
            .add_task(desc("Book Venue"), &name("Open House"))
            .unwrap();
        assert_invariants(&model);
    }

    #[test]
    fn test_delete_missing_task() {
        let mut model = populated();
        assert!(matches!(
            model.delete_task(&desc("Book Venue"), &name("Open House")),
            Err(ModelError::EntityNotFound { kind: EntityKind::Task, .. })
        ));
        assert!(matches!(
            model.delete_task(&desc("Book Venue"), &name("Nowhere")),
            Err(ModelError::EntityNotFound { kind: EntityKind::Event, .. })
        ));
    }

    #[test]
    fn test_set_task_done() {
        let mut model = populated();
        model
            .set_task_done(&desc("Book Venue"), &name("Career Fair"), true)
            .unwrap();
        let fair = model.event(&name("Career Fair")).unwrap();
        assert!(fair.task(&desc("Book Venue")).unwrap().is_done());
        assert!(!fair.task(&desc("Order Food")).unwrap().is_done());

        model
            .set_task_done(&desc("Book Venue"), &name("Career Fair"), false)
            .unwrap();
        assert!(!model.event(&name("Career Fair")).unwrap().tasks()[0].is_done());

        assert!(model
            .set_task_done(&desc("Missing"), &name("Career Fair"), true)
            .is_err());
    }

    #[test]
    fn test_link_uses_stored_copy() {
        let mut model = populated();
        // Caller's copy has no tags; the stored one does
        model
            .link_contact(&contact("Bob", &[]), &name("Open House"))
            .unwrap();
        let house = model.event(&name("Open House")).unwrap();
        assert_eq!(house.contacts()[0], *model.contact(&name("Bob")).unwrap());
    }

    #[test]
    fn test_link_twice_fails() {
        let mut model = populated();
        let before = model.snapshot();
        let err = model
            .link_contact(&contact("Alice", &[]), &name("Career Fair"))
            .unwrap_err();
        assert!(matches!(err, ModelError::DuplicateEntity { kind: EntityKind::Link, .. }));
        assert_eq!(model.snapshot(), before);
    }

    #[test]
    fn test_link_errors() {
        let mut model = populated();
        assert!(matches!(
            model.link_contact(&contact("Zed", &[]), &name("Career Fair")),
            Err(ModelError::EntityNotFound { kind: EntityKind::Contact, .. })
        ));
        assert!(matches!(
            model.link_contact(&contact("Carl", &[]), &name("Nowhere")),
            Err(ModelError::EntityNotFound { kind: EntityKind::Event, .. })
        ));
    }

    #[test]
    fn test_unlink() {
        let mut model = populated();
        model
            .unlink_contact(&contact("Alice", &[]), &name("Career Fair"))
            .unwrap();
        assert!(!model.is_linked(&contact("Alice", &[]), &name("Career Fair")));
        assert!(model.has_contact(&contact("Alice", &[])));

        assert!(matches!(
            model.unlink_contact(&contact("Alice", &[]), &name("Career Fair")),
            Err(ModelError::EntityNotFound { kind: EntityKind::Link, .. })
        ));
    }

    #[test]
    fn test_filtered_contacts_follow_mutations() {
        let mut model = populated();
        let vendor = tag("vendor");
        model.update_filtered_contact_list(move |c| c.has_tag(&vendor));

        let names: Vec<&str> = model
            .filtered_contacts()
            .iter()
            .map(|c| c.name().as_str())
            .collect();
        assert_eq!(names, vec!["Alice", "Bob"]);

        model.delete_contact(&contact("Alice", &[])).unwrap();
        assert_eq!(model.filtered_contacts().len(), 1);

        model.update_filtered_contact_list(|_| true);
        assert_eq!(model.filtered_contacts().len(), 2);
    }

    fn filtered_names(model: &Model) -> Vec<&str> {
        model
            .filtered_contacts()
            .iter()
            .map(|c| c.name().as_str())
            .collect()
    }

    #[test]
    fn test_linked_view_follows_links_and_renames() {
        let mut model = populated();
        model.set_contact_filter(crate::core::filter::linked_to(name("Career Fair")));
        assert_eq!(filtered_names(&model), vec!["Alice", "Bob"]);

        model
            .link_contact(&contact("Carl", &[]), &name("Career Fair"))
            .unwrap();
        assert_eq!(filtered_names(&model), vec!["Alice", "Bob", "Carl"]);

        let alice = model.contact(&name("Alice")).cloned().unwrap();
        model
            .set_contact(&alice, EditHelper::renamed(&alice, "Alicia"))
            .unwrap();
        assert_eq!(filtered_names(&model), vec!["Alicia", "Bob", "Carl"]);

        model
            .unlink_contact(&contact("Bob", &[]), &name("Career Fair"))
            .unwrap();
        assert_eq!(filtered_names(&model), vec!["Alicia", "Carl"]);

        model.delete_contact(&contact("Carl", &[])).unwrap();
        assert_eq!(filtered_names(&model), vec!["Alicia"]);

        model.delete_event(&name("Career Fair")).unwrap();
        assert!(model.filtered_contacts().is_empty());
    }

    #[test]
    fn test_keyword_view_follows_renames() {
        let mut model = populated();
        model.update_filtered_contact_list(crate::core::filter::name_contains_any(vec![
            "alicia".to_string(),
        ]));
        assert!(model.filtered_contacts().is_empty());

        let alice = model.contact(&name("Alice")).cloned().unwrap();
        model
            .set_contact(&alice, EditHelper::renamed(&alice, "Alicia"))
            .unwrap();
        assert_eq!(filtered_names(&model), vec!["Alicia"]);
    }

    #[test]
    fn test_link_contacts_all_or_nothing() {
        let mut model = populated();
        let before = model.snapshot();

        let err = model
            .link_contacts(
                &[contact("Carl", &[]), contact("Alice", &[])],
                &name("Career Fair"),
            )
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::duplicate(EntityKind::Link, "Alice -> Career Fair")
        );
        assert_eq!(model.snapshot(), before);

        let err = model
            .link_contacts(
                &[contact("Carl", &[]), contact("Carl", &[])],
                &name("Open House"),
            )
            .unwrap_err();
        assert!(matches!(err, ModelError::DuplicateEntity { kind: EntityKind::Link, .. }));
        assert_eq!(model.snapshot(), before);

        model
            .link_contacts(
                &[contact("Alice", &[]), contact("Carl", &[])],
                &name("Open House"),
            )
            .unwrap();
        assert_eq!(model.event(&name("Open House")).unwrap().contacts().len(), 2);
        assert_invariants(&model);
    }

    #[test]
    fn test_unlink_contacts_all_or_nothing() {
        let mut model = populated();
        let before = model.snapshot();

        let err = model
            .unlink_contacts(
                &[contact("Alice", &[]), contact("Carl", &[])],
                &name("Career Fair"),
            )
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::not_found(EntityKind::Link, "Carl -> Career Fair")
        );
        assert_eq!(model.snapshot(), before);

        model
            .unlink_contacts(
                &[contact("Alice", &[]), contact("Bob", &[])],
                &name("Career Fair"),
            )
            .unwrap();
        assert!(model.event(&name("Career Fair")).unwrap().contacts().is_empty());
    }

    #[test]
    fn test_filtered_events_insertion_order() {
        let mut model = populated();
        model.add_event(event("Alumni Night")).unwrap();
        let names: Vec<&str> = model
            .filtered_events()
            .iter()
            .map(|e| e.name().as_str())
            .collect();
        assert_eq!(names, vec!["Career Fair", "Open House", "Alumni Night"]);

        model.update_filtered_event_list(|e| e.name().as_str().starts_with('O'));
        assert_eq!(model.filtered_events().len(), 1);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let model = populated();
        let restored = Model::from_snapshot(model.snapshot()).unwrap();
        assert_eq!(restored.snapshot(), model.snapshot());
        assert_eq!(restored.filtered_contacts().len(), 3);
    }

    #[test]
    fn test_from_snapshot_rejects_dangling_tag() {
        let mut snapshot = populated().snapshot();
        snapshot.tags.retain(|t| t.as_str() != "vendor");
        let err = Model::from_snapshot(snapshot).unwrap_err();
        assert_eq!(err, ModelError::not_found(EntityKind::Tag, "vendor"));
    }

    #[test]
    fn test_from_snapshot_rejects_foreign_task() {
        let mut snapshot = populated().snapshot();
        let stray = snapshot.events[0].tasks()[0].clone();
        snapshot.events[1].push_task(stray);
        assert!(Model::from_snapshot(snapshot).is_err());
    }

    #[test]
    fn test_from_snapshot_rejects_dangling_link() {
        let mut snapshot = populated().snapshot();
        snapshot.events[1].push_contact(contact("Ghost", &[]));
        let err = Model::from_snapshot(snapshot).unwrap_err();
        assert_eq!(err, ModelError::not_found(EntityKind::Contact, "Ghost"));
    }

    /// Small builders for edited contacts
    struct EditHelper;

    impl EditHelper {
        fn renamed(c: &Contact, new_name: &str) -> Contact {
            crate::core::contact::EditContactDescriptor {
                name: Some(name(new_name)),
                ..Default::default()
            }
            .apply(c)
        }

        fn with_address(c: &Contact, address: &str) -> Contact {
            crate::core::contact::EditContactDescriptor {
                address: Some(crate::core::value::Address::parse(address).unwrap()),
                ..Default::default()
            }
            .apply(c)
        }
    }
}
