//! Event - a dated occurrence with linked contacts and owned tasks
//!
//! Linked contacts are stored as value copies, keyed by contact name.
//! Both the contact and task lists keep insertion order.
//!
//! Fields are only mutated by the store, which checks every cross-entity
//! invariant before calling into here.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::contact::Contact;
use super::task::Task;
use super::value::{Address, Date, Name, TaskDescription};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    name: Name,
    date: Date,
    address: Address,
    #[serde(default)]
    contacts: Vec<Contact>,
    #[serde(default)]
    tasks: Vec<Task>,
}

impl Event {
    /// A new event with no linked contacts and no tasks
    pub fn new(name: Name, date: Date, address: Address) -> Self {
        Self {
            name,
            date,
            address,
            contacts: Vec::new(),
            tasks: Vec::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn date(&self) -> &Date {
        &self.date
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Weak equality: both events have the same name
    pub fn is_same_event(&self, other: &Event) -> bool {
        self.name == other.name
    }

    pub fn is_linked_to_contact(&self, contact: &Contact) -> bool {
        self.contacts.iter().any(|c| c.is_same_contact(contact))
    }

    pub fn has_task(&self, description: &TaskDescription) -> bool {
        self.task(description).is_some()
    }

    pub fn task(&self, description: &TaskDescription) -> Option<&Task> {
        self.tasks
            .iter()
            .find(|t| t.matches(description, &self.name))
    }

    pub(crate) fn push_contact(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Drops the linked copy of `contact`; returns whether one was linked
    pub(crate) fn remove_contact(&mut self, contact: &Contact) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|c| !c.is_same_contact(contact));
        self.contacts.len() != before
    }

    pub(crate) fn contacts_mut(&mut self) -> &mut Vec<Contact> {
        &mut self.contacts
    }

    pub(crate) fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub(crate) fn remove_task(&mut self, description: &TaskDescription) -> Option<Task> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.matches(description, &self.name))?;
        Some(self.tasks.remove(idx))
    }

    pub(crate) fn task_mut(&mut self, description: &TaskDescription) -> Option<&mut Task> {
        let name = &self.name;
        self.tasks.iter_mut().find(|t| t.matches(description, name))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Date: {}; Address: {}",
            self.name, self.date, self.address
        )
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn event(name: &str) -> Event {
        Event::new(
            Name::parse(name).unwrap(),
            Date::parse("2024-03-01").unwrap(),
            Address::parse("NUS").unwrap(),
        )
    }
}
