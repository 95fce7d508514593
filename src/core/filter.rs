//! Filter predicates for the contact and event views
//!
//! Mostly plain closures; the store keeps whichever one was set last and
//! re-applies it after every mutation. [`ContactFilter::LinkedTo`] is the
//! exception: it depends on event links, so it is resolved against the
//! store's current events on every refresh.

use super::contact::Contact;
use super::event::Event;
use super::value::{Name, Tag};

/// What the contact view shows
pub enum ContactFilter {
    /// Contacts accepted by a predicate over the contact alone
    Matching(Box<dyn Fn(&Contact) -> bool>),
    /// Contacts currently linked to the named event
    LinkedTo(Name),
}

impl ContactFilter {
    pub fn matching<F>(predicate: F) -> Self
    where
        F: Fn(&Contact) -> bool + 'static,
    {
        ContactFilter::Matching(Box::new(predicate))
    }

    /// Whether `contact` belongs in the view, given the store's `events`
    pub fn accepts(&self, contact: &Contact, events: &[Event]) -> bool {
        match self {
            ContactFilter::Matching(predicate) => predicate(contact),
            ContactFilter::LinkedTo(name) => events
                .iter()
                .find(|e| e.name() == name)
                .map_or(false, |e| e.is_linked_to_contact(contact)),
        }
    }
}

impl std::fmt::Debug for ContactFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactFilter::Matching(_) => f.write_str("Matching(..)"),
            ContactFilter::LinkedTo(name) => f.debug_tuple("LinkedTo").field(name).finish(),
        }
    }
}

pub fn show_all_contacts(_: &Contact) -> bool {
    true
}

pub fn show_all_events(_: &Event) -> bool {
    true
}

/// Contacts whose name contains any of `keywords` as a whole word,
/// ignoring case
pub fn name_contains_any(keywords: Vec<String>) -> impl Fn(&Contact) -> bool {
    move |c: &Contact| keywords.iter().any(|k| c.name().contains_word(k))
}

/// Contacts carrying at least one of `tags`
pub fn has_any_tag(tags: Vec<Tag>) -> impl Fn(&Contact) -> bool {
    move |c: &Contact| tags.iter().any(|t| c.has_tag(t))
}

/// Contacts linked to the event named `event_name`, as of each refresh
pub fn linked_to(event_name: Name) -> ContactFilter {
    ContactFilter::LinkedTo(event_name)
}

/// Only the event with this name
pub fn event_named(name: Name) -> impl Fn(&Event) -> bool {
    move |e: &Event| e.name() == &name
}
