//! Table rendering for the contact, event and tag lists

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::commands::ListView;
use crate::config::TableStyle;
use crate::core::contact::Contact;
use crate::core::event::Event;
use crate::core::model::Model;
use crate::core::value::Tag;

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Event")]
    name: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Contacts")]
    contacts: String,
    #[tabled(rename = "Tasks")]
    tasks: String,
}

#[derive(Tabled)]
struct TagRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Tag")]
    tag: String,
}

/// Render the list a command asked for; empty string for an empty list
pub fn view(model: &Model, view: ListView, style: TableStyle) -> String {
    match view {
        ListView::Contacts => contacts_table(model.filtered_contacts(), style),
        ListView::Events => events_table(model.filtered_events(), style),
        ListView::Tags => tags_table(model.tags(), style),
    }
}

pub fn contacts_table(contacts: &[Contact], style: TableStyle) -> String {
    if contacts.is_empty() {
        return String::new();
    }

    let rows = contacts.iter().enumerate().map(|(i, c)| ContactRow {
        index: i + 1,
        name: c.name().to_string(),
        phone: c.phone().to_string(),
        email: c.email().to_string(),
        address: c.address().to_string(),
        tags: c
            .tags()
            .iter()
            .map(Tag::as_str)
            .collect::<Vec<_>>()
            .join(", "),
    });
    styled(Table::new(rows), style)
}

pub fn events_table(events: &[Event], style: TableStyle) -> String {
    if events.is_empty() {
        return String::new();
    }

    let rows = events.iter().enumerate().map(|(i, e)| EventRow {
        index: i + 1,
        name: e.name().to_string(),
        date: e.date().to_string(),
        address: e.address().to_string(),
        contacts: e
            .contacts()
            .iter()
            .map(|c| c.name().as_str())
            .collect::<Vec<_>>()
            .join("\n"),
        tasks: e
            .tasks()
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    });
    styled(Table::new(rows), style)
}

pub fn tags_table(tags: &[Tag], style: TableStyle) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let rows = tags.iter().enumerate().map(|(i, t)| TagRow {
        index: i + 1,
        tag: t.to_string(),
    });
    styled(Table::new(rows), style)
}

fn styled(mut table: Table, style: TableStyle) -> String {
    match style {
        TableStyle::Rounded => table.with(Style::rounded()),
        TableStyle::Ascii => table.with(Style::ascii()),
        TableStyle::Markdown => table.with(Style::markdown()),
        TableStyle::Blank => table.with(Style::blank()),
    };
    table.to_string()
}
