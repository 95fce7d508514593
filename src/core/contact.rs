//! Contact - a person the planner works with
//!
//! Contacts reference tags by value. The tags themselves live in the
//! store's tag set; a contact may only carry tags the store knows about.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::value::{Address, Email, Name, Phone, Tag};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl Contact {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Weak equality: both contacts have the same name.
    ///
    /// This is the relation used for every uniqueness and membership check.
    /// Full-field equality is `==`.
    pub fn is_same_contact(&self, other: &Contact) -> bool {
        self.name == other.name
    }

    /// Copy of this contact without `tag`
    pub(crate) fn without_tag(&self, tag: &Tag) -> Contact {
        let mut contact = self.clone();
        contact.tags.remove(tag);
        contact
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}",
            self.name, self.phone, self.email, self.address
        )?;
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(|t| t.as_str()).collect();
            write!(f, "; Tags: [{}]", tags.join(", "))?;
        }
        Ok(())
    }
}

/// Fields to change on an existing contact; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditContactDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditContactDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    /// Build the edited copy of `contact`
    pub fn apply(&self, contact: &Contact) -> Contact {
        Contact {
            name: self.name.clone().unwrap_or_else(|| contact.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| contact.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| contact.email.clone()),
            address: self
                .address
                .clone()
                .unwrap_or_else(|| contact.address.clone()),
            tags: self.tags.clone().unwrap_or_else(|| contact.tags.clone()),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Contact with deterministic fields derived from `name`
    pub fn contact(name: &str, tags: &[&str]) -> Contact {
        Contact::new(
            Name::parse(name).unwrap(),
            Phone::parse("94351253").unwrap(),
            Email::parse("someone@example.com").unwrap(),
            Address::parse("123, Jurong West Ave 6, #08-111").unwrap(),
            tags.iter().map(|t| Tag::parse(t).unwrap()),
        )
    }
}
