//! Contact subcommands
//!
//! # Usage
//! ```bash
//! jobfest add_contact -n "Alex Yeoh" -p 87438807 -e alexyeoh@example.com -a "Blk 30 Geylang St 29" -t vendor
//! jobfest edit_contact "Alex Yeoh" -p 91234567 --clear-tags
//! jobfest delete_contact "Alex Yeoh"
//! jobfest find_contact alex bernice
//! jobfest filter_by_tag vendor customer
//! ```

use std::collections::BTreeSet;

use clap::Args;

use crate::commands::{
    AddContactCommand, DeleteContactCommand, EditContactCommand, FilterContactsCommand,
    FindContactCommand,
};
use crate::core::contact::{Contact, EditContactDescriptor};
use crate::core::value::{Address, Email, Name, Phone, Tag};

#[derive(Args, Debug)]
pub struct AddContactArgs {
    /// Contact name
    #[arg(short, long)]
    pub name: Name,

    /// Phone number
    #[arg(short, long)]
    pub phone: Phone,

    /// Email address
    #[arg(short, long)]
    pub email: Email,

    /// Address
    #[arg(short, long)]
    pub address: Address,

    /// Tag (repeatable); each must already exist
    #[arg(short, long = "tag")]
    pub tags: Vec<Tag>,
}

impl AddContactArgs {
    pub fn into_command(self) -> AddContactCommand {
        AddContactCommand::new(Contact::new(
            self.name,
            self.phone,
            self.email,
            self.address,
            self.tags,
        ))
    }
}

#[derive(Args, Debug)]
pub struct DeleteContactArgs {
    /// Name of the contact to delete
    pub name: Name,
}

impl DeleteContactArgs {
    pub fn into_command(self) -> DeleteContactCommand {
        DeleteContactCommand::new(self.name)
    }
}

#[derive(Args, Debug)]
pub struct EditContactArgs {
    /// Name of the contact to edit
    pub target: Name,

    /// New name
    #[arg(short, long)]
    pub name: Option<Name>,

    /// New phone number
    #[arg(short, long)]
    pub phone: Option<Phone>,

    /// New email address
    #[arg(short, long)]
    pub email: Option<Email>,

    /// New address
    #[arg(short, long)]
    pub address: Option<Address>,

    /// Replace all tags (repeatable)
    #[arg(short, long = "tag", conflicts_with = "clear_tags")]
    pub tags: Vec<Tag>,

    /// Remove all tags
    #[arg(long)]
    pub clear_tags: bool,
}

impl EditContactArgs {
    pub fn into_command(self) -> EditContactCommand {
        let tags = if self.clear_tags {
            Some(BTreeSet::new())
        } else if self.tags.is_empty() {
            None
        } else {
            Some(self.tags.into_iter().collect())
        };

        let descriptor = EditContactDescriptor {
            name: self.name,
            phone: self.phone,
            email: self.email,
            address: self.address,
            tags,
        };
        EditContactCommand::new(self.target, descriptor)
    }
}

#[derive(Args, Debug)]
pub struct FindContactArgs {
    /// Name keywords (whole words, case-insensitive)
    #[arg(required = true)]
    pub keywords: Vec<String>,
}

impl FindContactArgs {
    pub fn into_command(self) -> FindContactCommand {
        FindContactCommand::new(self.keywords)
    }
}

#[derive(Args, Debug)]
pub struct FilterByTagArgs {
    /// Tags to match (any)
    #[arg(required = true)]
    pub tags: Vec<Tag>,
}

impl FilterByTagArgs {
    pub fn into_command(self) -> FilterContactsCommand {
        FilterContactsCommand::new(self.tags)
    }
}
