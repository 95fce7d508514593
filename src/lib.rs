//! jobfest - contacts, events, tasks and tags for event planners
//!
//! An in-memory store of four kinds of entities kept consistent by explicit
//! cascade rules, driven by small validated commands.
//!
//! ## Key Concepts
//!
//! - **Weak equality**: contacts and events are "the same" when their names
//!   match; tasks when description and event match; tags by label
//! - **Cascades**: deleting a tag strips it from every contact, deleting an
//!   event drops its tasks, deleting a contact unlinks it from every event
//! - **All-or-nothing commands**: a failed command leaves the store untouched
//! - **Snapshots**: the whole store round-trips through one JSON document

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;

pub use commands::{Command, CommandResult};
pub use core::contact::Contact;
pub use core::error::{CommandError, ModelError, ValidationError};
pub use core::event::Event;
pub use core::model::{Model, ModelSnapshot};
pub use core::storage::Storage;
pub use core::task::Task;
