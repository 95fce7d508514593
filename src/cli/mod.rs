//! CLI module - Command definitions and dispatch
//!
//! One invocation runs one command: load the store, execute, save if the
//! command changed anything, render the resulting list.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::debug;

use crate::commands::{self, Command};
use crate::config::Config;
use crate::core::storage::Storage;

pub mod config;
pub mod contact;
pub mod event;
pub mod link;
pub mod render;
pub mod tag;
pub mod task;

/// jobfest - contacts, events, tasks and tags for event planners
#[derive(Parser, Debug)]
#[command(name = "jobfest")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, env = "JOBFEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Data file path (overrides config)
    #[arg(long, global = true, env = crate::config::DATA_ENV)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact
    #[command(name = "add_contact")]
    AddContact(contact::AddContactArgs),

    /// Delete a contact and unlink it from all events
    #[command(name = "delete_contact")]
    DeleteContact(contact::DeleteContactArgs),

    /// Edit a contact
    #[command(name = "edit_contact")]
    EditContact(contact::EditContactArgs),

    /// List all contacts
    #[command(name = "view_contacts")]
    ViewContacts,

    /// Find contacts by name keywords
    #[command(name = "find_contact")]
    FindContact(contact::FindContactArgs),

    /// List contacts carrying any of the given tags
    #[command(name = "filter_by_tag")]
    FilterByTag(contact::FilterByTagArgs),

    /// Add an event
    #[command(name = "add_event")]
    AddEvent(event::AddEventArgs),

    /// Delete an event and its tasks
    #[command(name = "delete_event")]
    DeleteEvent(event::EventNameArgs),

    /// List all events
    #[command(name = "view_events")]
    ViewEvents,

    /// Show an event and the contacts linked to it
    #[command(name = "select_event")]
    SelectEvent(event::EventNameArgs),

    /// Link contacts to an event
    Link(link::LinkArgs),

    /// Unlink contacts from an event
    Unlink(link::LinkArgs),

    /// Add a task to an event
    #[command(name = "add_task")]
    AddTask(task::TaskArgs),

    /// Delete a task from an event
    #[command(name = "delete_task")]
    DeleteTask(task::TaskArgs),

    /// Mark a task as done
    #[command(name = "mark_task")]
    MarkTask(task::TaskArgs),

    /// Mark a task as not done
    #[command(name = "unmark_task")]
    UnmarkTask(task::TaskArgs),

    /// Add a tag
    #[command(name = "add_tag")]
    AddTag(tag::TagArgs),

    /// Delete a tag and remove it from all contacts
    #[command(name = "delete_tag")]
    DeleteTag(tag::TagArgs),

    /// List all tags
    #[command(name = "view_tags")]
    ViewTags,

    /// Show the effective configuration
    Config(config::ConfigArgs),
}

impl Commands {
    /// Build the store command; `None` for commands that do not touch the store
    pub fn into_command(self) -> Option<Box<dyn Command>> {
        let command: Box<dyn Command> = match self {
            Commands::AddContact(args) => Box::new(args.into_command()),
            Commands::DeleteContact(args) => Box::new(args.into_command()),
            Commands::EditContact(args) => Box::new(args.into_command()),
            Commands::ViewContacts => Box::new(commands::ViewContactsCommand),
            Commands::FindContact(args) => Box::new(args.into_command()),
            Commands::FilterByTag(args) => Box::new(args.into_command()),
            Commands::AddEvent(args) => Box::new(args.into_command()),
            Commands::DeleteEvent(args) => Box::new(commands::DeleteEventCommand::new(args.name)),
            Commands::ViewEvents => Box::new(commands::ViewEventsCommand),
            Commands::SelectEvent(args) => Box::new(commands::SelectEventCommand::new(args.name)),
            Commands::Link(args) => Box::new(args.into_link()),
            Commands::Unlink(args) => Box::new(args.into_unlink()),
            Commands::AddTask(args) => Box::new(args.into_add()),
            Commands::DeleteTask(args) => Box::new(args.into_delete()),
            Commands::MarkTask(args) => Box::new(args.into_mark(true)),
            Commands::UnmarkTask(args) => Box::new(args.into_mark(false)),
            Commands::AddTag(args) => Box::new(commands::AddTagCommand::new(args.tag)),
            Commands::DeleteTag(args) => Box::new(commands::DeleteTagCommand::new(args.tag)),
            Commands::ViewTags => Box::new(commands::ViewTagsCommand),
            Commands::Config(_) => return None,
        };
        Some(command)
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        data,
        command,
        ..
    } = cli;

    let config = Config::load(config_path.as_deref())?;
    if !config.display.color {
        colored::control::set_override(false);
    }

    if let Commands::Config(args) = &command {
        return config::run(args, &config, config_path.as_deref(), data.as_deref());
    }

    let storage = Storage::new(config.data_file(data.as_deref()));
    let mut model = storage.load()?;

    let Some(command) = command.into_command() else {
        return Ok(());
    };
    let result = commands::execute(&*command, &mut model)?;

    if command.is_mutating() {
        storage.save(&model)?;
    } else {
        debug!(command = command.word(), "read-only command, not saving");
    }

    println!("{}", result.feedback.green());
    let listing = render::view(&model, result.view, config.display.table_style);
    if !listing.is_empty() {
        println!("\n{}", listing);
    }

    Ok(())
}
