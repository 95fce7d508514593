//! `link` / `unlink` subcommands
//!
//! # Usage
//! ```bash
//! jobfest link -n "Alex Yeoh" -n "Bernice Yu" --event "NUS Career Fair 2024"
//! jobfest unlink -n "Alex Yeoh" --event "NUS Career Fair 2024"
//! ```

use clap::Args;

use crate::commands::{LinkCommand, UnlinkCommand};
use crate::core::value::Name;

#[derive(Args, Debug)]
pub struct LinkArgs {
    /// Contact name (repeatable)
    #[arg(short, long = "name", required = true)]
    pub names: Vec<Name>,

    /// Event name
    #[arg(long)]
    pub event: Name,
}

impl LinkArgs {
    pub fn into_link(self) -> LinkCommand {
        LinkCommand::new(self.names, self.event)
    }

    pub fn into_unlink(self) -> UnlinkCommand {
        UnlinkCommand::new(self.names, self.event)
    }
}
