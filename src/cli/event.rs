//! Event subcommands
//!
//! # Usage
//! ```bash
//! jobfest add_event -n "NUS Career Fair 2024" -d 2024-03-01 -a "NUS UTown"
//! jobfest delete_event "NUS Career Fair 2024"
//! jobfest select_event "NUS Career Fair 2024"
//! ```

use clap::Args;

use crate::commands::AddEventCommand;
use crate::core::event::Event;
use crate::core::value::{Address, Date, Name};

#[derive(Args, Debug)]
pub struct AddEventArgs {
    /// Event name
    #[arg(short, long)]
    pub name: Name,

    /// Date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Date,

    /// Venue address
    #[arg(short, long)]
    pub address: Address,
}

impl AddEventArgs {
    pub fn into_command(self) -> AddEventCommand {
        AddEventCommand::new(Event::new(self.name, self.date, self.address))
    }
}

#[derive(Args, Debug)]
pub struct EventNameArgs {
    /// Event name
    pub name: Name,
}
