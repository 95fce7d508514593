//! Task - a to-do item owned by exactly one event

use std::fmt;

use serde::{Deserialize, Serialize};

use super::value::{Name, TaskDescription};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    description: TaskDescription,
    event_name: Name,
    #[serde(default)]
    is_done: bool,
}

impl Task {
    pub fn new(description: TaskDescription, event_name: Name) -> Self {
        Self {
            description,
            event_name,
            is_done: false,
        }
    }

    pub fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Name of the owning event
    pub fn event_name(&self) -> &Name {
        &self.event_name
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    /// Identity check: same description on the same event
    pub fn is_same_task(&self, other: &Task) -> bool {
        self.matches(&other.description, &other.event_name)
    }

    pub fn matches(&self, description: &TaskDescription, event_name: &Name) -> bool {
        &self.description == description && &self.event_name == event_name
    }

    pub(crate) fn set_done(&mut self, done: bool) {
        self.is_done = done;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.is_done { "X" } else { " " };
        write!(f, "[{}] {}", mark, self.description)
    }
}
