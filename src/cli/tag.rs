//! Tag subcommands
//!
//! # Usage
//! ```bash
//! jobfest add_tag vendor
//! jobfest delete_tag vendor
//! ```

use clap::Args;

use crate::core::value::Tag;

#[derive(Args, Debug)]
pub struct TagArgs {
    /// Tag label (alphanumeric, case-insensitive)
    pub tag: Tag,
}
