//! Core module - Entity model
//!
//! Value types, entities, and the store that keeps them consistent.

pub mod contact;
pub mod error;
pub mod event;
pub mod filter;
pub mod model;
pub mod storage;
pub mod task;
pub mod value;
