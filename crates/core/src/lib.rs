//! Domain types and validation logic shared by the db and api crates.

pub mod error;
pub mod todo;
pub mod types;
