//! Domain rules for the careers job board.
//!
//! This crate has no I/O: it holds the shared error type, identifier aliases,
//! the status/stage enumerations and the validation helpers used by both the
//! repository layer and the HTTP handlers.

#[macro_use]
mod macros;

pub mod application;
pub mod error;
pub mod job;
pub mod slug;
pub mod types;
