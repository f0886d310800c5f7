//! Shared command handlers
//!
//! Patterns reused by several resource commands: listing, confirmed
//! deletion, and waiting on long-running jobs.

mod delete;
mod list;
mod wait;

pub use delete::{confirm_delete, print_deleted};
pub use list::run_list_command;
pub use wait::{WaitProgress, ensure_completed};
