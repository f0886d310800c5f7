//! Client library behind the `awvs` command-line tool
//!
//! [`client`] talks to the Acunetix API and carries the cursor pager and the
//! poll-until-terminal waiter in both blocking and async form. [`cli`] holds
//! the command implementations the binary dispatches to.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
