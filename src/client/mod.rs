//! Acunetix API client
//!
//! The surface is split into responsibility traits under [`api`], implemented
//! over HTTP by [`AcunetixClient`] and, in tests, by `MockAcunetixClient`.
//! [`pager`] and [`poll`] provide the two generic mechanisms every command is
//! built on: walking cursor-paginated listings and waiting for long-running
//! jobs.

pub mod acunetix;
pub mod api;
pub mod helpers;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pager;
pub mod pagination;
pub mod poll;

pub use acunetix::AcunetixClient;
pub use api::{AdminApi, ReportingApi, ScanApi, TargetApi, VulnerabilityApi};
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockAcunetixClient;
#[allow(unused_imports)]
pub use pager::{CursorPager, paginate};
#[allow(unused_imports)]
pub use pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Page, PaginationInfo, PaginationParams};
#[allow(unused_imports)]
pub use poll::{
    DEFAULT_POLL_INTERVAL, JobState, Snapshot, poll_until_terminal, poll_until_terminal_blocking,
    poll_until_terminal_blocking_with, poll_until_terminal_with,
};

/// Acunetix API client trait
///
/// Combines every responsibility trait. Commands are generic over the
/// narrowest trait they need; the CLI context hands out a concrete client
/// that implements all of them.
pub trait AcunetixApi: TargetApi + ScanApi + ReportingApi + VulnerabilityApi + AdminApi {}

impl<T> AcunetixApi for T where T: TargetApi + ScanApi + ReportingApi + VulnerabilityApi + AdminApi {}
