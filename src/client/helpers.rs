//! Convenience iterators and waiters built on the pager and poller
//!
//! Every `all_*` function returns a lazy stream over a whole listing; pin it
//! before polling:
//!
//! ```ignore
//! let targets = all_targets(&client, PaginationParams::new());
//! let mut targets = std::pin::pin!(targets);
//! while let Some(target) = targets.next().await { /* ... */ }
//! ```

use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

use futures::{Stream, StreamExt};

use super::api::{AdminApi, ReportingApi, ScanApi, TargetApi, VulnerabilityApi};
use super::models::{
    Export, Report, Role, Scan, ScanResult, Target, TargetGroup, User, UserGroup, Vulnerability,
};
use super::pager::paginate;
use super::pagination::PaginationParams;
use super::poll::{Snapshot, poll_until_terminal};
use crate::error::Result;

pub fn all_targets<C: TargetApi + ?Sized>(
    client: &C,
    params: PaginationParams,
) -> impl Stream<Item = Result<Target>> + '_ {
    paginate(params, move |p| async move { client.list_targets(&p).await })
}

pub fn all_target_groups<C: TargetApi + ?Sized>(
    client: &C,
    params: PaginationParams,
) -> impl Stream<Item = Result<TargetGroup>> + '_ {
    paginate(params, move |p| async move { client.list_target_groups(&p).await })
}

pub fn all_scans<C: ScanApi + ?Sized>(
    client: &C,
    params: PaginationParams,
) -> impl Stream<Item = Result<Scan>> + '_ {
    paginate(params, move |p| async move { client.list_scans(&p).await })
}

pub fn all_vulnerabilities<C: VulnerabilityApi + ?Sized>(
    client: &C,
    params: PaginationParams,
) -> impl Stream<Item = Result<Vulnerability>> + '_ {
    paginate(params, move |p| async move {
        client.list_vulnerabilities(&p).await
    })
}

/// Past runs of one scan
pub fn all_scan_results<'a, C: ScanApi + ?Sized>(
    client: &'a C,
    scan_id: &'a str,
    params: PaginationParams,
) -> impl Stream<Item = Result<ScanResult>> + 'a {
    paginate(params, move |p| async move {
        client.list_scan_results(scan_id, &p).await
    })
}

/// Vulnerabilities found by one run (`result_id`) of a scan
pub fn all_scan_vulnerabilities<'a, C: ScanApi + ?Sized>(
    client: &'a C,
    scan_id: &'a str,
    result_id: &'a str,
    params: PaginationParams,
) -> impl Stream<Item = Result<Vulnerability>> + 'a {
    paginate(params, move |p| async move {
        client
            .list_scan_vulnerabilities(scan_id, result_id, &p)
            .await
    })
}

pub fn all_reports<C: ReportingApi + ?Sized>(
    client: &C,
    params: PaginationParams,
) -> impl Stream<Item = Result<Report>> + '_ {
    paginate(params, move |p| async move { client.list_reports(&p).await })
}

pub fn all_users<C: AdminApi + ?Sized>(
    client: &C,
    params: PaginationParams,
) -> impl Stream<Item = Result<User>> + '_ {
    paginate(params, move |p| async move { client.list_users(&p).await })
}

pub fn all_roles<C: AdminApi + ?Sized>(
    client: &C,
    params: PaginationParams,
) -> impl Stream<Item = Result<Role>> + '_ {
    paginate(params, move |p| async move { client.list_roles(&p).await })
}

/// User groups; `extended` asks for members and role mappings on every page
pub fn all_user_groups<C: AdminApi + ?Sized>(
    client: &C,
    params: PaginationParams,
    extended: bool,
) -> impl Stream<Item = Result<UserGroup>> + '_ {
    paginate(params, move |p| async move {
        client.list_user_groups(&p, extended).await
    })
}

/// Drain a listing stream, stopping after `limit` items when given.
///
/// Pages past the one holding the last wanted item are never fetched.
pub async fn collect_items<T, S>(stream: S, limit: Option<usize>) -> Result<Vec<T>>
where
    S: Stream<Item = Result<T>>,
{
    let stream = std::pin::pin!(stream);
    let mut stream = stream.take(limit.unwrap_or(usize::MAX));
    let mut items = Vec::new();

    while let Some(item) = stream.next().await {
        items.push(item?);
    }

    Ok(items)
}

/// Block until a scan completes, aborts, or fails.
pub async fn wait_for_scan<C: ScanApi + ?Sized>(
    client: &C,
    scan_id: &str,
    interval: Duration,
) -> Result<Scan> {
    watch_scan(client, scan_id, interval, |_| {}).await
}

/// [`wait_for_scan`], calling `observe` with every fetched snapshot.
pub async fn watch_scan<C, O>(
    client: &C,
    scan_id: &str,
    interval: Duration,
    observe: O,
) -> Result<Scan>
where
    C: ScanApi + ?Sized,
    O: FnMut(&Scan),
{
    watch(
        scan_id,
        interval,
        move |id| async move { client.get_scan(&id).await },
        observe,
    )
    .await
}

/// Block until a report is generated or fails.
pub async fn wait_for_report<C: ReportingApi + ?Sized>(
    client: &C,
    report_id: &str,
    interval: Duration,
) -> Result<Report> {
    watch_report(client, report_id, interval, |_| {}).await
}

pub async fn watch_report<C, O>(
    client: &C,
    report_id: &str,
    interval: Duration,
    observe: O,
) -> Result<Report>
where
    C: ReportingApi + ?Sized,
    O: FnMut(&Report),
{
    watch(
        report_id,
        interval,
        move |id| async move { client.get_report(&id).await },
        observe,
    )
    .await
}

/// Block until an export is produced or fails.
pub async fn wait_for_export<C: ReportingApi + ?Sized>(
    client: &C,
    export_id: &str,
    interval: Duration,
) -> Result<Export> {
    watch_export(client, export_id, interval, |_| {}).await
}

pub async fn watch_export<C, O>(
    client: &C,
    export_id: &str,
    interval: Duration,
    observe: O,
) -> Result<Export>
where
    C: ReportingApi + ?Sized,
    O: FnMut(&Export),
{
    watch(
        export_id,
        interval,
        move |id| async move { client.get_export(&id).await },
        observe,
    )
    .await
}

async fn watch<S, G, Fut, O>(id: &str, interval: Duration, mut get: G, observe: O) -> Result<S>
where
    S: Snapshot,
    G: FnMut(String) -> Fut,
    Fut: Future<Output = Result<S>>,
    O: FnMut(&S),
{
    let observe = RefCell::new(observe);
    let observe = &observe;

    poll_until_terminal(id, interval, move |id| {
        let fetch = get(id);
        async move {
            let snapshot = fetch.await?;
            let mut observe = observe.borrow_mut();
            (*observe)(&snapshot);
            Ok(snapshot)
        }
    })
    .await
}
