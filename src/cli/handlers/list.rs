//! Generic list command handler
//!
//! Provides a reusable pattern for list commands that follow the standard flow:
//! 1. Create command context
//! 2. Build the first page request from `ListArgs`
//! 3. Fetch items (streaming through the pager for paginated endpoints)
//! 4. Apply limit
//! 5. Convert to display type
//! 6. Print output

use std::future::Future;
use std::sync::Arc;

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::args::{GlobalOptions, ListArgs};
use crate::cli::CommandContext;
use crate::client::{AcunetixClient, PaginationParams};
use crate::error::Result;
use crate::output::Formattable;

/// Run a standard list command with the common fetch → limit → display → print pattern.
///
/// # Type Parameters
///
/// * `T` - The API model type returned by the fetcher (e.g., `Target`, `Scan`)
/// * `D` - The display type that implements `From<T>`, `Tabled`, and `Serialize`
///
/// # Arguments
///
/// * `opts` - Global CLI options
/// * `args` - Listing arguments from the CLI
/// * `resource_name` - Name for debug logging (e.g., "targets")
/// * `fetcher` - Async function that fetches at most `limit` items given
///   (client, first page request, limit)
///
/// # Example
///
/// ```ignore
/// run_list_command::<Target, TargetDisplay, _, _>(
///     opts,
///     args,
///     "targets",
///     |client, params, limit| async move {
///         collect_items(all_targets(&*client, params), limit).await
///     },
/// ).await
/// ```
pub async fn run_list_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    args: &ListArgs,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Result<Vec<T>>>,
    F: FnOnce(Arc<AcunetixClient>, PaginationParams, Option<usize>) -> Fut,
{
    let ctx = CommandContext::new(opts)?;

    debug!("Fetching {}", resource_name);

    let params = args.to_params(ctx.page_size());
    let items = fetcher(ctx.client.clone(), params, args.limit).await?;

    debug!("Fetched {} {}", items.len(), resource_name);

    // Unpaginated collections come back whole
    let limited_items: Vec<T> = match args.limit {
        Some(limit) => items.into_iter().take(limit).collect(),
        None => items,
    };

    let display_items: Vec<D> = limited_items.into_iter().map(D::from).collect();
    display_items.print(ctx.format)?;

    Ok(())
}
