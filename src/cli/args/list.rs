//! Listing argument types for CLI commands

use clap::Args;

use crate::client::PaginationParams;

/// Shared arguments for list commands.
///
/// Flatten this into any command backed by a paginated endpoint:
/// ```ignore
/// List {
///     #[command(flatten)]
///     list: ListArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Maximum results to return
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Server-side filter expression (e.g. "severity:3;status:open")
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    /// Server-side sort expression (e.g. "last_seen:desc")
    #[arg(long, short = 's')]
    pub sort: Option<String>,
}

impl ListArgs {
    /// Convert CLI args to the first page request.
    ///
    /// The page size is the configured size, shrunk to `--limit` when that is
    /// smaller so a short listing costs a single request.
    pub fn to_params(&self, page_size: usize) -> PaginationParams {
        let size = match self.limit {
            Some(limit) => limit.min(page_size),
            None => page_size,
        };
        let mut params = PaginationParams::new().limit(size);

        if let Some(ref query) = self.query {
            params = params.query(query);
        }
        if let Some(ref sort) = self.sort {
            params = params.sort(sort);
        }

        params
    }
}

/// Arguments for listings the server returns whole (no paging, no filters).
#[derive(Args, Debug, Default, Clone)]
pub struct LimitArgs {
    /// Maximum results to return
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

impl From<&LimitArgs> for ListArgs {
    fn from(args: &LimitArgs) -> Self {
        Self {
            limit: args.limit,
            ..Default::default()
        }
    }
}
