//! Command handlers
//!
//! Every subcommand is a caller of the listing pipeline: it picks a
//! collection, default columns and implicit columns, fetches the records and
//! hands them to `tabulate` (or builds its grid directly when rows are
//! assembled from several collections).

mod compute;
mod containers;
mod dns;
mod iam;
mod logs;
mod storage;

use log::debug;

use crate::cli::{Cli, Command};
use crate::error::{CloudlsError, Result};
use crate::listing::{resolve_field, tabulate, FilterClause, ListingRequest};
use crate::output::emit;
use crate::provider::{
    endpoint_host, InventoryClient, Provider, ResourceProvider, SnapshotProvider, TokenResolver,
};
use crate::ui::{create_spinner, finish_spinner};

pub use logs::format_age;

/// Select the provider for this invocation
///
/// A snapshot file wins over the API; the token is only resolved when the
/// API is used.
pub fn build_provider(cli: &Cli) -> Result<Provider> {
    if let Some(path) = &cli.snapshot {
        debug!("Using snapshot provider: {}", path.display());
        return Ok(Provider::Snapshot(SnapshotProvider::load(path)?));
    }

    let resolver = TokenResolver::new(&endpoint_host(&cli.endpoint));
    let token = resolver.resolve(cli.token.as_deref())?;
    debug!("Using inventory API at {}", cli.endpoint);
    Ok(Provider::Inventory(InventoryClient::new(token, &cli.endpoint)))
}

/// Run a command end to end: fetch, render, write
pub async fn run_command<P>(command: &Command, provider: &P, quiet: bool) -> Result<()>
where
    P: ResourceProvider,
{
    let spinner = create_spinner(
        &format!("Fetching {}...", command.resource_name()),
        quiet,
    );
    let rendered = render_command(command, provider).await;
    finish_spinner(spinner);

    emit(&rendered?, command.output_format())
}

/// Fetch and render a command's listing without writing it
pub async fn render_command<P>(command: &Command, provider: &P) -> Result<String>
where
    P: ResourceProvider,
{
    match command {
        Command::Instances(args) => compute::instances(provider, args).await,
        Command::Volumes(args) => compute::volumes(provider, args).await,
        Command::Snapshots(args) => compute::snapshots(provider, args).await,
        Command::Images(args) => compute::images(provider, args).await,
        Command::SecurityGroups(args) => compute::security_groups(provider, args).await,
        Command::Subnets(args) => compute::subnets(provider, args).await,
        Command::KeyPairs(args) => compute::key_pairs(provider, args).await,
        Command::SpotRequests(args) => compute::spot_requests(provider, args).await,
        Command::SpotInstanceRequests(args) => {
            compute::spot_instance_requests(provider, args).await
        }
        Command::Console(args) => compute::console(provider, args).await,
        Command::Filesystems(args) => storage::filesystems(provider, args).await,
        Command::Users(args) => iam::users(provider, args).await,
        Command::Groups(args) => iam::groups(provider, args).await,
        Command::Roles(args) => iam::roles(provider, args).await,
        Command::Policies(args) => iam::policies(provider, args).await,
        Command::Buckets(args) => storage::buckets(provider, args).await,
        Command::Tables(args) => storage::tables(provider, args).await,
        Command::Zones(args) => dns::zones(provider, args).await,
        Command::Logs(args) => logs::logs(provider, args).await,
        Command::Clusters(args) => containers::clusters(provider, args).await,
        Command::Tasks(args) => containers::tasks(provider, args).await,
    }
}

/// List one collection and run it through the pipeline
async fn list_and_tabulate<P>(
    provider: &P,
    path: &str,
    filters: &[FilterClause],
    request: ListingRequest,
) -> Result<String>
where
    P: ResourceProvider,
{
    let records = provider.list(path, filters).await?;
    debug!("Fetched {} records from {}", records.len(), path);
    tabulate(records, request)
}

/// Account id of the caller, taken from the current user's ARN
async fn caller_account<P>(provider: &P) -> Result<String>
where
    P: ResourceProvider,
{
    let user = provider.get(crate::config::paths::CURRENT_USER).await?;
    let arn = resolve_field(&user, "arn")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    account_from_arn(arn).map(str::to_string).ok_or_else(|| {
        CloudlsError::Config(format!("Cannot determine account id from ARN '{}'", arn))
    })
}

/// Fifth colon-separated field of an ARN
fn account_from_arn(arn: &str) -> Option<&str> {
    arn.split(':').nth(4).filter(|account| !account.is_empty())
}

/// Path segment for a name that may itself contain slashes
fn path_segment(name: &str) -> String {
    urlencoding::encode(name).into_owned()
}
