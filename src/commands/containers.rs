//! Container listings: clusters and their tasks

use log::debug;

use super::{list_and_tabulate, path_segment};
use crate::cli::ListingArgs;
use crate::config::{columns, paths};
use crate::error::Result;
use crate::listing::{display_value, resolve_field, tabulate};
use crate::provider::ResourceProvider;

pub async fn clusters<P: ResourceProvider>(provider: &P, args: &ListingArgs) -> Result<String> {
    list_and_tabulate(provider, paths::CLUSTERS, &[], args.request(columns::CLUSTERS)).await
}

/// Tasks of every cluster, flattened into one table
pub async fn tasks<P: ResourceProvider>(provider: &P, args: &ListingArgs) -> Result<String> {
    let clusters = provider.list(paths::CLUSTERS, &[]).await?;
    let mut records = Vec::new();

    for cluster in &clusters {
        let name = display_value(resolve_field(cluster, "clusterName"));
        if name.is_empty() {
            debug!("Skipping cluster without a name");
            continue;
        }
        let path = format!("{}/{}/tasks", paths::CLUSTERS, path_segment(&name));
        let tasks = provider.list(&path, &[]).await?;
        debug!("Cluster {} has {} tasks", name, tasks.len());
        records.extend(tasks);
    }

    tabulate(records, args.request(columns::TASKS))
}
