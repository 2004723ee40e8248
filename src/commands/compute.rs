//! Compute listings: instances, volumes, snapshots, images and friends

use log::debug;

use super::{caller_account, list_and_tabulate, path_segment};
use crate::cli::{ConsoleArgs, FilteredArgs, ListingArgs};
use crate::config::{columns, listing, paths};
use crate::error::{CloudlsError, Result};
use crate::listing::{
    arn_tail, display_value, join_sub_field, resolve_field, sub_field, CellTransforms,
    ColumnExpansion, FilterClause,
};
use crate::provider::ResourceProvider;

/// Instances with a derived `name` column and always-present tags and launch time
pub async fn instances<P: ResourceProvider>(provider: &P, args: &FilteredArgs) -> Result<String> {
    let filters = args.filters.clauses()?;
    let request = args
        .listing
        .request(columns::INSTANCES)
        .with_expansion(ColumnExpansion {
            forced: columns::INSTANCES_FORCED,
            derived: Some(listing::NAME_COLUMN),
        })
        .with_transforms(
            CellTransforms::new()
                .with("state", sub_field("Name"))
                .with("iam_instance_profile", arn_tail("Arn")),
        );
    list_and_tabulate(provider, paths::INSTANCES, &filters, request).await
}

pub async fn volumes<P: ResourceProvider>(provider: &P, args: &FilteredArgs) -> Result<String> {
    let filters = args.filters.clauses()?;
    let request = args
        .listing
        .request(columns::VOLUMES)
        .with_transforms(CellTransforms::new().with("attachments", join_sub_field("InstanceId")));
    list_and_tabulate(provider, paths::VOLUMES, &filters, request).await
}

/// Snapshots owned by the caller's account
pub async fn snapshots<P: ResourceProvider>(provider: &P, args: &FilteredArgs) -> Result<String> {
    let filters = owned_by_caller(provider, args).await?;
    let request = args.listing.request(columns::SNAPSHOTS);
    list_and_tabulate(provider, paths::SNAPSHOTS, &filters, request).await
}

/// Images owned by the caller's account
pub async fn images<P: ResourceProvider>(provider: &P, args: &FilteredArgs) -> Result<String> {
    let filters = owned_by_caller(provider, args).await?;
    let request = args.listing.request(columns::IMAGES);
    list_and_tabulate(provider, paths::IMAGES, &filters, request).await
}

pub async fn security_groups<P: ResourceProvider>(
    provider: &P,
    args: &FilteredArgs,
) -> Result<String> {
    let filters = args.filters.clauses()?;
    let request = args.listing.request(columns::SECURITY_GROUPS);
    list_and_tabulate(provider, paths::SECURITY_GROUPS, &filters, request).await
}

pub async fn subnets<P: ResourceProvider>(provider: &P, args: &FilteredArgs) -> Result<String> {
    let filters = args.filters.clauses()?;
    let request = args.listing.request(columns::SUBNETS);
    list_and_tabulate(provider, paths::SUBNETS, &filters, request).await
}

pub async fn key_pairs<P: ResourceProvider>(provider: &P, args: &ListingArgs) -> Result<String> {
    let request = args.request(columns::KEY_PAIRS);
    list_and_tabulate(provider, paths::KEY_PAIRS, &[], request).await
}

/// Spot fleet requests; the long `SpotFleetRequest*` header prefixes are
/// trimmed unless the caller asked for their own prefixes
pub async fn spot_requests<P: ResourceProvider>(
    provider: &P,
    args: &ListingArgs,
) -> Result<String> {
    let mut request = args.request(columns::SPOT_REQUESTS);
    if request.options.trim_col_names.is_empty() {
        request.options.trim_col_names = columns::SPOT_REQUESTS_TRIM
            .iter()
            .map(|p| p.to_string())
            .collect();
    }
    list_and_tabulate(provider, paths::SPOT_REQUESTS, &[], request).await
}

pub async fn spot_instance_requests<P: ResourceProvider>(
    provider: &P,
    args: &ListingArgs,
) -> Result<String> {
    let request = args.request(columns::SPOT_INSTANCE_REQUESTS);
    list_and_tabulate(provider, paths::SPOT_INSTANCE_REQUESTS, &[], request).await
}

/// Console output of one instance, or a placeholder when there is none yet
pub async fn console<P: ResourceProvider>(provider: &P, args: &ConsoleArgs) -> Result<String> {
    let instance_id = resolve_instance_id(provider, &args.instance).await?;
    let path = format!(
        "{}/{}/console-output",
        paths::INSTANCES,
        path_segment(&instance_id)
    );
    let output = provider.get(&path).await?;
    let text = display_value(resolve_field(&output, "Output"));
    if text.is_empty() {
        return Ok(format!(
            "[No console output received for {}. Console output may lag by several minutes.]",
            instance_id
        ));
    }
    Ok(text)
}

/// Instance ids pass through; other names are matched against the Name tag
async fn resolve_instance_id<P: ResourceProvider>(provider: &P, name: &str) -> Result<String> {
    if name.starts_with(listing::INSTANCE_ID_PREFIX) {
        return Ok(name.to_string());
    }

    let clause = FilterClause::new(
        format!("{}{}", listing::TAG_FILTER_PREFIX, listing::NAME_TAG),
        name,
    );
    let matches = provider.list(paths::INSTANCES, &[clause]).await?;
    debug!("{} instances named '{}'", matches.len(), name);
    match matches.as_slice() {
        [instance] => Ok(display_value(resolve_field(instance, "id"))),
        [] => Err(CloudlsError::MalformedArgument(format!(
            "No instance with id or Name tag '{}'",
            name
        ))),
        _ => Err(CloudlsError::MalformedArgument(format!(
            "Name '{}' matches {} instances; use the instance id",
            name,
            matches.len()
        ))),
    }
}

/// User filters plus the caller's account as owner
async fn owned_by_caller<P: ResourceProvider>(
    provider: &P,
    args: &FilteredArgs,
) -> Result<Vec<FilterClause>> {
    let mut filters = args.filters.clauses()?;
    let account = caller_account(provider).await?;
    debug!("Scoping listing to owner account {}", account);
    filters.push(FilterClause::new(listing::OWNER_FILTER, account));
    Ok(filters)
}
