//! Identity listings

use serde_json::Value;

use super::list_and_tabulate;
use crate::cli::ListingArgs;
use crate::config::{columns, listing, paths};
use crate::error::Result;
use crate::listing::{display_value, resolve_field, tabulate, ColumnExpansion};
use crate::provider::ResourceProvider;

/// Users, with a leading `cur` column marking the caller
pub async fn users<P: ResourceProvider>(provider: &P, args: &ListingArgs) -> Result<String> {
    let current = provider.get(paths::CURRENT_USER).await?;
    let current_id = display_value(resolve_field(&current, "user_id"));

    let mut records = provider.list(paths::USERS, &[]).await?;
    for record in records.iter_mut() {
        let user_id = display_value(resolve_field(record, "user_id"));
        let marker = if !current_id.is_empty() && user_id == current_id {
            listing::CURRENT_USER_MARKER
        } else {
            ""
        };
        record.set_derived(listing::CURRENT_USER_COLUMN, Value::from(marker));
    }

    let request = args.request(columns::USERS).with_expansion(ColumnExpansion {
        forced: columns::USERS_FORCED,
        derived: Some(listing::CURRENT_USER_COLUMN),
    });
    tabulate(records, request)
}

pub async fn groups<P: ResourceProvider>(provider: &P, args: &ListingArgs) -> Result<String> {
    list_and_tabulate(provider, paths::GROUPS, &[], args.request(columns::GROUPS)).await
}

pub async fn roles<P: ResourceProvider>(provider: &P, args: &ListingArgs) -> Result<String> {
    list_and_tabulate(provider, paths::ROLES, &[], args.request(columns::ROLES)).await
}

pub async fn policies<P: ResourceProvider>(provider: &P, args: &ListingArgs) -> Result<String> {
    list_and_tabulate(provider, paths::POLICIES, &[], args.request(columns::POLICIES)).await
}
