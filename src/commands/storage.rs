//! Storage listings: buckets, filesystems and database tables

use log::debug;
use serde_json::Value;

use super::{list_and_tabulate, path_segment};
use crate::cli::{FilesystemsArgs, FilteredArgs, ListingArgs};
use crate::config::{columns, paths};
use crate::error::Result;
use crate::listing::{
    display_value, resolve_field, sub_field, tabulate, CellTransforms, ColumnSpec, Record,
};
use crate::provider::ResourceProvider;

pub async fn buckets<P: ResourceProvider>(provider: &P, args: &FilteredArgs) -> Result<String> {
    let filters = args.filters.clauses()?;
    let request = args.listing.request(columns::BUCKETS);
    list_and_tabulate(provider, paths::BUCKETS, &filters, request).await
}

/// One row per mount target, carrying its filesystem's fields and tags
///
/// Filesystem fields win over mount target fields of the same name.
pub async fn filesystems<P: ResourceProvider>(
    provider: &P,
    args: &FilesystemsArgs,
) -> Result<String> {
    let mut request = args
        .listing
        .request(columns::FILESYSTEMS)
        .with_transforms(CellTransforms::new().with("SizeInBytes", sub_field("Value")));
    let mount_columns = ColumnSpec::from_args(
        args.mount_target_columns.as_deref(),
        columns::MOUNT_TARGETS,
    );
    request.columns.extend(mount_columns.as_slice());

    let mut rows = Vec::new();
    for filesystem in provider.list(paths::FILESYSTEMS, &[]).await? {
        let id = display_value(resolve_field(&filesystem, "FileSystemId"));
        if id.is_empty() {
            debug!("Skipping filesystem without an id");
            continue;
        }
        let base = format!("{}/{}", paths::FILESYSTEMS, path_segment(&id));
        let tags: Vec<Value> = provider
            .list(&format!("{}/tags", base), &[])
            .await?
            .iter()
            .map(|tag| tag.fields().clone())
            .collect();
        let mount_targets = provider.list(&format!("{}/mount-targets", base), &[]).await?;
        debug!("Filesystem {} has {} mount targets", id, mount_targets.len());

        for target in &mount_targets {
            let mut row = Record::new(filesystem.fields().clone());
            row.merge_missing(target.fields());
            row.set_derived("tags", Value::Array(tags.clone()));
            rows.push(row);
        }
    }

    tabulate(rows, request)
}

pub async fn tables<P: ResourceProvider>(provider: &P, args: &ListingArgs) -> Result<String> {
    list_and_tabulate(provider, paths::TABLES, &[], args.request(columns::TABLES)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use crate::provider::SnapshotProvider;
    use clap::Parser;
    use serde_json::json;

    fn filesystems_provider() -> SnapshotProvider {
        SnapshotProvider::from_value(json!({
            "storage/filesystems": [
                {
                    "FileSystemId": "fs-1",
                    "Name": "shared",
                    "LifeCycleState": "available",
                    "SizeInBytes": {"Value": 6144, "Timestamp": "2024-01-01"}
                },
                {"FileSystemId": "fs-2", "Name": "unmounted"}
            ],
            "storage/filesystems/fs-1/tags": [{"Key": "Owner", "Value": "alice"}],
            "storage/filesystems/fs-1/mount-targets": [
                {"MountTargetId": "fsmt-a", "SubnetId": "subnet-1", "LifeCycleState": "creating"},
                {"MountTargetId": "fsmt-b", "SubnetId": "subnet-2", "IpAddress": "10.0.0.5"}
            ]
        }))
        .unwrap()
    }

    fn filesystems_args(argv: &[&str]) -> FilesystemsArgs {
        match Cli::parse_from(argv).command {
            Command::Filesystems(args) => args,
            other => panic!("Expected filesystems, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_filesystems_one_row_per_mount_target() {
        let args = filesystems_args(&[
            "cloudls",
            "filesystems",
            "--columns",
            "FileSystemId",
            "SizeInBytes",
            "LifeCycleState",
            "tags",
            "-o",
            "csv",
        ]);
        let out = filesystems(&filesystems_provider(), &args).await.unwrap();
        assert_eq!(
            out,
            "FileSystemId,SizeInBytes,LifeCycleState,tags,MountTargetId,SubnetId,IpAddress\n\
             fs-1,6144,available,Owner=alice,fsmt-a,subnet-1,\n\
             fs-1,6144,available,Owner=alice,fsmt-b,subnet-2,10.0.0.5\n"
        );
    }

    #[tokio::test]
    async fn test_filesystems_custom_mount_target_columns() {
        let args = filesystems_args(&[
            "cloudls",
            "filesystems",
            "--columns",
            "Name",
            "--mount-target-columns",
            "MountTargetId",
            "-o",
            "csv",
        ]);
        let out = filesystems(&filesystems_provider(), &args).await.unwrap();
        assert_eq!(out, "Name,MountTargetId\nshared,fsmt-a\nshared,fsmt-b\n");
    }

    #[tokio::test]
    async fn test_buckets_filtered_by_field() {
        let provider = SnapshotProvider::from_value(json!({
            "storage/buckets": [
                {"Name": "logs", "Region": "eu-west-1"},
                {"Name": "assets", "Region": "us-east-1"}
            ]
        }))
        .unwrap();
        let cli = Cli::parse_from([
            "cloudls",
            "buckets",
            "--filter",
            "region=us-east-1",
            "-o",
            "csv",
        ]);
        let Command::Buckets(args) = &cli.command else {
            panic!("Expected buckets");
        };
        let out = buckets(&provider, args).await.unwrap();
        assert_eq!(out, "name,creation_date\nassets,\n");
    }
}
