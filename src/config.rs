/// Configuration constants for the inventory API
pub mod api {
    /// Base path for inventory API v1
    pub const BASE_PATH: &str = "/v1";

    /// Default page size for API requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Request timeout in seconds
    pub const TIMEOUT_SECS: u64 = 30;

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Path to the credentials file (relative to HOME)
    pub const FILE_PATH: &str = ".cloudls/credentials.json";

    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["CLOUDLS_TOKEN", "CLOUD_API_TOKEN"];
}

/// Configuration constants for endpoint resolution
pub mod endpoint {
    /// Environment variable for the inventory endpoint
    pub const ENV_VAR: &str = "CLOUDLS_ENDPOINT";

    /// Endpoint used when nothing else is configured
    pub const DEFAULT: &str = "https://inventory.local";
}

/// Collection paths on the inventory API
pub mod paths {
    pub const INSTANCES: &str = "compute/instances";
    pub const VOLUMES: &str = "compute/volumes";
    pub const SNAPSHOTS: &str = "compute/snapshots";
    pub const IMAGES: &str = "compute/images";
    pub const SECURITY_GROUPS: &str = "compute/security-groups";
    pub const KEY_PAIRS: &str = "compute/key-pairs";
    pub const SUBNETS: &str = "compute/subnets";
    pub const SPOT_REQUESTS: &str = "compute/spot-fleet-requests";
    pub const SPOT_INSTANCE_REQUESTS: &str = "compute/spot-instance-requests";
    pub const USERS: &str = "iam/users";
    pub const CURRENT_USER: &str = "iam/current-user";
    pub const GROUPS: &str = "iam/groups";
    pub const ROLES: &str = "iam/roles";
    pub const POLICIES: &str = "iam/policies";
    pub const BUCKETS: &str = "storage/buckets";
    pub const FILESYSTEMS: &str = "storage/filesystems";
    pub const TABLES: &str = "database/tables";
    pub const ZONES: &str = "dns/zones";
    pub const LOG_GROUPS: &str = "logs/groups";
    pub const CLUSTERS: &str = "containers/clusters";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default maximum cell width before truncation
    pub const MAX_COL_WIDTH: usize = 32;

    /// Pager command used when $PAGER is unset
    pub const PAGER: &str = "less -RS";
}

/// Constants used by the listing pipeline
pub mod listing {
    /// Prefix turning a tag clause into a filter clause
    pub const TAG_FILTER_PREFIX: &str = "tag:";

    /// Tag key holding the human-friendly resource name
    pub const NAME_TAG: &str = "Name";

    /// Column holding the derived name
    pub const NAME_COLUMN: &str = "name";

    /// Marker appended to truncated cells
    pub const ELLIPSIS: char = '…';

    /// Marker for the caller's own row in `users`
    pub const CURRENT_USER_MARKER: &str = ">>>";

    /// Column holding the current-user marker
    pub const CURRENT_USER_COLUMN: &str = "cur";

    /// Filter scoping snapshots and images to the caller's account
    pub const OWNER_FILTER: &str = "owner_id";

    /// Prefix of instance ids; anything else is looked up by Name tag
    pub const INSTANCE_ID_PREFIX: &str = "i-";
}

/// Default columns per resource kind
pub mod columns {
    pub const INSTANCES: &[&str] = &[
        "id",
        "state",
        "instance_type",
        "placement.AvailabilityZone",
        "public_dns_name",
        "iam_instance_profile",
    ];
    pub const INSTANCES_FORCED: &[&str] = &["tags", "launch_time"];
    pub const USERS: &[&str] = &["user_name", "arn", "create_date", "password_last_used"];
    pub const USERS_FORCED: &[&str] = &["user_id"];
    pub const GROUPS: &[&str] = &["group_name", "group_id", "path", "create_date"];
    pub const ROLES: &[&str] = &["role_name", "path", "create_date"];
    pub const POLICIES: &[&str] = &[
        "policy_name",
        "attachment_count",
        "create_date",
        "update_date",
    ];
    pub const VOLUMES: &[&str] = &[
        "id",
        "size",
        "volume_type",
        "state",
        "create_time",
        "attachments",
    ];
    pub const SNAPSHOTS: &[&str] = &[
        "id",
        "description",
        "volume_id",
        "volume_size",
        "state",
        "progress",
        "start_time",
    ];
    pub const BUCKETS: &[&str] = &["name", "creation_date"];
    pub const IMAGES: &[&str] = &[
        "id",
        "name",
        "description",
        "architecture",
        "state",
        "creation_date",
    ];
    pub const SECURITY_GROUPS: &[&str] = &["id", "group_name", "description", "vpc_id"];
    pub const CLUSTERS: &[&str] = &[
        "clusterName",
        "status",
        "runningTasksCount",
        "pendingTasksCount",
        "registeredContainerInstancesCount",
    ];
    pub const TASKS: &[&str] = &["taskArn", "lastStatus", "desiredStatus", "createdAt"];
    pub const KEY_PAIRS: &[&str] = &["name", "key_fingerprint"];
    pub const SUBNETS: &[&str] = &[
        "id",
        "cidr_block",
        "vpc_id",
        "availability_zone",
        "available_ip_address_count",
        "state",
    ];
    pub const TABLES: &[&str] = &[
        "name",
        "table_status",
        "item_count",
        "table_size_bytes",
        "creation_date_time",
    ];
    pub const SPOT_REQUESTS: &[&str] = &[
        "SpotFleetRequestId",
        "SpotFleetRequestState",
        "SpotFleetRequestConfig.TargetCapacity",
        "SpotFleetRequestConfig.IamFleetRole",
        "CreateTime",
    ];
    pub const SPOT_REQUESTS_TRIM: &[&str] = &["SpotFleetRequestConfig.", "SpotFleetRequest"];
    pub const SPOT_INSTANCE_REQUESTS: &[&str] = &[
        "SpotInstanceRequestId",
        "State",
        "Status.Code",
        "SpotPrice",
        "InstanceId",
        "CreateTime",
    ];
    pub const FILESYSTEMS: &[&str] = &[
        "FileSystemId",
        "Name",
        "SizeInBytes",
        "LifeCycleState",
        "CreationTime",
    ];
    pub const MOUNT_TARGETS: &[&str] = &["MountTargetId", "SubnetId", "IpAddress"];
    pub const ZONE_RECORD_SETS: &[&str] = &["Name", "Type", "TTL"];
    pub const ZONE_RECORDS: &[&str] = &["Value"];
    pub const LOG_GROUPS: &[&str] = &["logGroupName"];
    pub const LOG_STREAMS: &[&str] = &["logStreamName", "lastIngestionTime", "storedBytes"];
}
