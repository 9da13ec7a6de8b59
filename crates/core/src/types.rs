/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Reports, technicians, and customers are identified by UUIDs.
pub type EntityId = uuid::Uuid;
