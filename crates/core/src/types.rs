/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Token number of a Viking. Unique across the collection.
pub type VikingNumber = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
