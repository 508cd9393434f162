/// All primary keys are SQLite INTEGER PRIMARY KEY rowids.
pub type DbId = i64;

/// Unix timestamp in seconds (UTC).
pub type UnixSeconds = i64;
